//! Section-keyed training configuration
//!
//! The framework's config format: an INI-style text format with dotted
//! section headers, typed values and interpolation placeholders that are
//! preserved verbatim.
//!
//! # Example
//!
//! ```text
//! [nlp]
//! lang = "en"
//! pipeline = ["tok2vec","tagger"]
//!
//! [components.tagger.model]
//! @architectures = "palabra.Tagger.v1"
//! nO = null
//!
//! [corpora.train]
//! path = ${paths.train}
//! ```
//!
//! Section and key order is insertion order and is the serialization order,
//! which keeps re-filling an already-complete config a textual no-op.

mod diff;
mod merge;
mod parse;
mod value;


#[cfg(test)]
mod property_tests;

pub use diff::diff_strings;
pub use value::Value;

pub(crate) use merge::registry_ref;

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;

/// Ordered key/value settings of one section.
pub type Table = IndexMap<String, Value>;

/// A parsed configuration: ordered map of dotted section path to settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub(crate) sections: IndexMap<String, Table>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a config file.
    pub fn from_path(path: &Path) -> Result<Config> {
        fs::read_to_string(path)?.parse()
    }

    /// Serialize to a file, creating parent directories as needed.
    /// Interpolation placeholders are written unresolved.
    pub fn to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_string())?;
        Ok(())
    }

    pub fn section(&self, path: &str) -> Option<&Table> {
        self.sections.get(path)
    }

    pub fn section_mut(&mut self, path: &str) -> Option<&mut Table> {
        self.sections.get_mut(path)
    }

    /// Insert or replace a section. Replacing keeps the original position.
    pub fn insert_section(&mut self, path: impl Into<String>, table: Table) {
        self.sections.insert(path.into(), table);
    }

    pub fn contains_section(&self, path: &str) -> bool {
        self.sections.contains_key(path)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.sections.get(section)?.get(key)
    }

    pub fn set(&mut self, section: &str, key: impl Into<String>, value: Value) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.into(), value);
    }

    /// Names of the direct child sections of `parent`, in order.
    pub fn child_sections(&self, parent: &str) -> Vec<String> {
        let prefix = format!("{parent}.");
        self.sections
            .keys()
            .filter_map(|path| path.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('.'))
            .map(str::to_string)
            .collect()
    }

    /// The `[nlp] pipeline` component list, or empty if absent.
    pub fn pipeline(&self) -> Vec<String> {
        self.get("nlp", "pipeline")
            .and_then(Value::as_string_list)
            .map(|names| names.into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, table)) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{path}]")?;
            for (key, value) in table {
                writeln!(f, "{key} = {value}")?;
            }
        }
        Ok(())
    }
}
