//! Line-based parser for the section-keyed config format

use std::str::FromStr;

use super::{Config, Value};
use crate::error::Error;

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = Config::new();
        let mut current: Option<String> = None;
        for (idx, raw_line) in s.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(header) = line.strip_prefix('[') {
                let path = header
                    .strip_suffix(']')
                    .ok_or_else(|| Error::Parse {
                        line: line_no,
                        msg: format!("unterminated section header: {line}"),
                    })?
                    .trim();
                if path.is_empty() {
                    return Err(Error::Parse {
                        line: line_no,
                        msg: "empty section header".to_string(),
                    });
                }
                // Duplicate headers merge into the existing section
                config.sections.entry(path.to_string()).or_default();
                current = Some(path.to_string());
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| Error::Parse {
                line: line_no,
                msg: format!("expected `key = value`, got: {line}"),
            })?;
            let section = current.as_ref().ok_or_else(|| Error::Parse {
                line: line_no,
                msg: format!("key outside of any section: {line}"),
            })?;
            let value = Value::parse(value).map_err(|msg| Error::Parse { line: line_no, msg })?;
            config
                .sections
                .entry(section.clone())
                .or_default()
                .insert(key.trim().to_string(), value);
        }
        Ok(config)
    }
}
