//! Merging and default-filling for configs

use super::{Config, Table, Value};

impl Config {
    /// Deep merge where values from `overrides` win.
    ///
    /// The result keeps `self`'s section and key layout; sections and keys
    /// only present in `overrides` are appended. Used to fold auxiliary
    /// blocks (pretraining, distillation) under an already-filled config:
    /// `aux.merge(&filled)`.
    pub fn merge(&self, overrides: &Config) -> Config {
        let mut merged = self.clone();
        for (path, table) in &overrides.sections {
            let target = merged.sections.entry(path.clone()).or_default();
            for (key, value) in table {
                target.insert(key.clone(), value.clone());
            }
        }
        merged
    }

    /// Insert sections and keys from `defaults` that are missing here,
    /// never overwriting existing values.
    ///
    /// Two guards keep defaults from corrupting a config that diverges from
    /// them structurally:
    /// - a section whose registry reference (`@...` key) disagrees with the
    ///   default's is left alone, subsections included; its own reference's
    ///   defaults apply instead
    /// - a default section `[a.b]` is skipped when `b` exists as a plain key
    ///   of `[a]`, and vice versa for keys shadowed by subsections
    pub fn fill_missing(&mut self, defaults: &Config) {
        let mut conflicted: Vec<String> = Vec::new();
        for (path, dtable) in &defaults.sections {
            if conflicted
                .iter()
                .any(|parent| path.starts_with(&format!("{parent}.")))
            {
                continue;
            }
            if self.section_shadowed_by_key(path) {
                continue;
            }
            let shadowed_keys: Vec<String> = dtable
                .keys()
                .filter(|key| self.sections.contains_key(&format!("{path}.{key}")))
                .cloned()
                .collect();
            let table = self.sections.entry(path.clone()).or_default();
            if conflicting_registry_ref(table, dtable) {
                conflicted.push(path.clone());
                continue;
            }
            for (key, value) in dtable {
                if shadowed_keys.iter().any(|k| k == key) {
                    continue;
                }
                table
                    .entry(key.clone())
                    .or_insert_with(|| value.clone());
            }
        }
    }

    fn section_shadowed_by_key(&self, path: &str) -> bool {
        match path.rsplit_once('.') {
            Some((parent, leaf)) => self
                .sections
                .get(parent)
                .is_some_and(|table| table.contains_key(leaf)),
            None => false,
        }
    }
}

/// First `@`-prefixed entry of a table, i.e. its registry reference.
pub(crate) fn registry_ref(table: &Table) -> Option<(&str, &Value)> {
    table
        .iter()
        .find(|(key, _)| key.starts_with('@'))
        .map(|(key, value)| (key.as_str(), value))
}

fn conflicting_registry_ref(a: &Table, b: &Table) -> bool {
    matches!(
        (registry_ref(a), registry_ref(b)),
        (Some(x), Some(y)) if x != y
    )
}
