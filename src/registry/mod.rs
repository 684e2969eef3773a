//! Config auto-fill and structural validation
//!
//! Auto-fill is what the framework does when it instantiates a pipeline
//! from a config: every missing setting is populated from the default
//! skeleton, the referenced component factories, and the default values of
//! registered architectures. Existing values are never overwritten, so
//! filling a complete config is a no-op.

mod components;

pub use components::{factory_defaults, known_factory, KNOWN_FACTORIES};

use std::sync::OnceLock;

use crate::config::{registry_ref, Config, Value};
use crate::error::{Error, Result};
use crate::report::Reporter;

const BASE_CFG: &str = include_str!("base.cfg");
const PRETRAIN_CFG: &str = include_str!("pretrain.cfg");
const DISTILL_CFG: &str = include_str!("distill.cfg");

fn embedded(cell: &'static OnceLock<Config>, text: &str) -> &'static Config {
    cell.get_or_init(|| text.parse().expect("embedded default config is valid"))
}

/// Skeleton filled into every config.
pub fn base_config() -> &'static Config {
    static CELL: OnceLock<Config> = OnceLock::new();
    embedded(&CELL, BASE_CFG)
}

/// Defaults for the `[pretraining]` block.
pub fn pretrain_config() -> &'static Config {
    static CELL: OnceLock<Config> = OnceLock::new();
    embedded(&CELL, PRETRAIN_CFG)
}

/// Defaults for the `[distillation]` block.
pub fn distill_config() -> &'static Config {
    static CELL: OnceLock<Config> = OnceLock::new();
    embedded(&CELL, DISTILL_CFG)
}

/// Fill every missing setting with its default value.
///
/// Sourced components are left untouched; their settings live in the
/// external source, not in this config. Referencing an unknown factory is
/// an error, while unknown architecture references are kept as-is since
/// their parameters cannot be known here.
pub fn auto_fill(config: &Config) -> Result<Config> {
    let mut filled = config.clone();
    filled.fill_missing(base_config());

    for name in filled.child_sections("components") {
        let path = format!("components.{name}");
        let Some(table) = filled.section(&path) else {
            continue;
        };
        if table.contains_key("source") {
            continue;
        }
        let factory = table
            .get("factory")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::Validation(format!(
                    "component '{name}' defines neither a factory nor a source"
                ))
            })?
            .to_string();
        let defaults = factory_defaults(&factory, &name)
            .ok_or_else(|| Error::UnknownFactory(factory.clone()))?;
        filled.fill_missing(&defaults);
    }

    // Default values of optional architecture parameters
    let paths: Vec<String> = filled.sections().map(|(p, _)| p.to_string()).collect();
    for path in paths {
        let arch = filled
            .section(&path)
            .and_then(registry_ref)
            .and_then(|(_, value)| value.as_str())
            .map(str::to_string);
        if let Some(arch) = arch {
            if let Some(defaults) = components::arch_defaults(&arch) {
                // A parameter spelled out as a subsection shadows the default key
                let shadowed: Vec<String> = defaults
                    .keys()
                    .filter(|key| filled.contains_section(&format!("{path}.{key}")))
                    .cloned()
                    .collect();
                if let Some(table) = filled.section_mut(&path) {
                    for (key, value) in defaults {
                        if shadowed.iter().any(|k| *k == key) {
                            continue;
                        }
                        table.entry(key).or_insert(value);
                    }
                }
            }
        }
    }
    Ok(filled)
}

/// Structural validation: the pipeline must be declared and every pipeline
/// component must be defined inline with a known factory or via a source.
pub fn validate(config: &Config) -> Result<()> {
    let nlp = config
        .section("nlp")
        .ok_or_else(|| Error::Validation("missing [nlp] section".to_string()))?;
    if !matches!(nlp.get("lang"), Some(Value::Str(_))) {
        return Err(Error::Validation(
            "[nlp] must set a language code".to_string(),
        ));
    }
    let pipeline = nlp
        .get("pipeline")
        .and_then(Value::as_string_list)
        .ok_or_else(|| {
            Error::Validation("[nlp] pipeline must be a list of component names".to_string())
        })?;
    for name in pipeline {
        let path = format!("components.{name}");
        let table = config.section(&path).ok_or_else(|| {
            Error::Validation(format!(
                "pipeline component '{name}' has no [{path}] section"
            ))
        })?;
        if table.contains_key("source") {
            continue;
        }
        let factory = table.get("factory").and_then(Value::as_str).ok_or_else(|| {
            Error::Validation(format!(
                "component '{name}' defines neither a factory nor a source"
            ))
        })?;
        if !known_factory(factory) {
            return Err(Error::UnknownFactory(factory.to_string()));
        }
    }
    Ok(())
}

/// Names of components defined by reference to an external source.
pub fn sourced_components(config: &Config) -> Vec<String> {
    config
        .child_sections("components")
        .into_iter()
        .filter(|name| {
            config
                .section(&format!("components.{name}"))
                .is_some_and(|table| table.contains_key("source"))
        })
        .collect()
}

/// Warn (never fail) when pretraining is requested without a tok2vec
/// component; the user may simply have named theirs differently.
pub fn check_pretrain_readiness(config: &Config, msg: &Reporter) {
    if !config.pipeline().iter().any(|name| name == "tok2vec") {
        msg.warn(
            "No tok2vec component found in the pipeline. If your tok2vec \
             component has a different name, you may need to adjust the \
             tok2vec_model reference in the [pretraining] block. If you don't \
             have a tok2vec component, make sure to add it to your \
             [components] and the pipeline specified in the [nlp] block, so \
             you can pretrain weights for it.",
        );
    }
}
