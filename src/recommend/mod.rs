//! Per-language quickstart recommendations
//!
//! Static data guiding config generation: whether a pretrained transformer
//! exists for a language, which word vectors to suggest, and whether the
//! script has letter shapes worth embedding. Loaded once from an embedded
//! YAML document; unknown languages fall back to the `__default__` entry.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{Error, Result};

const RECOMMENDATIONS_YML: &str = include_str!("recommendations.yml");

/// Language codes renamed between major framework versions. Requesting the
/// old code is a hard error naming the replacement.
const RENAMED_LANGUAGE_CODES: &[(&str, &str)] = &[("xx", "mul"), ("is", "isl")];

/// Recommended presets for one language.
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub word_vectors: Option<String>,
    #[serde(default)]
    pub transformer: Option<TrfRecommendations>,
    #[serde(default = "default_true")]
    pub has_letters: bool,
}

/// Transformer choices per optimization target.
#[derive(Debug, Clone, Deserialize)]
pub struct TrfRecommendations {
    pub efficiency: TrfEntry,
    pub accuracy: TrfEntry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrfEntry {
    pub name: String,
    pub size_factor: f32,
}

fn default_true() -> bool {
    true
}

fn recommendations() -> &'static HashMap<String, Recommendation> {
    static CELL: OnceLock<HashMap<String, Recommendation>> = OnceLock::new();
    CELL.get_or_init(|| {
        serde_yaml::from_str(RECOMMENDATIONS_YML)
            .expect("embedded recommendations.yml is valid YAML")
    })
}

/// Look up the recommendation for a language, falling back to the global
/// default entry when the code is unrecognized.
pub fn recommendation_for(lang: &str) -> &'static Recommendation {
    let all = recommendations();
    all.get(lang)
        .or_else(|| all.get("__default__"))
        .expect("recommendations.yml carries a __default__ entry")
}

/// Reject language codes that were renamed in a major version.
pub fn check_renamed_code(lang: &str) -> Result<()> {
    if let Some((old, new)) = RENAMED_LANGUAGE_CODES.iter().find(|(old, _)| *old == lang) {
        return Err(Error::RenamedLanguageCode {
            old: (*old).to_string(),
            new: (*new).to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_parses() {
        assert!(recommendations().len() > 10);
    }

    #[test]
    fn test_known_language_has_transformer() {
        let reco = recommendation_for("en");
        let trf = reco.transformer.as_ref().unwrap();
        assert_eq!(trf.efficiency.name, "distilbert-base-uncased");
        assert_eq!(trf.accuracy.name, "roberta-base");
        assert!(reco.has_letters);
    }

    #[test]
    fn test_unknown_language_falls_back_to_default() {
        let reco = recommendation_for("tlh");
        assert!(reco.transformer.is_none());
        assert!(reco.word_vectors.is_none());
        assert!(reco.has_letters);
    }

    #[test]
    fn test_letterless_scripts_flagged() {
        assert!(!recommendation_for("zh").has_letters);
        assert!(!recommendation_for("ja").has_letters);
    }

    #[test]
    fn test_renamed_codes_rejected() {
        let err = check_renamed_code("xx").unwrap_err();
        assert!(err.to_string().contains("mul"));
        let err = check_renamed_code("is").unwrap_err();
        assert!(err.to_string().contains("isl"));
    }

    #[test]
    fn test_current_codes_accepted() {
        assert!(check_renamed_code("en").is_ok());
        assert!(check_renamed_code("mul").is_ok());
        assert!(check_renamed_code("isl").is_ok());
    }
}
