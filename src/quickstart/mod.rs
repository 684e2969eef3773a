//! Quickstart config generation
//!
//! The `init config` operation: resolve per-language recommendations,
//! render the quickstart template, auto-fill the result and hand it to the
//! writer. The companion `init fill-config` operation lives in [`fill`].

mod fill;
mod save;
mod template;

#[cfg(test)]
mod tests;

pub use fill::{fill_config, FillOptions};
pub use save::{is_stdout, save_config};
pub use template::{render, QuickstartVars};

use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::error::Result;
use crate::recommend::{check_renamed_code, recommendation_for};
use crate::registry::{auto_fill, check_pretrain_readiness, pretrain_config, validate};
use crate::report::Reporter;

/// Optimization target for generated configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Optimize {
    /// Faster inference, smaller model, lower memory consumption.
    #[default]
    Efficiency,
    /// Higher accuracy, potentially larger and slower model.
    Accuracy,
}

impl FromStr for Optimize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "efficiency" => Ok(Optimize::Efficiency),
            "accuracy" => Ok(Optimize::Accuracy),
            _ => Err(format!(
                "Unknown optimization target: {s}. Valid targets: efficiency, accuracy"
            )),
        }
    }
}

impl fmt::Display for Optimize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optimize::Efficiency => write!(f, "efficiency"),
            Optimize::Accuracy => write!(f, "accuracy"),
        }
    }
}

/// Default values for initialization.
///
/// Kept in one place so the CLI and the programmatic entry point behave
/// identically regardless of call path.
pub struct InitValues;

impl InitValues {
    pub const LANG: &'static str = "en";
    pub const PIPELINE: [&'static str; 3] = ["tagger", "parser", "ner"];
    pub const OPTIMIZE: Optimize = Optimize::Efficiency;
    pub const GPU: bool = false;
    pub const PRETRAINING: bool = false;
    pub const FORCE_OVERWRITE: bool = false;
}

/// Options for [`init_config`].
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub lang: String,
    pub pipeline: Vec<String>,
    pub optimize: Optimize,
    pub gpu: bool,
    pub pretraining: bool,
    pub silent: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            lang: InitValues::LANG.to_string(),
            pipeline: InitValues::PIPELINE.iter().map(|s| s.to_string()).collect(),
            optimize: InitValues::OPTIMIZE,
            gpu: InitValues::GPU,
            pretraining: InitValues::PRETRAINING,
            silent: true,
        }
    }
}

/// Whether transformer support was compiled in.
fn transformers_enabled() -> bool {
    cfg!(feature = "transformers")
}

/// Generate a starter config for training.
///
/// Renders the quickstart template with the optimal settings for the given
/// use case, auto-fills it and returns the complete config. Prints a short
/// use-case summary unless silenced.
pub fn init_config(opts: &InitOptions) -> Result<Config> {
    let msg = Reporter::new(opts.silent);
    check_renamed_code(&opts.lang)?;
    // tok2vec and transformer are managed by the template itself
    let components: Vec<&str> = opts
        .pipeline
        .iter()
        .map(String::as_str)
        .filter(|name| !matches!(*name, "tok2vec" | "transformer"))
        .collect();
    let reco = recommendation_for(&opts.lang);
    let mut transformer = reco.transformer.as_ref();
    if transformer.is_some() && !transformers_enabled() {
        msg.warn(
            "To generate a more effective transformer-based config (GPU-only), \
             build palabra with the 'transformers' feature and re-run this \
             command. The config generated now does not use transformers.",
        );
        transformer = None;
    }
    let vars = QuickstartVars {
        lang: &opts.lang,
        components: components.clone(),
        optimize: opts.optimize,
        gpu: opts.gpu,
        transformer,
        word_vectors: reco.word_vectors.as_deref(),
        has_letters: reco.has_letters,
    };
    let rendered = render(&vars);
    msg.info("Generated config template specific for your use case");
    msg.text(&format!("- Language: {}", opts.lang));
    msg.text(&format!("- Pipeline: {}", components.join(", ")));
    msg.text(&format!("- Optimize for: {}", opts.optimize));
    msg.text(&format!("- Hardware: {}", if opts.gpu { "GPU" } else { "CPU" }));
    msg.text(&format!(
        "- Transformer: {}",
        vars.transformer_name().unwrap_or("None")
    ));
    let config: Config = rendered.parse()?;
    let mut config = auto_fill(&config)?;
    validate(&config)?;
    if opts.pretraining {
        check_pretrain_readiness(&config, &msg);
        config = pretrain_config().merge(&config);
    }
    msg.good("Auto-filled config with all values");
    Ok(config)
}
