//! CLI argument parsing and validation
//!
//! This module provides the command-line interface for palabra config
//! generation.
//!
//! # Usage
//!
//! ```bash
//! palabra init config config.cfg
//! palabra init config config.cfg --lang de --pipeline tagger,parser
//! palabra init config - --optimize accuracy --gpu
//! palabra init fill-config base.cfg config.cfg
//! palabra init fill-config base.cfg --diff
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::quickstart::{InitValues, Optimize};

/// Palabra: NLP training config toolkit
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "palabra")]
#[command(version)]
#[command(about = "Generate and auto-fill training configs for palabra pipelines")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Initialize configs and assets for a new pipeline
    #[command(subcommand)]
    Init(InitCommand),
}

/// Init subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum InitCommand {
    /// Generate a starter config for training
    Config(InitConfigArgs),

    /// Fill a partial config with all default values
    #[command(name = "fill-config")]
    FillConfig(FillConfigArgs),
}

/// Arguments for `init config`
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitConfigArgs {
    /// File to save the config to, or - to write to stdout
    #[arg(value_name = "OUTPUT")]
    pub output_file: PathBuf,

    /// Two-letter code of the language to use
    #[arg(short, long, default_value = InitValues::LANG)]
    pub lang: String,

    /// Comma-separated names of trainable pipeline components to include
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = InitValues::PIPELINE.iter().map(|s| s.to_string())
    )]
    pub pipeline: Vec<String>,

    /// Whether to optimize for efficiency or accuracy
    #[arg(short, long, default_value = "efficiency")]
    pub optimize: Optimize,

    /// Whether the model can run on GPU
    #[arg(short = 'G', long)]
    pub gpu: bool,

    /// Include config for pretraining (with `palabra pretrain`)
    #[arg(long)]
    pub pretraining: bool,

    /// Force overwriting the output file if it exists
    #[arg(short = 'F', long)]
    pub force: bool,
}

/// Arguments for `init fill-config`
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct FillConfigArgs {
    /// Path to the partial config file
    #[arg(value_name = "BASE")]
    pub base_path: PathBuf,

    /// File to save the filled config to, or - to write to stdout
    #[arg(value_name = "OUTPUT", default_value = "-")]
    pub output_file: PathBuf,

    /// Include config for distillation (with `palabra distill`)
    #[arg(long)]
    pub distillation: bool,

    /// Include config for pretraining (with `palabra pretrain`)
    #[arg(long)]
    pub pretraining: bool,

    /// Print a visual diff instead of the full config
    #[arg(short = 'D', long)]
    pub diff: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
