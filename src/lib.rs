//! # Palabra: NLP Training Config Toolkit
//!
//! Palabra generates and auto-fills training configs for NLP pipelines:
//! starter configs tailored to a language and component selection, and
//! completion of partial configs with all default values.
//!
//! ## Architecture
//!
//! - **config**: Section-keyed config format with parsing, merging and diffing
//! - **recommend**: Per-language quickstart recommendations
//! - **registry**: Default skeleton, component factories and auto-fill
//! - **quickstart**: Template rendering, config generation and filling
//! - **cli**: Command-line interface
//! - **report**: Status output

pub mod cli;
pub mod config;
pub mod quickstart;
pub mod recommend;
pub mod registry;
pub mod report;

pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use quickstart::{
    fill_config, init_config, is_stdout, save_config, FillOptions, InitOptions, InitValues,
    Optimize,
};
