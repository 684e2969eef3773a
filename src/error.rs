//! Error types for palabra

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("Language code '{old}' was renamed in v4; use '{new}' instead")]
    RenamedLanguageCode { old: String, new: String },

    #[error("Unknown component factory: '{0}'")]
    UnknownFactory(String),

    #[error("Invalid config: {0}")]
    Validation(String),

    #[error(
        "The provided output file already exists ({}). To force overwriting the config file, set the --force or -F flag",
        .0.display()
    )]
    OutputExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
