use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Could not read names from {path}: {source}")]
    NamesFileError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("No date pattern matches '{0}'")]
    NoDateMatch(String),
}
