//! Error types for rnconf-schema

use crate::validation::ValidationReport;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] rnconf_fs::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(ValidationReport),

    #[error("Configuration does not match schema: {0}")]
    Json(#[from] serde_json::Error),
}
