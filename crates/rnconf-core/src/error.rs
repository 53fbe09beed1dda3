//! Error types for rnconf-core

use std::path::PathBuf;

/// Result type for rnconf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that stop a resolution run.
///
/// Anything that goes wrong inside a dependency is reported through
/// [`crate::Diagnostics`] instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The project root has no `package.json`
    #[error("No package.json found in project root {path}")]
    ManifestNotFound { path: PathBuf },

    /// The root project's config file does not match the schema
    #[error("Invalid configuration in {path}: {message}")]
    InvalidRootConfig { path: PathBuf, message: String },

    /// Filesystem error from rnconf-fs
    #[error(transparent)]
    Fs(#[from] rnconf_fs::Error),

    /// Schema error from rnconf-schema
    #[error(transparent)]
    Schema(#[from] rnconf_schema::Error),
}
