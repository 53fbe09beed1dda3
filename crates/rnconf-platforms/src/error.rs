//! Error types for rnconf-platforms

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] rnconf_fs::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] rnconf_schema::Error),

    #[error("Invalid {platform} parameters: {message}")]
    InvalidParams { platform: String, message: String },

    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    #[error("Command failed: {command}: {message}")]
    CommandFailed { command: String, message: String },

    #[error("{0}")]
    Xcodebuild(String),

    #[error("Malformed output from {command}: {message}")]
    MalformedOutput { command: String, message: String },

    #[error("Failed to read workspace at {path}: {message}")]
    Workspace { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_params_display() {
        let err = Error::InvalidParams {
            platform: "ios".to_string(),
            message: "invalid type: integer `5`, expected a sequence".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid ios parameters"));
    }

    #[test]
    fn test_xcodebuild_error_is_shown_verbatim() {
        let err = Error::Xcodebuild("xcodebuild: error: no project".to_string());
        assert_eq!(err.to_string(), "xcodebuild: error: no project");
    }
}
