//! Error types for wsmirror
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wsmirror operations
pub type MirrorResult<T> = Result<T, MirrorError>;

/// Main error type for wsmirror operations
#[derive(Error, Debug)]
pub enum MirrorError {
    /// One or more required settings are absent (transfer never attempted)
    #[error("missing required settings: {}", missing.join(", "))]
    Config { missing: Vec<&'static str> },

    /// Password-file authentication requested where sshpass is unavailable
    #[error("sshpass not supported in Windows")]
    PlatformUnsupported,

    /// The secure-copy process exited non-zero (or was killed on timeout)
    #[error("failed to upload {path}: {output}")]
    TransferFailed { path: String, output: String },

    /// The file cannot be expressed relative to `local_base_dir`
    #[error("{file} is not reachable from local base '{base}'")]
    UnrelatedPath { file: PathBuf, base: PathBuf },

    /// The transfer tool could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has wrong-typed values
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Configuration file does not exist
    #[error("configuration file not found: {path} (run 'wsmirror init' to create one)")]
    ConfigNotFound { path: PathBuf },

    /// File watcher could not be set up
    #[error("watch error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<notify::Error> for MirrorError {
    fn from(err: notify::Error) -> Self {
        MirrorError::Watch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_settings() {
        let err = MirrorError::Config {
            missing: vec!["remote_user", "timeout"],
        };
        assert_eq!(
            err.to_string(),
            "missing required settings: remote_user, timeout"
        );
    }

    #[test]
    fn test_error_display_platform_unsupported() {
        assert_eq!(
            MirrorError::PlatformUnsupported.to_string(),
            "sshpass not supported in Windows"
        );
    }
}
