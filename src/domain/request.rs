//! Per-save transfer request

use std::path::{Path, PathBuf};

use crate::config::TransferSettings;
use crate::error::{MirrorError, MirrorResult};

use super::path::{absolutize, relative_to, to_remote_path};

/// One file to push, with its derived relative and remote locations.
///
/// Built fresh for every save and dropped once the attempt finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    local_path: PathBuf,
    relative_path: PathBuf,
    remote_path: String,
}

impl TransferRequest {
    pub fn new(file: &Path, settings: &TransferSettings) -> MirrorResult<Self> {
        let local_path = absolutize(file);
        let base = absolutize(&settings.local_base_dir);

        let relative_path =
            relative_to(&local_path, &base).ok_or_else(|| MirrorError::UnrelatedPath {
                file: local_path.clone(),
                base: base.clone(),
            })?;
        let remote_path = to_remote_path(&settings.remote_base_dir, &relative_path);

        Ok(Self {
            local_path,
            relative_path,
            remote_path,
        })
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Relative path with forward slashes, for messages
    pub fn relative_display(&self) -> String {
        self.relative_path.to_string_lossy().replace('\\', "/")
    }

    pub fn remote_path(&self) -> &str {
        &self.remote_path
    }

    /// `user@host:remote_path`
    pub fn destination(&self, settings: &TransferSettings) -> String {
        format!("{}:{}", settings.destination_host(), self.remote_path)
    }
}
