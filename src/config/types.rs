//! Configuration types

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MirrorError, MirrorResult};

/// Mirroring settings as written in `config.toml`.
///
/// Required keys are optional at the serde level so that a partially filled
/// file still loads; [`MirrorConfig::validate`] reports what is missing at the
/// point a transfer is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    pub remote_user: Option<String>,
    pub remote_host: Option<String>,
    pub remote_base_dir: Option<String>,
    pub local_base_dir: Option<PathBuf>,
    /// Transfer timeout in seconds
    pub timeout: Option<f64>,
    pub password_file: Option<PathBuf>,
    pub key_file: Option<PathBuf>,
    pub enabled: bool,
    pub folders_to_sync: Vec<PathBuf>,
    pub exclude_patterns: Vec<String>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            remote_user: None,
            remote_host: None,
            remote_base_dir: None,
            local_base_dir: None,
            timeout: None,
            password_file: None,
            key_file: None,
            enabled: true,
            folders_to_sync: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// How the secure-copy invocation authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    /// No explicit argument; ssh agent or default identities apply
    Ambient,
    /// `scp -i <key>`
    KeyFile(PathBuf),
    /// `sshpass -f <file> scp ...`
    PasswordFile(PathBuf),
}

/// Validated transfer settings: every required key present and typed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSettings {
    pub remote_user: String,
    pub remote_host: String,
    pub remote_base_dir: String,
    pub local_base_dir: PathBuf,
    pub timeout: Duration,
    pub auth: Auth,
}

impl TransferSettings {
    /// `user@host`
    pub fn destination_host(&self) -> String {
        format!("{}@{}", self.remote_user, self.remote_host)
    }
}

impl MirrorConfig {
    /// Check required keys and build [`TransferSettings`].
    ///
    /// Empty strings and non-positive timeouts count as missing. All missing
    /// keys are reported together.
    pub fn validate(&self) -> MirrorResult<TransferSettings> {
        let mut missing = Vec::new();

        let remote_user = non_empty(self.remote_user.as_deref());
        if remote_user.is_none() {
            missing.push("remote_user");
        }
        let remote_host = non_empty(self.remote_host.as_deref());
        if remote_host.is_none() {
            missing.push("remote_host");
        }
        let remote_base_dir = non_empty(self.remote_base_dir.as_deref());
        if remote_base_dir.is_none() {
            missing.push("remote_base_dir");
        }
        let local_base_dir = non_empty_path(self.local_base_dir.as_deref());
        if local_base_dir.is_none() {
            missing.push("local_base_dir");
        }
        let timeout = self
            .timeout
            .filter(|t| *t > 0.0)
            .and_then(|t| Duration::try_from_secs_f64(t).ok());
        if timeout.is_none() {
            missing.push("timeout");
        }

        match (remote_user, remote_host, remote_base_dir, local_base_dir, timeout) {
            (Some(user), Some(host), Some(base), Some(local), Some(timeout)) => {
                Ok(TransferSettings {
                    remote_user: user.to_string(),
                    remote_host: host.to_string(),
                    remote_base_dir: base.to_string(),
                    local_base_dir: local.to_path_buf(),
                    timeout,
                    auth: self.auth(),
                })
            }
            _ => Err(MirrorError::Config { missing }),
        }
    }

    /// Key file wins over password file; neither means ambient credentials.
    pub fn auth(&self) -> Auth {
        if let Some(key) = non_empty_path(self.key_file.as_deref()) {
            Auth::KeyFile(key.to_path_buf())
        } else if let Some(password) = non_empty_path(self.password_file.as_deref()) {
            Auth::PasswordFile(password.to_path_buf())
        } else {
            Auth::Ambient
        }
    }

    /// Commented starter file written by `wsmirror init`
    pub fn template() -> &'static str {
        TEMPLATE
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty_path(value: Option<&Path>) -> Option<&Path> {
    value.filter(|p| !p.as_os_str().is_empty())
}

const TEMPLATE: &str = r#"# wsmirror configuration
#
# Every saved file under one of `folders_to_sync` is copied to
# <remote_user>@<remote_host>:<remote_base_dir>/<path relative to local_base_dir>

remote_user = "deploy"
remote_host = "example.internal"
remote_base_dir = "/srv/app"
local_base_dir = "~/projects/app"

# Seconds before a running transfer is killed
timeout = 30

# Optional authentication. key_file takes precedence over password_file.
# password_file requires sshpass and is not available on Windows.
# key_file = "~/.ssh/id_ed25519"
# password_file = "~/.config/wsmirror/password"

enabled = true

folders_to_sync = [
    "~/projects/app/src",
]

# Matched against the file name and the full path; plain strings match
# anywhere in the path.
exclude_patterns = [
    "*.log",
    "*.tmp",
    "__pycache__",
    ".git",
]
"#;
