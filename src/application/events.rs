//! Events emitted while mirroring (rendered as text or NDJSON)

use std::path::Path;

use crate::error::MirrorError;

use super::mirror::MirrorReport;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MirrorEvent {
    /// Watch loop is up
    WatchStarted {
        config: String,
        remote: String,
        folders: Vec<String>,
    },
    /// Config file changed and was reloaded
    SettingsReloaded { warnings: usize },
    /// A save was detected
    FileSaved { path: String },
    /// Mirroring is switched off
    Disabled { path: String },
    /// The file did not pass the path filter
    Skipped { path: String, reason: String },
    TransferSucceeded {
        path: String,
        destination: String,
        elapsed_ms: u64,
    },
    TransferFailed { path: String, message: String },
    /// Non-transfer problem (watcher, reload)
    Error { message: String },
    Shutdown,
}

impl MirrorEvent {
    pub fn saved(path: &Path) -> Self {
        MirrorEvent::FileSaved {
            path: path.display().to_string(),
        }
    }

    pub fn succeeded(report: &MirrorReport) -> Self {
        MirrorEvent::TransferSucceeded {
            path: report.request.local_path().display().to_string(),
            destination: report.destination.clone(),
            elapsed_ms: report.elapsed.as_millis() as u64,
        }
    }

    pub fn failed(path: &Path, err: &MirrorError) -> Self {
        MirrorEvent::TransferFailed {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// True for outcomes the user must see even without `-v`
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            MirrorEvent::TransferFailed { .. } | MirrorEvent::Error { .. }
        )
    }

    /// Serialize with a `"command"` field included
    pub fn to_json(&self, command: &str) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "command".to_string(),
                serde_json::Value::String(command.to_string()),
            );
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
