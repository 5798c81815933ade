//! Watch options and save-event detection

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use notify::event::{AccessKind, AccessMode, CreateKind, ModifyKind, RenameMode};
use notify::EventKind;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Config file to load and observe for changes
    pub config_path: PathBuf,
    /// Quiet window that closes one save burst
    pub debounce: Duration,
}

impl WatchOptions {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config_path,
            debounce: Duration::from_millis(DEBOUNCE_MS),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

/// Raw watcher events that can be part of a file save.
///
/// Covers in-place writes, new files, and editors that save by renaming a
/// temporary file over the original.
pub fn is_save_kind(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(CreateKind::File | CreateKind::Any)
            | EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any)
            | EventKind::Modify(ModifyKind::Name(
                RenameMode::To | RenameMode::Both | RenameMode::Any
            ))
            | EventKind::Access(AccessKind::Close(AccessMode::Write))
    )
}

/// Groups raw events per path into save events.
///
/// A path becomes ready once no event for it arrived within the window. Each
/// ready path is one save; paths are never merged with each other.
#[derive(Debug)]
pub struct SaveDebouncer {
    window: Duration,
    pending: HashMap<PathBuf, Instant>,
}

impl SaveDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: HashMap::new(),
        }
    }

    pub fn record(&mut self, path: PathBuf, at: Instant) {
        self.pending.insert(path, at);
    }

    /// Remove and return every settled path, sorted
    pub fn take_ready(&mut self, now: Instant) -> Vec<PathBuf> {
        let window = self.window;
        let mut ready: Vec<PathBuf> = self
            .pending
            .iter()
            .filter(|(_, last)| now.saturating_duration_since(**last) >= window)
            .map(|(path, _)| path.clone())
            .collect();

        for path in &ready {
            self.pending.remove(path);
        }
        ready.sort();
        ready
    }
}
