//! Save hook: gate a save event and dispatch its transfer

use std::path::Path;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::application::events::MirrorEvent;
use crate::application::mirror::MirrorUseCase;
use crate::config::MirrorConfig;
use crate::domain::{CommandRunner, PathFilter};

/// Receives events from the loop and from transfer workers
pub type EventSink = Arc<dyn Fn(MirrorEvent) + Send + Sync>;

/// Reacts to saves: checks the current snapshot, applies the path filter,
/// and runs each eligible transfer on its own thread.
///
/// Saves are never coalesced; two quick saves of one file start two
/// independent transfers.
pub struct SaveHook<R: CommandRunner> {
    mirror: Arc<MirrorUseCase<R>>,
    sink: EventSink,
}

impl<R: CommandRunner + 'static> SaveHook<R> {
    pub fn new(mirror: MirrorUseCase<R>, sink: EventSink) -> Self {
        Self {
            mirror: Arc::new(mirror),
            sink,
        }
    }

    /// Handle one save. Returns the worker handle when a transfer was started.
    pub fn on_save(&self, path: &Path, config: &Arc<MirrorConfig>) -> Option<JoinHandle<bool>> {
        if !config.enabled {
            (self.sink)(MirrorEvent::Disabled {
                path: path.display().to_string(),
            });
            return None;
        }

        let eligibility = PathFilter::from_config(config).evaluate(path);
        if !eligibility.is_eligible() {
            (self.sink)(MirrorEvent::Skipped {
                path: path.display().to_string(),
                reason: eligibility.reason(),
            });
            return None;
        }

        let mirror = Arc::clone(&self.mirror);
        let sink = Arc::clone(&self.sink);
        let config = Arc::clone(config);
        let path = path.to_path_buf();

        Some(thread::spawn(move || {
            run_transfer(&mirror, &path, &config, &sink)
        }))
    }
}

/// Run one transfer and report its outcome; returns `true` on success.
pub fn run_transfer<R: CommandRunner>(
    mirror: &MirrorUseCase<R>,
    path: &Path,
    config: &MirrorConfig,
    sink: &EventSink,
) -> bool {
    match mirror.mirror(path, config) {
        Ok(report) => {
            sink(MirrorEvent::succeeded(&report));
            true
        }
        Err(err) => {
            sink(MirrorEvent::failed(path, &err));
            false
        }
    }
}
