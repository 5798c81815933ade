//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::events::MirrorEvent;
use crate::config::{load_effective, MirrorConfig};
use crate::domain::path::absolutize;
use crate::domain::CommandRunner;
use crate::error::MirrorResult;

use super::event::{is_save_kind, SaveDebouncer, WatchOptions};
use super::hook::{EventSink, SaveHook};

/// Watch Use Case
///
/// Observes every sync folder plus the config file. Settled save bursts go to
/// the [`SaveHook`]; config changes swap in a new snapshot and re-register the
/// folder watches.
pub struct WatchUseCase<R: CommandRunner> {
    options: WatchOptions,
    hook: SaveHook<R>,
    sink: EventSink,
}

impl<R: CommandRunner + 'static> WatchUseCase<R> {
    pub fn new(options: WatchOptions, hook: SaveHook<R>, sink: EventSink) -> Self {
        Self {
            options,
            hook,
            sink,
        }
    }

    /// Start watching (blocking) until `running` is cleared
    pub fn start(&self, initial: MirrorConfig, running: Arc<AtomicBool>) -> MirrorResult<()> {
        let config_path = absolutize(&self.options.config_path);
        let mut snapshot = Arc::new(initial);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        // Config change subscription
        let config_dir = config_path.parent().map(Path::to_path_buf);
        if let Some(dir) = &config_dir {
            if let Err(e) = watcher.watch(dir, RecursiveMode::NonRecursive) {
                self.emit(MirrorEvent::Error {
                    message: format!("cannot watch config {}: {}", config_path.display(), e),
                });
            }
        }

        let mut watched = self.watch_folders(&mut watcher, &[], &snapshot);

        self.emit(MirrorEvent::WatchStarted {
            config: config_path.display().to_string(),
            remote: describe_remote(&snapshot),
            folders: watched.iter().map(|p| p.display().to_string()).collect(),
        });

        let mut saves = SaveDebouncer::new(self.options.debounce);
        let mut config_changed: Option<Instant> = None;

        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(Duration::from_millis(50)) {
                Ok(Ok(event)) => {
                    let now = Instant::now();
                    for path in event.paths {
                        if path == config_path {
                            config_changed = Some(now);
                        } else if is_save_kind(&event.kind)
                            && watched.iter().any(|folder| path.starts_with(folder))
                        {
                            // The config directory is watched too; only sync folders count.
                            saves.record(path, now);
                        }
                    }
                }
                Ok(Err(e)) => self.emit(MirrorEvent::Error {
                    message: e.to_string(),
                }),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            let now = Instant::now();

            if config_changed.is_some_and(|at| now.duration_since(at) >= self.options.debounce) {
                config_changed = None;
                if let Some(reloaded) = self.reload(&config_path) {
                    watched = self.watch_folders(&mut watcher, &watched, &reloaded);
                    snapshot = reloaded;
                }
            }

            for path in saves.take_ready(now) {
                if !path.is_file() {
                    continue;
                }
                self.emit(MirrorEvent::saved(&path));
                // Worker is detached; its outcome arrives through the sink.
                let _ = self.hook.on_save(&path, &snapshot);
            }
        }

        // Drop the subscriptions before reporting shutdown
        for folder in &watched {
            let _ = watcher.unwatch(folder);
        }
        if let Some(dir) = &config_dir {
            let _ = watcher.unwatch(dir);
        }

        self.emit(MirrorEvent::Shutdown);
        Ok(())
    }

    fn emit(&self, event: MirrorEvent) {
        (self.sink)(event)
    }

    fn reload(&self, config_path: &Path) -> Option<Arc<MirrorConfig>> {
        match load_effective(config_path) {
            Ok((config, warnings)) => {
                self.emit(MirrorEvent::SettingsReloaded {
                    warnings: warnings.len(),
                });
                Some(Arc::new(config))
            }
            Err(e) => {
                self.emit(MirrorEvent::Error {
                    message: format!("settings not reloaded, keeping previous: {}", e),
                });
                None
            }
        }
    }

    /// Bring the set of recursive folder watches in line with `config`.
    fn watch_folders(
        &self,
        watcher: &mut RecommendedWatcher,
        current: &[PathBuf],
        config: &MirrorConfig,
    ) -> Vec<PathBuf> {
        let wanted = desired_folders(config);

        for old in current.iter().filter(|p| !wanted.contains(p)) {
            let _ = watcher.unwatch(old);
        }

        let mut active = Vec::new();
        for folder in wanted {
            if current.contains(&folder) {
                active.push(folder);
                continue;
            }
            match watcher.watch(&folder, RecursiveMode::Recursive) {
                Ok(()) => active.push(folder),
                Err(e) => self.emit(MirrorEvent::Error {
                    message: format!("cannot watch {}: {}", folder.display(), e),
                }),
            }
        }
        active
    }
}

/// Absolute, de-duplicated sync folders; nested folders are covered by their parent.
pub(crate) fn desired_folders(config: &MirrorConfig) -> Vec<PathBuf> {
    let mut folders: Vec<PathBuf> = config
        .folders_to_sync
        .iter()
        .map(|f| absolutize(f))
        .collect();
    folders.sort();
    folders.dedup();

    let mut out: Vec<PathBuf> = Vec::new();
    for folder in folders {
        if !out.iter().any(|parent| folder.starts_with(parent)) {
            out.push(folder);
        }
    }
    out
}

/// `user@host:/base` for headers, with placeholders for missing keys
pub fn describe_remote(config: &MirrorConfig) -> String {
    format!(
        "{}@{}:{}",
        config.remote_user.as_deref().unwrap_or("?"),
        config.remote_host.as_deref().unwrap_or("?"),
        config.remote_base_dir.as_deref().unwrap_or("?")
    )
}
