//! Watch Use Case
//!
//! Continuous mirroring of saved files. It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Per-path debouncing of raw events into save events (100ms default)
//! - Live reload of the config file
//! - One background transfer per eligible save
//!
//! ## Usage
//!
//! ```ignore
//! let hook = SaveHook::new(MirrorUseCase::new(ProcessRunner), sink.clone());
//! let use_case = WatchUseCase::new(WatchOptions::new(config_path), hook, sink);
//! use_case.start(config, running)?;
//! ```

mod event;
mod hook;
mod use_case;


pub use event::{is_save_kind, SaveDebouncer, WatchOptions, DEBOUNCE_MS};
pub use hook::{run_transfer, EventSink, SaveHook};
pub use use_case::{describe_remote, WatchUseCase};
