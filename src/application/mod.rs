//! Application Layer
//!
//! Use cases that orchestrate the mirroring flow.
//! This layer:
//! - Depends on Domain layer (filter, request, ports)
//! - Does NOT contain path rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `MirrorUseCase` - Validate, build and run one transfer
//! - `WatchUseCase` - Watch sync folders and mirror every eligible save
//!
//! ## Events
//!
//! - `MirrorEvent` - Progress and outcome reports, rendered as text or NDJSON

pub mod events;
pub mod mirror;
pub mod watch;

pub use events::MirrorEvent;
pub use mirror::{MirrorReport, MirrorUseCase, TransferPlan, NO_OUTPUT};
pub use watch::{
    describe_remote, is_save_kind, run_transfer, EventSink, SaveDebouncer, SaveHook,
    WatchOptions, WatchUseCase, DEBOUNCE_MS,
};
