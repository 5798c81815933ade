//! wsmirror - save-triggered one-way file mirroring over scp
//!
//! wsmirror watches a set of local folders and, every time a file inside them
//! is saved, copies that single file to the matching location under a remote
//! base directory. Paths are mapped by their position relative to a local
//! base directory, and exclude patterns keep build output and secrets local.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{MirrorEvent, MirrorUseCase, WatchOptions, WatchUseCase};
pub use config::{Auth, MirrorConfig, TransferSettings};
pub use domain::{CommandRunner, Eligibility, PathFilter, Platform, TransferRequest};
pub use error::{MirrorError, MirrorResult};
pub use infrastructure::{ProcessRunner, ScpCommand};
