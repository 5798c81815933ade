//! Domain Layer
//!
//! Pure decision logic: which saved files qualify, where they go on the
//! remote side, and the ports through which the transfer reaches the system.
//!
//! ## Structure
//!
//! - `path` - lexical path normalization and relative/remote path derivation
//! - `filter` - sync-folder containment and exclude-pattern matching
//! - `request` - the per-save `TransferRequest`
//! - `ports` - `CommandRunner`, `CommandLine`, `Platform`

pub mod filter;
pub mod path;
pub mod ports;
pub mod request;

pub use filter::{is_eligible, is_excluded, is_in_sync_folders, Eligibility, PathFilter};
pub use ports::{CommandLine, CommandOutput, CommandRunner, Platform};
pub use request::TransferRequest;
