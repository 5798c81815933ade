//! Infrastructure Layer
//!
//! Talks to the operating system on behalf of the domain:
//!
//! - `scp` - builds the secure-copy (optionally sshpass-wrapped) command line
//! - `process` - `ProcessRunner`, the `CommandRunner` that spawns children and
//!   enforces the kill deadline

pub mod process;
pub mod scp;

pub use process::ProcessRunner;
pub use scp::{ScpCommand, SCP_PROGRAM, SSHPASS_PROGRAM};
