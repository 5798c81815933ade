//! Configuration module for wsmirror
//!
//! Resolution order:
//! 1. `--config PATH`
//! 2. `$WSMIRROR_CONFIG`
//! 3. `<config dir>/wsmirror/config.toml`
//!
//! `WSMIRROR_*` environment variables override individual keys after loading.

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    load_effective, load_with_warnings, parse_with_warnings, resolve_config_path, with_env_overrides,
    write_template, ConfigWarning, CONFIG_ENV,
};
pub use types::{Auth, MirrorConfig, TransferSettings};
