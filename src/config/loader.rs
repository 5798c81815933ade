//! Configuration loading, location and environment overrides

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MirrorError, MirrorResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::MirrorConfig;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "WSMIRROR_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MirrorResult<(MirrorConfig, Vec<ConfigWarning>)> {
    if !path.exists() {
        return Err(MirrorError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    let (config, warnings) = parse_with_warnings(&content, path)?;
    Ok((expand_home(config, dirs::home_dir().as_deref()), warnings))
}

/// Load the file, then apply `WSMIRROR_*` overrides on top.
pub fn load_effective(path: &Path) -> MirrorResult<(MirrorConfig, Vec<ConfigWarning>)> {
    let (config, warnings) = load_with_warnings(path)?;
    Ok((with_env_overrides(config), warnings))
}

/// Parse TOML content; `path` is only used for messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> MirrorResult<(MirrorConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: MirrorConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MirrorError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file: CLI flag, then `$WSMIRROR_CONFIG`, then the
/// platform config directory.
pub fn resolve_config_path(cli: Option<&Path>) -> PathBuf {
    resolve_config_path_with(cli, |k| std::env::var(k).ok(), dirs::config_dir())
}

pub(crate) fn resolve_config_path_with(
    cli: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
    config_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = cli {
        return path.to_path_buf();
    }
    if let Some(path) = get_env(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    match config_dir {
        Some(dir) => dir.join("wsmirror").join("config.toml"),
        None => PathBuf::from(".wsmirror.toml"),
    }
}

/// Apply environment variable overrides (WSMIRROR_* prefix)
pub fn with_env_overrides(config: MirrorConfig) -> MirrorConfig {
    with_env_overrides_from(config, |k| std::env::var(k).ok(), &mut std::io::stderr())
}

pub(crate) fn with_env_overrides_from<W: Write>(
    mut config: MirrorConfig,
    get_env: impl Fn(&str) -> Option<String>,
    writer: &mut W,
) -> MirrorConfig {
    if let Some(value) = get_env("WSMIRROR_ENABLED") {
        let validator = EnvVarValidator::new(
            "WSMIRROR_ENABLED",
            &["true", "false", "1", "0", "yes", "no", "on", "off"],
        );
        config.enabled =
            validator.parse_with_writer(&value, parse_bool, config.enabled, writer);
    }

    if let Some(value) = get_env("WSMIRROR_TIMEOUT") {
        let validator = EnvVarValidator::new("WSMIRROR_TIMEOUT", &["<positive seconds>"]);
        config.timeout = validator.parse_with_writer(
            &value,
            |v| {
                v.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|t| t.is_finite() && *t > 0.0)
                    .map(Some)
            },
            config.timeout,
            writer,
        );
    }

    if let Some(host) = get_env("WSMIRROR_REMOTE_HOST").filter(|v| !v.is_empty()) {
        config.remote_host = Some(host);
    }

    if let Some(user) = get_env("WSMIRROR_REMOTE_USER").filter(|v| !v.is_empty()) {
        config.remote_user = Some(user);
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Expand a leading `~` in every path-valued key.
pub(crate) fn expand_home(mut config: MirrorConfig, home: Option<&Path>) -> MirrorConfig {
    let Some(home) = home else {
        return config;
    };

    let expand = |p: &mut PathBuf| {
        if let Some(expanded) = expand_tilde(p, home) {
            *p = expanded;
        }
    };

    if let Some(p) = config.local_base_dir.as_mut() {
        expand(p);
    }
    if let Some(p) = config.key_file.as_mut() {
        expand(p);
    }
    if let Some(p) = config.password_file.as_mut() {
        expand(p);
    }
    for folder in &mut config.folders_to_sync {
        expand(folder);
    }

    config
}

fn expand_tilde(path: &Path, home: &Path) -> Option<PathBuf> {
    let s = path.to_str()?;
    if s == "~" {
        return Some(home.to_path_buf());
    }
    let rest = s.strip_prefix("~/").or_else(|| s.strip_prefix("~\\"))?;
    Some(home.join(rest))
}

/// Write the starter template; refuses to clobber unless `force`.
pub fn write_template(path: &Path, force: bool) -> MirrorResult<()> {
    if path.exists() && !force {
        return Err(MirrorError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", path.display()),
        )));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, MirrorConfig::template())?;
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "remote_user",
        "remote_host",
        "remote_base_dir",
        "local_base_dir",
        "timeout",
        "password_file",
        "key_file",
        "enabled",
        "folders_to_sync",
        "exclude_patterns",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
