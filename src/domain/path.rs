//! Lexical path helpers
//!
//! Nothing here touches the file system: paths are made absolute against a
//! working directory and `.`/`..` are folded textually. Symlinks are left alone
//! so a watched folder and the paths reported under it always compare equal.

use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components without consulting the file system.
///
/// `..` directly under a root is dropped; leading `..` of a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Absolute, normalized form of `path` (relative paths resolve against the
/// current directory).
pub fn absolutize(path: &Path) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => absolutize_from(path, &cwd),
        Err(_) => normalize(path),
    }
}

pub fn absolutize_from(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&cwd.join(path))
    }
}

/// `true` if `path` equals `root` or lies below it, on component boundaries.
///
/// Paths on different roots (e.g. drive letters) are simply not nested.
pub fn is_within(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}

/// Express `path` relative to `base`, inserting `..` where `path` is outside.
///
/// Both inputs must already be absolute and normalized. Returns `None` when they
/// do not share a root.
pub fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let path_root = path_parts.iter().take_while(|c| !is_normal(c));
    let base_root = base_parts.iter().take_while(|c| !is_normal(c));
    if !path_root.eq(base_root) {
        return None;
    }

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[common..] {
        rel.push(part.as_os_str());
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Some(rel)
}

fn is_normal(component: &Component<'_>) -> bool {
    matches!(component, Component::Normal(_) | Component::ParentDir)
}

/// Join a local relative path onto a remote base using forward slashes.
pub fn to_remote_path(remote_base: &str, relative: &Path) -> String {
    let rel = relative.to_string_lossy().replace('\\', "/");
    let base = remote_base.trim_end_matches('/');
    format!("{}/{}", base, rel.trim_start_matches("./"))
}
