//! Sync eligibility for saved files
//!
//! A file qualifies for mirroring when it sits inside one of the configured
//! sync folders and no exclude pattern vetoes it. Exclude patterns follow
//! `fnmatch` rules: `*` and `?` cross directory separators, there are no
//! backslash escapes, and case folding applies on Windows only. Each pattern is
//! tried against the file name, then the full path, and finally (when it has
//! no wildcard characters) as a plain substring of the full path.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use super::path::{absolutize, is_within};

const WILDCARDS: &[char] = &['*', '?', '['];

/// Why a path was (or was not) accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    OutsideSyncFolders,
    Excluded { pattern: String },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    /// Short reason for skip messages
    pub fn reason(&self) -> String {
        match self {
            Eligibility::Eligible => "eligible".to_string(),
            Eligibility::OutsideSyncFolders => "not in sync folders".to_string(),
            Eligibility::Excluded { pattern } => format!("excluded by pattern '{}'", pattern),
        }
    }
}

fn compile(pattern: &str) -> Option<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(false)
        .backslash_escape(false)
        .case_insensitive(cfg!(windows))
        .build()
        .ok()
        .map(|g| g.compile_matcher())
}

#[derive(Debug, Clone)]
struct ExcludePattern {
    raw: String,
    glob: Option<GlobMatcher>,
    literal: bool,
}

impl ExcludePattern {
    fn new(raw: &str) -> Self {
        // A pattern globset rejects (such as an unclosed `[`) matches itself literally.
        let glob = compile(raw).or_else(|| compile(&globset::escape(raw)));

        Self {
            raw: raw.to_string(),
            glob,
            literal: !raw.contains(WILDCARDS),
        }
    }

    fn matches(&self, file_name: Option<&Path>, full_path: &Path) -> bool {
        if let Some(glob) = &self.glob {
            if file_name.is_some_and(|name| glob.is_match(name)) {
                return true;
            }
            if glob.is_match(full_path) {
                return true;
            }
        }
        self.literal && full_path.to_string_lossy().contains(self.raw.as_str())
    }
}

/// Compiled sync folders and exclude patterns.
#[derive(Debug, Clone)]
pub struct PathFilter {
    folders: Vec<PathBuf>,
    excludes: Vec<ExcludePattern>,
}

impl PathFilter {
    /// Build a filter; folders are made absolute, blank patterns are dropped.
    pub fn new(folders: &[PathBuf], exclude_patterns: &[String]) -> Self {
        Self {
            folders: folders.iter().map(|f| absolutize(f)).collect(),
            excludes: exclude_patterns
                .iter()
                .filter(|p| !p.trim().is_empty())
                .map(|p| ExcludePattern::new(p))
                .collect(),
        }
    }

    pub fn from_config(config: &crate::config::MirrorConfig) -> Self {
        Self::new(&config.folders_to_sync, &config.exclude_patterns)
    }

    pub fn is_in_sync_folders(&self, file: &Path) -> bool {
        let file = absolutize(file);
        self.folders.iter().any(|folder| is_within(&file, folder))
    }

    /// The first exclude pattern that vetoes `file`, if any
    pub fn excluded_by(&self, file: &Path) -> Option<&str> {
        let full_path = absolutize(file);
        let file_name = full_path.file_name().map(Path::new);

        self.excludes
            .iter()
            .find(|p| p.matches(file_name, &full_path))
            .map(|p| p.raw.as_str())
    }

    pub fn evaluate(&self, file: &Path) -> Eligibility {
        if !self.is_in_sync_folders(file) {
            return Eligibility::OutsideSyncFolders;
        }
        match self.excluded_by(file) {
            Some(pattern) => Eligibility::Excluded {
                pattern: pattern.to_string(),
            },
            None => Eligibility::Eligible,
        }
    }

    pub fn is_eligible(&self, file: &Path) -> bool {
        self.evaluate(file).is_eligible()
    }
}

/// One-shot form of [`PathFilter::is_eligible`].
pub fn is_eligible(file: &Path, sync_folders: &[PathBuf], exclude_patterns: &[String]) -> bool {
    PathFilter::new(sync_folders, exclude_patterns).is_eligible(file)
}

pub fn is_in_sync_folders(file: &Path, sync_folders: &[PathBuf]) -> bool {
    PathFilter::new(sync_folders, &[]).is_in_sync_folders(file)
}

pub fn is_excluded(file: &Path, exclude_patterns: &[String]) -> bool {
    PathFilter::new(&[], exclude_patterns).excluded_by(file).is_some()
}
