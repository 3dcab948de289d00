//! Configuration types for tree walkers

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::PathBuf;

use super::utils::clean_path;

/// How patterns are tested against a file's base name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Pattern may appear anywhere in the name.
    #[default]
    Contains,
    /// Name must end with the pattern (`-x`).
    Suffix,
}

/// What to do when a nested entry can't be stat'ed or listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log a warning and keep going with the next sibling.
    #[default]
    Skip,
    /// Stop the walk and return the error.
    Abort,
}

/// Configuration for a single walk. Fixed for the lifetime of the walk.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    root: PathBuf,
    /// Compared as raw bytes, so they need not be valid UTF-8.
    pub patterns: Vec<OsString>,
    pub match_mode: MatchMode,
    /// Directory base names pruned by exact match.
    pub skip_dirs: BTreeSet<String>,
    pub error_policy: ErrorPolicy,
}

impl WalkConfig {
    /// Create a config rooted at `root`. The root is cleaned lexically here,
    /// once, and never re-resolved afterwards.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: clean_path(&root.into()),
            patterns: Vec::new(),
            match_mode: MatchMode::default(),
            skip_dirs: BTreeSet::new(),
            error_policy: ErrorPolicy::default(),
        }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn with_skip_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
