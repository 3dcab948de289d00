//! Name-based filtering: which files match, which directories get pruned

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

use super::config::{MatchMode, WalkConfig};
use super::utils::contains_bytes;

/// Patterns tested against a file's base name.
///
/// An empty set matches every name. Otherwise a name matches when any
/// pattern passes the mode's test; comparison is on raw OS bytes and
/// case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<OsString>,
    mode: MatchMode,
}

impl PatternSet {
    pub fn new(patterns: Vec<OsString>, mode: MatchMode) -> Self {
        Self { patterns, mode }
    }

    pub fn matches(&self, name: &OsStr) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        let name = name.as_encoded_bytes();
        self.patterns.iter().any(|pat| {
            let pat = pat.as_encoded_bytes();
            match self.mode {
                MatchMode::Contains => contains_bytes(name, pat),
                MatchMode::Suffix => name.ends_with(pat),
            }
        })
    }
}

/// Why a directory was not descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneReason {
    Hidden,
    Skipped,
}

/// Directory admission: hidden directories and explicitly skipped names.
#[derive(Debug, Clone, Default)]
pub struct DirFilter {
    skip_dirs: BTreeSet<String>,
}

impl DirFilter {
    pub fn new(skip_dirs: BTreeSet<String>) -> Self {
        Self { skip_dirs }
    }

    /// Decide whether a directory is pruned. The root is exempt from the
    /// hidden-name rule but not from the skip list.
    pub fn prune_reason(&self, name: &OsStr, is_root: bool) -> Option<PruneReason> {
        if !is_root && name.as_encoded_bytes().starts_with(b".") {
            return Some(PruneReason::Hidden);
        }
        if self
            .skip_dirs
            .iter()
            .any(|skip| skip.as_bytes() == name.as_encoded_bytes())
        {
            return Some(PruneReason::Skipped);
        }
        None
    }
}

impl From<&WalkConfig> for PatternSet {
    fn from(config: &WalkConfig) -> Self {
        Self::new(config.patterns.clone(), config.match_mode)
    }
}

impl From<&WalkConfig> for DirFilter {
    fn from(config: &WalkConfig) -> Self {
        Self::new(config.skip_dirs.clone())
    }
}
