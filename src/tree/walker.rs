//! TreeWalker - depth-first pre-order walk with pruning and name matching

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::error::{Result, WalkError};
use crate::output::MatchSink;

use super::config::{ErrorPolicy, WalkConfig};
use super::filter::{DirFilter, PatternSet};
use super::traversal::{Entry, Visit, read_sorted_names, stat_child, stat_root};

/// Counters for a finished walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Non-directory entries visited.
    pub files: usize,
    /// Files written to the sink.
    pub matched: usize,
    /// Directories descended into, root included.
    pub dirs: usize,
    /// Directories not descended into.
    pub pruned: usize,
    /// Entries skipped because they couldn't be stat'ed or listed.
    pub errors: usize,
}

/// Walks a single root. Children are visited in byte order of their names,
/// so two walks over an unchanged tree yield the same sequence.
pub struct TreeWalker {
    config: WalkConfig,
    patterns: PatternSet,
    dirs: DirFilter,
}

impl TreeWalker {
    pub fn new(config: WalkConfig) -> Self {
        let patterns = PatternSet::from(&config);
        let dirs = DirFilter::from(&config);
        Self {
            config,
            patterns,
            dirs,
        }
    }

    /// Walk the tree, writing every matching file path to `sink`.
    pub fn walk<S: MatchSink + ?Sized>(&self, sink: &mut S) -> Result<WalkSummary> {
        let mut matched = 0;

        let mut summary = self.visit(|entry| {
            if entry.is_dir() {
                if let Some(reason) = self.dirs.prune_reason(entry.name(), entry.is_root()) {
                    debug!(path = %entry.path().display(), ?reason, "pruning directory");
                    return Ok(Visit::Prune);
                }
                return Ok(Visit::Descend);
            }

            if self.patterns.matches(entry.name()) {
                sink.emit(entry.path()).map_err(WalkError::Output)?;
                matched += 1;
            }
            Ok(Visit::Descend)
        })?;

        sink.finish().map_err(WalkError::Output)?;
        summary.matched = matched;

        debug!(
            files = summary.files,
            matched = summary.matched,
            dirs = summary.dirs,
            pruned = summary.pruned,
            errors = summary.errors,
            "walk complete"
        );
        Ok(summary)
    }

    /// Call `visitor` once per reachable entry, depth-first pre-order.
    ///
    /// For directories the visitor decides whether to descend. A root that
    /// can't be stat'ed or listed fails the walk; errors below the root
    /// follow the configured [`ErrorPolicy`]. `matched` is left at zero.
    pub fn visit<F>(&self, mut visitor: F) -> Result<WalkSummary>
    where
        F: FnMut(&Entry) -> Result<Visit>,
    {
        let root = self.config.root();
        let entry = stat_root(root).map_err(|source| WalkError::Root {
            path: root.to_path_buf(),
            source,
        })?;

        let mut summary = WalkSummary::default();
        self.visit_entry(&entry, &mut visitor, &mut summary)?;
        Ok(summary)
    }

    fn visit_entry<F>(&self, entry: &Entry, visitor: &mut F, summary: &mut WalkSummary) -> Result<()>
    where
        F: FnMut(&Entry) -> Result<Visit>,
    {
        trace!(path = %entry.path().display(), is_dir = entry.is_dir(), "visit");
        let decision = visitor(entry)?;

        if !entry.is_dir() {
            summary.files += 1;
            return Ok(());
        }
        if decision == Visit::Prune {
            summary.pruned += 1;
            return Ok(());
        }
        summary.dirs += 1;

        let names = match read_sorted_names(entry.path()) {
            Ok(names) => names,
            Err(source) => {
                return self.entry_error(entry.is_root(), entry.path().to_path_buf(), source, summary);
            }
        };

        for name in names {
            self.visit_child(entry, name, visitor, summary)?;
        }
        Ok(())
    }

    fn visit_child<F>(
        &self,
        parent: &Entry,
        name: OsString,
        visitor: &mut F,
        summary: &mut WalkSummary,
    ) -> Result<()>
    where
        F: FnMut(&Entry) -> Result<Visit>,
    {
        match stat_child(parent, name) {
            (_, Ok(child)) => self.visit_entry(&child, visitor, summary),
            (path, Err(source)) => self.entry_error(false, path, source, summary),
        }
    }

    fn entry_error(
        &self,
        is_root: bool,
        path: PathBuf,
        source: io::Error,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        if is_root {
            return Err(WalkError::Root { path, source });
        }
        match self.config.error_policy {
            ErrorPolicy::Abort => Err(WalkError::Entry { path, source }),
            ErrorPolicy::Skip => {
                warn!(path = %path.display(), error = %source, "skipping unreadable entry");
                summary.errors += 1;
                Ok(())
            }
        }
    }
}
