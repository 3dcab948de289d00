//! Per-entry filesystem access used by the walker.
//!
//! Entries are stat'ed without following symlinks (the root excepted), so a
//! link to a directory is seen as a plain entry and never descended into.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::utils::{base_name, join_child};

/// A filesystem entry seen during a walk. Dropped once processed.
#[derive(Debug, Clone)]
pub struct Entry {
    path: PathBuf,
    name: OsString,
    is_dir: bool,
    depth: usize,
}

impl Entry {
    /// Path as built during the walk: the cleaned root joined with each name below it.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

/// Visitor decision for a directory. Ignored for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Descend,
    Prune,
}

/// Stat the walk root, following a symlink if the root itself is one.
pub fn stat_root(root: &Path) -> io::Result<Entry> {
    let meta = fs::metadata(root)?;
    Ok(Entry {
        path: root.to_path_buf(),
        name: base_name(root).to_os_string(),
        is_dir: meta.is_dir(),
        depth: 0,
    })
}

/// Stat a child of `parent` without following symlinks.
pub fn stat_child(parent: &Entry, name: OsString) -> (PathBuf, io::Result<Entry>) {
    let path = join_child(&parent.path, &name);
    let result = fs::symlink_metadata(&path).map(|meta| Entry {
        path: path.clone(),
        name,
        is_dir: meta.is_dir(),
        depth: parent.depth + 1,
    });
    (path, result)
}

/// Read a directory's child names, sorted by their bytes.
pub fn read_sorted_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
