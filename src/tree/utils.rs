//! Shared utility functions for tree walking

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Lexically clean a path: drop `.` components and repeated separators,
/// fold `name/..` pairs, and drop `..` directly under the root. An empty
/// result becomes `.`. The filesystem is never consulted.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Base name of a path, falling back to the whole path for `.`, `..` and `/`.
pub fn base_name(path: &Path) -> &OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}

/// Join a child name onto its parent. A `.` parent is dropped so children of
/// the current directory print as `a.txt` rather than `./a.txt`.
pub fn join_child(parent: &Path, name: &OsStr) -> PathBuf {
    if parent == Path::new(".") {
        PathBuf::from(name)
    } else {
        parent.join(name)
    }
}

/// Byte-exact substring test. An empty needle is always contained.
pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}
