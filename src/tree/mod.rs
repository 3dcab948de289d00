//! Directory tree walking logic
//!
//! `TreeWalker` visits every entry under a root depth-first, pruning hidden
//! and skipped directories, and hands each file whose base name matches the
//! configured patterns to a [`MatchSink`](crate::output::MatchSink).

mod config;
mod filter;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::{ErrorPolicy, MatchMode, WalkConfig};
pub use filter::{DirFilter, PatternSet, PruneReason};
pub use traversal::{Entry, Visit};
pub use utils::clean_path;
pub use walker::{TreeWalker, WalkSummary};
