//! walk - print files under a directory whose names contain (or end with) a pattern

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, WalkError};
pub use output::{MatchSink, PathPrinter, report_error};
pub use tree::{
    Entry, ErrorPolicy, MatchMode, PatternSet, TreeWalker, Visit, WalkConfig, WalkSummary,
};
