//! Error types for walk

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a tree walk.
#[derive(Error, Debug)]
pub enum WalkError {
    /// The starting path could not be stat'ed or listed.
    #[error("{}: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A nested entry could not be stat'ed or listed.
    #[error("{}: {source}", .path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a matched path to the output failed.
    #[error("error writing output: {0}")]
    Output(#[source] io::Error),
}

impl WalkError {
    /// True when the output side went away (e.g. `walk ... | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, WalkError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, WalkError>;
