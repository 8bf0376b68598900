use std::io;

use thiserror::Error;

use crate::Rectangle;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot derive a bounding rectangle from an empty point set")]
    EmptyInput,

    /// Splitting would not reduce the point count of a node.
    #[error("degenerate geometry: {points} points cannot be split at depth {depth}")]
    DegenerateGeometry { depth: usize, points: usize },

    #[error("invalid rectangle: bottom-left exceeds top-right in {0:?}")]
    InvalidRectangle(Rectangle),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
