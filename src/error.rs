//! Error types for grid access, simulation, and file codecs

use std::io;
use std::path::PathBuf;

/// Convenience alias for results produced by the core grid and codec APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by grid operations and the file codecs.
///
/// Every error is raised at the point of detection and propagates to the
/// caller unchanged. Out of range accesses are never clamped or wrapped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A coordinate access or crop/merge placement fell outside the grid.
    #[error("coordinate ({x}, {y}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A crop window is degenerate: its start lies beyond its end.
    #[error("invalid window ({x0}, {y0})..({x1}, {y1}): start lies beyond end")]
    InvalidRange {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    },

    /// A file could not be opened for the requested read or write.
    #[error("cannot open {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Ascii content did not match the expected header/body grammar.
    #[error("parse error: {reason}")]
    Parse { reason: String },

    /// A grid is too large for the fixed-capacity binary format.
    #[error("grid of {cells} cells exceeds the 64-cell binary file capacity")]
    Capacity { cells: u64 },

    /// A binary file is shorter than its header declares.
    #[error("file truncated: expected at least {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
}
