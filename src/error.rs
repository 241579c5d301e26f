use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tree building.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can abort a tree build.
///
/// There is deliberately no error case for rendering: rendering a well-formed
/// tree cannot fail.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The build root does not resolve to a directory.
    #[error("{}: Not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// I/O error from the filesystem (permission denied, path vanished
    /// mid-walk, ...). Aborts the whole build; no partial tree is produced.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
