use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreeviewError {
    #[error("Directory '{0}' does not exist!")]
    NotFound(PathBuf),
    #[error("'{0}' is not a directory!")]
    NotADirectory(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}
impl TreeviewError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeviewError::Io {
            path: path.into(),
            source,
        }
    }
    /// Whether the error was raised by input validation, before anything was written.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TreeviewError::NotFound(_) | TreeviewError::NotADirectory(_)
        )
    }
}
