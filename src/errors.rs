//! Error types for the cartesian crate
//!
//! Every failure raised by the vector arithmetic, the rotator and the
//! recorder is one of the variants below. Nothing is recovered internally.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cartesian operations
#[derive(Error, Debug)]
pub enum SpaceError {
    /// A division, scalar-by-vector division or normalization hit an exact 0.0 divisor
    #[error("Attempted divide by zero: {0}")]
    DivideByZero(String),

    /// The recorder export file could not be opened or written
    #[error("Recorder I/O error on {path:?}: {source}")]
    RecorderIo {
        /// The destination path of the export
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

impl SpaceError {
    /// True for the `DivideByZero` variant
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, SpaceError::DivideByZero(_))
    }
}

/// Result type for cartesian operations
pub type Result<T> = std::result::Result<T, SpaceError>;

/// Helper function to build a `DivideByZero` error naming the operation
pub(crate) fn divide_by_zero(operation: &str) -> SpaceError {
    SpaceError::DivideByZero(format!("{} has a zero divisor", operation))
}

/// Helper function to convert a std::io::Error into a recorder error
pub(crate) fn recorder_io(path: impl Into<PathBuf>, err: std::io::Error) -> SpaceError {
    SpaceError::RecorderIo {
        path: path.into(),
        source: err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_message() {
        let err = divide_by_zero("Space / f64");
        assert!(err.is_divide_by_zero());
        assert_eq!(
            err.to_string(),
            "Attempted divide by zero: Space / f64 has a zero divisor"
        );
    }

    #[test]
    fn test_recorder_io_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = recorder_io("/missing/trace.dat", io);
        assert!(!err.is_divide_by_zero());

        match err {
            SpaceError::RecorderIo { path, source } => {
                assert_eq!(path, PathBuf::from("/missing/trace.dat"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected RecorderIo, got {:?}", other),
        }
    }
}
