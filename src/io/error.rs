//! Error types for solver operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::board::InvalidBoardError;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Failed to read a puzzle file from the filesystem
    PuzzleLoad {
        /// Path to the puzzle file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Puzzle text does not describe a well-formed layout
    PuzzleFormat {
        /// 1-based line number where parsing failed
        line: usize,
        /// Description of what is wrong with the text
        reason: String,
    },

    /// Piece list violates a board structural invariant
    Board {
        /// Underlying board validation error
        source: InvalidBoardError,
    },

    /// General filesystem operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PuzzleLoad { path, source } => {
                write!(f, "Failed to read puzzle '{}': {source}", path.display())
            }
            Self::PuzzleFormat { line, reason } => {
                write!(f, "Invalid puzzle text at line {line}: {reason}")
            }
            Self::Board { source } => {
                write!(f, "Invalid board: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PuzzleLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::Board { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<InvalidBoardError> for SolverError {
    fn from(source: InvalidBoardError) -> Self {
        Self::Board { source }
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_conversion() {
        let source = InvalidBoardError::EmptyCellCount {
            found: 3,
            expected: 2,
        };
        let err = SolverError::from(source.clone());

        match &err {
            SolverError::Board { source: inner } => assert_eq!(inner, &source),
            _ => unreachable!("Expected Board error variant"),
        }
        assert!(err.to_string().contains("expected 2 empty cells, found 3"));
    }
}
