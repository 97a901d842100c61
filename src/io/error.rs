//! Error types for configuration, persistence and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible game operations
///
/// The move engine itself never fails; these variants cover the glue around
/// it (configuration, the key/value store, board snapshots and the terminal).
#[derive(Debug)]
pub enum GameError {
    /// A configuration parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Explicit grid contents violate the board invariants
    ///
    /// Grids must be square, at least 2x2, and hold only zero or powers
    /// of two that are at least 2.
    InvalidGrid {
        /// Description of what's wrong with the grid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Persisted store could not be encoded or decoded
    StoreFormat {
        /// Path of the store file
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Failed to save a board snapshot image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Reading commands or writing the board to the terminal failed
    Terminal {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid grid: {reason}")
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
            Self::StoreFormat { path, source } => {
                write!(f, "Malformed store '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export snapshot to '{}': {source}",
                    path.display()
                )
            }
            Self::Terminal { source } => {
                write!(f, "Terminal I/O error: {source}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Terminal { source } => Some(source),
            Self::StoreFormat { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::InvalidGrid { .. } => None,
        }
    }
}

/// Convenience type alias for game results
pub type Result<T> = std::result::Result<T, GameError>;

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Terminal { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GameError {
    GameError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid grid error
pub fn invalid_grid(reason: &impl ToString) -> GameError {
    GameError::InvalidGrid {
        reason: reason.to_string(),
    }
}
