//! Error types for cover file loading, driver parameters and result output

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for everything outside the solver core
#[derive(Debug)]
pub enum DlxError {
    /// File system operation failed
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Cover file content is malformed
    InvalidInput {
        /// 1-based index of the offending whitespace-separated token
        token: usize,
        /// Explanation of what was expected
        reason: String,
    },

    /// Driver parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A reported solution is not an exact cover
    ///
    /// Occurs when a solution:
    /// - Covers some column more than once
    /// - Leaves a mandatory column uncovered
    /// - Names a row the matrix does not contain
    InvalidCover {
        /// Description of the violation
        reason: String,
    },

    /// Writing results failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DlxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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
            Self::InvalidInput { token, reason } => {
                write!(f, "Invalid cover file at token {token}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCover { reason } => {
                write!(f, "Invalid cover: {reason}")
            }
            Self::Output { source } => {
                write!(f, "Failed to write results: {source}")
            }
        }
    }
}

impl std::error::Error for DlxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible operations
pub type Result<T> = std::result::Result<T, DlxError>;

/// Attaches the file and operation to I/O failures
pub trait WithContext<T> {
    /// Report a failure as a file system error on `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithContext<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| DlxError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for DlxError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DlxError {
    DlxError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed input error
pub fn invalid_input(token: usize, reason: &impl ToString) -> DlxError {
    DlxError::InvalidInput {
        token,
        reason: reason.to_string(),
    }
}

/// Create an invalid cover error
pub fn invalid_cover(reason: &impl ToString) -> DlxError {
    DlxError::InvalidCover {
        reason: reason.to_string(),
    }
}
