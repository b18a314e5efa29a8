//! Error types for the facelet_match library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for facelet_match operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Error types for confidence-table loading and color matching
#[derive(Error, Debug)]
pub enum MatchError {
    /// Confidence table file could not be opened or read
    #[error("Failed to read confidence table {}: {source}", path.display())]
    TableIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Confidence table has the wrong size
    #[error("Confidence table is {actual} bytes (expected {expected})")]
    TableSize { actual: u64, expected: u64 },

    /// In-memory score data does not cover the full BGR space
    #[error("Confidence score array has {actual} entries (expected {expected})")]
    ScoreCount { actual: usize, expected: usize },

    /// Best-first search exhausted all colors or the retry budget
    ///
    /// The scan is inconsistent with every physically realizable cube; the
    /// caller should retry with a fresh set of samples.
    #[error("Scan rejected: no consistent color assignment at facelet {facelet}")]
    ScanRejected { facelet: usize },

    /// A face string could not be parsed back into a cube
    #[error("Invalid face string: {reason}")]
    InvalidFaceString { reason: String },
}

impl MatchError {
    /// Create a table I/O error with context
    pub fn table_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TableIo {
            path: path.into(),
            source,
        }
    }

    /// Create a face-string parse error
    pub fn invalid_face_string(reason: impl Into<String>) -> Self {
        Self::InvalidFaceString {
            reason: reason.into(),
        }
    }

    /// Check if this error indicates a bad scan rather than a broken setup
    ///
    /// Scan rejections are recoverable by rescanning; table errors are fatal
    /// for the matcher's lifetime.
    pub fn is_scan_error(&self) -> bool {
        matches!(self, MatchError::ScanRejected { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MatchError::TableIo { .. } | MatchError::TableSize { .. } | MatchError::ScoreCount { .. } => {
                "Could not load the color confidence table. Please check the table file.".to_string()
            }
            MatchError::ScanRejected { .. } => {
                "The scanned colors do not form a valid cube. Please rescan.".to_string()
            }
            MatchError::InvalidFaceString { .. } => {
                "The face string is not a valid cube description.".to_string()
            }
        }
    }
}
