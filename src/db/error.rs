//! Statistics store error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong in the statistics store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatsErrorKind {
    /// The database could not be opened, migrated or read.
    #[display("storage unavailable")]
    StorageUnavailable,
    /// A record could not be written.
    #[display("write failed")]
    WriteFailed,
}

/// Statistics store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Stats error ({}): {} at {}:{}", kind, message, file, line)]
pub struct StatsError {
    /// Error category.
    pub kind: StatsErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StatsError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: StatsErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for [`StatsErrorKind::StorageUnavailable`].
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatsErrorKind::StorageUnavailable, message)
    }

    /// Shorthand for [`StatsErrorKind::WriteFailed`].
    #[track_caller]
    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::new(StatsErrorKind::WriteFailed, message)
    }
}
