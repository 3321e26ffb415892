//! Error types for disk scheduling.
//!
//! The engine has a single failure mode: the caller handed it input that
//! cannot be simulated. Strategies themselves never fail once validation
//! has passed.

use thiserror::Error;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Categories of invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidInputKind {
    /// Disk size is zero or negative.
    NonPositiveDiskSize,
    /// Disk size exceeds [`crate::validation::MAX_DISK_SIZE`].
    DiskTooLarge,
    /// The request queue has no entries.
    EmptyQueue,
    /// The request queue exceeds [`crate::validation::MAX_REQUESTS`].
    QueueTooLong,
    /// The initial head position lies outside `[0, disk_size - 1]`.
    HeadOutOfRange,
    /// A requested track lies outside `[0, disk_size - 1]`.
    TrackOutOfRange,
    /// The algorithm name is not recognized.
    UnknownAlgorithm,
    /// The direction name is not recognized.
    UnknownDirection,
    /// The comparison was configured with no algorithms.
    NoAlgorithms,
}

/// Errors surfaced at the engine boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The input cannot be simulated. No partial result is produced.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error category.
        kind: InvalidInputKind,
        /// Human-readable description.
        message: String,
    },
}

impl ScheduleError {
    /// Create an invalid input error.
    pub fn invalid(kind: InvalidInputKind, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            kind,
            message: message.into(),
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> InvalidInputKind {
        match self {
            Self::InvalidInput { kind, .. } => *kind,
        }
    }

    /// The human-readable reason.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput { message, .. } => message,
        }
    }
}
