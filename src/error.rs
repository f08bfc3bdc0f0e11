//! Error types for the tracking engine and its adapters.

use thiserror::Error;

/// Errors surfaced across ingest, the engine, and the CLI.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// JSON missing a required field, an unparseable timestamp, or a
    /// detection with non-positive width/height.
    #[error("malformed input at {0}")]
    MalformedInput(String),

    /// Input unreadable, or an output/visualization directory not creatable.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// `serde_json` failed to parse or produce the input/output stream.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The assignment solver returned a non-permutation, or a non-finite
    /// cost reached the solver. Indicates a programming error: fatal, never
    /// retried, and never partially applied.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl TrackerError {
    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        Self::MalformedInput(detail.to_string())
    }

    pub fn invariant(detail: impl std::fmt::Display) -> Self {
        Self::InvariantViolation(detail.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
