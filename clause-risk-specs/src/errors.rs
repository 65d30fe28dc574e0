//! Error types for the spec system.

use thiserror::Error;

/// Errors that can occur while loading or interpreting fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error reading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// Error parsing a fixture file as TOML.
    #[error("failed to parse fixture: {path}: {message}")]
    Parse { path: String, message: String },

    /// An expectation referenced an unknown risk tier name.
    #[error("unknown risk tier {value:?} (expected Low, Medium or High)")]
    UnknownTier { value: String },
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
