//! Error types for the analysis engine.
//!
//! Only [`InputError`] changes the engine's return shape (it collapses the
//! result list to a single error result). Malformed catalogue patterns are
//! consumed per-pattern inside the matcher loop and never surface as errors.

use thiserror::Error;

/// User-correctable input problems.
///
/// The display text doubles as the user-facing Portuguese message carried by
/// the synthetic error result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The contract text was empty (or whitespace only).
    #[error("Texto do contrato inválido ou vazio.")]
    EmptyText,
}
