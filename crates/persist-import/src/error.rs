//! Import pipeline error types.

use persist_core::enums::ImportLevel;
use persist_core::errors::CoreError;
use persist_db::error::{BackendDiagnostic, DatabaseError};
use thiserror::Error;

use crate::guard::GuardError;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The raw file was rejected before or right after parsing.
    #[error(transparent)]
    Guard(#[from] GuardError),

    /// The file is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document failed validation.
    #[error("Validation failed: {}", .0.join("; "))]
    Invalid(Vec<String>),

    /// A storage call failed outside the per-level policy (probe, wipe).
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// A write failed at a level whose policy is `Abort`.
    #[error("Failed to import {level} {label}: {diagnostic}")]
    Aborted {
        level: ImportLevel,
        label: String,
        diagnostic: BackendDiagnostic,
    },

    /// The wipe confirmation text did not match.
    #[error("Confirmation text does not match; nothing was deleted")]
    ConfirmationMismatch,

    #[error(transparent)]
    Core(#[from] CoreError),
}
