//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger engine.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Engine-level error.
///
/// Keep this focused on the deterministic failure taxonomy of the ledger
/// (validation, missing rows, lost-update conflicts). Store transport
/// failures surface as `StoreUnavailable`; the engine never retries them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Malformed or out-of-range input, rejected before any store mutation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Referenced tag absent from the expected collection.
    #[error("not found: {0}")]
    NotFound(String),

    /// Optimistic-concurrency check failed; retry with fresh data.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store failed; fatal for this operation.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// A compensating undo failed after a partial cross-collection
    /// transition; the one-collection invariant may be violated for `tag`
    /// until manually repaired.
    #[error("reconciliation required for {tag}: {detail}")]
    ReconciliationRequired { tag: String, detail: String },
}

impl LedgerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn reconciliation(tag: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ReconciliationRequired {
            tag: tag.into(),
            detail: detail.into(),
        }
    }
}
