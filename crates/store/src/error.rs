//! Store operation errors.
//!
//! These are transport/shape failures, as opposed to the domain taxonomy in
//! `tagledger-core`. The `From` impl at the bottom is the single place where
//! store failures enter the domain error model.

use thiserror::Error;

use tagledger_core::LedgerError;

use crate::record::Collection;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Keyed lookup/delete found no row.
    #[error("no record with key '{key}' in {collection}")]
    NotFound { collection: Collection, key: String },

    /// Keyed operation attempted on a collection without a key field.
    #[error("collection {0} has no key field")]
    Unkeyed(Collection),

    /// A stored row failed boundary validation (missing/mistyped field).
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// The backend could not be reached or misbehaved.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { collection, key } => {
                LedgerError::not_found(format!("'{key}' absent from {collection}"))
            }
            // Corrupt rows and unkeyed misuse are store-side faults as far as
            // the caller is concerned: fatal for this operation, no retry.
            other => LedgerError::store_unavailable(other.to_string()),
        }
    }
}
