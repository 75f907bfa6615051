//! The record store contract.
//!
//! The engine consumes the external tabular backend exclusively through this
//! trait. The backend has no native transactions and no row-level locking;
//! every keyed mutation in the domain layer therefore re-reads before it
//! writes (see the guard in `tagledger-core`).

use std::sync::Arc;

use crate::error::StoreError;
use crate::record::{Collection, RawRecord};

/// Append/read/delete/replace operations over the three named collections.
///
/// Implementations must:
/// - preserve append order within a collection (`read_all` returns rows in
///   stable insertion order)
/// - enforce nothing about key uniqueness (that is the engine's job)
/// - complete or fail within a bounded request timeout
pub trait RecordStore: Send + Sync {
    /// Snapshot of every row in `collection`, in insertion order.
    fn read_all(&self, collection: Collection) -> Result<Vec<RawRecord>, StoreError>;

    /// Add one row at the end of `collection`.
    fn append(&self, collection: Collection, record: RawRecord) -> Result<(), StoreError>;

    /// Look up one row by its key field. `Ok(None)` when absent.
    ///
    /// Fails with [`StoreError::Unkeyed`] on a collection without a key
    /// field.
    fn find_by_key(&self, collection: Collection, key: &str)
    -> Result<Option<RawRecord>, StoreError>;

    /// Delete one row by its key field. Fails with [`StoreError::NotFound`]
    /// when absent.
    fn delete_by_key(&self, collection: Collection, key: &str) -> Result<(), StoreError>;

    /// Atomically-as-possible clear and rewrite a whole collection.
    ///
    /// Used only by the flag-sync paths, because the backend has no per-row
    /// update.
    fn replace_all(&self, collection: Collection, records: Vec<RawRecord>)
    -> Result<(), StoreError>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn read_all(&self, collection: Collection) -> Result<Vec<RawRecord>, StoreError> {
        (**self).read_all(collection)
    }

    fn append(&self, collection: Collection, record: RawRecord) -> Result<(), StoreError> {
        (**self).append(collection, record)
    }

    fn find_by_key(
        &self,
        collection: Collection,
        key: &str,
    ) -> Result<Option<RawRecord>, StoreError> {
        (**self).find_by_key(collection, key)
    }

    fn delete_by_key(&self, collection: Collection, key: &str) -> Result<(), StoreError> {
        (**self).delete_by_key(collection, key)
    }

    fn replace_all(
        &self,
        collection: Collection,
        records: Vec<RawRecord>,
    ) -> Result<(), StoreError> {
        (**self).replace_all(collection, records)
    }
}
