//! In-memory record store.
//!
//! Intended for tests/dev. Preserves insertion order per collection; not
//! optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::contract::RecordStore;
use crate::error::StoreError;
use crate::record::{Collection, RawRecord};

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    collections: RwLock<HashMap<Collection, Vec<RawRecord>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key_field(collection: Collection) -> Result<&'static str, StoreError> {
        collection
            .key_field()
            .ok_or(StoreError::Unkeyed(collection))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn read_all(&self, collection: Collection) -> Result<Vec<RawRecord>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    fn append(&self, collection: Collection, record: RawRecord) -> Result<(), StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        collections.entry(collection).or_default().push(record);
        Ok(())
    }

    fn find_by_key(
        &self,
        collection: Collection,
        key: &str,
    ) -> Result<Option<RawRecord>, StoreError> {
        let field = Self::key_field(collection)?;
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let Some(rows) = collections.get(&collection) else {
            return Ok(None);
        };
        for row in rows {
            if row.key(field)? == key {
                return Ok(Some(row.clone()));
            }
        }
        Ok(None)
    }

    fn delete_by_key(&self, collection: Collection, key: &str) -> Result<(), StoreError> {
        let field = Self::key_field(collection)?;
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let rows = collections.entry(collection).or_default();
        let mut index = None;
        for (i, row) in rows.iter().enumerate() {
            if row.key(field)? == key {
                index = Some(i);
                break;
            }
        }

        match index {
            Some(i) => {
                rows.remove(i);
                Ok(())
            }
            None => Err(StoreError::NotFound {
                collection,
                key: key.to_string(),
            }),
        }
    }

    fn replace_all(
        &self,
        collection: Collection,
        records: Vec<RawRecord>,
    ) -> Result<(), StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        collections.insert(collection, records);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tag: &str) -> RawRecord {
        RawRecord::new().with_text("tag", tag)
    }

    #[test]
    fn read_all_preserves_insertion_order() {
        let store = InMemoryRecordStore::new();
        store.append(Collection::Sales, row("#A")).unwrap();
        store.append(Collection::Sales, row("#B")).unwrap();
        store.append(Collection::Sales, row("#C")).unwrap();

        let rows = store.read_all(Collection::Sales).unwrap();
        let tags: Vec<_> = rows.iter().map(|r| r.text("tag").unwrap()).collect();
        assert_eq!(tags, ["#A", "#B", "#C"]);
    }

    #[test]
    fn find_by_key_returns_none_when_absent() {
        let store = InMemoryRecordStore::new();
        store.append(Collection::Inventory, row("#A")).unwrap();

        assert!(store.find_by_key(Collection::Inventory, "#A").unwrap().is_some());
        assert!(store.find_by_key(Collection::Inventory, "#Z").unwrap().is_none());
    }

    #[test]
    fn delete_by_key_removes_only_the_named_row() {
        let store = InMemoryRecordStore::new();
        store.append(Collection::Inventory, row("#A")).unwrap();
        store.append(Collection::Inventory, row("#B")).unwrap();

        store.delete_by_key(Collection::Inventory, "#A").unwrap();
        let rows = store.read_all(Collection::Inventory).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text("tag").unwrap(), "#B");
    }

    #[test]
    fn delete_of_missing_key_is_not_found() {
        let store = InMemoryRecordStore::new();
        let err = store.delete_by_key(Collection::Sales, "#Z").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn keyed_ops_on_expenses_are_rejected() {
        let store = InMemoryRecordStore::new();
        let err = store.find_by_key(Collection::Expenses, "x").unwrap_err();
        assert!(matches!(err, StoreError::Unkeyed(Collection::Expenses)));
    }

    #[test]
    fn replace_all_swaps_the_whole_collection() {
        let store = InMemoryRecordStore::new();
        store.append(Collection::Sales, row("#A")).unwrap();
        store.append(Collection::Sales, row("#B")).unwrap();

        store
            .replace_all(Collection::Sales, vec![row("#B"), row("#C")])
            .unwrap();
        let rows = store.read_all(Collection::Sales).unwrap();
        let tags: Vec<_> = rows.iter().map(|r| r.text("tag").unwrap()).collect();
        assert_eq!(tags, ["#B", "#C"]);
    }
}
