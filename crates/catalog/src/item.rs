use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use tagledger_core::{
    Cents, LedgerError, LedgerResult, Location, Platform, Tag, decode_channels,
    encode_channels, ensure_non_negative,
};
use tagledger_store::{Collection, RawRecord, RecordStore, StoreError};

/// Default category stamped on manual entry when the operator leaves it blank.
pub const DEFAULT_CATEGORY: &str = "General";
/// Default condition for newly entered stock.
pub const DEFAULT_CONDITION: &str = "Good";

/// One item currently in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub tag: Tag,
    pub category: String,
    pub description: String,
    /// Free-text physical status (e.g. "Good", "Broken/Damaged").
    pub condition: String,
    pub location: Location,
    /// Channels the item is currently listed on.
    pub channels: Vec<Platform>,
    pub target_price_cents: Cents,
    pub floor_price_cents: Cents,
    pub date_added: NaiveDate,
}

impl Item {
    pub fn to_record(&self) -> RawRecord {
        RawRecord::new()
            .with_text("tag", self.tag.as_str())
            .with_text("category", self.category.as_str())
            .with_text("description", self.description.as_str())
            .with_text("condition", self.condition.as_str())
            .with_text("location", self.location.to_string())
            .with_text("channels", encode_channels(&self.channels))
            .with_number("target_price", self.target_price_cents)
            .with_number("floor_price", self.floor_price_cents)
            .with_date("date_added", self.date_added)
    }

    pub fn from_record(record: &RawRecord) -> Result<Self, StoreError> {
        let tag = Tag::parse(record.text("tag")?)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let channels = decode_channels(record.text("channels")?)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        Ok(Self {
            tag,
            category: record.text("category")?.to_string(),
            description: record.text("description")?.to_string(),
            condition: record.text("condition")?.to_string(),
            location: Location::from(record.text("location")?.to_string()),
            channels,
            target_price_cents: record.number("target_price")?,
            floor_price_cents: record.number("floor_price")?,
            date_added: record.date("date_added")?,
        })
    }
}

/// Operations on the Inventory collection.
pub struct ItemCatalog<S> {
    store: S,
}

impl<S: RecordStore> ItemCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Manual entry: validate, enforce tag uniqueness across Inventory AND
    /// Sales (a tag identifies at most one live record), then append.
    pub fn add(&self, item: &Item) -> LedgerResult<()> {
        validate_prices(item)?;

        if self
            .store
            .find_by_key(Collection::Inventory, item.tag.as_str())?
            .is_some()
        {
            return Err(LedgerError::validation(format!(
                "tag {} is already in stock",
                item.tag
            )));
        }
        if self
            .store
            .find_by_key(Collection::Sales, item.tag.as_str())?
            .is_some()
        {
            return Err(LedgerError::validation(format!(
                "tag {} is already recorded as sold",
                item.tag
            )));
        }

        self.store.append(Collection::Inventory, item.to_record())?;
        info!(tag = %item.tag, "item added to stock");
        Ok(())
    }

    /// Return flow: same validation, but uniqueness is checked against
    /// Inventory only — the coordinator calls this while the sale row still
    /// exists and removes it right after.
    pub fn reinstate(&self, item: &Item) -> LedgerResult<()> {
        validate_prices(item)?;

        if self
            .store
            .find_by_key(Collection::Inventory, item.tag.as_str())?
            .is_some()
        {
            return Err(LedgerError::validation(format!(
                "tag {} is already in stock",
                item.tag
            )));
        }

        self.store.append(Collection::Inventory, item.to_record())?;
        Ok(())
    }

    pub fn find(&self, tag: &Tag) -> LedgerResult<Option<Item>> {
        let row = self.store.find_by_key(Collection::Inventory, tag.as_str())?;
        match row {
            Some(record) => Ok(Some(Item::from_record(&record)?)),
            None => Ok(None),
        }
    }

    /// Decoded snapshot of the whole collection, store insertion order.
    pub fn list(&self) -> LedgerResult<Vec<Item>> {
        let rows = self.store.read_all(Collection::Inventory)?;
        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(Item::from_record(row)?);
        }
        Ok(items)
    }

    pub fn remove(&self, tag: &Tag) -> LedgerResult<()> {
        self.store
            .delete_by_key(Collection::Inventory, tag.as_str())?;
        Ok(())
    }
}

fn validate_prices(item: &Item) -> LedgerResult<()> {
    ensure_non_negative("target_price", item.target_price_cents)?;
    ensure_non_negative("floor_price", item.floor_price_cents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tagledger_store::InMemoryRecordStore;

    fn test_item(tag: &str) -> Item {
        Item {
            tag: Tag::parse(tag).unwrap(),
            category: DEFAULT_CATEGORY.to_string(),
            description: "Mechanical keyboard, boxed".to_string(),
            condition: DEFAULT_CONDITION.to_string(),
            location: Location::Warehouse,
            channels: vec![Platform::Ebay, Platform::Vinted],
            target_price_cents: 8000,
            floor_price_cents: 5000,
            date_added: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        }
    }

    fn test_catalog() -> (Arc<InMemoryRecordStore>, ItemCatalog<Arc<InMemoryRecordStore>>) {
        let store = Arc::new(InMemoryRecordStore::new());
        (store.clone(), ItemCatalog::new(store))
    }

    #[test]
    fn added_item_round_trips_through_the_store() {
        let (_, catalog) = test_catalog();
        let item = test_item("#K1");

        catalog.add(&item).unwrap();
        assert_eq!(catalog.find(&item.tag).unwrap(), Some(item.clone()));
        assert_eq!(catalog.list().unwrap(), vec![item]);
    }

    #[test]
    fn duplicate_tag_in_inventory_is_rejected() {
        let (_, catalog) = test_catalog();
        catalog.add(&test_item("#K1")).unwrap();

        let err = catalog.add(&test_item("#K1")).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn tag_already_sold_is_rejected_on_add() {
        let (store, catalog) = test_catalog();
        // Simulate a live sale row for the same tag.
        store
            .append(Collection::Sales, RawRecord::new().with_text("tag", "#K1"))
            .unwrap();

        let err = catalog.add(&test_item("#K1")).unwrap_err();
        match err {
            LedgerError::Validation(msg) => assert!(msg.contains("sold")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn reinstate_ignores_the_sales_collection() {
        let (store, catalog) = test_catalog();
        store
            .append(Collection::Sales, RawRecord::new().with_text("tag", "#K1"))
            .unwrap();

        catalog.reinstate(&test_item("#K1")).unwrap();
        assert!(catalog.find(&Tag::parse("#K1").unwrap()).unwrap().is_some());
    }

    #[test]
    fn negative_price_is_rejected_before_any_write() {
        let (store, catalog) = test_catalog();
        let mut item = test_item("#K1");
        item.floor_price_cents = -100;

        let err = catalog.add(&item).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert!(store.read_all(Collection::Inventory).unwrap().is_empty());
    }

    #[test]
    fn remove_of_missing_tag_is_not_found() {
        let (_, catalog) = test_catalog();
        let err = catalog.remove(&Tag::parse("#ZZ").unwrap()).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let (_, catalog) = test_catalog();
        catalog.add(&test_item("#K1")).unwrap();
        catalog.add(&test_item("#K2")).unwrap();
        catalog.add(&test_item("#K3")).unwrap();

        let tags: Vec<_> = catalog
            .list()
            .unwrap()
            .into_iter()
            .map(|i| i.tag.as_str().to_string())
            .collect();
        assert_eq!(tags, ["#K1", "#K2", "#K3"]);
    }
}
