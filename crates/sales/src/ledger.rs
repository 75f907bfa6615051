use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use tagledger_core::{Cents, LedgerError, LedgerResult, Platform, Tag, ensure_non_negative};
use tagledger_store::{Collection, RawRecord, RecordStore, StoreError};

/// One completed sale awaiting (or past) shipment and payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub tag: Tag,
    /// Copied from the item at sale time; immutable afterwards.
    pub description: String,
    pub platform: Platform,
    pub gross_cents: Cents,
    /// Shipping/commission cost borne by the seller.
    pub cost_cents: Cents,
    /// Always `gross - cost`; stored redundantly for display, never edited.
    pub net_cents: Cents,
    pub shipped: bool,
    pub paid: bool,
    /// Actor who closed the sale. Always passed explicitly by the caller.
    pub seller: String,
    pub sale_date: NaiveDate,
    /// Present iff `paid`.
    pub payment_date: Option<NaiveDate>,
}

impl SaleRecord {
    pub fn to_record(&self) -> RawRecord {
        RawRecord::new()
            .with_text("tag", self.tag.as_str())
            .with_text("description", self.description.as_str())
            .with_text("platform", self.platform.label())
            .with_number("gross_amount", self.gross_cents)
            .with_number("cost_amount", self.cost_cents)
            .with_number("net_amount", self.net_cents)
            .with_bool("shipped", self.shipped)
            .with_bool("paid", self.paid)
            .with_text("seller", self.seller.as_str())
            .with_date("sale_date", self.sale_date)
            .with_opt_date("payment_date", self.payment_date)
    }

    pub fn from_record(record: &RawRecord) -> Result<Self, StoreError> {
        let tag = Tag::parse(record.text("tag")?)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let platform: Platform = record
            .text("platform")?
            .parse()
            .map_err(|e: LedgerError| StoreError::Corrupt(e.to_string()))?;

        Ok(Self {
            tag,
            description: record.text("description")?.to_string(),
            platform,
            gross_cents: record.number("gross_amount")?,
            cost_cents: record.number("cost_amount")?,
            net_cents: record.number("net_amount")?,
            shipped: record.boolean("shipped")?,
            paid: record.boolean("paid")?,
            seller: record.text("seller")?.to_string(),
            sale_date: record.date("sale_date")?,
            payment_date: record.opt_date("payment_date")?,
        })
    }
}

/// Input for recording a sale. Flags always start false and the net is
/// derived; neither is caller-supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub tag: Tag,
    pub description: String,
    pub platform: Platform,
    pub gross_cents: Cents,
    pub cost_cents: Cents,
    pub seller: String,
    pub sale_date: NaiveDate,
}

/// Operations on the Sales collection.
pub struct SaleLedger<S> {
    pub(crate) store: S,
}

impl<S: RecordStore> SaleLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a sale. `net = gross - cost` (may go negative when costs
    /// exceed the gross), `shipped = paid = false`, no payment date.
    pub fn create(&self, new: NewSale) -> LedgerResult<SaleRecord> {
        ensure_non_negative("gross_amount", new.gross_cents)?;
        ensure_non_negative("cost_amount", new.cost_cents)?;

        if self
            .store
            .find_by_key(Collection::Sales, new.tag.as_str())?
            .is_some()
        {
            return Err(LedgerError::validation(format!(
                "tag {} is already recorded as sold",
                new.tag
            )));
        }

        let record = SaleRecord {
            net_cents: new.gross_cents - new.cost_cents,
            tag: new.tag,
            description: new.description,
            platform: new.platform,
            gross_cents: new.gross_cents,
            cost_cents: new.cost_cents,
            shipped: false,
            paid: false,
            seller: new.seller,
            sale_date: new.sale_date,
            payment_date: None,
        };

        self.store.append(Collection::Sales, record.to_record())?;
        info!(tag = %record.tag, platform = %record.platform, net = record.net_cents, "sale recorded");
        Ok(record)
    }

    pub fn find(&self, tag: &Tag) -> LedgerResult<Option<SaleRecord>> {
        let row = self.store.find_by_key(Collection::Sales, tag.as_str())?;
        match row {
            Some(record) => Ok(Some(SaleRecord::from_record(&record)?)),
            None => Ok(None),
        }
    }

    /// Decoded snapshot, store insertion order.
    pub fn list(&self) -> LedgerResult<Vec<SaleRecord>> {
        let rows = self.store.read_all(Collection::Sales)?;
        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(SaleRecord::from_record(row)?);
        }
        Ok(records)
    }

    /// Coordinator-only: delete the sale row on a return.
    pub fn remove(&self, tag: &Tag) -> LedgerResult<()> {
        self.store.delete_by_key(Collection::Sales, tag.as_str())?;
        Ok(())
    }
}

/// Stable sort by (`paid`, `shipped`) ascending: rows still needing action
/// first, ties kept in insertion order.
pub fn sort_actionable(records: &mut [SaleRecord]) {
    records.sort_by_key(|r| (r.paid, r.shipped));
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Arc;
    use tagledger_store::InMemoryRecordStore;

    pub(crate) fn test_ledger() -> SaleLedger<Arc<InMemoryRecordStore>> {
        SaleLedger::new(Arc::new(InMemoryRecordStore::new()))
    }

    pub(crate) fn test_sale(tag: &str) -> NewSale {
        NewSale {
            tag: Tag::parse(tag).unwrap(),
            description: "Mechanical keyboard, boxed".to_string(),
            platform: Platform::Ebay,
            gross_cents: 5000,
            cost_cents: 500,
            seller: "Matteo".to_string(),
            sale_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        }
    }

    #[test]
    fn create_derives_net_and_starts_with_clear_flags() {
        let ledger = test_ledger();
        let record = ledger.create(test_sale("#F1")).unwrap();

        assert_eq!(record.net_cents, 4500);
        assert!(!record.shipped);
        assert!(!record.paid);
        assert_eq!(record.payment_date, None);
        assert_eq!(ledger.find(&record.tag).unwrap(), Some(record));
    }

    #[test]
    fn net_may_go_negative_when_costs_exceed_gross() {
        let ledger = test_ledger();
        let mut sale = test_sale("#F1");
        sale.gross_cents = 300;
        sale.cost_cents = 800;

        let record = ledger.create(sale).unwrap();
        assert_eq!(record.net_cents, -500);
    }

    #[test]
    fn negative_gross_or_cost_is_rejected() {
        let ledger = test_ledger();

        let mut sale = test_sale("#F1");
        sale.gross_cents = -1;
        assert!(matches!(
            ledger.create(sale).unwrap_err(),
            LedgerError::Validation(_)
        ));

        let mut sale = test_sale("#F1");
        sale.cost_cents = -1;
        assert!(matches!(
            ledger.create(sale).unwrap_err(),
            LedgerError::Validation(_)
        ));
        assert!(ledger.list().unwrap().is_empty());
    }

    #[test]
    fn duplicate_tag_in_sales_is_rejected() {
        let ledger = test_ledger();
        ledger.create(test_sale("#F1")).unwrap();
        assert!(matches!(
            ledger.create(test_sale("#F1")).unwrap_err(),
            LedgerError::Validation(_)
        ));
    }

    #[test]
    fn remove_of_missing_tag_is_not_found() {
        let ledger = test_ledger();
        let err = ledger.remove(&Tag::parse("#ZZ").unwrap()).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
    }

    #[test]
    fn sort_actionable_surfaces_unpaid_then_unshipped_first() {
        let ledger = test_ledger();
        // Insertion order: done, unshipped+unpaid, shipped+unpaid, paid only.
        for (tag, shipped, paid) in [
            ("#A", true, true),
            ("#B", false, false),
            ("#C", true, false),
            ("#D", false, true),
        ] {
            let record = SaleRecord {
                shipped,
                paid,
                payment_date: if paid {
                    NaiveDate::from_ymd_opt(2026, 2, 2)
                } else {
                    None
                },
                ..ledger.create(test_sale(tag)).unwrap()
            };
            // Write the flags straight through the store to set up the shape.
            ledger.store.delete_by_key(Collection::Sales, tag.to_uppercase().as_str()).unwrap();
            ledger.store.append(Collection::Sales, record.to_record()).unwrap();
        }

        let mut records = ledger.list().unwrap();
        sort_actionable(&mut records);
        let tags: Vec<_> = records.iter().map(|r| r.tag.as_str()).collect();
        // Unpaid first (unshipped before shipped), then paid-unshipped, then done.
        assert_eq!(tags, ["#B", "#C", "#D", "#A"]);
    }
}
