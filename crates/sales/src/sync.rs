//! Guarded flag mutation paths.
//!
//! The backend has no per-row update, so both the single-row and the batch
//! path re-read the whole Sales collection and write back a full replacement
//! set, preserving row order.
//!
//! Conflict policy differs deliberately:
//! - `update_flags` (single row) compares the caller's observed row against
//!   the fresh read and aborts with `Conflict` on any difference.
//! - `sync_flags` (multi-row UI save) drops edits whose tag vanished
//!   concurrently instead of failing the whole batch; present rows are
//!   overwritten by the batch edit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tagledger_core::{LedgerError, LedgerResult, Tag, verify_unchanged};
use tagledger_store::{Collection, RecordStore};

use crate::ledger::{SaleLedger, SaleRecord};

/// One requested flag state for one sale row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagEdit {
    pub tag: Tag,
    pub shipped: bool,
    pub paid: bool,
}

/// What a batch sync actually did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncOutcome {
    /// Edits applied to rows still present.
    pub applied: usize,
    /// Edits silently dropped because the row was concurrently removed.
    pub dropped: Vec<Tag>,
}

/// Apply the shipped/paid transition, keeping the payment-date audit trail
/// consistent: set on false→true (to `on`), cleared whenever `paid` is
/// false, retained when `paid` stays true.
fn apply_flags(current: &SaleRecord, shipped: bool, paid: bool, on: NaiveDate) -> SaleRecord {
    let payment_date = match (current.paid, paid) {
        (false, true) => Some(on),
        (true, true) => current.payment_date,
        (_, false) => None,
    };
    SaleRecord {
        shipped,
        paid,
        payment_date,
        ..current.clone()
    }
}

impl<S: RecordStore> SaleLedger<S> {
    /// Single-row flag update with strict optimistic concurrency.
    ///
    /// `observed` is the row as the caller last read it; if the stored row
    /// differs, the call fails with `Conflict` and nothing is written.
    /// Returns the committed row.
    pub fn update_flags(
        &self,
        tag: &Tag,
        observed: &SaleRecord,
        shipped: bool,
        paid: bool,
        on: NaiveDate,
    ) -> LedgerResult<SaleRecord> {
        let mut records = self.list()?;
        let index = records
            .iter()
            .position(|r| r.tag == *tag)
            .ok_or_else(|| LedgerError::not_found(format!("'{tag}' absent from Sales")))?;

        verify_unchanged(tag, observed, &records[index])?;

        let updated = apply_flags(&records[index], shipped, paid, on);
        records[index] = updated.clone();

        self.store.replace_all(
            Collection::Sales,
            records.iter().map(SaleRecord::to_record).collect(),
        )?;
        info!(%tag, shipped, paid, "sale flags updated");
        Ok(updated)
    }

    /// Multi-row flag sync from a batch UI save.
    ///
    /// One read of the whole collection, each edit applied by tag only if
    /// the row is still present, one replacement write. Edits for vanished
    /// tags are dropped rather than failing the batch.
    pub fn sync_flags(&self, edits: &[FlagEdit], on: NaiveDate) -> LedgerResult<SyncOutcome> {
        let mut records = self.list()?;
        let mut outcome = SyncOutcome::default();

        for edit in edits {
            match records.iter_mut().find(|r| r.tag == edit.tag) {
                Some(record) => {
                    *record = apply_flags(record, edit.shipped, edit.paid, on);
                    outcome.applied += 1;
                }
                None => {
                    warn!(tag = %edit.tag, "dropping flag edit; row no longer present");
                    outcome.dropped.push(edit.tag.clone());
                }
            }
        }

        self.store.replace_all(
            Collection::Sales,
            records.iter().map(SaleRecord::to_record).collect(),
        )?;
        Ok(outcome)
    }
}
