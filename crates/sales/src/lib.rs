//! `tagledger-sales` — the sold side of the ledger.
//!
//! Owns `SaleRecord` rows in the Sales collection: per-sale arithmetic and
//! the shipped/paid lifecycle flags with their payment-date audit trail.
//! Flag mutations go through the guarded sync paths in [`sync`].

pub mod ledger;
pub mod sync;

pub use ledger::{NewSale, SaleLedger, SaleRecord, sort_actionable};
pub use sync::{FlagEdit, SyncOutcome};
