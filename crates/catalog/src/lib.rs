//! `tagledger-catalog` — the in-stock side of the ledger.
//!
//! Owns `Item` records in the Inventory collection. Items are created on
//! manual entry or on a return, and destroyed when the item sells.

pub mod item;

pub use item::{DEFAULT_CATEGORY, DEFAULT_CONDITION, Item, ItemCatalog};
