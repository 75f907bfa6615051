//! `tagledger-lifecycle` — the two cross-collection transitions.
//!
//! A tag is one logical entity whether it currently lives as an Inventory
//! item or a sale row. This crate owns the state machine spanning both
//! physical collections: Sell (Inventory → Sales) and Return (Sales →
//! Inventory), each executed as one logical unit with a compensating undo
//! when the second half fails.

pub mod coordinator;

pub use coordinator::{LifecycleCoordinator, ReturnRequest, SellRequest, TagState};
