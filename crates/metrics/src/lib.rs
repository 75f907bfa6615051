//! `tagledger-metrics` — financial aggregation over ledger snapshots.
//!
//! Pure functions only: every call recomputes from the snapshots it is
//! handed, with no caching across calls, so the headline numbers can never
//! go stale relative to the store.

pub mod summary;

pub use summary::{CashSummary, channel_glyphs, summarize};
