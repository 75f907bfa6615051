//! `tagledger-store` — the narrow contract the engine uses to talk to the
//! external tabular store, plus an in-memory implementation for tests/dev.
//!
//! The real backend (a shared spreadsheet-like service) lives outside this
//! workspace; everything here is written against [`RecordStore`] only.

pub mod contract;
pub mod error;
pub mod in_memory;
pub mod record;

pub use contract::RecordStore;
pub use error::StoreError;
pub use in_memory::InMemoryRecordStore;
pub use record::{Collection, FieldValue, RawRecord};
