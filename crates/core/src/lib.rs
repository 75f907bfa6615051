//! `tagledger-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no store concerns).

pub mod channel;
pub mod error;
pub mod guard;
pub mod money;
pub mod tag;

pub use channel::{Location, Platform, decode_channels, encode_channels};
pub use error::{LedgerError, LedgerResult};
pub use guard::verify_unchanged;
pub use money::{Cents, ensure_non_negative};
pub use tag::Tag;
