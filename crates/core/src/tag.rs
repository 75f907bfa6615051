//! The tag: a user-assigned identifier for one tradable item.
//!
//! A tag stays with the item across its whole lifetime, from "in stock"
//! through "sold" and back again on a return.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Unique human-assigned item identifier (e.g. `#F10`).
///
/// Tags are normalized to uppercase on parse so `#f10` and `#F10` name the
/// same item regardless of who typed them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Parse and normalize a tag. Fails on empty/whitespace-only input.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, LedgerError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LedgerError::validation("tag cannot be empty"));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Tag {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
