//! Raw record shapes at the store boundary.
//!
//! The external store hands back duck-typed rows (field name to
//! string/number/boolean). Typed accessors here are the validation boundary:
//! domain crates decode through them and never operate on loose rows.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Stored date format (ISO-8601 date).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The three named record collections.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Inventory,
    Sales,
    Expenses,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Inventory,
        Collection::Sales,
        Collection::Expenses,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Inventory => "Inventory",
            Collection::Sales => "Sales",
            Collection::Expenses => "Expenses",
        }
    }

    /// Field used for keyed lookup/delete. Expenses rows are append-only and
    /// unkeyed.
    pub fn key_field(&self) -> Option<&'static str> {
        match self {
            Collection::Inventory | Collection::Sales => Some("tag"),
            Collection::Expenses => None,
        }
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One field of a stored row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Bool(bool),
}

/// One stored row: field name to value, order-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, FieldValue>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, field: &str, value: impl Into<String>) -> Self {
        self.0.insert(field.to_string(), FieldValue::Text(value.into()));
        self
    }

    pub fn with_number(mut self, field: &str, value: i64) -> Self {
        self.0.insert(field.to_string(), FieldValue::Number(value));
        self
    }

    pub fn with_bool(mut self, field: &str, value: bool) -> Self {
        self.0.insert(field.to_string(), FieldValue::Bool(value));
        self
    }

    pub fn with_date(self, field: &str, value: NaiveDate) -> Self {
        self.with_text(field, value.format(DATE_FORMAT).to_string())
    }

    /// Optional dates are stored as empty text so every row carries the same
    /// field set.
    pub fn with_opt_date(self, field: &str, value: Option<NaiveDate>) -> Self {
        match value {
            Some(date) => self.with_date(field, date),
            None => self.with_text(field, ""),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    fn require(&self, field: &str) -> Result<&FieldValue, StoreError> {
        self.get(field)
            .ok_or_else(|| StoreError::Corrupt(format!("missing field '{field}'")))
    }

    pub fn text(&self, field: &str) -> Result<&str, StoreError> {
        match self.require(field)? {
            FieldValue::Text(s) => Ok(s),
            other => Err(StoreError::Corrupt(format!(
                "field '{field}' is not text (got {other:?})"
            ))),
        }
    }

    pub fn number(&self, field: &str) -> Result<i64, StoreError> {
        match self.require(field)? {
            FieldValue::Number(n) => Ok(*n),
            other => Err(StoreError::Corrupt(format!(
                "field '{field}' is not a number (got {other:?})"
            ))),
        }
    }

    pub fn boolean(&self, field: &str) -> Result<bool, StoreError> {
        match self.require(field)? {
            FieldValue::Bool(b) => Ok(*b),
            other => Err(StoreError::Corrupt(format!(
                "field '{field}' is not a boolean (got {other:?})"
            ))),
        }
    }

    pub fn date(&self, field: &str) -> Result<NaiveDate, StoreError> {
        let raw = self.text(field)?;
        NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
            StoreError::Corrupt(format!("field '{field}' is not a date ('{raw}'): {e}"))
        })
    }

    pub fn opt_date(&self, field: &str) -> Result<Option<NaiveDate>, StoreError> {
        match self.get(field) {
            None => Ok(None),
            Some(FieldValue::Text(s)) if s.is_empty() => Ok(None),
            Some(_) => self.date(field).map(Some),
        }
    }

    /// Extract this row's key under `key_field`.
    pub fn key(&self, key_field: &str) -> Result<&str, StoreError> {
        self.text(key_field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn typed_accessors_round_trip() {
        let rec = RawRecord::new()
            .with_text("tag", "#F1")
            .with_number("gross_amount", 5000)
            .with_bool("shipped", false)
            .with_date("sale_date", sample_date());

        assert_eq!(rec.text("tag").unwrap(), "#F1");
        assert_eq!(rec.number("gross_amount").unwrap(), 5000);
        assert!(!rec.boolean("shipped").unwrap());
        assert_eq!(rec.date("sale_date").unwrap(), sample_date());
    }

    #[test]
    fn missing_field_is_corrupt() {
        let rec = RawRecord::new();
        let err = rec.text("tag").unwrap_err();
        match err {
            StoreError::Corrupt(msg) => assert!(msg.contains("tag")),
            _ => panic!("Expected Corrupt error"),
        }
    }

    #[test]
    fn mistyped_field_is_corrupt() {
        let rec = RawRecord::new().with_number("tag", 7);
        assert!(matches!(rec.text("tag"), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn optional_date_treats_empty_text_as_none() {
        let rec = RawRecord::new().with_opt_date("payment_date", None);
        assert_eq!(rec.opt_date("payment_date").unwrap(), None);

        let rec = RawRecord::new().with_opt_date("payment_date", Some(sample_date()));
        assert_eq!(rec.opt_date("payment_date").unwrap(), Some(sample_date()));
    }

    #[test]
    fn expenses_collection_is_unkeyed() {
        assert_eq!(Collection::Expenses.key_field(), None);
        assert_eq!(Collection::Inventory.key_field(), Some("tag"));
        assert_eq!(Collection::Sales.key_field(), Some("tag"));
    }
}
