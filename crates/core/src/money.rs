//! Monetary amounts.
//!
//! All amounts are carried as `i64` in the smallest currency unit (cents).
//! Gross, cost and expense amounts must be non-negative; a net amount may go
//! negative when shipping/commission cost exceeds the gross.

use crate::error::LedgerError;

/// Amount in the smallest currency unit (e.g. cents).
pub type Cents = i64;

/// Reject negative input amounts before anything touches the store.
pub fn ensure_non_negative(field: &str, amount: Cents) -> Result<(), LedgerError> {
    if amount < 0 {
        return Err(LedgerError::validation(format!(
            "{field} cannot be negative (got {amount})"
        )));
    }
    Ok(())
}
