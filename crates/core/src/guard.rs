//! Optimistic-concurrency guard.
//!
//! The backing store has no version column, so lost-update detection is a
//! whole-row compare: the caller supplies the row as it observed it, the
//! mutation path re-reads the current row and refuses to commit if the two
//! differ.

use crate::error::LedgerError;
use crate::tag::Tag;

/// Abort with `Conflict` if `current` no longer matches what the caller
/// observed. Every field participates in the compare.
pub fn verify_unchanged<T: PartialEq>(
    tag: &Tag,
    observed: &T,
    current: &T,
) -> Result<(), LedgerError> {
    if observed != current {
        return Err(LedgerError::conflict(format!(
            "row for {tag} changed since it was read; retry with fresh data"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_rows_pass() {
        let tag = Tag::parse("#A1").unwrap();
        assert!(verify_unchanged(&tag, &("x", 1), &("x", 1)).is_ok());
    }

    #[test]
    fn changed_row_is_a_conflict_naming_the_tag() {
        let tag = Tag::parse("#A1").unwrap();
        let err = verify_unchanged(&tag, &("x", 1), &("x", 2)).unwrap_err();
        match err {
            LedgerError::Conflict(msg) => assert!(msg.contains("#A1")),
            _ => panic!("Expected Conflict error"),
        }
    }
}
