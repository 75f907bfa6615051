//! `tagledger-expenses` — append-only cash outflows.
//!
//! Expenses are recorded once and never mutated or deleted; the aggregator
//! subtracts their total from confirmed proceeds.

pub mod log;

pub use log::{Expense, ExpenseLog, NewExpense, total_cents};
