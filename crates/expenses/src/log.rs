use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use tagledger_core::{Cents, LedgerResult, ensure_non_negative};
use tagledger_store::{Collection, RawRecord, RecordStore, StoreError};

/// One recorded cash outflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    /// Free-text bucket (e.g. "Materials", "Rent").
    pub category: String,
    pub description: String,
    pub amount_cents: Cents,
    /// Actor who paid. Always passed explicitly by the caller.
    pub payer: String,
}

impl Expense {
    pub fn to_record(&self) -> RawRecord {
        RawRecord::new()
            .with_date("date", self.date)
            .with_text("category", self.category.as_str())
            .with_text("description", self.description.as_str())
            .with_number("amount", self.amount_cents)
            .with_text("payer", self.payer.as_str())
    }

    pub fn from_record(record: &RawRecord) -> Result<Self, StoreError> {
        Ok(Self {
            date: record.date("date")?,
            category: record.text("category")?.to_string(),
            description: record.text("description")?.to_string(),
            amount_cents: record.number("amount")?,
            payer: record.text("payer")?.to_string(),
        })
    }
}

/// Input for recording an expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount_cents: Cents,
    pub payer: String,
}

/// Append-only operations on the Expenses collection.
pub struct ExpenseLog<S> {
    store: S,
}

impl<S: RecordStore> ExpenseLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn record(&self, new: NewExpense) -> LedgerResult<Expense> {
        ensure_non_negative("amount", new.amount_cents)?;

        let expense = Expense {
            date: new.date,
            category: new.category,
            description: new.description,
            amount_cents: new.amount_cents,
            payer: new.payer,
        };
        self.store.append(Collection::Expenses, expense.to_record())?;
        info!(amount = expense.amount_cents, category = %expense.category, "expense recorded");
        Ok(expense)
    }

    /// Snapshot in append order.
    pub fn list(&self) -> LedgerResult<Vec<Expense>> {
        let rows = self.store.read_all(Collection::Expenses)?;
        let mut expenses = Vec::with_capacity(rows.len());
        for row in &rows {
            expenses.push(Expense::from_record(row)?);
        }
        Ok(expenses)
    }
}

/// Sum of all recorded outflows.
pub fn total_cents(expenses: &[Expense]) -> Cents {
    expenses.iter().map(|e| e.amount_cents).sum()
}
