use serde::{Deserialize, Serialize};

use tagledger_core::{Cents, Platform};
use tagledger_expenses::{Expense, total_cents};
use tagledger_sales::SaleRecord;

/// The headline cash metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CashSummary {
    /// Confirmed-received net proceeds minus all recorded expenses.
    pub cash_on_hand_cents: Cents,
    /// Net proceeds of completed sales not yet marked received.
    pub incoming_cents: Cents,
    /// Sum of every recorded outflow.
    pub total_expenses_cents: Cents,
    /// Sales still waiting to be shipped.
    pub pending_shipments: usize,
}

/// Compute the cash metrics from full snapshots of Sales and Expenses.
pub fn summarize(sales: &[SaleRecord], expenses: &[Expense]) -> CashSummary {
    let total_expenses_cents = total_cents(expenses);

    let mut received: Cents = 0;
    let mut incoming: Cents = 0;
    let mut pending_shipments = 0usize;

    for sale in sales {
        if sale.paid {
            received += sale.net_cents;
        } else {
            incoming += sale.net_cents;
        }
        if !sale.shipped {
            pending_shipments += 1;
        }
    }

    CashSummary {
        cash_on_hand_cents: received - total_expenses_cents,
        incoming_cents: incoming,
        total_expenses_cents,
        pending_shipments,
    }
}

/// Map a stored channel set to its display glyph string, in the fixed
/// enumeration order. Duplicates contribute one glyph.
pub fn channel_glyphs(channels: &[Platform]) -> String {
    let mut glyphs = String::new();
    for platform in Platform::ALL {
        if channels.contains(&platform) {
            glyphs.push_str(platform.glyph());
        }
    }
    glyphs
}
