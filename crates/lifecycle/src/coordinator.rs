use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use tagledger_catalog::{Item, ItemCatalog};
use tagledger_core::{Cents, LedgerError, LedgerResult, Location, Platform, Tag, verify_unchanged};
use tagledger_sales::{NewSale, SaleLedger, SaleRecord};
use tagledger_store::RecordStore;

/// Category stamped on items re-entering stock through a return.
pub const RETURN_CATEGORY: &str = "Return";

/// Where a tag currently lives.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagState {
    InStock,
    Sold,
    Untracked,
}

/// Input for the Sell transition. The description is never supplied here;
/// it is copied from the stored item at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellRequest {
    pub platform: Platform,
    pub gross_cents: Cents,
    pub cost_cents: Cents,
    pub seller: String,
    pub sale_date: NaiveDate,
}

/// Input for the Return transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnRequest {
    pub reason: String,
    pub new_condition: String,
    pub returned_on: NaiveDate,
}

/// Orchestrates Sell and Return across the two keyed collections.
///
/// Neither transition is retry-deduplicated by request id; the caller issues
/// them as single confirmed actions and re-reads on `Conflict`.
pub struct LifecycleCoordinator<S> {
    catalog: ItemCatalog<S>,
    sales: SaleLedger<S>,
}

impl<S: RecordStore + Clone> LifecycleCoordinator<S> {
    pub fn new(store: S) -> Self {
        Self {
            catalog: ItemCatalog::new(store.clone()),
            sales: SaleLedger::new(store),
        }
    }

    /// Probe both collections for the tag's current state.
    ///
    /// A tag found in both (possible only after a failed compensation) reads
    /// as `InStock`; the reconciliation error raised at that point is the
    /// signal, not this probe.
    pub fn state_of(&self, tag: &Tag) -> LedgerResult<TagState> {
        if self.catalog.find(tag)?.is_some() {
            return Ok(TagState::InStock);
        }
        if self.sales.find(tag)?.is_some() {
            return Ok(TagState::Sold);
        }
        Ok(TagState::Untracked)
    }

    /// Sell: create the sale row, then remove the item, as one logical unit.
    ///
    /// `observed` is the item as the caller last read it; a differing stored
    /// row aborts with `Conflict` before anything is written. If the item
    /// removal fails after the sale row was created, the sale row is
    /// compensated away; if that delete also fails, the operation surfaces
    /// `ReconciliationRequired` because the tag is now visible in both
    /// collections.
    pub fn sell(&self, observed: &Item, request: SellRequest) -> LedgerResult<SaleRecord> {
        let tag = &observed.tag;
        let current = self
            .catalog
            .find(tag)?
            .ok_or_else(|| LedgerError::not_found(format!("{tag} is not in stock")))?;
        verify_unchanged(tag, observed, &current)?;

        // Amount validation happens inside create, before any mutation.
        let sale = self.sales.create(NewSale {
            tag: tag.clone(),
            description: current.description.clone(),
            platform: request.platform,
            gross_cents: request.gross_cents,
            cost_cents: request.cost_cents,
            seller: request.seller,
            sale_date: request.sale_date,
        })?;

        if let Err(removal_err) = self.catalog.remove(tag) {
            warn!(%tag, error = %removal_err, "item removal failed after sale create; compensating");
            if let Err(compensation_err) = self.sales.remove(tag) {
                error!(%tag, error = %compensation_err, "compensating sale delete failed");
                return Err(LedgerError::reconciliation(
                    tag.as_str(),
                    format!(
                        "sale row created but item removal failed ({removal_err}); \
                         compensating delete also failed ({compensation_err})"
                    ),
                ));
            }
            return Err(removal_err);
        }

        info!(%tag, platform = %sale.platform, net = sale.net_cents, "item sold");
        Ok(sale)
    }

    /// Return: reinstate an item, then remove the sale row, as one logical
    /// unit.
    ///
    /// The reinstated item re-enters the warehouse with zeroed target/floor
    /// prices, an empty channel set and the return reason appended to its
    /// description. If item creation fails the operation aborts before the
    /// sale row is touched; if the sale removal fails afterwards the item is
    /// compensated away, escalating to `ReconciliationRequired` when that
    /// delete fails too.
    pub fn accept_return(
        &self,
        observed: &SaleRecord,
        request: ReturnRequest,
    ) -> LedgerResult<Item> {
        let tag = &observed.tag;
        let current = self
            .sales
            .find(tag)?
            .ok_or_else(|| LedgerError::not_found(format!("{tag} is not recorded as sold")))?;
        verify_unchanged(tag, observed, &current)?;

        let item = Item {
            tag: tag.clone(),
            category: RETURN_CATEGORY.to_string(),
            description: format!("{} [RETURNED: {}]", current.description, request.reason),
            condition: request.new_condition,
            location: Location::Warehouse,
            channels: Vec::new(),
            target_price_cents: 0,
            floor_price_cents: 0,
            date_added: request.returned_on,
        };
        self.catalog.reinstate(&item)?;

        if let Err(removal_err) = self.sales.remove(tag) {
            warn!(%tag, error = %removal_err, "sale removal failed after reinstate; compensating");
            if let Err(compensation_err) = self.catalog.remove(tag) {
                error!(%tag, error = %compensation_err, "compensating item delete failed");
                return Err(LedgerError::reconciliation(
                    tag.as_str(),
                    format!(
                        "item reinstated but sale removal failed ({removal_err}); \
                         compensating delete also failed ({compensation_err})"
                    ),
                ));
            }
            return Err(removal_err);
        }

        info!(%tag, "sale returned to stock");
        Ok(item)
    }
}
