//! Point-of-sale purchases.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use common::{CustomerId, InvoiceId, ItemId};
use uuid::Uuid;

use crate::error::DomainError;
use crate::model::{Invoice, InvoiceItem};
use crate::money::Money;
use crate::snapshot::AppData;

use super::TAX_RATE_PERCENT;

/// One purchase line: an item and how many units to sell.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleLine {
    pub item_id: ItemId,
    pub quantity: u32,
}

impl SaleLine {
    pub fn new(item_id: impl Into<ItemId>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }
}

/// Intent to sell a list of items to a customer over the counter.
#[derive(Debug, Clone)]
pub struct CompleteSale {
    pub customer_id: CustomerId,
    pub lines: Vec<SaleLine>,
    pub payment_method: String,
}

impl CompleteSale {
    /// Creates a cash sale, the POS default.
    pub fn cash(customer_id: impl Into<CustomerId>, lines: Vec<SaleLine>) -> Self {
        Self {
            customer_id: customer_id.into(),
            lines,
            payment_method: "Cash".to_string(),
        }
    }
}

/// Result of a completed sale.
#[derive(Debug, Clone)]
pub struct SaleOutcome {
    /// The new snapshot with decremented stock and the appended invoice.
    pub data: AppData,

    /// Id of the invoice that was appended.
    pub invoice_id: InvoiceId,
}

/// Sells the given lines, decrementing stock and appending one paid invoice.
///
/// All-or-nothing: if any line would drive an item's quantity negative the
/// whole sale is rejected and no quantity changes.
pub fn complete_sale(
    data: &AppData,
    cmd: &CompleteSale,
    now: DateTime<Utc>,
) -> Result<SaleOutcome, DomainError> {
    if data.customer(&cmd.customer_id).is_none() {
        return Err(DomainError::CustomerNotFound(cmd.customer_id.clone()));
    }

    // Validate every line against current stock before touching anything.
    // Quantities are summed per item so repeated lines for the same item
    // cannot each pass individually while jointly overselling.
    let mut requested: HashMap<ItemId, u32> = HashMap::new();
    let mut invoice_items = Vec::with_capacity(cmd.lines.len());
    for line in &cmd.lines {
        let item = data
            .item(&line.item_id)
            .ok_or_else(|| DomainError::ItemNotFound(line.item_id.clone()))?;
        let total_requested = requested.entry(item.id.clone()).or_default();
        *total_requested += line.quantity;
        if item.qty < *total_requested {
            return Err(DomainError::Stock {
                item_id: item.id.clone(),
                requested: *total_requested,
                available: item.qty,
            });
        }
        invoice_items.push(InvoiceItem {
            item_id: item.id.clone(),
            description: format!("Sale: {}", item.title),
            qty: line.quantity,
            unit_price: item.buy_price,
            total: item.buy_price.multiply(line.quantity),
        });
    }

    let amount: Money = invoice_items.iter().map(|i| i.total).sum();
    let tax = amount.percent(TAX_RATE_PERCENT);
    let invoice_id = InvoiceId::generate();
    let invoice = Invoice {
        id: invoice_id.clone(),
        customer_id: cmd.customer_id.clone(),
        related_ref: Some(format!("sale-{}", Uuid::new_v4())),
        amount,
        tax,
        discount: Money::zero(),
        total_amount: amount + tax,
        payment_method: cmd.payment_method.clone(),
        paid: true,
        paid_at: Some(now),
        items: invoice_items,
        created_at: now,
    };

    let mut next = data.clone();
    for line in &cmd.lines {
        if let Some(item) = next.items.iter_mut().find(|i| i.id == line.item_id) {
            item.qty -= line.quantity;
        }
    }
    next.invoices.push(invoice);

    Ok(SaleOutcome {
        data: next,
        invoice_id,
    })
}
