//! Storefront checkout: a mixed cart of purchases and rental bookings.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use common::{CustomerId, InvoiceId, RentalId};
use uuid::Uuid;

use crate::cart::{Cart, CartKind, CartLine};
use crate::error::DomainError;
use crate::model::{Invoice, InvoiceItem, Rental, RentalLine, RentalStatus, rental_days};
use crate::money::Money;
use crate::snapshot::AppData;

use super::{DEPOSIT_RATE_PERCENT, TAX_RATE_PERCENT};

/// Intent to commit a cart as one order for a customer.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub customer_id: CustomerId,
    pub cart: Cart,
    pub payment_method: String,
}

impl PlaceOrder {
    /// Creates a card checkout, the storefront default.
    pub fn card(customer_id: impl Into<CustomerId>, cart: Cart) -> Self {
        Self {
            customer_id: customer_id.into(),
            cart,
            payment_method: "Card".to_string(),
        }
    }
}

/// Result of a committed checkout.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// The new snapshot with decremented stock (buy lines only), appended
    /// rentals, and one appended invoice covering the whole cart.
    pub data: AppData,

    pub invoice_id: InvoiceId,
    pub rental_ids: Vec<RentalId>,
}

/// Commits a cart: buy lines behave like a sale, rent lines each become a
/// Reserved rental. One paid invoice covers both.
///
/// Rentals deliberately do not decrement item quantities; their occupancy
/// is tracked through rental status, not stock depletion.
pub fn place_order(
    data: &AppData,
    cmd: &PlaceOrder,
    now: DateTime<Utc>,
) -> Result<CheckoutOutcome, DomainError> {
    if data.customer(&cmd.customer_id).is_none() {
        return Err(DomainError::CustomerNotFound(cmd.customer_id.clone()));
    }

    let mut invoice_items = Vec::with_capacity(cmd.cart.len());
    let mut new_rentals: Vec<Rental> = Vec::new();
    // Buy quantities are summed per item; a deserialized cart can carry
    // repeated lines for one item, and the lines must fit stock jointly.
    let mut buy_decrements: HashMap<common::ItemId, u32> = HashMap::new();

    for line in cmd.cart.lines() {
        // The stock check and existence check run against the current
        // snapshot; pricing uses the item as it looked when carted.
        let current = data
            .item(&line.item.id)
            .ok_or_else(|| DomainError::ItemNotFound(line.item.id.clone()))?;

        match line.kind {
            CartKind::Buy => {
                let total_requested = buy_decrements.entry(current.id.clone()).or_default();
                *total_requested += line.quantity;
                if current.qty < *total_requested {
                    return Err(DomainError::Stock {
                        item_id: current.id.clone(),
                        requested: *total_requested,
                        available: current.qty,
                    });
                }
                invoice_items.push(InvoiceItem {
                    item_id: line.item.id.clone(),
                    description: format!("Purchase: {}", line.item.title),
                    qty: line.quantity,
                    unit_price: line.item.buy_price,
                    total: line.item.buy_price.multiply(line.quantity),
                });
            }
            CartKind::Rent => {
                let (start, end) = rental_period(line)?;
                let days = rental_days(start, end);
                let rental_total = line
                    .item
                    .rent_price_per_day
                    .multiply(days)
                    .multiply(line.quantity);

                let rental = Rental {
                    id: RentalId::generate(),
                    customer_id: cmd.customer_id.clone(),
                    items: vec![RentalLine {
                        item_id: line.item.id.clone(),
                        qty: line.quantity,
                        price_per_day: line.item.rent_price_per_day,
                    }],
                    start_date: start,
                    end_date: end,
                    deposit_amount: line.item.buy_price.percent(DEPOSIT_RATE_PERCENT),
                    total_amount: rental_total,
                    status: RentalStatus::Reserved,
                    pickup_location: None,
                    return_location: None,
                    damage_notes: None,
                    photos_return: None,
                };
                invoice_items.push(InvoiceItem {
                    item_id: line.item.id.clone(),
                    description: format!("Rental: {} ({} days)", line.item.title, days),
                    qty: line.quantity,
                    unit_price: line.item.rent_price_per_day.multiply(days),
                    total: rental_total,
                });
                new_rentals.push(rental);
            }
        }
    }

    let amount: Money = invoice_items.iter().map(|i| i.total).sum();
    let tax = amount.percent(TAX_RATE_PERCENT);
    let related_ref = new_rentals
        .first()
        .map(|r| r.id.to_string())
        .unwrap_or_else(|| format!("sale-{}", Uuid::new_v4()));

    let invoice_id = InvoiceId::generate();
    let invoice = Invoice {
        id: invoice_id.clone(),
        customer_id: cmd.customer_id.clone(),
        related_ref: Some(related_ref),
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
    for (item_id, quantity) in &buy_decrements {
        if let Some(item) = next.items.iter_mut().find(|i| &i.id == item_id) {
            item.qty -= quantity;
        }
    }
    let rental_ids = new_rentals.iter().map(|r| r.id.clone()).collect();
    next.rentals.extend(new_rentals);
    next.invoices.push(invoice);

    Ok(CheckoutOutcome {
        data: next,
        invoice_id,
        rental_ids,
    })
}

fn rental_period(line: &CartLine) -> Result<(DateTime<Utc>, DateTime<Utc>), DomainError> {
    let (start, end) = match (line.start_date, line.end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(DomainError::MissingRentalDates(line.item.id.clone())),
    };
    if end < start {
        return Err(DomainError::InvalidDateRange { start, end });
    }
    Ok((start, end))
}
