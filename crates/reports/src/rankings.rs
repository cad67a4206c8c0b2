//! Top-N rankings over rentals, sales, and customer spend.

use std::collections::HashMap;

use common::{CustomerId, ItemId};
use domain::{AppData, Money};
use serde::Serialize;

const TOP_N: usize = 5;

/// An item ranked by quantity moved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemQuantity {
    pub item_id: ItemId,
    pub title: String,
    pub quantity: u32,
}

/// A customer ranked by paid-invoice spend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSpend {
    pub customer_id: CustomerId,
    pub name: String,
    pub total_spend: Money,
}

fn item_title(data: &AppData, id: &ItemId) -> String {
    data.item(id)
        .map(|i| i.title.clone())
        .unwrap_or_else(|| id.to_string())
}

fn ranked_items(data: &AppData, counts: HashMap<ItemId, u32>) -> Vec<ItemQuantity> {
    let mut rows: Vec<ItemQuantity> = counts
        .into_iter()
        .map(|(item_id, quantity)| ItemQuantity {
            title: item_title(data, &item_id),
            item_id,
            quantity,
        })
        .collect();
    rows.sort_by(|a, b| b.quantity.cmp(&a.quantity).then(a.title.cmp(&b.title)));
    rows.truncate(TOP_N);
    rows
}

/// Top five items by quantity across all rental bookings.
pub fn top_rented(data: &AppData) -> Vec<ItemQuantity> {
    let mut counts: HashMap<ItemId, u32> = HashMap::new();
    for rental in &data.rentals {
        for line in &rental.items {
            *counts.entry(line.item_id.clone()).or_default() += line.qty;
        }
    }
    ranked_items(data, counts)
}

/// Top five items by quantity sold across sale and purchase invoice lines.
pub fn top_purchased(data: &AppData) -> Vec<ItemQuantity> {
    let mut counts: HashMap<ItemId, u32> = HashMap::new();
    for invoice in &data.invoices {
        for line in &invoice.items {
            if line.description.starts_with("Sale:") || line.description.starts_with("Purchase:") {
                *counts.entry(line.item_id.clone()).or_default() += line.qty;
            }
        }
    }
    ranked_items(data, counts)
}

/// Top five customers by total paid-invoice spend.
pub fn top_customers(data: &AppData) -> Vec<CustomerSpend> {
    let mut totals: HashMap<CustomerId, Money> = HashMap::new();
    for invoice in data.invoices.iter().filter(|i| i.paid) {
        let entry = totals
            .entry(invoice.customer_id.clone())
            .or_insert_with(Money::zero);
        *entry += invoice.total_amount;
    }

    let mut rows: Vec<CustomerSpend> = totals
        .into_iter()
        .map(|(customer_id, total_spend)| CustomerSpend {
            name: data
                .customer(&customer_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| customer_id.to_string()),
            customer_id,
            total_spend,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total_spend
            .paise()
            .cmp(&a.total_spend.paise())
            .then(a.name.cmp(&b.name))
    });
    rows.truncate(TOP_N);
    rows
}
