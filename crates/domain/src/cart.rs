//! Client-local cart state.
//!
//! The cart is pending-purchase intent only; it is never part of the
//! canonical snapshot. It persists through its own store so it survives a
//! restart, and is cleared once checkout commits it into the domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snapshot_store::{SnapshotStore, SnapshotStoreExt};
use tokio::sync::RwLock;

use crate::error::DomainError;
use crate::model::{Item, rental_days};
use crate::money::Money;
use crate::ops::TAX_RATE_PERCENT;

/// Whether a cart line is a purchase or a rental intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartKind {
    Buy,
    Rent,
}

/// One pending line in the cart, carrying a snapshot of the item as it
/// looked when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Line identity: item id plus kind, with the rental period appended
    /// for rent lines (`"i1-buy"`, `"i1-rent-1704067200-1704326400"`).
    /// Same-item rent lines with different periods stay separate lines, so
    /// the period is part of the identity.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CartKind,
    pub item: Item,
    pub quantity: u32,
    #[serde(default, rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl CartLine {
    /// Creates a purchase line.
    pub fn buy(item: Item, quantity: u32) -> Self {
        Self {
            id: format!("{}-buy", item.id),
            kind: CartKind::Buy,
            item,
            quantity,
            start_date: None,
            end_date: None,
        }
    }

    /// Creates a rental line for the given period.
    pub fn rent(item: Item, quantity: u32, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: format!("{}-rent-{}-{}", item.id, start.timestamp(), end.timestamp()),
            kind: CartKind::Rent,
            item,
            quantity,
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    /// Price for one unit of this line: the buy price, or the day rate
    /// times the billed days for a rental. A rental line without dates
    /// prices at zero until the dates are chosen.
    pub fn unit_price(&self) -> Money {
        match self.kind {
            CartKind::Buy => self.item.buy_price,
            CartKind::Rent => match (self.start_date, self.end_date) {
                (Some(start), Some(end)) => self
                    .item
                    .rent_price_per_day
                    .multiply(rental_days(start, end)),
                _ => Money::zero(),
            },
        }
    }

    /// Total for the line (`unit_price * quantity`).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply(self.quantity)
    }

    fn merges_with(&self, other: &CartLine) -> bool {
        self.id == other.id
            && self.start_date == other.start_date
            && self.end_date == other.end_date
    }
}

/// The pending-purchase aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line, merging quantities into an existing line with the same
    /// item, kind, and rental dates.
    pub fn add(&mut self, line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.merges_with(&line)) {
            existing.quantity += line.quantity;
        } else {
            self.lines.push(line);
        }
    }

    /// Removes the line with the given id, if present.
    pub fn remove(&mut self, line_id: &str) {
        self.lines.retain(|l| l.id != line_id);
    }

    /// Sets a line's quantity, clamped to a minimum of one.
    pub fn set_quantity(&mut self, line_id: &str, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == line_id) {
            line.quantity = quantity.max(1);
        }
    }

    /// Discards all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line totals before tax.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Tax on the subtotal at the standard rate.
    pub fn tax(&self) -> Money {
        self.subtotal().percent(TAX_RATE_PERCENT)
    }

    /// Subtotal plus tax.
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }
}

/// A cart bound to its own persistence, independent of the snapshot store.
///
/// Every mutation is written through; a failed write surfaces as a
/// persistence error but the in-memory cart keeps the change, mirroring the
/// optimistic policy of `BoutiqueService`.
pub struct CartSession<S: SnapshotStore<Cart>> {
    store: S,
    cart: RwLock<Cart>,
}

impl<S: SnapshotStore<Cart>> CartSession<S> {
    /// Loads the persisted cart, starting empty if none exists.
    pub async fn init(store: S) -> Result<Self, DomainError> {
        let cart = store.load_or_seed().await?;
        Ok(Self {
            store,
            cart: RwLock::new(cart),
        })
    }

    /// Returns a copy of the current cart.
    pub async fn cart(&self) -> Cart {
        self.cart.read().await.clone()
    }

    pub async fn add(&self, line: CartLine) -> Result<Cart, DomainError> {
        self.mutate(|cart| cart.add(line)).await
    }

    pub async fn remove(&self, line_id: &str) -> Result<Cart, DomainError> {
        self.mutate(|cart| cart.remove(line_id)).await
    }

    pub async fn set_quantity(&self, line_id: &str, quantity: u32) -> Result<Cart, DomainError> {
        self.mutate(|cart| cart.set_quantity(line_id, quantity)).await
    }

    pub async fn clear(&self) -> Result<Cart, DomainError> {
        self.mutate(Cart::clear).await
    }

    async fn mutate(&self, f: impl FnOnce(&mut Cart)) -> Result<Cart, DomainError> {
        let mut cart = self.cart.write().await;
        f(&mut cart);
        let updated = cart.clone();
        self.store.save(&updated).await?;
        Ok(updated)
    }
}
