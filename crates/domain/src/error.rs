//! Domain error types.

use chrono::{DateTime, Utc};
use common::{CustomOrderId, CustomerId, ItemId};
use snapshot_store::StoreError;
use thiserror::Error;

use crate::model::CustomOrderStatus;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A sale line asked for more units than are on hand.
    #[error("Insufficient stock for item {item_id}: requested {requested}, available {available}")]
    Stock {
        item_id: ItemId,
        requested: u32,
        available: u32,
    },

    /// A custom order was asked to jump to a non-adjacent stage.
    #[error("Invalid stage transition: {from} -> {to}")]
    InvalidTransition {
        from: CustomOrderStatus,
        to: CustomOrderStatus,
    },

    /// An operation referenced a customer that is not in the snapshot.
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// An operation referenced an item that is not in the snapshot.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// An operation referenced a custom order that is not in the snapshot.
    #[error("Custom order not found: {0}")]
    OrderNotFound(CustomOrderId),

    /// A rental period ends before it starts.
    #[error("Invalid rental period: end {end} is before start {start}")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A rental line was submitted without its date range.
    #[error("Rental line for item {0} is missing its date range")]
    MissingRentalDates(ItemId),

    /// The persistence gateway failed.
    ///
    /// When this is returned after a successful in-memory computation the
    /// new snapshot has already been applied; see `BoutiqueService`.
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),
}
