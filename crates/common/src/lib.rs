//! Shared identifier types used across the boutique retail crates.

pub mod types;

pub use types::{
    CustomOrderId, CustomerId, InvoiceId, ItemId, NotificationId, RentalId, UserId, WorkOrderId,
};
