//! Domain layer for the boutique retail system.
//!
//! This crate provides:
//! - The entity model (items, customers, rentals, custom orders, work
//!   orders, invoices) and the `AppData` aggregate snapshot
//! - Pure domain operations that turn a snapshot plus an intent into a new,
//!   internally consistent snapshot
//! - The client-local cart aggregator
//! - `BoutiqueService`, which owns the current snapshot and drives the
//!   persistence gateway

pub mod cart;
pub mod error;
pub mod model;
pub mod money;
pub mod ops;
pub mod seed;
pub mod service;
pub mod snapshot;

pub use cart::{Cart, CartKind, CartLine, CartSession};
pub use error::DomainError;
pub use model::{
    Customer, CustomOrder, CustomOrderStatus, Invoice, InvoiceItem, Item, ItemStatus,
    MeasurementOverrides, MeasurementProfile, MeasurementUnit, Notification, NotificationKind,
    Rental, RentalLine, RentalStatus, Role, STAGE_SEQUENCE, User, WorkOrder, rental_days,
};
pub use money::Money;
pub use ops::{
    CompleteSale, ImportItems, MoveOrderStage, PlaceOrder, SaleLine, SubmitCustomOrder, UpsertItem,
    complete_sale, import_items, move_order_stage, place_order, submit_custom_order, upsert_item,
};
pub use service::{BoutiqueService, PlacedOrder, SubmittedOrder};
pub use snapshot::AppData;
