//! Domain operations.
//!
//! Each operation is a pure function from a snapshot plus an intent struct
//! to a new snapshot (or an error, with the input left untouched). All
//! validation happens before any of the new snapshot is built, so an
//! operation either applies completely or not at all.

pub mod checkout;
pub mod custom_order;
pub mod inventory;
pub mod sale;

pub use checkout::{CheckoutOutcome, PlaceOrder, place_order};
pub use custom_order::{
    MoveOrderStage, SubmitCustomOrder, SubmitOutcome, move_order_stage, submit_custom_order,
};
pub use inventory::{ImportItems, UpsertItem, import_items, upsert_item};
pub use sale::{CompleteSale, SaleLine, SaleOutcome, complete_sale};

/// Tax rate applied to every sale and checkout, in percent.
pub const TAX_RATE_PERCENT: i64 = 18;

/// Rental deposit as a percentage of the item's buy price.
pub const DEPOSIT_RATE_PERCENT: i64 = 25;

/// Baseline price estimate for a freshly submitted custom order, in rupees.
pub const CUSTOM_ORDER_BASE_ESTIMATE: i64 = 15_000;

/// Lead time granted to a new custom order, in days.
pub const CUSTOM_ORDER_LEAD_DAYS: i64 = 25;
