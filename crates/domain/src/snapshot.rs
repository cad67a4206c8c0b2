//! The `AppData` aggregate snapshot.

use common::{CustomOrderId, CustomerId, ItemId};
use serde::{Deserialize, Serialize};

use crate::model::{
    Customer, CustomOrder, Invoice, Item, Notification, Rental, User, WorkOrder,
};

/// The entire persisted business dataset at one point in time.
///
/// A snapshot is never mutated in place while still reachable by a caller:
/// domain operations read one snapshot and return a fresh one. Field names
/// follow the persisted JSON document (`customOrders`, `workOrders`) so the
/// seed dataset round-trips untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub customers: Vec<Customer>,
    pub items: Vec<Item>,
    pub rentals: Vec<Rental>,
    pub custom_orders: Vec<CustomOrder>,
    pub work_orders: Vec<WorkOrder>,
    pub invoices: Vec<Invoice>,
    pub users: Vec<User>,
    pub notifications: Vec<Notification>,
}

impl AppData {
    /// Looks up an item by id.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Looks up a customer by id.
    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| &c.id == id)
    }

    /// Looks up a custom order by id.
    pub fn custom_order(&self, id: &CustomOrderId) -> Option<&CustomOrder> {
        self.custom_orders.iter().find(|o| &o.id == id)
    }

    /// Total units on hand across all items.
    pub fn total_stock(&self) -> u64 {
        self.items.iter().map(|i| i.qty as u64).sum()
    }
}
