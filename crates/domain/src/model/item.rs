use common::ItemId;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Availability of a stockable item.
///
/// Rented items are tracked by this status and by open rentals, not by
/// quantity depletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    /// In stock and offered for sale or rent.
    #[default]
    Available,

    /// Currently out with a rental customer.
    Rented,

    /// Pulled from the floor for repair.
    InRepair,
}

impl ItemStatus {
    /// Returns the status name as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::Rented => "rented",
            ItemStatus::InRepair => "in-repair",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stockable product.
///
/// Only the identity fields are required when a record arrives from a bulk
/// import; numeric fields default to zero and collections to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub sku: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub qty: u32,
    #[serde(default)]
    pub rent_price_per_day: Money,
    #[serde(default)]
    pub buy_price: Money,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
