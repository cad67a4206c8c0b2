use chrono::{DateTime, Utc};
use common::{CustomOrderId, CustomerId, UserId, WorkOrderId};
use serde::{Deserialize, Serialize};

use crate::money::Money;

use super::customer::MeasurementProfile;

/// Production stage of a custom tailoring order.
///
/// Stages form a fixed sequence and an order may only move to the
/// immediately adjacent stage, forward or backward:
/// ```text
/// Received ⇄ Cutting ⇄ Stitching ⇄ Finishing ⇄ Ready ⇄ Delivered
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CustomOrderStatus {
    /// Order received, not yet started.
    #[default]
    Received,

    /// Fabric is being cut.
    Cutting,

    /// Garment is being stitched.
    Stitching,

    /// Embroidery and finishing touches.
    Finishing,

    /// Ready for pickup or final fitting.
    Ready,

    /// Handed over to the customer (terminal).
    Delivered,
}

/// The fixed ordered stage sequence governing legal transitions.
pub const STAGE_SEQUENCE: [CustomOrderStatus; 6] = [
    CustomOrderStatus::Received,
    CustomOrderStatus::Cutting,
    CustomOrderStatus::Stitching,
    CustomOrderStatus::Finishing,
    CustomOrderStatus::Ready,
    CustomOrderStatus::Delivered,
];

impl CustomOrderStatus {
    /// Returns this stage's index in the sequence.
    pub fn position(&self) -> usize {
        STAGE_SEQUENCE
            .iter()
            .position(|s| s == self)
            .expect("every status appears in the stage sequence")
    }

    /// Returns true if `target` is exactly one stage away in either direction.
    pub fn is_adjacent(&self, target: CustomOrderStatus) -> bool {
        self.position().abs_diff(target.position()) == 1
    }

    /// Returns the next stage, if any.
    pub fn next(&self) -> Option<CustomOrderStatus> {
        STAGE_SEQUENCE.get(self.position() + 1).copied()
    }

    /// Returns the previous stage, if any.
    pub fn prev(&self) -> Option<CustomOrderStatus> {
        self.position().checked_sub(1).map(|i| STAGE_SEQUENCE[i])
    }

    /// Returns true for the final stage.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CustomOrderStatus::Delivered)
    }

    /// Returns the stage name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomOrderStatus::Received => "Received",
            CustomOrderStatus::Cutting => "Cutting",
            CustomOrderStatus::Stitching => "Stitching",
            CustomOrderStatus::Finishing => "Finishing",
            CustomOrderStatus::Ready => "Ready",
            CustomOrderStatus::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for CustomOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bespoke tailoring order.
///
/// The measurement snapshot is copied from the customer profile at creation
/// time; later profile edits never flow back into the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomOrder {
    pub id: CustomOrderId,
    pub customer_id: CustomerId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub material_provided: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_notes: Option<String>,
    pub measurement_snapshot: MeasurementProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_tailor_id: Option<UserId>,
    pub price_estimate: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<Money>,
    pub status: CustomOrderStatus,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Technician-facing shadow record of a custom order.
///
/// Its status mirrors the parent order's status; the custom order is the
/// single authoritative owner and every status change is propagated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: WorkOrderId,
    pub custom_order_id: CustomOrderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub status: CustomOrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}
