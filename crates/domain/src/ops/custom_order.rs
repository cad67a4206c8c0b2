//! Custom tailoring orders: submission and kanban stage moves.

use chrono::{DateTime, Duration, Utc};
use common::{CustomOrderId, CustomerId, WorkOrderId};

use crate::error::DomainError;
use crate::model::{CustomOrder, CustomOrderStatus, MeasurementOverrides, WorkOrder};
use crate::money::Money;
use crate::snapshot::AppData;

use super::{CUSTOM_ORDER_BASE_ESTIMATE, CUSTOM_ORDER_LEAD_DAYS};

/// Intent to request a new custom order.
#[derive(Debug, Clone)]
pub struct SubmitCustomOrder {
    pub customer_id: CustomerId,
    pub title: String,
    pub description: String,
    pub material_provided: bool,
    /// Measurements supplied with the request; merged over the customer's
    /// stored profile when snapshotting.
    pub overrides: Option<MeasurementOverrides>,
}

impl SubmitCustomOrder {
    pub fn new(
        customer_id: impl Into<CustomerId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            title: title.into(),
            description: description.into(),
            material_provided: false,
            overrides: None,
        }
    }

    pub fn with_overrides(mut self, overrides: MeasurementOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// Result of a submitted custom order.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub data: AppData,
    pub order_id: CustomOrderId,
    pub work_order_id: WorkOrderId,
}

/// Creates a new custom order in the Received stage, together with its
/// one-to-one technician work order.
///
/// The customer's measurement profile is copied into the order at this
/// moment; later profile edits do not reach the order.
pub fn submit_custom_order(
    data: &AppData,
    cmd: &SubmitCustomOrder,
    now: DateTime<Utc>,
) -> Result<SubmitOutcome, DomainError> {
    let customer = data
        .customer(&cmd.customer_id)
        .ok_or_else(|| DomainError::CustomerNotFound(cmd.customer_id.clone()))?;

    let measurement_snapshot = match &cmd.overrides {
        Some(overrides) => customer.measurement_profile.merged_with(overrides),
        None => customer.measurement_profile.clone(),
    };

    let order_id = CustomOrderId::generate();
    let order = CustomOrder {
        id: order_id.clone(),
        customer_id: cmd.customer_id.clone(),
        title: cmd.title.clone(),
        description: cmd.description.clone(),
        material_provided: cmd.material_provided,
        material_notes: None,
        measurement_snapshot,
        design_images: None,
        assigned_tailor_id: None,
        price_estimate: Money::from_rupees(CUSTOM_ORDER_BASE_ESTIMATE),
        actual_cost: None,
        status: CustomOrderStatus::Received,
        due_date: now + Duration::days(CUSTOM_ORDER_LEAD_DAYS),
        created_at: now,
    };

    let work_order_id = WorkOrderId::generate();
    let work_order = WorkOrder {
        id: work_order_id.clone(),
        custom_order_id: order_id.clone(),
        task_list: None,
        start_date: None,
        end_date: None,
        status: order.status,
        technician_notes: None,
        photos: None,
    };

    let mut next = data.clone();
    next.custom_orders.push(order);
    next.work_orders.push(work_order);

    Ok(SubmitOutcome {
        data: next,
        order_id,
        work_order_id,
    })
}

/// Intent to move a custom order to an adjacent kanban stage.
#[derive(Debug, Clone)]
pub struct MoveOrderStage {
    pub order_id: CustomOrderId,
    pub target: CustomOrderStatus,
}

impl MoveOrderStage {
    pub fn new(order_id: impl Into<CustomOrderId>, target: CustomOrderStatus) -> Self {
        Self {
            order_id: order_id.into(),
            target,
        }
    }
}

/// Moves an order one stage forward or backward and propagates the new
/// status onto every work order shadowing it.
///
/// The kanban UI only offers legal neighbors, but the operation re-checks
/// adjacency itself rather than trusting the caller.
pub fn move_order_stage(data: &AppData, cmd: &MoveOrderStage) -> Result<AppData, DomainError> {
    let order = data
        .custom_order(&cmd.order_id)
        .ok_or_else(|| DomainError::OrderNotFound(cmd.order_id.clone()))?;

    if !order.status.is_adjacent(cmd.target) {
        return Err(DomainError::InvalidTransition {
            from: order.status,
            to: cmd.target,
        });
    }

    let mut next = data.clone();
    if let Some(order) = next.custom_orders.iter_mut().find(|o| o.id == cmd.order_id) {
        order.status = cmd.target;
    }
    for work_order in next
        .work_orders
        .iter_mut()
        .filter(|wo| wo.custom_order_id == cmd.order_id)
    {
        work_order.status = cmd.target;
    }

    Ok(next)
}
