//! Storefront and point-of-sale endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{
    AppData, Cart, CompleteSale, CustomOrderStatus, MeasurementOverrides, MoveOrderStage,
    PlaceOrder, SaleLine, SubmitCustomOrder,
};
use serde::{Deserialize, Serialize};
use snapshot_store::SnapshotStore;

use super::AppState;
use crate::error::ApiError;

// -- Request types --

#[derive(Deserialize)]
pub struct SaleRequest {
    pub customer_id: String,
    pub lines: Vec<SaleLineRequest>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

#[derive(Deserialize)]
pub struct SaleLineRequest {
    pub item_id: String,
    pub quantity: u32,
}

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub customer_id: String,
    pub cart: Cart,
    #[serde(default)]
    pub payment_method: Option<String>,
}

#[derive(Deserialize)]
pub struct CustomOrderRequest {
    pub customer_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub material_provided: bool,
    #[serde(default)]
    pub overrides: Option<MeasurementOverrides>,
}

#[derive(Deserialize)]
pub struct StageRequest {
    pub target: CustomOrderStatus,
}

// -- Response types --

#[derive(Serialize)]
pub struct SaleResponse {
    pub invoice_id: String,
}

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub invoice_id: String,
    pub rental_ids: Vec<String>,
}

#[derive(Serialize)]
pub struct CustomOrderResponse {
    pub order_id: String,
    pub work_order_id: String,
}

#[derive(Serialize)]
pub struct StageResponse {
    pub order_id: String,
    pub status: String,
}

// -- Handlers --

/// GET /snapshot — returns the full application snapshot.
pub async fn snapshot<S: SnapshotStore<AppData>>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<AppData> {
    Json(state.service.snapshot().await)
}

/// POST /pos/sales — completes an in-store sale.
#[tracing::instrument(skip(state, req))]
pub async fn complete_sale<S: SnapshotStore<AppData>>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<SaleRequest>,
) -> Result<(StatusCode, Json<SaleResponse>), ApiError> {
    if req.lines.is_empty() {
        return Err(ApiError::BadRequest("sale has no lines".to_string()));
    }

    let mut cmd = CompleteSale::cash(
        req.customer_id.as_str(),
        req.lines
            .iter()
            .map(|l| SaleLine::new(l.item_id.as_str(), l.quantity))
            .collect(),
    );
    if let Some(method) = req.payment_method {
        cmd.payment_method = method;
    }

    let invoice_id = state.service.complete_sale(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(SaleResponse {
            invoice_id: invoice_id.to_string(),
        }),
    ))
}

/// POST /checkout — commits a cart as one combined order.
#[tracing::instrument(skip(state, req))]
pub async fn checkout<S: SnapshotStore<AppData>>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<CheckoutResponse>), ApiError> {
    if req.cart.is_empty() {
        return Err(ApiError::BadRequest("cart is empty".to_string()));
    }

    let mut cmd = PlaceOrder::card(req.customer_id.as_str(), req.cart);
    if let Some(method) = req.payment_method {
        cmd.payment_method = method;
    }

    let placed = state.service.place_order(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            invoice_id: placed.invoice_id.to_string(),
            rental_ids: placed.rental_ids.iter().map(|r| r.to_string()).collect(),
        }),
    ))
}

/// POST /custom-orders — submits a custom tailoring order.
#[tracing::instrument(skip(state, req))]
pub async fn submit_custom_order<S: SnapshotStore<AppData>>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CustomOrderRequest>,
) -> Result<(StatusCode, Json<CustomOrderResponse>), ApiError> {
    let mut cmd = SubmitCustomOrder::new(req.customer_id.as_str(), req.title, req.description);
    cmd.material_provided = req.material_provided;
    cmd.overrides = req.overrides;

    let submitted = state.service.submit_custom_order(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(CustomOrderResponse {
            order_id: submitted.order_id.to_string(),
            work_order_id: submitted.work_order_id.to_string(),
        }),
    ))
}

/// POST /custom-orders/{id}/stage — moves an order to an adjacent stage.
#[tracing::instrument(skip(state, req))]
pub async fn move_stage<S: SnapshotStore<AppData>>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    Json(req): Json<StageRequest>,
) -> Result<Json<StageResponse>, ApiError> {
    let cmd = MoveOrderStage::new(id.as_str(), req.target);
    state.service.move_order_stage(cmd).await?;
    Ok(Json(StageResponse {
        order_id: id,
        status: req.target.to_string(),
    }))
}
