//! Back-office endpoints: reset, inventory management, reports.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use domain::{AppData, ImportItems, Item, UpsertItem};
use reports::{
    CustomerSpend, DashboardStats, ItemQuantity, MonthlyRevenue, ReportSummary, dashboard_stats,
    monthly_revenue, report_summary, top_customers, top_purchased, top_rented,
};
use serde::Serialize;
use snapshot_store::SnapshotStore;

use super::AppState;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct ImportResponse {
    pub imported: usize,
}

/// Everything the reports page needs in one payload.
#[derive(Serialize)]
pub struct ReportsResponse {
    pub summary: ReportSummary,
    pub dashboard: DashboardStats,
    pub monthly: Vec<MonthlyRevenue>,
    pub top_rented: Vec<ItemQuantity>,
    pub top_purchased: Vec<ItemQuantity>,
    pub top_customers: Vec<CustomerSpend>,
}

/// POST /reset — restores the seed snapshot.
#[tracing::instrument(skip(state))]
pub async fn reset<S: SnapshotStore<AppData>>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<AppData>, ApiError> {
    let data = state.service.reset().await?;
    Ok(Json(data))
}

/// PUT /items — inserts or replaces one inventory item.
#[tracing::instrument(skip(state, item))]
pub async fn upsert_item<S: SnapshotStore<AppData>>(
    State(state): State<Arc<AppState<S>>>,
    Json(item): Json<Item>,
) -> Result<StatusCode, ApiError> {
    state.service.upsert_item(UpsertItem::new(item)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /items/import — bulk-imports inventory records.
#[tracing::instrument(skip(state, items))]
pub async fn import_items<S: SnapshotStore<AppData>>(
    State(state): State<Arc<AppState<S>>>,
    Json(items): Json<Vec<Item>>,
) -> Result<Json<ImportResponse>, ApiError> {
    let imported = state.service.import_items(ImportItems::new(items)).await?;
    Ok(Json(ImportResponse { imported }))
}

/// GET /reports/summary — computes all read-side summaries.
pub async fn reports<S: SnapshotStore<AppData>>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<ReportsResponse> {
    let data = state.service.snapshot().await;
    Json(ReportsResponse {
        summary: report_summary(&data),
        dashboard: dashboard_stats(&data, Utc::now()),
        monthly: monthly_revenue(&data),
        top_rented: top_rented(&data),
        top_purchased: top_purchased(&data),
        top_customers: top_customers(&data),
    })
}
