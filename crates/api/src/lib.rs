//! HTTP API server with observability for the boutique retail system.
//!
//! Provides REST endpoints for point-of-sale, checkout, custom-order kanban,
//! and inventory management, with structured logging (tracing) and
//! Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use domain::{AppData, BoutiqueService, DomainError};
use metrics_exporter_prometheus::PrometheusHandle;
use snapshot_store::SnapshotStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: SnapshotStore<AppData> + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/snapshot", get(routes::shop::snapshot::<S>))
        .route("/reset", post(routes::admin::reset::<S>))
        .route("/pos/sales", post(routes::shop::complete_sale::<S>))
        .route("/checkout", post(routes::shop::checkout::<S>))
        .route("/custom-orders", post(routes::shop::submit_custom_order::<S>))
        .route(
            "/custom-orders/{id}/stage",
            post(routes::shop::move_stage::<S>),
        )
        .route("/items", put(routes::admin::upsert_item::<S>))
        .route("/items/import", post(routes::admin::import_items::<S>))
        .route("/reports/summary", get(routes::admin::reports::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state backed by the given snapshot store.
pub async fn create_default_state<S: SnapshotStore<AppData> + 'static>(
    store: S,
) -> Result<Arc<AppState<S>>, DomainError> {
    let service = BoutiqueService::init(store).await?;
    Ok(Arc::new(AppState { service }))
}
