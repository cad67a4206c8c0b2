//! HTTP route handlers.

pub mod admin;
pub mod health;
pub mod metrics;
pub mod shop;

use domain::{AppData, BoutiqueService};
use snapshot_store::SnapshotStore;

/// Shared application state accessible from all handlers.
pub struct AppState<S: SnapshotStore<AppData>> {
    pub service: BoutiqueService<S>,
}
