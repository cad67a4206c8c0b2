//! High-level service wrapping the pure operations with persistence.
//!
//! Every mutating call computes the next snapshot, swaps it in, then writes
//! it through the store. The in-memory swap happens first: if the write
//! fails the caller sees the error while the process keeps the new state,
//! and `reload` can re-sync from disk.

use chrono::Utc;
use common::InvoiceId;
use snapshot_store::{SnapshotStore, SnapshotStoreExt};
use tokio::sync::RwLock;

use crate::error::DomainError;
use crate::ops::{
    CompleteSale, ImportItems, MoveOrderStage, PlaceOrder, SubmitCustomOrder, UpsertItem,
    complete_sale, import_items, move_order_stage, place_order, submit_custom_order, upsert_item,
};
use crate::snapshot::AppData;

/// Result of committing a cart through checkout.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub invoice_id: InvoiceId,
    pub rental_ids: Vec<common::RentalId>,
}

/// Result of submitting a custom tailoring order.
#[derive(Debug, Clone)]
pub struct SubmittedOrder {
    pub order_id: common::CustomOrderId,
    pub work_order_id: common::WorkOrderId,
}

/// Service for running boutique operations against a persisted snapshot.
pub struct BoutiqueService<S: SnapshotStore<AppData>> {
    store: S,
    current: RwLock<AppData>,
}

impl<S: SnapshotStore<AppData>> BoutiqueService<S> {
    /// Creates the service, loading the stored snapshot or seeding a fresh
    /// one if nothing has been persisted yet.
    pub async fn init(store: S) -> Result<Self, DomainError> {
        let current = store.load_or_seed().await?;
        Ok(Self {
            store,
            current: RwLock::new(current),
        })
    }

    /// Returns a copy of the current snapshot.
    pub async fn snapshot(&self) -> AppData {
        self.current.read().await.clone()
    }

    /// Discards in-memory state and re-reads the stored snapshot.
    #[tracing::instrument(skip(self))]
    pub async fn reload(&self) -> Result<AppData, DomainError> {
        let mut guard = self.current.write().await;
        *guard = self.store.load_or_seed().await?;
        Ok(guard.clone())
    }

    /// Resets the store and memory back to the seed snapshot.
    #[tracing::instrument(skip(self))]
    pub async fn reset(&self) -> Result<AppData, DomainError> {
        let mut guard = self.current.write().await;
        *guard = self.store.reset().await?;
        tracing::info!("snapshot reset to seed data");
        Ok(guard.clone())
    }

    /// Completes a point-of-sale purchase.
    #[tracing::instrument(skip(self, cmd), fields(customer_id = %cmd.customer_id))]
    pub async fn complete_sale(&self, cmd: CompleteSale) -> Result<InvoiceId, DomainError> {
        let mut guard = self.current.write().await;
        let outcome = complete_sale(&guard, &cmd, Utc::now())?;
        *guard = outcome.data;
        self.persist(&guard).await?;
        metrics::counter!("boutique_sales_total").increment(1);
        Ok(outcome.invoice_id)
    }

    /// Commits a cart through checkout, producing one combined invoice.
    #[tracing::instrument(skip(self, cmd), fields(customer_id = %cmd.customer_id, lines = cmd.cart.len()))]
    pub async fn place_order(&self, cmd: PlaceOrder) -> Result<PlacedOrder, DomainError> {
        let mut guard = self.current.write().await;
        let outcome = place_order(&guard, &cmd, Utc::now())?;
        *guard = outcome.data;
        self.persist(&guard).await?;
        metrics::counter!("boutique_checkouts_total").increment(1);
        Ok(PlacedOrder {
            invoice_id: outcome.invoice_id,
            rental_ids: outcome.rental_ids,
        })
    }

    /// Submits a custom tailoring order with its work order.
    #[tracing::instrument(skip(self, cmd), fields(customer_id = %cmd.customer_id))]
    pub async fn submit_custom_order(
        &self,
        cmd: SubmitCustomOrder,
    ) -> Result<SubmittedOrder, DomainError> {
        let mut guard = self.current.write().await;
        let outcome = submit_custom_order(&guard, &cmd, Utc::now())?;
        *guard = outcome.data;
        self.persist(&guard).await?;
        metrics::counter!("boutique_custom_orders_total").increment(1);
        Ok(SubmittedOrder {
            order_id: outcome.order_id,
            work_order_id: outcome.work_order_id,
        })
    }

    /// Moves a custom order one kanban stage forward or backward.
    #[tracing::instrument(skip(self, cmd), fields(order_id = %cmd.order_id, target = %cmd.target))]
    pub async fn move_order_stage(&self, cmd: MoveOrderStage) -> Result<(), DomainError> {
        let mut guard = self.current.write().await;
        let next = move_order_stage(&guard, &cmd)?;
        *guard = next;
        self.persist(&guard).await?;
        metrics::counter!("boutique_stage_moves_total").increment(1);
        Ok(())
    }

    /// Inserts or replaces a single inventory item.
    #[tracing::instrument(skip(self, cmd), fields(item_id = %cmd.item.id))]
    pub async fn upsert_item(&self, cmd: UpsertItem) -> Result<(), DomainError> {
        let mut guard = self.current.write().await;
        let next = upsert_item(&guard, &cmd);
        *guard = next;
        self.persist(&guard).await?;
        Ok(())
    }

    /// Bulk-imports inventory records, returning how many were applied.
    #[tracing::instrument(skip(self, cmd), fields(records = cmd.items.len()))]
    pub async fn import_items(&self, cmd: ImportItems) -> Result<usize, DomainError> {
        let count = cmd.items.len();
        let mut guard = self.current.write().await;
        let next = import_items(&guard, &cmd);
        *guard = next;
        self.persist(&guard).await?;
        metrics::counter!("boutique_items_imported_total").increment(count as u64);
        Ok(count)
    }

    async fn persist(&self, data: &AppData) -> Result<(), DomainError> {
        if let Err(e) = self.store.save(data).await {
            tracing::error!(error = %e, "failed to persist snapshot");
            return Err(DomainError::Persistence(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::SaleLine;
    use crate::seed::demo_data;
    use snapshot_store::InMemoryStore;

    async fn service() -> BoutiqueService<InMemoryStore<AppData>> {
        BoutiqueService::init(InMemoryStore::new(demo_data()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn sale_updates_memory_and_store() {
        let store = InMemoryStore::new(demo_data());
        let svc = BoutiqueService::init(store.clone()).await.unwrap();

        svc.complete_sale(CompleteSale::cash("cust-1", vec![SaleLine::new("i1", 2)]))
            .await
            .unwrap();

        let in_memory = svc.snapshot().await;
        assert_eq!(in_memory.item(&"i1".into()).unwrap().qty, 3);

        let persisted = store.load().await.unwrap().unwrap();
        assert_eq!(persisted.item(&"i1".into()).unwrap().qty, 3);
    }

    #[tokio::test]
    async fn failed_save_reports_error_but_keeps_new_state() {
        let store = InMemoryStore::new(demo_data());
        let svc = BoutiqueService::init(store.clone()).await.unwrap();
        store.set_fail_saves(true).await;

        let err = svc
            .complete_sale(CompleteSale::cash("cust-1", vec![SaleLine::new("i1", 1)]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));

        // The sale applied in memory even though persistence failed.
        assert_eq!(svc.snapshot().await.item(&"i1".into()).unwrap().qty, 4);

        // Reload re-syncs from the untouched store.
        store.set_fail_saves(false).await;
        let reloaded = svc.reload().await.unwrap();
        assert_eq!(reloaded.item(&"i1".into()).unwrap().qty, 5);
    }

    #[tokio::test]
    async fn reset_returns_to_seed() {
        let svc = service().await;
        svc.complete_sale(CompleteSale::cash("cust-1", vec![SaleLine::new("i1", 5)]))
            .await
            .unwrap();
        assert_eq!(svc.snapshot().await.item(&"i1".into()).unwrap().qty, 0);

        let data = svc.reset().await.unwrap();
        assert_eq!(data.item(&"i1".into()).unwrap().qty, 5);
    }

    #[tokio::test]
    async fn domain_rejection_leaves_state_untouched() {
        let svc = service().await;
        let err = svc
            .complete_sale(CompleteSale::cash("cust-1", vec![SaleLine::new("i1", 99)]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Stock { .. }));
        assert_eq!(svc.snapshot().await.item(&"i1".into()).unwrap().qty, 5);
    }
}
