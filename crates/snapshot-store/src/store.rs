use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;

/// Core trait for snapshot store implementations.
///
/// A store holds at most one document of type `S` plus a fixed seed used to
/// (re-)initialize it. All implementations must be thread-safe.
///
/// Each `save` replaces the whole document; there is no partial update and
/// no concurrency control beyond last-write-wins, which matches the
/// single-client ownership model of the snapshot.
#[async_trait]
pub trait SnapshotStore<S>: Send + Sync
where
    S: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Loads the current document.
    ///
    /// Returns `None` if the store has never been written.
    async fn load(&self) -> Result<Option<S>>;

    /// Overwrites the stored document with the given snapshot.
    async fn save(&self, snapshot: &S) -> Result<()>;

    /// Overwrites the stored document with the seed and returns the seed.
    async fn reset(&self) -> Result<S>;
}

/// Extension trait providing convenience methods for snapshot stores.
#[async_trait]
pub trait SnapshotStoreExt<S>: SnapshotStore<S>
where
    S: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Loads the current document, seeding the store first if it is empty.
    async fn load_or_seed(&self) -> Result<S> {
        if let Some(snapshot) = self.load().await? {
            Ok(snapshot)
        } else {
            tracing::info!("store is empty, writing seed data");
            self.reset().await
        }
    }
}

#[async_trait]
impl<S, T> SnapshotStoreExt<S> for T
where
    S: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    T: SnapshotStore<S> + ?Sized,
{
}
