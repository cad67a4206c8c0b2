use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::store::SnapshotStore;
use crate::{Result, StoreError};

/// In-memory snapshot store for tests and demos.
///
/// The document is held as serialized JSON so that every load and save goes
/// through the same serde round trip as the durable implementation.
pub struct InMemoryStore<S> {
    slot: Arc<RwLock<Option<String>>>,
    seed: S,
    fail_saves: Arc<RwLock<bool>>,
}

impl<S: Clone> Clone for InMemoryStore<S> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            seed: self.seed.clone(),
            fail_saves: self.fail_saves.clone(),
        }
    }
}

impl<S> InMemoryStore<S>
where
    S: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Creates a new empty store with the given seed document.
    pub fn new(seed: S) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            seed,
            fail_saves: Arc::new(RwLock::new(false)),
        }
    }

    /// Returns true if the store currently holds a document.
    pub async fn is_populated(&self) -> bool {
        self.slot.read().await.is_some()
    }

    /// Makes subsequent `save` calls fail, for exercising the
    /// optimistic-update error path in tests.
    pub async fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.write().await = fail;
    }
}

#[async_trait]
impl<S> SnapshotStore<S> for InMemoryStore<S>
where
    S: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Option<S>> {
        let slot = self.slot.read().await;
        match slot.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, snapshot: &S) -> Result<()> {
        if *self.fail_saves.read().await {
            return Err(StoreError::Io(std::io::Error::other(
                "simulated save failure",
            )));
        }
        let raw = serde_json::to_string(snapshot)?;
        *self.slot.write().await = Some(raw);
        Ok(())
    }

    async fn reset(&self) -> Result<S> {
        let raw = serde_json::to_string(&self.seed)?;
        *self.slot.write().await = Some(raw);
        Ok(self.seed.clone())
    }
}
