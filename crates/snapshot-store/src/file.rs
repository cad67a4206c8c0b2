use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::store::SnapshotStore;

/// Durable snapshot store backed by a single JSON file.
///
/// The whole document is rewritten on every save. Writes go through a
/// temporary file followed by a rename so a crash mid-write cannot leave a
/// truncated document behind.
pub struct JsonFileStore<S> {
    path: PathBuf,
    seed: S,
}

impl<S> JsonFileStore<S>
where
    S: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Creates a store writing to the given path with the given seed.
    pub fn new(path: impl Into<PathBuf>, seed: S) -> Self {
        Self {
            path: path.into(),
            seed,
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_document(&self, snapshot: &S) -> Result<()> {
        let raw = serde_json::to_vec_pretty(snapshot)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl<S> SnapshotStore<S> for JsonFileStore<S>
where
    S: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Option<S>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, snapshot: &S) -> Result<()> {
        self.write_document(snapshot).await
    }

    async fn reset(&self) -> Result<S> {
        tracing::info!(path = %self.path.display(), "resetting store to seed data");
        self.write_document(&self.seed).await?;
        Ok(self.seed.clone())
    }
}
