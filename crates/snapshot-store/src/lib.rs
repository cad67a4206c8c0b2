//! Persistence gateway for the boutique retail system.
//!
//! The whole business dataset lives in one JSON document. A [`SnapshotStore`]
//! can load it, overwrite it, or reset it to a fixed seed. Two
//! implementations are provided:
//! - [`InMemoryStore`] for tests and throwaway demos
//! - [`JsonFileStore`] for a durable single-file document on disk

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::{Result, StoreError};
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use store::{SnapshotStore, SnapshotStoreExt};
