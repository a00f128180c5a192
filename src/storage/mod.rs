//! Client-side key/value storage
//!
//! The token store sits on a tiny `get`/`set`/`remove` interface so that the
//! persistence mechanism can be swapped (JSON file on disk, or memory for
//! tests and throwaway sessions). Every call is atomic on its own; no
//! ordering or transactional guarantees beyond a single key are provided.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::config::{StorageConfig, StoreBackend};
use crate::errors::Result;

mod file;
mod memory;
mod token_store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use token_store::{TOKENS_KEY, TokenStore};

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Returns whether the key was present
    async fn remove(&self, key: &str) -> Result<bool>;

    /// Short name used in logs and `--help` output
    fn backend_name(&self) -> &'static str;
}

pub struct StoreFactory;

impl StoreFactory {
    pub fn create(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
        let store: Arc<dyn KeyValueStore> = match config.backend {
            StoreBackend::File => Arc::new(FileStore::new(&config.file_path)?),
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };
        debug!("Using token store backend: {}", store.backend_name());
        Ok(store)
    }
}
