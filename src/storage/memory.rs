use async_trait::async_trait;
use dashmap::DashMap;

use super::KeyValueStore;
use crate::errors::Result;

/// Process-local store; contents vanish when the process exits
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
