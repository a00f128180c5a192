use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use super::KeyValueStore;
use crate::errors::Result;

/// Name of the single entry that holds the whole code → token mapping
pub const TOKENS_KEY: &str = "analyticsTokens";

/// Remembers the analytics token issued for each short code.
///
/// The mapping is stored as one JSON object under [`TOKENS_KEY`]. At most
/// one token is kept per code; saving again for the same code overwrites.
/// Tokens never expire.
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl TokenStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Absent or unreadable entries count as an empty mapping
    async fn load_map(&self) -> Result<BTreeMap<String, String>> {
        let Some(raw) = self.store.get(TOKENS_KEY).await? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!("Ignoring unreadable token mapping: {}", e);
                Ok(BTreeMap::new())
            }
        }
    }

    async fn save_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string(map)?;
        self.store.set(TOKENS_KEY, raw).await
    }

    pub async fn save_token(&self, code: &str, token: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load_map().await?;
        if let Some(previous) = map.insert(code.to_string(), token.to_string())
            && previous != token
        {
            info!("Replacing stored analytics token for {}", code);
        }
        self.save_map(&map).await
    }

    pub async fn get_token(&self, code: &str) -> Result<Option<String>> {
        let map = self.load_map().await?;
        Ok(map.get(code).filter(|t| !t.is_empty()).cloned())
    }

    /// All stored pairs with a usable token, ordered by code
    pub async fn list(&self) -> Result<Vec<(String, String)>> {
        Ok(self
            .load_map()
            .await?
            .into_iter()
            .filter(|(_, token)| !token.is_empty())
            .collect())
    }

    pub async fn forget(&self, code: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load_map().await?;
        if map.remove(code).is_none() {
            return Ok(false);
        }
        self.save_map(&map).await?;
        Ok(true)
    }
}
