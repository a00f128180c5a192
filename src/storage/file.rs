use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, error};

use super::KeyValueStore;
use crate::errors::{ClientError, Result};

/// Key/value entries kept as one JSON object on disk
///
/// The file is created on the first write, not on open. Writes go to a
/// sibling `.tmp` file which is then renamed over the original.
pub struct FileStore {
    file_path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref().to_path_buf();
        if file_path.as_os_str().is_empty() {
            return Err(ClientError::config("storage.file_path must not be empty"));
        }
        Ok(FileStore {
            file_path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.file_path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                error!(
                    "Failed to parse store file {}: {}",
                    self.file_path.display(),
                    e
                );
                ClientError::serialization(format!(
                    "Failed to parse store file {}: {}",
                    self.file_path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store file {} not found, starting empty", self.file_path.display());
                Ok(BTreeMap::new())
            }
            Err(e) => Err(ClientError::storage(format!(
                "Failed to read store file {}: {}",
                self.file_path.display(),
                e
            ))),
        }
    }

    fn save_to_file(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let mut tmp = self.file_path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(|e| {
            ClientError::storage(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.file_path).map_err(|e| {
            ClientError::storage(format!(
                "Failed to replace {}: {}",
                self.file_path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.load_from_file()?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.load_from_file()?;
        entries.insert(key.to_string(), value);
        self.save_to_file(&entries)
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let _guard = self.lock.lock();
        let mut entries = self.load_from_file()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        self.save_to_file(&entries)?;
        Ok(true)
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
