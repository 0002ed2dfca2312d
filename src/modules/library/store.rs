use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::shared::errors::{AppError, AppResult};

/// Narrow contract for the persisted keyed collections (favorites, comments,
/// persisted detail aggregates). Values are JSON records; typed services
/// above this layer do the (de)serialization.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn read_list(&self, key: &str) -> AppResult<Vec<Value>>;
    async fn write_list(&self, key: &str, records: Vec<Value>) -> AppResult<()>;
}

/// JSON-file-backed store: one file holding a key -> records map, loaded at
/// open and flushed on every write.
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, Vec<Value>>>,
}

impl JsonFileStore {
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| AppError::Storage(format!("Corrupt store file: {}", e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!("Opened persisted store at {}", path.display());
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    async fn flush(&self, entries: &HashMap<String, Vec<Value>>) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn read_list(&self, key: &str) -> AppResult<Vec<Value>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned().unwrap_or_default())
    }

    async fn write_list(&self, key: &str, records: Vec<Value>) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        if records.is_empty() {
            entries.remove(key);
        } else {
            entries.insert(key.to_string(), records);
        }
        self.flush(&entries).await?;
        debug!("Flushed persisted store after write to {}", key);
        Ok(())
    }
}

/// In-memory store used by tests and embedders that opt out of persistence.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn read_list(&self, key: &str) -> AppResult<Vec<Value>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned().unwrap_or_default())
    }

    async fn write_list(&self, key: &str, records: Vec<Value>) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        if records.is_empty() {
            entries.remove(key);
        } else {
            entries.insert(key.to_string(), records);
        }
        Ok(())
    }
}
