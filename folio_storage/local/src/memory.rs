use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use anyhow::anyhow;
use folio_models::storage::StorageKey;
use folio_storage_contracts::KeyValueStore;
use folio_utils::trace_instrument;

/// A process-local store. Cloned handles share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<StorageKey, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(
        &self,
        f: impl FnOnce(&mut HashMap<StorageKey, String>) -> T,
    ) -> anyhow::Result<T> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Memory store lock is poisoned"))?;
        Ok(f(&mut entries))
    }
}

impl KeyValueStore for MemoryStore {
    #[trace_instrument(skip(self))]
    async fn get(&self, key: &StorageKey) -> anyhow::Result<Option<String>> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    #[trace_instrument(skip(self, value))]
    async fn set(&self, key: &StorageKey, value: String) -> anyhow::Result<()> {
        self.with_entries(|entries| {
            entries.insert(key.clone(), value);
        })
    }

    #[trace_instrument(skip(self))]
    async fn remove(&self, key: &StorageKey) -> anyhow::Result<()> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }
}
