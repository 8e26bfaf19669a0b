use anyhow::Context;
use folio_core_contact_contracts::record::ContactRecordRepository;
use folio_models::{contact::FormRecord, storage::StorageKey};
use folio_storage_contracts::KeyValueStore;
use folio_utils::trace_instrument;
use tracing::warn;

/// Stores the submitted forms as a json array under a single storage key.
#[derive(Debug, Clone)]
pub struct ContactRecordRepositoryImpl<Store> {
    store: Store,
    config: ContactRecordRepositoryConfig,
}

#[derive(Debug, Clone)]
pub struct ContactRecordRepositoryConfig {
    pub key: StorageKey,
}

impl<Store> ContactRecordRepositoryImpl<Store> {
    pub fn new(store: Store, config: ContactRecordRepositoryConfig) -> Self {
        Self { store, config }
    }
}

impl<Store> ContactRecordRepository for ContactRecordRepositoryImpl<Store>
where
    Store: KeyValueStore,
{
    #[trace_instrument(skip(self))]
    async fn list(&self) -> anyhow::Result<Vec<FormRecord>> {
        let Some(stored) = self.store.get(&self.config.key).await? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&stored).unwrap_or_else(|err| {
            warn!(key = %self.config.key, "Discarding malformed submissions: {err}");
            Vec::new()
        }))
    }

    #[trace_instrument(skip(self))]
    async fn append(&self, record: &FormRecord) -> anyhow::Result<()> {
        let mut records = self.list().await?;
        records.push(record.clone());
        let value = serde_json::to_string(&records).context("Failed to serialize submissions")?;
        self.store.set(&self.config.key, value).await
    }

    #[trace_instrument(skip(self))]
    async fn clear(&self) -> anyhow::Result<()> {
        self.store.remove(&self.config.key).await
    }
}
