use std::future::Future;

use folio_models::storage::StorageKey;

/// A persistent string-to-string store, the local counterpart of a browser's
/// `localStorage`.
///
/// Implementations assume a single writer; read-modify-write sequences built
/// on top of this trait are not atomic.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Reads the value stored under `key`.
    fn get(&self, key: &StorageKey) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;

    /// Creates or replaces the value stored under `key`.
    fn set(&self, key: &StorageKey, value: String)
        -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Removes the value stored under `key`.
    ///
    /// Does nothing if no value is stored under `key`.
    fn remove(&self, key: &StorageKey) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockKeyValueStore {
    pub fn with_get(mut self, key: StorageKey, result: Option<String>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_error(mut self, key: StorageKey) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "storage unavailable"
                ))))
            });
        self
    }

    pub fn with_set(mut self, key: StorageKey, value: String) -> Self {
        self.expect_set()
            .once()
            .with(mockall::predicate::eq(key), mockall::predicate::eq(value))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_set_error(mut self, key: StorageKey) -> Self {
        self.expect_set()
            .once()
            .with(mockall::predicate::eq(key), mockall::predicate::always())
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "quota exceeded"
                ))))
            });
        self
    }

    pub fn with_remove(mut self, key: StorageKey) -> Self {
        self.expect_remove()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }
}
