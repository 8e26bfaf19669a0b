use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use folio_models::storage::StorageKey;
use folio_storage_contracts::KeyValueStore;
use folio_utils::trace_instrument;
use tracing::debug;

/// A store that keeps each entry in its own file below a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FileStoreConfig {
    pub path: PathBuf,
}

impl FileStore {
    /// Opens the store, creating the root directory if necessary.
    pub async fn open(config: &FileStoreConfig) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&config.path)
            .await
            .with_context(|| {
                format!(
                    "Failed to create storage directory at {}",
                    config.path.display()
                )
            })?;
        debug!(path = %config.path.display(), "opened file store");

        Ok(Self {
            root: config.path.clone(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &StorageKey) -> PathBuf {
        self.root.join(file_name(key))
    }
}

impl KeyValueStore for FileStore {
    #[trace_instrument(skip(self))]
    async fn get(&self, key: &StorageKey) -> anyhow::Result<Option<String>> {
        match tokio::fs::read_to_string(self.entry_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).context("Failed to read value from storage"),
        }
    }

    #[trace_instrument(skip(self, value))]
    async fn set(&self, key: &StorageKey, value: String) -> anyhow::Result<()> {
        let path = self.entry_path(key);
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, value)
            .await
            .context("Failed to write value to storage")?;
        tokio::fs::rename(&tmp, &path)
            .await
            .context("Failed to replace stored value")
    }

    #[trace_instrument(skip(self))]
    async fn remove(&self, key: &StorageKey) -> anyhow::Result<()> {
        match tokio::fs::remove_file(self.entry_path(key)).await {
            Err(err) if err.kind() != ErrorKind::NotFound => {
                Err(err).context("Failed to remove value from storage")
            }
            _ => Ok(()),
        }
    }
}

/// Escapes every byte of `key` that is not safe to use in a file name.
fn file_name(key: &StorageKey) -> String {
    let mut out = String::with_capacity(key.len() + 5);
    for b in key.bytes() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out.push_str(".json");
    out
}
