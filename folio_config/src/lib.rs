use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Environment, File, FileFormat};
pub use duration::Duration;
use folio_models::storage::StorageKey;
use serde::Deserialize;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the config files listed in `FOLIO_CONFIG` (separated by `:`), or the
/// default config if the variable is not set.
pub fn load() -> anyhow::Result<Config> {
    match std::env::var("FOLIO_CONFIG") {
        Ok(paths) => load_from(&paths.split(':').collect::<Vec<_>>()),
        Err(_) => load_from(&[DEFAULT_CONFIG_PATH]),
    }
}

/// Loads and merges the given config files, later files taking precedence.
///
/// Variables of the form `FOLIO__<SECTION>__<KEY>` override values from the
/// files.
pub fn load_from(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(Environment::with_prefix("FOLIO").prefix_separator("__").separator("__"))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub contact: ContactConfig,
    pub notification: NotificationConfig,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub submissions_key: StorageKey,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub submit_delay: Duration,
    pub success_message_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct NotificationConfig {
    pub ttl: Duration,
}
