//! Per-invocation config and store access

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use log::debug;

use pipetrack::adapters::memory::MemoryStore;
use pipetrack::config::Config;
use pipetrack::managers::StoreHandle;
use pipetrack::resolver::DependencyResolver;

/// Global flags that decide where config and records come from
#[derive(Debug)]
pub struct Session {
    config_path: Option<PathBuf>,
    store_path: Option<PathBuf>,
}

impl Session {
    pub const fn new(config_path: Option<PathBuf>, store_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            store_path,
        }
    }

    /// Load and validate config
    pub fn config(&self) -> anyhow::Result<Config> {
        Ok(Config::load(self.config_path.as_deref())?)
    }

    /// Load config without rejecting invalid rules
    pub fn raw_config(&self) -> anyhow::Result<Config> {
        Ok(Config::read(self.config_path.as_deref())?)
    }

    /// Open the store named by `--store` or `store.snapshot`
    pub fn store(&self, config: &Config) -> anyhow::Result<StoreHandle> {
        let Some(path) = self.store_path.as_ref().or(config.store.snapshot.as_ref()) else {
            bail!("no store configured: pass --store <snapshot.json> or set store.snapshot in config");
        };
        debug!("Opening snapshot {}", path.display());
        let store = MemoryStore::from_snapshot_file(path)
            .with_context(|| format!("failed to open store {}", path.display()))?;
        Ok(Arc::new(store))
    }

    /// Build a resolver over the configured store and rules
    pub fn resolver(&self) -> anyhow::Result<DependencyResolver> {
        let config = self.config()?;
        let store = self.store(&config)?;
        Ok(DependencyResolver::from_store(store, config.pipeline))
    }
}
