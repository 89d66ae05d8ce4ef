use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use persistence::file_store::FileStore;
use persistence::memory_store::MemoryStore;
use persistence::store::KeyValueStore;

const DEFAULT_STORE_PATH: &str = "catalog-store.json";
const IN_MEMORY: &str = ":memory:";

/// Where the catalog and session keys are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    File(PathBuf),
    InMemory,
}

impl StoreConfig {
    /// Environment variables:
    /// - CATALOG_STORE_PATH: JSON file path (default: "catalog-store.json");
    ///   `:memory:` keeps everything in process memory
    pub fn from_env() -> Self {
        Self::from_value(env::var("CATALOG_STORE_PATH").ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(IN_MEMORY) => StoreConfig::InMemory,
            Some(path) if !path.is_empty() => StoreConfig::File(PathBuf::from(path)),
            _ => StoreConfig::File(PathBuf::from(DEFAULT_STORE_PATH)),
        }
    }

    pub fn open(&self) -> Arc<dyn KeyValueStore> {
        match self {
            StoreConfig::File(path) => Arc::new(FileStore::open(path.clone())),
            StoreConfig::InMemory => {
                tracing::warn!("Catalog store is in memory; changes are lost on restart");
                Arc::new(MemoryStore::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_file_in_working_directory() {
        assert_eq!(
            StoreConfig::from_value(None),
            StoreConfig::File(PathBuf::from("catalog-store.json"))
        );
        assert_eq!(
            StoreConfig::from_value(Some("  ".to_string())),
            StoreConfig::File(PathBuf::from("catalog-store.json"))
        );
    }

    #[test]
    fn should_select_memory_store() {
        assert_eq!(
            StoreConfig::from_value(Some(":memory:".to_string())),
            StoreConfig::InMemory
        );
    }

    #[test]
    fn should_use_configured_path() {
        assert_eq!(
            StoreConfig::from_value(Some("/var/lib/catalog/store.json".to_string())),
            StoreConfig::File(PathBuf::from("/var/lib/catalog/store.json"))
        );
    }
}
