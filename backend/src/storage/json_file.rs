//! JSON-file persistence adapter.

use anyhow::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::traits::KeyValueStore;

/// File-backed key-value store: one blob file per key under a base directory.
///
/// Slash-separated key segments become subdirectories, so "cafe_data/history"
/// lands at `<base>/cafe_data/history.json`. Writes go through a temp file
/// and rename, so a crash mid-write never leaves a truncated blob behind.
#[derive(Clone)]
pub struct JsonFileStore {
    base_directory: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a store in the default data directory, ~/Documents/Cafe Order Tracker.
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Cafe Order Tracker");

        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Base directory this store reads and writes under.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn path_for_key(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(anyhow::anyhow!("Storage key cannot be empty"));
        }

        let mut path = self.base_directory.clone();
        for segment in key.split('/') {
            // Keep every key inside the base directory
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(anyhow::anyhow!("Invalid storage key: {}", key));
            }
            path.push(segment);
        }
        path.set_extension("json");

        Ok(path)
    }

    fn collect_keys(&self, dir: &Path, keys: &mut Vec<String>) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                self.collect_keys(&path, keys)?;
            } else if path.extension().and_then(|e| e.to_str()) == Some("json") {
                let trimmed = path.with_extension("");
                if let Ok(relative) = trimmed.strip_prefix(&self.base_directory) {
                    let key = relative
                        .iter()
                        .filter_map(|c| c.to_str())
                        .collect::<Vec<_>>()
                        .join("/");
                    keys.push(key);
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for_key(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path)?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for_key(key)?;

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Atomic write using temp file
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for_key(key)?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        if !self.base_directory.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        self.collect_keys(&self.base_directory, &mut keys)?;

        let mut matching: Vec<String> = keys
            .into_iter()
            .filter(|k| k.starts_with(prefix))
            .collect();
        matching.sort();

        Ok(matching)
    }
}
