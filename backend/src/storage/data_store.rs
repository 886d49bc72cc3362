//! In-memory mirror of the persisted cafe data.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::traits::KeyValueStore;
use shared::{OrderHistory, OrderQuantities, Supplier};

/// Storage key for the supplier registry blob
pub const SUPPLIERS_KEY: &str = "cafe_data/suppliers";
/// Storage key for the order history blob
pub const HISTORY_KEY: &str = "cafe_data/history";
/// Storage key for the order quantities blob
pub const QUANTITIES_KEY: &str = "cafe_data/quantities";

/// Cadence of the background reload from the persistence gateway
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Snapshot of the three persisted structures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CafeData {
    pub suppliers: Vec<Supplier>,
    pub history: OrderHistory,
    pub quantities: OrderQuantities,
}

/// In-memory mirror of the persistence gateway.
///
/// Reads are served from the mirror. Every mutation re-serializes the full
/// structure, writes it through the gateway, and only then commits to the
/// mirror, so a failed write leaves memory and storage consistent and the
/// caller sees the error. The three keys are written independently; there is
/// no transaction across them.
pub struct CafeDataStore {
    gateway: Arc<dyn KeyValueStore>,
    state: RwLock<CafeData>,
}

impl CafeDataStore {
    pub fn new(gateway: Arc<dyn KeyValueStore>) -> Self {
        Self {
            gateway,
            state: RwLock::new(CafeData::default()),
        }
    }

    /// Reload all three structures from the gateway.
    ///
    /// Each blob loads independently: a missing or undeserializable blob
    /// falls back to the empty structure instead of failing the load.
    pub async fn load(&self) -> Result<()> {
        let suppliers = self.read_blob::<Vec<Supplier>>(SUPPLIERS_KEY).await?;
        let history = self.read_blob::<OrderHistory>(HISTORY_KEY).await?;
        let quantities = self.read_blob::<OrderQuantities>(QUANTITIES_KEY).await?;

        let mut state = self.state.write().await;
        *state = CafeData {
            suppliers,
            history,
            quantities,
        };

        Ok(())
    }

    async fn read_blob<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.gateway.get(key).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    warn!(
                        "Failed to deserialize blob under '{}', treating as empty: {}",
                        key, e
                    );
                    Ok(T::default())
                }
            },
            None => Ok(T::default()),
        }
    }

    async fn write_blob<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.gateway.set(key, &raw).await
    }

    /// Clone of the current in-memory state.
    pub async fn snapshot(&self) -> CafeData {
        self.state.read().await.clone()
    }

    pub async fn suppliers(&self) -> Vec<Supplier> {
        self.state.read().await.suppliers.clone()
    }

    pub async fn history(&self) -> OrderHistory {
        self.state.read().await.history.clone()
    }

    pub async fn quantities(&self) -> OrderQuantities {
        self.state.read().await.quantities.clone()
    }

    /// Persist a new supplier registry, then commit it to the mirror.
    pub async fn replace_suppliers(&self, suppliers: Vec<Supplier>) -> Result<()> {
        self.write_blob(SUPPLIERS_KEY, &suppliers).await?;
        self.state.write().await.suppliers = suppliers;
        Ok(())
    }

    /// Persist a new order history, then commit it to the mirror.
    pub async fn replace_history(&self, history: OrderHistory) -> Result<()> {
        self.write_blob(HISTORY_KEY, &history).await?;
        self.state.write().await.history = history;
        Ok(())
    }

    /// Persist new order quantities, then commit them to the mirror.
    pub async fn replace_quantities(&self, quantities: OrderQuantities) -> Result<()> {
        self.write_blob(QUANTITIES_KEY, &quantities).await?;
        self.state.write().await.quantities = quantities;
        Ok(())
    }
}

/// Owner handle for the background refresh task.
///
/// The poll stops when the handle is dropped or explicitly stopped; an
/// in-flight reload is simply abandoned.
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the fixed-interval reload poll.
///
/// A reload racing an in-flight local edit may overwrite it; there is no
/// conflict detection or merge-by-timestamp (single-station tool). Failures
/// are logged and retried on the next tick.
pub fn spawn_refresh_task(store: Arc<CafeDataStore>, period: Duration) -> RefreshHandle {
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick fires immediately; the initial load already happened
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if let Err(e) = store.load().await {
                warn!("Periodic refresh failed, will retry next tick: {}", e);
            }
        }
    });

    info!("Started periodic refresh every {:?}", period);
    RefreshHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json_file::JsonFileStore;
    use async_trait::async_trait;
    use shared::Weekday;
    use tempfile::TempDir;

    /// Gateway double whose writes always fail.
    struct FailingStore;

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow::anyhow!("disk full"))
        }

        async fn delete(&self, _key: &str) -> Result<()> {
            Ok(())
        }

        async fn list(&self, _prefix: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    fn setup_test() -> (Arc<JsonFileStore>, Arc<CafeDataStore>, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let gateway = Arc::new(JsonFileStore::new(dir.path()).expect("Failed to create store"));
        let store = Arc::new(CafeDataStore::new(gateway.clone()));
        (gateway, store, dir)
    }

    fn test_supplier(id: &str) -> Supplier {
        Supplier {
            id: id.to_string(),
            name: "Acme".to_string(),
            days: vec![Weekday::Monday],
            products: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_load_with_empty_gateway_defaults_to_empty() {
        let (_gateway, store, _dir) = setup_test();

        store.load().await.unwrap();

        let data = store.snapshot().await;
        assert_eq!(data, CafeData::default());
    }

    #[tokio::test]
    async fn test_partial_load_does_not_fail() {
        let (gateway, store, _dir) = setup_test();

        // Only suppliers present; history and quantities missing
        let suppliers = vec![test_supplier("supplier::1")];
        gateway
            .set(SUPPLIERS_KEY, &serde_json::to_string(&suppliers).unwrap())
            .await
            .unwrap();

        store.load().await.unwrap();

        let data = store.snapshot().await;
        assert_eq!(data.suppliers, suppliers);
        assert!(data.history.is_empty());
        assert!(data.quantities.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_blob_defaults_to_empty() {
        let (gateway, store, _dir) = setup_test();

        gateway.set(HISTORY_KEY, "not json at all").await.unwrap();
        let suppliers = vec![test_supplier("supplier::1")];
        gateway
            .set(SUPPLIERS_KEY, &serde_json::to_string(&suppliers).unwrap())
            .await
            .unwrap();

        store.load().await.unwrap();

        let data = store.snapshot().await;
        assert!(data.history.is_empty());
        // The healthy blob still loads
        assert_eq!(data.suppliers.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_writes_through_and_commits() {
        let (gateway, store, _dir) = setup_test();

        let suppliers = vec![test_supplier("supplier::1")];
        store.replace_suppliers(suppliers.clone()).await.unwrap();

        assert_eq!(store.suppliers().await, suppliers);

        // The gateway holds the full re-serialized structure
        let raw = gateway.get(SUPPLIERS_KEY).await.unwrap().unwrap();
        let persisted: Vec<Supplier> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, suppliers);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_mirror_unchanged() {
        let store = Arc::new(CafeDataStore::new(Arc::new(FailingStore)));

        let result = store.replace_suppliers(vec![test_supplier("supplier::1")]).await;
        assert!(result.is_err());

        // Memory was never updated, so it still matches storage
        assert!(store.suppliers().await.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_task_picks_up_external_writes() {
        let (gateway, store, _dir) = setup_test();
        store.load().await.unwrap();

        let handle = spawn_refresh_task(store.clone(), Duration::from_millis(20));

        // Simulate another station writing through the gateway
        let suppliers = vec![test_supplier("supplier::1")];
        gateway
            .set(SUPPLIERS_KEY, &serde_json::to_string(&suppliers).unwrap())
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(store.suppliers().await, suppliers);

        handle.stop();
    }
}
