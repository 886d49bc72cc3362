//! # Storage Traits
//!
//! Defines the persistence gateway contract the domain layer depends on, so
//! concrete backends can be swapped without touching business logic.

use anyhow::Result;
use async_trait::async_trait;

/// Key-value persistence gateway.
///
/// Values are opaque serialized blobs; the gateway neither parses nor
/// validates them. One concrete adapter exists per backend, constructed
/// explicitly at startup and injected into the core — no process-wide
/// singletons.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieve the value stored under `key`, or None when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value wholesale
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Succeeds when already absent.
    /// Part of the gateway contract though unused by current flows.
    async fn delete(&self, key: &str) -> Result<()>;

    /// List all stored keys starting with `prefix`.
    /// Part of the gateway contract though unused by current flows.
    async fn list(&self, prefix: &str) -> Result<Vec<String>>;
}
