//! Shared helpers for REST handler tests.

use axum::Router;
use std::sync::Arc;
use tempfile::TempDir;

use crate::storage::{CafeDataStore, JsonFileStore};
use crate::{api_router, AppState};

/// Build a full API router backed by a throwaway data directory.
///
/// The TempDir must be kept alive for the duration of the test.
pub async fn setup_test_app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let gateway = Arc::new(JsonFileStore::new(dir.path()).expect("Failed to create store"));
    let store = Arc::new(CafeDataStore::new(gateway));
    store.load().await.expect("Failed to load state");

    let app_state = AppState {
        supplier_service: crate::domain::SupplierService::new(store.clone()),
        order_service: crate::domain::OrderService::new(store.clone()),
        compliance_service: crate::domain::ComplianceService::new(store.clone()),
        admin_gate_service: crate::domain::AdminGateService::new(),
    };

    (api_router().with_state(app_state), dir)
}
