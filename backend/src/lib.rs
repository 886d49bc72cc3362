//! # Cafe Order Tracker Backend
//!
//! Contains all non-UI logic for the supplier-ordering checklist.
//!
//! This crate is the orchestration layer that brings together:
//! - **Domain**: scheduling, order state and supplier registry logic
//! - **Storage**: the key-value persistence gateway and the in-memory mirror
//! - **IO**: the REST surface the frontend talks to
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (any frontend)
//!     |
//! IO Layer (REST handlers)
//!     |
//! Domain Layer (services, pure core)
//!     |
//! Storage Layer (key-value gateway)
//! ```
//!
//! The persistence gateway is constructed in `main` and injected here; the
//! core never reaches for a process-wide storage singleton.

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::domain::{AdminGateService, ComplianceService, OrderService, SupplierService};
use crate::storage::{CafeDataStore, KeyValueStore};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub supplier_service: SupplierService,
    pub order_service: OrderService,
    pub compliance_service: ComplianceService,
    pub admin_gate_service: AdminGateService,
}

/// Initialize the backend against an injected persistence gateway
pub async fn initialize_backend(
    gateway: Arc<dyn KeyValueStore>,
) -> Result<(AppState, Arc<CafeDataStore>)> {
    info!("Setting up data store mirror");
    let store = Arc::new(CafeDataStore::new(gateway));
    store.load().await?;

    info!("Setting up domain services");
    let app_state = AppState {
        supplier_service: SupplierService::new(store.clone()),
        order_service: OrderService::new(store.clone()),
        compliance_service: ComplianceService::new(store.clone()),
        admin_gate_service: AdminGateService::new(),
    };

    Ok((app_state, store))
}

/// All API routes, without the `/api` prefix
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/suppliers", io::rest::supplier_apis::router())
        .nest("/orders", io::rest::order_apis::router())
        .nest("/compliance", io::rest::compliance_apis::router())
        .nest("/admin-gate", io::rest::admin_gate_apis::router())
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_router())
        .layer(cors)
        .with_state(app_state)
}
