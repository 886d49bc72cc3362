//! # Domain Module
//!
//! Contains all business logic for the order tracker.
//!
//! The core is deliberately small and pure: day-key derivation and supplier
//! scheduling (`schedule`), copy-on-write updates to the per-day order state
//! (`order_state`), and ordered supplier-list operations (`supplier_registry`).
//! The services wrap that core with validation, ID generation and persistence
//! through the shared data store.
//!
//! ## Module Organization
//!
//! - **schedule**: day keys, weekday matching, rolling windows
//! - **order_state**: completion flags and recorded quantities per day
//! - **supplier_registry**: pure ordered-list add/update/remove
//! - **supplier_service**: validated supplier CRUD for the admin view
//! - **order_service**: today's checklist and its mutations
//! - **compliance_service**: multi-day completion summary and order log
//! - **admin_gate_service**: the cosmetic admin PIN gate

pub mod admin_gate_service;
pub mod compliance_service;
pub mod order_service;
pub mod order_state;
pub mod schedule;
pub mod supplier_registry;
pub mod supplier_service;

pub use admin_gate_service::*;
pub use compliance_service::*;
pub use order_service::*;
pub use schedule::*;
pub use supplier_service::*;
