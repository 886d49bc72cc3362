//! # Storage Module
//!
//! Handles all data persistence for the order tracker.
//!
//! Persistence is a key-value gateway (`KeyValueStore`) storing the three
//! top-level structures — supplier registry, order history, order quantities —
//! as independently serialized JSON blobs under well-known keys. Each blob is
//! rewritten wholesale on every mutation; there are no partial updates and no
//! transactions across keys.
//!
//! The domain layer never talks to a backend directly: it goes through
//! `CafeDataStore`, the in-memory mirror that serves reads and writes through
//! the gateway, refreshed by a fixed-interval background poll.

pub mod data_store;
pub mod json_file;
pub mod traits;

pub use data_store::{
    spawn_refresh_task, CafeData, CafeDataStore, RefreshHandle, HISTORY_KEY, QUANTITIES_KEY,
    REFRESH_INTERVAL, SUPPLIERS_KEY,
};
pub use json_file::JsonFileStore;
pub use traits::KeyValueStore;
