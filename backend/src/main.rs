use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, Level};

use backend::storage::{spawn_refresh_task, JsonFileStore, KeyValueStore, REFRESH_INTERVAL};
use backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Setting up persistence gateway");
    let gateway: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new_default()?);

    let (app_state, store) = initialize_backend(gateway).await?;

    // The handle owns the poll; it is torn down when this binding drops at
    // the end of main
    let _refresh = spawn_refresh_task(store, REFRESH_INTERVAL);

    let app = create_router(app_state);

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
