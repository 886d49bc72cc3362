use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tracing::{error, info};

use crate::AppState;
use shared::{
    SetCompletedRequest, SetCompletedResponse, SetQuantityRequest, SetQuantityResponse,
    TodayOrdersResponse,
};

/// Create the daily orders API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/today", get(today_board))
        .route("/completed", post(set_completed))
        .route("/quantity", post(set_quantity))
}

fn storage_error(e: &anyhow::Error) -> (StatusCode, Json<Value>) {
    let body = serde_json::json!({
        "error": e.to_string(),
        "code": "STORAGE_ERROR"
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
}

/// Today's checklist of due suppliers
#[axum::debug_handler]
pub async fn today_board(State(app_state): State<AppState>) -> Json<TodayOrdersResponse> {
    info!("GET /api/orders/today");
    Json(app_state.order_service.today_board().await)
}

/// Mark an order as placed or not placed for a day
#[axum::debug_handler]
pub async fn set_completed(
    State(app_state): State<AppState>,
    Json(request): Json<SetCompletedRequest>,
) -> Result<Json<SetCompletedResponse>, (StatusCode, Json<Value>)> {
    info!(
        "POST /api/orders/completed - supplier: {}, completed: {}",
        request.supplier_id, request.completed
    );

    match app_state.order_service.set_completed(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            // Non-fatal: the mirror was not touched, the next poll re-syncs
            error!("Failed to save order status: {}", e);
            Err(storage_error(&e))
        }
    }
}

/// Record a quantity for a product on a day
#[axum::debug_handler]
pub async fn set_quantity(
    State(app_state): State<AppState>,
    Json(request): Json<SetQuantityRequest>,
) -> Result<Json<SetQuantityResponse>, (StatusCode, Json<Value>)> {
    info!(
        "POST /api/orders/quantity - supplier: {}, product: {}",
        request.supplier_id, request.product_id
    );

    match app_state.order_service.set_quantity(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Failed to save quantity: {}", e);
            Err(storage_error(&e))
        }
    }
}
