use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde_json::Value;
use tracing::{error, info};

use crate::domain::SupplierError;
use crate::AppState;
use shared::{
    CreateSupplierRequest, DeleteSupplierResponse, SupplierListResponse, SupplierResponse,
    UpdateSupplierRequest,
};

/// Create the supplier API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route("/:id", put(update_supplier).delete(delete_supplier))
}

fn error_response(e: &anyhow::Error) -> (StatusCode, Json<Value>) {
    let (status, code) = match e.downcast_ref::<SupplierError>() {
        Some(SupplierError::NotFound(_)) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        Some(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
    };

    let body = serde_json::json!({
        "error": e.to_string(),
        "code": code
    });
    (status, Json(body))
}

/// List all suppliers
#[axum::debug_handler]
pub async fn list_suppliers(State(app_state): State<AppState>) -> Json<SupplierListResponse> {
    info!("GET /api/suppliers");
    Json(app_state.supplier_service.list_suppliers().await)
}

/// Create a new supplier
#[axum::debug_handler]
pub async fn create_supplier(
    State(app_state): State<AppState>,
    Json(request): Json<CreateSupplierRequest>,
) -> Result<Json<SupplierResponse>, (StatusCode, Json<Value>)> {
    info!("POST /api/suppliers - name: {}", request.name);

    match app_state.supplier_service.create_supplier(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Failed to create supplier: {}", e);
            Err(error_response(&e))
        }
    }
}

/// Replace an existing supplier
#[axum::debug_handler]
pub async fn update_supplier(
    State(app_state): State<AppState>,
    Path(supplier_id): Path<String>,
    Json(request): Json<UpdateSupplierRequest>,
) -> Result<Json<SupplierResponse>, (StatusCode, Json<Value>)> {
    info!("PUT /api/suppliers/{}", supplier_id);

    match app_state
        .supplier_service
        .update_supplier(&supplier_id, request)
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Failed to update supplier {}: {}", supplier_id, e);
            Err(error_response(&e))
        }
    }
}

/// Delete a supplier
#[axum::debug_handler]
pub async fn delete_supplier(
    State(app_state): State<AppState>,
    Path(supplier_id): Path<String>,
) -> Result<Json<DeleteSupplierResponse>, (StatusCode, Json<Value>)> {
    info!("DELETE /api/suppliers/{}", supplier_id);

    match app_state.supplier_service.delete_supplier(&supplier_id).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Failed to delete supplier {}: {}", supplier_id, e);
            Err(error_response(&e))
        }
    }
}
