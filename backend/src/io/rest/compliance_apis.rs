use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::info;

use crate::domain::compliance_service::DEFAULT_WINDOW_DAYS;
use crate::AppState;
use shared::ComplianceResponse;

/// Create the compliance API router
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(compliance_window))
}

/// Query parameters for the compliance window endpoint
#[derive(Deserialize, Debug)]
pub struct ComplianceQuery {
    pub days: Option<usize>,
}

/// Rolling-window completion summary and order log
#[axum::debug_handler]
pub async fn compliance_window(
    State(app_state): State<AppState>,
    Query(query): Query<ComplianceQuery>,
) -> Json<ComplianceResponse> {
    info!("GET /api/compliance - query: {:?}", query);

    let days = query.days.unwrap_or(DEFAULT_WINDOW_DAYS);
    Json(app_state.compliance_service.compliance_window(days).await)
}
