use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde_json::Value;
use tracing::info;

use crate::AppState;
use shared::{PinValidateRequest, PinValidateResponse};

/// Create the admin gate API router
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(validate_admin_pin))
}

/// Validate an admin PIN attempt
#[axum::debug_handler]
pub async fn validate_admin_pin(
    State(app_state): State<AppState>,
    Json(request): Json<PinValidateRequest>,
) -> Result<Json<PinValidateResponse>, (StatusCode, Json<Value>)> {
    info!("POST /api/admin-gate/validate");

    if request.pin.trim().is_empty() {
        let error_response = serde_json::json!({
            "error": "PIN cannot be empty",
            "code": "INVALID_INPUT"
        });
        return Err((StatusCode::BAD_REQUEST, Json(error_response)));
    }

    let response = app_state.admin_gate_service.validate(request);
    info!("Admin PIN validation result: success={}", response.success);
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_utils::setup_test_app;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::json;
    use tower::util::ServiceExt; // for `oneshot`

    async fn validate(app: axum::Router, pin: &str) -> (StatusCode, Vec<u8>) {
        let request_body = json!({ "pin": pin });

        let request = Request::builder()
            .method(Method::POST)
            .uri("/admin-gate/validate")
            .header("content-type", "application/json")
            .body(Body::from(request_body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_validate_correct_pin() {
        let (app, _dir) = setup_test_app().await;

        let (status, body) = validate(app, "8923").await;
        assert_eq!(status, StatusCode::OK);

        let response: PinValidateResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.success);
        assert!(response.message.contains("Access granted"));
    }

    #[tokio::test]
    async fn test_validate_incorrect_pin() {
        let (app, _dir) = setup_test_app().await;

        let (status, body) = validate(app, "0000").await;
        assert_eq!(status, StatusCode::OK);

        let response: PinValidateResponse = serde_json::from_slice(&body).unwrap();
        assert!(!response.success);
        assert!(response.message.contains("Incorrect PIN"));
    }

    #[tokio::test]
    async fn test_validate_empty_pin_is_bad_request() {
        let (app, _dir) = setup_test_app().await;

        let (status, body) = validate(app, "   ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error_json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_json["code"], "INVALID_INPUT");
    }
}
