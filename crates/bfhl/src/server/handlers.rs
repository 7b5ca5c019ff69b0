use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use bfhl_core::classify::{classify, parse_tokens, ClassificationResult};
use bfhl_core::identifier::format_identifier;
use serde::Serialize;
use serde_json::Value;

use super::AppState;
use crate::error::Error;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "BFHL API is running successfully",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn bfhl(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BfhlResponse>, Error> {
    let Json(body) = payload.map_err(|rejection| {
        log::debug!("Rejected request body: {rejection}");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::PayloadTooLarge
        } else {
            Error::InvalidInput(format!("Invalid JSON body: {}", rejection.body_text()))
        }
    })?;

    let tokens = parse_tokens(body.get("data").unwrap_or(&Value::Null)).map_err(|err| {
        log::debug!("Rejected input: {err}");
        Error::from(err)
    })?;

    let result = classify(&tokens)?;

    let today = chrono::Local::now().date_naive();
    let user_id = format_identifier(&state.identity.full_name, today)?;

    log::info!(
        "Classified {} tokens (sum {}) for {user_id}",
        tokens.len(),
        result.sum
    );

    Ok(Json(BfhlResponse {
        is_success: true,
        user_id: user_id.into_inner(),
        email: state.identity.email.clone(),
        roll_number: state.identity.roll_number.clone(),
        result,
    }))
}

pub async fn not_found(method: Method, uri: Uri) -> Error {
    Error::NotFound {
        method: method.to_string(),
        path: uri
            .path_and_query()
            .map_or_else(|| uri.path().to_string(), |pq| pq.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Request, Response, StatusCode};
    use axum::Router;
    use bfhl_core::identifier::{extract_date, is_valid_identifier};
    use serde_json::json;
    use tower::ServiceExt;

    use super::super::cli::IdentityOptions;
    use super::super::{router, AppState, RateLimiter};

    fn identity() -> IdentityOptions {
        IdentityOptions {
            full_name: "John Doe".to_string(),
            email: "john@xyz.com".to_string(),
            roll_number: "ABCD123".to_string(),
        }
    }

    fn app_with(max_requests: u32, body_limit: usize) -> Router {
        app_for(identity(), max_requests, body_limit)
    }

    fn app_for(identity: IdentityOptions, max_requests: u32, body_limit: usize) -> Router {
        router(
            AppState { identity },
            RateLimiter::new(max_requests, Duration::from_secs(900)),
            body_limit,
        )
    }

    fn app() -> Router {
        app_with(100, 10 * 1024 * 1024)
    }

    fn post_bfhl(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/bfhl")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ============================================================================
    // POST /bfhl
    // ============================================================================

    #[tokio::test]
    async fn test_bfhl_success() {
        let request = post_bfhl(json!({"data": ["a", "1", "334", "4", "R", "$"]}).to_string());
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;

        assert_eq!(body["is_success"], true);
        assert_eq!(body["email"], "john@xyz.com");
        assert_eq!(body["roll_number"], "ABCD123");
        assert_eq!(body["odd_numbers"], json!(["1"]));
        assert_eq!(body["even_numbers"], json!(["334", "4"]));
        assert_eq!(body["alphabets"], json!(["A", "R"]));
        assert_eq!(body["special_characters"], json!(["$"]));
        assert_eq!(body["sum"], "339");
        assert_eq!(body["concat_string"], "Ra");

        let user_id = body["user_id"].as_str().unwrap();
        assert!(user_id.starts_with("john_doe_"));
        assert!(is_valid_identifier(user_id));
        assert!(extract_date(user_id).is_some());
    }

    #[tokio::test]
    async fn test_bfhl_empty_array() {
        let response = app()
            .oneshot(post_bfhl(json!({"data": []}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["is_success"], false);
        assert_eq!(body["error"], "Invalid input: data array cannot be empty");
    }

    #[tokio::test]
    async fn test_bfhl_not_an_array() {
        let response = app()
            .oneshot(post_bfhl(json!({"data": "not an array"}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Invalid input: data must be an array");
    }

    #[tokio::test]
    async fn test_bfhl_missing_data_field() {
        let response = app()
            .oneshot(post_bfhl(json!({"items": ["a"]}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_bfhl_non_string_element() {
        let response = app()
            .oneshot(post_bfhl(json!({"data": ["a", 5]}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(
            body["error"],
            "Invalid input: element at index 1 is not a string"
        );
    }

    #[tokio::test]
    async fn test_bfhl_malformed_json() {
        let response = app()
            .oneshot(post_bfhl("{\"data\": [".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["is_success"], false);
    }

    #[tokio::test]
    async fn test_bfhl_body_too_large() {
        let payload = json!({"data": ["a".repeat(256)]}).to_string();
        let response = app_with(100, 64).oneshot(post_bfhl(payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_bfhl_get_is_not_found() {
        let request = Request::builder()
            .method("GET")
            .uri("/bfhl")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Cannot GET /bfhl");
    }

    #[tokio::test]
    async fn test_bfhl_blank_name_is_internal_error() {
        let blank = IdentityOptions {
            full_name: "   ".to_string(),
            ..identity()
        };
        let response = app_for(blank, 100, 1024)
            .oneshot(post_bfhl(json!({"data": ["a", "1"]}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["is_success"], false);
        assert_eq!(body["error"], "Internal server error");
        assert!(body["message"].as_str().unwrap().contains("name is empty"));
    }

    // ============================================================================
    // Other routes and layers
    // ============================================================================

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let request = Request::builder()
            .method("DELETE")
            .uri("/nope")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["is_success"], false);
        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["message"], "Cannot DELETE /nope");
    }

    #[tokio::test]
    async fn test_unknown_route_keeps_query_string() {
        let request = Request::builder()
            .uri("/x?y=1")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Cannot GET /x?y=1");
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let headers = response.headers();

        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
        assert_eq!(headers["referrer-policy"], "no-referrer");
        assert_eq!(headers["x-xss-protection"], "0");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_rate_limit_rejects_after_max() {
        let app = app_with(2, 1024);
        let health = || {
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap()
        };

        let first = app.clone().oneshot(health()).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(first.headers()["x-ratelimit-remaining"], "1");

        let second = app.clone().oneshot(health()).await.unwrap();
        assert_eq!(second.status(), StatusCode::OK);

        let third = app.oneshot(health()).await.unwrap();
        assert_eq!(third.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(third.headers().contains_key(header::RETRY_AFTER));
        let body = json_body(third).await;
        assert_eq!(
            body["error"],
            "Too many requests from this IP, please try again later."
        );
    }
}
