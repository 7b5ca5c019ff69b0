use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bfhl_core::classify::ClassifyError;
use bfhl_core::identifier::IdentifierError;
use serde::Serialize;

/// Failures surfaced by the HTTP layer. Each variant maps to one status code.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Request body exceeds the allowed size")]
    PayloadTooLarge,

    #[error("Route not found")]
    NotFound { method: String, path: String },

    #[error("Too many requests from this IP, please try again later.")]
    RateLimited { retry_after: u64 },

    #[error("Internal server error")]
    Internal(String),
}

/// Wire shape of every failed response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub is_success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        let message = match self {
            Error::NotFound { method, path } => Some(format!("Cannot {method} {path}")),
            Error::Internal(detail) => Some(detail.clone()),
            _ => None,
        };

        ErrorBody {
            is_success: false,
            error: self.to_string(),
            message,
        }
    }
}

impl From<ClassifyError> for Error {
    fn from(err: ClassifyError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

impl From<IdentifierError> for Error {
    fn from(err: IdentifierError) -> Self {
        Error::Internal(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Error::Internal(detail) = &self {
            log::error!("Error processing request: {detail}");
        }

        let mut response = (self.status(), Json(self.body())).into_response();

        if let Error::RateLimited { retry_after } = self {
            if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::InvalidInput("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            Error::RateLimited { retry_after: 1 }.status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            Error::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_body() {
        let body = Error::NotFound {
            method: "GET".into(),
            path: "/nope".into(),
        }
        .body();

        assert!(!body.is_success);
        assert_eq!(body.error, "Route not found");
        assert_eq!(body.message.as_deref(), Some("Cannot GET /nope"));
    }

    #[test]
    fn test_classify_error_becomes_bad_request() {
        let err: Error = ClassifyError::EmptyInput.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid input: data array cannot be empty");
    }

    #[test]
    fn test_rate_limited_sets_retry_after() {
        let response = Error::RateLimited { retry_after: 42 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "42");
    }
}
