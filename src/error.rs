/*
 * Responsibility
 * - App-wide AppError definition
 * - IntoResponse (HTTP status / JSON error body)
 * - Maps auth header errors / config errors onto a single error type
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::{API_KEY_SCHEME, AuthHeaderError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized: {code}")]
    Unauthorized { code: &'static str, message: String },
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("request timed out")]
    Timeout,
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized { code, message } => (StatusCode::UNAUTHORIZED, code, message),
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{resource} not found."),
            ),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "REQUEST_TIMEOUT",
                "request timed out".into(),
            ),
            // Config failures only surface at startup; never leak details to clients.
            AppError::Config(_) | AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(API_KEY_SCHEME),
            );
        }
        response
    }
}

impl From<AuthHeaderError> for AppError {
    fn from(e: AuthHeaderError) -> Self {
        AppError::unauthorized(e.code(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_header_error_maps_to_unauthorized_with_code() {
        let err = AppError::from(AuthHeaderError::MalformedAuthHeader);
        match err {
            AppError::Unauthorized { code, message } => {
                assert_eq!(code, "MALFORMED_AUTH_HEADER");
                assert_eq!(message, "malformed authorization header");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unauthorized_response_carries_challenge() {
        let res = AppError::from(AuthHeaderError::NoAuthHeaderIncluded).into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "ApiKey"
        );
    }

    #[test]
    fn internal_errors_have_no_challenge() {
        let res = AppError::Internal.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.headers().get(header::WWW_AUTHENTICATE).is_none());

        let res = AppError::not_found("route").into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
