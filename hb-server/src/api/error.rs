//! REST API error types
//!
//! These errors produce the flat `{error, message}` JSON bodies the
//! embedding client decodes. The message names the offending header so
//! a consumer can tell a missing identity apart from a token that was
//! simply not forwarded. No variant ever carries a token value.

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use hb_auth::AuthError;
use serde::Serialize;
use thiserror::Error;

/// Flat JSON error body: `{ "error": <code>, "message": <detail> }`
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Short machine-readable error code
    pub error: String,
    /// Human-readable message naming the missing header
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable identity claim on the request (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Identity present but no forwarded access token (401)
    #[error("No access token available: missing '{header}' {location}")]
    TokenUnavailable {
        header: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Messages only ever name headers, never their values
        log::warn!("{}", self);

        let (status, body) = match self {
            ApiError::Unauthenticated { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    error: "Authentication required".into(),
                    message,
                },
            ),
            ApiError::TokenUnavailable { header, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    error: "No access token available".into(),
                    message: format!("The {} header is not present in the request", header),
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    error: "Internal error".into(),
                    message,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        let message = match &err {
            AuthError::MissingIdentityHeader { header, .. } => {
                format!("The {} header is not present in the request", header)
            }
            AuthError::InvalidHeaderValue { header, .. } => {
                format!("The {} header is not a valid header value", header)
            }
            AuthError::InvalidClaim { claim, .. } => {
                format!("Invalid identity claim '{}'", claim)
            }
        };

        ApiError::Unauthenticated {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
