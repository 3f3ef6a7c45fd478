//! Dashboard embedding REST API handlers
//!
//! The token relay republishes the forwarded access token to the
//! authenticated caller so the client never touches raw proxy headers.
//! The token is read and re-emitted within one request; it is never
//! stored and never logged at any verbosity level.

use crate::{
    ApiError, ApiResult, AppState, CurrentIdentity, DashboardConfigResponse, TokenResponse,
};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// GET /api/dashboard/token
///
/// Relays the forwarded access token for embedding dashboards. The
/// 401 body distinguishes "no token forwarded" from "not
/// authenticated": an authenticated caller without a token gets the
/// `No access token available` code with the exact header name.
pub async fn get_dashboard_token(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<TokenResponse>> {
    match identity.access_token {
        Some(token) => Ok(Json(TokenResponse { token })),
        None => Err(ApiError::TokenUnavailable {
            header: state.contract.access_token.clone(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// GET /api/dashboard/config
///
/// Embed coordinates and derived URLs, so the client hardcodes nothing.
pub async fn get_dashboard_config(
    State(state): State<AppState>,
    CurrentIdentity(_identity): CurrentIdentity,
) -> Json<DashboardConfigResponse> {
    Json(DashboardConfigResponse::from(&state.dashboard))
}
