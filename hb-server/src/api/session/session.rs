//! Session REST API handler
//!
//! The single source of truth for "who is logged in". Derived purely
//! from the current request's identity record; nothing is cached
//! across requests.

use crate::{CurrentIdentity, SessionResponse, SessionUserDto};

use axum::Json;

/// GET /api/session
///
/// Returns the authenticated caller's identity fields. The forwarded
/// access token is deliberately not part of this payload.
pub async fn get_session(CurrentIdentity(identity): CurrentIdentity) -> Json<SessionResponse> {
    Json(SessionResponse {
        user: Some(SessionUserDto::from(identity)),
    })
}
