//! Axum extractor for the authenticated identity

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use hb_auth::Identity;

/// Extracts the Identity attached by the auth middleware.
///
/// Second checkpoint after the middleware itself: a handler taking this
/// extractor cannot run without a well-formed identity record, even if
/// a route is ever wired up without the middleware layer.
#[derive(Debug)]
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if let Some(identity) = parts.extensions.get::<Identity>() {
                return Ok(CurrentIdentity(identity.clone()));
            }

            Err(ApiError::Unauthenticated {
                message: format!(
                    "The {} header is not present in the request",
                    state.contract.user
                ),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
