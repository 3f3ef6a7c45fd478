//! Trusted-header authentication middleware
//!
//! Intercepts every request to the /api route group before any handler
//! runs. Reads the proxy header contract, rejects requests without an
//! identity claim, and attaches the Identity to the request extensions
//! for downstream extractors.
//!
//! Precondition: the app is deployed behind a single-hop trusted
//! reverse proxy that injects these headers and strips client-supplied
//! copies. No signature verification happens here.

use crate::{ApiError, AppState};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use hb_auth::Identity;

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = Identity::from_headers(request.headers(), &state.contract)?;

    // Token presence is logged as a boolean only; the value never
    // reaches any log sink.
    log::debug!(
        "Authenticated request for user {} (token forwarded: {})",
        identity.user_id,
        identity.has_access_token()
    );

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
