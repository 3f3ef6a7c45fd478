use crate::{AuthError, HeaderContract, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use http::HeaderMap;

/// Maximum accepted length for a proxy-injected identity claim
const MAX_CLAIM_LENGTH: usize = 320;

/// Request-scoped identity derived from the proxy header contract.
///
/// Exists on a request if and only if the auth middleware accepted it.
/// Never persisted; dropped with the request.
#[derive(Clone)]
pub struct Identity {
    /// Stable user identifier (required claim)
    pub user_id: String,
    /// Display name, when the proxy forwards one
    pub preferred_username: Option<String>,
    /// Email, when the proxy forwards one
    pub email: Option<String>,
    /// Forwarded bearer token; absent on routes that do not need one
    pub access_token: Option<String>,
}

impl Identity {
    /// Build an identity from the inbound headers.
    ///
    /// Fails when the required identity header is missing or empty.
    /// The access-token header is optional here: its absence is not an
    /// authentication failure, only the relay endpoint cares. A token
    /// header that IS present but unreadable is rejected outright,
    /// since the relay guarantees the value round-trips byte-for-byte.
    #[track_caller]
    pub fn from_headers(headers: &HeaderMap, contract: &HeaderContract) -> AuthErrorResult<Self> {
        let user_id = match checked_header(headers, &contract.user)? {
            Some(value) => value,
            None => {
                return Err(AuthError::MissingIdentityHeader {
                    header: contract.user.clone(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let identity = Self {
            user_id,
            preferred_username: optional_header(headers, &contract.preferred_username),
            email: optional_header(headers, &contract.email),
            access_token: checked_header(headers, &contract.access_token)?,
        };

        identity.validate()?;

        Ok(identity)
    }

    /// Validate claims after extraction
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.user_id.len() > MAX_CLAIM_LENGTH {
            return Err(AuthError::InvalidClaim {
                claim: "user_id".to_string(),
                message: "user_id exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(ref username) = self.preferred_username
            && username.len() > MAX_CLAIM_LENGTH
        {
            return Err(AuthError::InvalidClaim {
                claim: "preferred_username".to_string(),
                message: "preferred_username exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(ref email) = self.email
            && email.len() > MAX_CLAIM_LENGTH
        {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }
}

// Manual Debug: the forwarded token must never reach logs, even via {:?}
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("user_id", &self.user_id)
            .field("preferred_username", &self.preferred_username)
            .field("email", &self.email)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Read a header strictly; `Ok(None)` means missing or empty, an
/// unreadable value is an error.
#[track_caller]
fn checked_header(headers: &HeaderMap, name: &str) -> AuthErrorResult<Option<String>> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => {
            let value = value.to_str().map_err(|e| AuthError::InvalidHeaderValue {
                header: name.to_string(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            if value.is_empty() {
                Ok(None)
            } else {
                Ok(Some(value.to_string()))
            }
        }
    }
}

/// Read an optional display claim; unreadable or empty values collapse
/// to None (these fields only feed the UI greeting, nothing round-trips).
fn optional_header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(String::from)
}
