use serde::Deserialize;

pub const DEFAULT_USER_HEADER: &str = "x-forwarded-user";
pub const DEFAULT_PREFERRED_USERNAME_HEADER: &str = "x-forwarded-preferred-username";
pub const DEFAULT_EMAIL_HEADER: &str = "x-forwarded-email";
pub const DEFAULT_ACCESS_TOKEN_HEADER: &str = "x-forwarded-access-token";

/// Names of the headers the upstream reverse proxy injects.
///
/// These headers are trusted by deployment topology: the app must only
/// be reachable through a single-hop proxy that strips any client-set
/// copies. The app performs no signature verification of its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderContract {
    /// Required identity claim (stable user identifier)
    pub user: String,
    /// Optional display name claim
    pub preferred_username: String,
    /// Optional email claim
    pub email: String,
    /// Optional forwarded bearer token for dashboard embedding
    pub access_token: String,
}

impl Default for HeaderContract {
    fn default() -> Self {
        Self {
            user: String::from(DEFAULT_USER_HEADER),
            preferred_username: String::from(DEFAULT_PREFERRED_USERNAME_HEADER),
            email: String::from(DEFAULT_EMAIL_HEADER),
            access_token: String::from(DEFAULT_ACCESS_TOKEN_HEADER),
        }
    }
}
