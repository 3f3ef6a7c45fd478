use hb_auth::Identity;
use serde::Serialize;

/// Client-facing identity fields.
///
/// Mapped 1:1 from the identity record, minus the access token: this
/// type has no token field, so the session payload cannot leak it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<Identity> for SessionUserDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.user_id,
            preferred_username: identity.preferred_username,
            email: identity.email,
        }
    }
}
