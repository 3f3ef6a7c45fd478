use crate::{ConfigError, ConfigErrorResult};

use hb_auth::{HeaderContract, header_contract};
use serde::Deserialize;

/// Names of the identity and token headers injected by the reverse
/// proxy. Defaults match the platform contract; override only when a
/// different single-hop proxy fronts the app.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub user_header: String,
    pub preferred_username_header: String,
    pub email_header: String,
    pub access_token_header: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            user_header: String::from(header_contract::DEFAULT_USER_HEADER),
            preferred_username_header: String::from(
                header_contract::DEFAULT_PREFERRED_USERNAME_HEADER,
            ),
            email_header: String::from(header_contract::DEFAULT_EMAIL_HEADER),
            access_token_header: String::from(header_contract::DEFAULT_ACCESS_TOKEN_HEADER),
        }
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (field, name) in [
            ("upstream.user_header", &self.user_header),
            (
                "upstream.preferred_username_header",
                &self.preferred_username_header,
            ),
            ("upstream.email_header", &self.email_header),
            ("upstream.access_token_header", &self.access_token_header),
        ] {
            if name.is_empty() {
                return Err(ConfigError::upstream(format!("{} cannot be empty", field)));
            }

            // HeaderName rejects anything outside the token charset; catch it
            // at startup instead of on the first request.
            if !is_valid_header_name(name) {
                return Err(ConfigError::upstream(format!(
                    "{} is not a valid header name: '{}'",
                    field, name
                )));
            }
        }

        Ok(())
    }

    pub fn contract(&self) -> HeaderContract {
        HeaderContract {
            user: self.user_header.clone(),
            preferred_username: self.preferred_username_header.clone(),
            email: self.email_header.clone(),
            access_token: self.access_token_header.clone(),
        }
    }
}

fn is_valid_header_name(name: &str) -> bool {
    name.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}
