use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing identity header '{header}' {location}")]
    MissingIdentityHeader {
        header: String,
        location: ErrorLocation,
    },

    #[error("Invalid value in header '{header}': {message} {location}")]
    InvalidHeaderValue {
        header: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingIdentityHeader { .. } => "MISSING_IDENTITY_HEADER",
            Self::InvalidHeaderValue { .. } => "INVALID_HEADER_VALUE",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
