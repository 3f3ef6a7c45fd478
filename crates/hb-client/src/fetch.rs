use crate::{ClientError, ClientResult, Session};

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, StatusCode};

/// Seam for the one session fetch the context performs.
///
/// Injected so the state machine can be unit-tested without a network;
/// production code uses [`HttpSessionFetch`].
#[async_trait]
pub trait FetchSession: Send + Sync {
    async fn fetch_session(&self) -> ClientResult<Session>;
}

/// HTTP implementation against `GET /api/session`
pub struct HttpSessionFetch {
    base_url: String,
    client: ReqwestClient,
}

impl HttpSessionFetch {
    /// Create a fetcher for the given server base URL.
    ///
    /// The default reqwest client has no request timeout; a hung fetch
    /// leaves the session context in `Loading`. Pass a pre-configured
    /// client through [`Self::with_client`] to bound it.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, ReqwestClient::new())
    }

    pub fn with_client(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl FetchSession for HttpSessionFetch {
    async fn fetch_session(&self) -> ClientResult<Session> {
        let url = format!("{}/api/session", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        // 401 is not a transport failure: the caller reached the server
        // but carries no identity. Resolve to an empty session so the
        // context lands in Unauthenticated instead of Error.
        if status == StatusCode::UNAUTHORIZED {
            return Ok(Session { user: None });
        }

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16().to_string(),
                format!("session endpoint returned {}", status),
            ));
        }

        let session: Session = response.json().await?;
        Ok(session)
    }
}
