use crate::{ClientError, ClientResult};

use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde_json::Value;

/// Embed coordinates as served by `GET /api/dashboard/config`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    pub instance_url: String,
    pub workspace_id: String,
    pub dashboard_id: String,
    pub embed_url: String,
    pub view_url: String,
}

/// Client for the dashboard-embedding endpoints.
///
/// The relayed token is returned to the caller and dropped; it is never
/// cached on this side either.
pub struct DashboardClient {
    base_url: String,
    client: ReqwestClient,
}

impl DashboardClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Fetch the forwarded access token via the relay endpoint.
    ///
    /// Distinguishable failures: `is_token_unavailable()` on the error
    /// means the caller is authenticated but the proxy forwarded no
    /// token (an environment problem, not an auth problem).
    pub async fn token(&self) -> ClientResult<String> {
        let url = format!("{}/api/dashboard/token", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            return Err(Self::decode_error(&body));
        }

        let token = body
            .get("token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ClientError::api_error(
                    status.as_u16().to_string(),
                    "token endpoint response missing 'token' field".to_string(),
                )
            })?;

        Ok(token.to_string())
    }

    /// Fetch the embed configuration
    pub async fn settings(&self) -> ClientResult<DashboardSettings> {
        let url = format!("{}/api/dashboard/config", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: Value = response.json().await?;
            return Err(Self::decode_error(&body));
        }

        let settings: DashboardSettings = response.json().await?;
        Ok(settings)
    }

    /// Decode the flat `{error, message}` body the server emits
    #[track_caller]
    fn decode_error(body: &Value) -> ClientError {
        let code = body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        ClientError::api_error(code, message)
    }
}
