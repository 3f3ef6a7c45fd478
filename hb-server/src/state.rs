use hb_auth::HeaderContract;
use hb_config::DashboardConfig;

/// Shared state for all request handlers.
///
/// Deliberately holds no mutable data: every identity and every relayed
/// token is request-scoped, so there is nothing to lock.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Header names the trusted proxy injects
    pub contract: HeaderContract,
    /// Embedded dashboard coordinates
    pub dashboard: DashboardConfig,
}

impl AppState {
    pub fn from_config(config: &hb_config::Config) -> Self {
        Self {
            contract: config.upstream.contract(),
            dashboard: config.dashboard.clone(),
        }
    }
}
