use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Embedded analytics dashboard coordinates.
///
/// The client derives the embed iframe URL from these through
/// `GET /api/dashboard/config` instead of hardcoding them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Workspace base URL, e.g. "https://acme.cloud.example.com"
    pub instance_url: String,
    pub workspace_id: String,
    pub dashboard_id: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            instance_url: String::new(),
            workspace_id: String::new(),
            dashboard_id: String::new(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.instance_url.is_empty() {
            return Err(ConfigError::dashboard("dashboard.instance_url is required"));
        }

        if !self.instance_url.starts_with("https://") && !self.instance_url.starts_with("http://") {
            return Err(ConfigError::dashboard(format!(
                "dashboard.instance_url must be an absolute URL, got '{}'",
                self.instance_url
            )));
        }

        if self.workspace_id.is_empty() {
            return Err(ConfigError::dashboard("dashboard.workspace_id is required"));
        }

        if self.dashboard_id.is_empty() {
            return Err(ConfigError::dashboard("dashboard.dashboard_id is required"));
        }

        Ok(())
    }

    fn base(&self) -> &str {
        self.instance_url.trim_end_matches('/')
    }

    /// Iframe embed URL: {base}/embed/dashboardsv3/{dashboard}?o={workspace}
    pub fn embed_url(&self) -> String {
        format!(
            "{}/embed/dashboardsv3/{}?o={}",
            self.base(),
            self.dashboard_id,
            self.workspace_id
        )
    }

    /// Full-page view URL for the "open in workspace" affordance
    pub fn view_url(&self) -> String {
        format!(
            "{}/dashboards/{}?o={}",
            self.base(),
            self.dashboard_id,
            self.workspace_id
        )
    }
}
