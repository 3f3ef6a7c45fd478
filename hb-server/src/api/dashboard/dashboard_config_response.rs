use hb_config::DashboardConfig;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfigResponse {
    pub instance_url: String,
    pub workspace_id: String,
    pub dashboard_id: String,
    pub embed_url: String,
    pub view_url: String,
}

impl From<&DashboardConfig> for DashboardConfigResponse {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            instance_url: config.instance_url.clone(),
            workspace_id: config.workspace_id.clone(),
            dashboard_id: config.dashboard_id.clone(),
            embed_url: config.embed_url(),
            view_url: config.view_url(),
        }
    }
}
