pub mod dashboard;
pub mod dashboard_config_response;
pub mod token_response;
