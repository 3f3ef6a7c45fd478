pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    dashboard::{
        dashboard::{get_dashboard_config, get_dashboard_token},
        dashboard_config_response::DashboardConfigResponse,
        token_response::TokenResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::identity::CurrentIdentity,
    session::{
        session::get_session, session_response::SessionResponse,
        session_user_dto::SessionUserDto,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
