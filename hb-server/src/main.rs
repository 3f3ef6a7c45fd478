pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

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

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = hb_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = hb_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting hb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Build application state (identities are request-scoped; nothing
    // mutable is shared across requests)
    let app_state = AppState::from_config(&config);

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                }
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
