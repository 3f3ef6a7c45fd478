use crate::{
    ConfigError, ConfigErrorResult, DashboardConfig, LoggingConfig, ServerConfig, UpstreamConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for HB_CONFIG_DIR env var, else use ./.hb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply HB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: HB_CONFIG_DIR env var > ./.hb/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("HB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".hb"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.upstream.validate()?;
        self.dashboard.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets or tokens).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        info!(
            "  upstream headers: identity='{}', token='{}'",
            self.upstream.user_header, self.upstream.access_token_header
        );

        info!(
            "  dashboard: workspace={}, dashboard={}",
            self.dashboard.workspace_id, self.dashboard.dashboard_id
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HB_SERVER_PORT", &mut self.server.port);

        // Upstream header contract
        Self::apply_env_string("HB_UPSTREAM_USER_HEADER", &mut self.upstream.user_header);
        Self::apply_env_string(
            "HB_UPSTREAM_PREFERRED_USERNAME_HEADER",
            &mut self.upstream.preferred_username_header,
        );
        Self::apply_env_string("HB_UPSTREAM_EMAIL_HEADER", &mut self.upstream.email_header);
        Self::apply_env_string(
            "HB_UPSTREAM_ACCESS_TOKEN_HEADER",
            &mut self.upstream.access_token_header,
        );

        // Dashboard
        Self::apply_env_string("HB_DASHBOARD_INSTANCE_URL", &mut self.dashboard.instance_url);
        Self::apply_env_string("HB_DASHBOARD_WORKSPACE_ID", &mut self.dashboard.workspace_id);
        Self::apply_env_string("HB_DASHBOARD_DASHBOARD_ID", &mut self.dashboard.dashboard_id);

        // Logging
        Self::apply_env_parse("HB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
