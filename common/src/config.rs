// Layered configuration: built-in defaults → config/default.toml → config/local.toml → env

use crate::errors::SettingsError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Settings {
    /// Load configuration from `./config` and `APP_*` environment variables
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from_path("config")
    }

    /// Load configuration from a specific directory. Both files are optional.
    pub fn load_from_path<P: AsRef<Path>>(config_dir: P) -> Result<Self, SettingsError> {
        Self::load_with_env(config_dir, environment())
    }

    fn load_with_env<P: AsRef<Path>>(
        config_dir: P,
        env: Environment,
    ) -> Result<Self, SettingsError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("observability.log_level", DEFAULT_LOG_LEVEL)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Local overrides (not committed to git)
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            .add_source(env);

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration settings. Port 0 is accepted and binds an
    /// ephemeral port.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.server.host.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "server.host cannot be empty".to_string(),
            ));
        }

        if self.observability.log_level.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "observability.log_level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            observability: ObservabilityConfig {
                log_level: DEFAULT_LOG_LEVEL.to_string(),
            },
        }
    }
}

/// `APP_SERVER__PORT=8081` maps to `server.port`
fn environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
