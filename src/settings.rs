//! Action server settings
//!
//! Loaded in layers, later sources winning:
//! 1. built-in defaults
//! 2. `config/default.{toml,yaml,json}` (optional)
//! 3. `config/<env>.*` where `<env>` comes from `BOOKING_ACTIONS_ENV` (optional)
//! 4. `BOOKING_ACTIONS__SECTION__KEY` environment variables

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable selecting the environment-specific config file
pub const ENV_SELECTOR: &str = "BOOKING_ACTIONS_ENV";

/// Top-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// HTTP listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5055
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Check values the listener cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "must be between 1 and 65535".to_string(),
            });
        }
        Ok(())
    }

    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Load settings from files and the environment
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder().add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder = builder.add_source(File::with_name(&format!("config/{env_name}")).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("BOOKING_ACTIONS")
            .separator("__")
            .try_parsing(true),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.server.port, 5055);
        assert_eq!(settings.bind_address(), "0.0.0.0:5055");
        assert_eq!(settings.observability.log_level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());

        settings.server.port = 8080;
        settings.server.host = " ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_settings_layers_env_over_files() {
        // SAFETY: no other test in this crate reads or writes this variable
        unsafe { std::env::set_var("BOOKING_ACTIONS__SERVER__PORT", "6001") };
        let loaded = load_settings(Some("no-such-env"));
        unsafe { std::env::remove_var("BOOKING_ACTIONS__SERVER__PORT") };

        let settings = loaded.unwrap();
        assert_eq!(settings.server.port, 6001);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.observability.log_level, "info");
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_value(serde_json::json!({
            "server": {"port": 9000}
        }))
        .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9000);
        assert!(!settings.observability.log_json);
    }
}
