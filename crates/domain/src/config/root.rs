use serde::{Deserialize, Serialize};

use super::client::ClientConfig;
use super::cors::CorsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::seed::SeedConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "extman.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/extman/config.toml";

/// Main configuration structure for the extension manager
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Seed data source
    #[serde(default)]
    pub seed: SeedConfig,

    /// Cross-origin allow-list
    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Terminal frontend settings
    #[serde(default)]
    pub client: ClientConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. extman.toml in current directory
    /// 3. /etc/extman/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(seed) = overrides.seed_path {
            self.seed.path = seed;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(url) = overrides.api_url {
            self.client.api_url = url;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.seed.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Seed data path cannot be empty".to_string(),
            ));
        }

        if self.client.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Client timeout must be at least 1 second".to_string(),
            ));
        }

        for origin in &self.cors.allowed_origins {
            CorsConfig::validate_origin(origin).map_err(ConfigError::Validation)?;
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub seed_path: Option<String>,
    pub log_level: Option<String>,
    pub api_url: Option<String>,
}
