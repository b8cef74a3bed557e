//! Handles settings for the application. Configuration is read from an
//! optional `settings` file (TOML, YAML or JSON) and `WASHMATE__*`
//! environment variables, e.g. `WASHMATE__SERVER__PORT=8080`.
use config::{Config, ConfigError, Environment, File};
use engine::PricingConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 3000,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub pricing: PricingConfig,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_path("settings")
    }

    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("WASHMATE").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
