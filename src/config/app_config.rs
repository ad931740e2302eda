use std::collections::HashMap;

use serde::Deserialize;

/// Application configuration, read once at startup and passed explicitly to
/// whatever needs it. Request-handling code never reads the environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub services: ServicesConfig,
    /// Named feature flags (e.g. `npmo`).
    pub features: HashMap<String, bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Base URLs of the backend services this front-end calls.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    /// User/org API host.
    pub user_api: String,
    /// Downloads totals service.
    pub downloads_api: String,
    /// License service (enterprise customers and trials).
    pub license_api: String,
    /// Raw-content root for corporate markdown pages.
    pub corporate_content: String,
    /// Curated explicit-installs payload.
    pub explicit_installs_url: String,
    /// Hubspot form endpoint notified on ULA agreement.
    pub hubspot_ula_form_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            user_api: "https://user-api-example.com".to_string(),
            downloads_api: "https://downloads-api-example.com".to_string(),
            license_api: "https://license-api-example.com".to_string(),
            corporate_content: "https://raw.githubusercontent.com/npm".to_string(),
            explicit_installs_url: "https://registry-cdn-example.com/explicit-installs.json"
                .to_string(),
            hubspot_ula_form_url: "https://forms.hubspot.com/uploads/form/v2/example".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `config/default`, `config/local`, then `APP__`-prefixed
    /// environment variables (double underscore as section separator).
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
