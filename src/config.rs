use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use krishvatech_contact::DeliveryConfig;
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub whatsapp: WhatsappConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    /// Form id on the relay, e.g. `xkgqzabc` for `https://formspree.io/f/xkgqzabc`
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_relay_base_url")]
    pub base_url: String,
    #[serde(default = "default_relay_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            id: None,
            base_url: default_relay_base_url(),
            timeout_secs: default_relay_timeout_secs(),
        }
    }
}

fn default_relay_base_url() -> String {
    krishvatech_contact::DEFAULT_RELAY_BASE_URL.to_string()
}

fn default_relay_timeout_secs() -> u64 {
    krishvatech_contact::DEFAULT_RELAY_TIMEOUT.as_secs()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WhatsappConfig {
    /// Destination number in any notation, non-digits are stripped
    #[serde(default)]
    pub number: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            contact_email: default_contact_email(),
        }
    }
}

fn default_brand() -> String {
    krishvatech_contact::DEFAULT_BRAND.to_string()
}

fn default_contact_email() -> String {
    "info@krishvatech.com".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables `FORMSPREE_ID` and `WHATSAPP_NUMBER`
    /// 2. Environment variables (KRISHVATECH__RELAY__ID, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("KRISHVATECH")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(relay_id) = env::var("FORMSPREE_ID") {
            builder = builder.set_override("relay.id", relay_id)?;
        }
        if let Ok(number) = env::var("WHATSAPP_NUMBER") {
            builder = builder.set_override("whatsapp.number", number)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.relay.timeout_secs == 0 {
            return Err("Relay timeout must be at least 1 second".to_string());
        }
        let base_url = url::Url::parse(&self.relay.base_url)
            .map_err(|e| format!("Relay base_url is not a valid URL: {e}"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err("Relay base_url must use http or https".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown logging format '{}', expected pretty or json",
                self.logging.format
            ));
        }
        Ok(())
    }

    pub fn delivery(&self) -> DeliveryConfig {
        DeliveryConfig {
            relay_id: self.relay.id.clone(),
            relay_base_url: self.relay.base_url.clone(),
            relay_timeout: Duration::from_secs(self.relay.timeout_secs),
            whatsapp_number: self.whatsapp.number.clone(),
            brand: self.site.brand.clone(),
        }
    }
}
