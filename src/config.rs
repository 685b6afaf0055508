use config::{Config, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use url::Url;

use crate::models::{Product, default_products};

pub const TOKEN_ENV: &str = "LINE_CHANNEL_ACCESS_TOKEN";
pub const USER_ID_ENV: &str = "LINE_USER_ID";

pub const LINE_PUSH_ENDPOINT: &str = "https://api.line.me/v2/bot/message/push";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "ja-JP,ja;q=0.9,en-US;q=0.8,en;q=0.7";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub line: LineConfig,
    pub scraper: ScraperConfig,
    pub store: StoreConfig,
    #[serde(default = "default_products")]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    #[serde(default)]
    pub channel_access_token: String,
    #[serde(default)]
    pub user_id: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Per-request timeout in seconds.
    pub request_timeout: u64,
    /// Pause after each product, in milliseconds.
    pub request_delay_ms: u64,
    pub user_agent: String,
    pub accept_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl AppConfig {
    /// Loads settings, taking the LINE credentials from the process
    /// environment (after a `.env` file, if any, has been read).
    pub fn from_env(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is normal on CI and in cron.
        let _ = dotenvy::dotenv();

        Self::build(config_path, env::var(TOKEN_ENV).ok(), env::var(USER_ID_ENV).ok())
    }

    pub fn build(
        config_path: Option<&Path>,
        channel_access_token: Option<String>,
        user_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::build_with_env(config_path, None, channel_access_token, user_id)
    }

    /// Like [`AppConfig::build`], but reads `KAKAKU__` overrides from
    /// `env_vars` instead of the process environment when it is given.
    pub fn build_with_env(
        config_path: Option<&Path>,
        env_vars: Option<Map<String, String>>,
        channel_access_token: Option<String>,
        user_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("config/default").required(false),
        };

        let s = Config::builder()
            .set_default("store.path", "prices.json")?
            .set_default("scraper.request_timeout", 15)?
            .set_default("scraper.request_delay_ms", 2000)?
            .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
            .set_default("scraper.accept_language", DEFAULT_ACCEPT_LANGUAGE)?
            .set_default("line.endpoint", LINE_PUSH_ENDPOINT)?
            .add_source(file)
            // Add environment variables with prefix "KAKAKU__"
            .add_source(Environment::with_prefix("KAKAKU").separator("__").source(env_vars))
            .set_override_option("line.channel_access_token", channel_access_token)?
            .set_override_option("line.user_id", user_id)?
            .build()?;

        let config: AppConfig = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line.channel_access_token.trim().is_empty() {
            return Err(ConfigError::Message(format!("{} is not set", TOKEN_ENV)));
        }

        if self.line.user_id.trim().is_empty() {
            return Err(ConfigError::Message(format!("{} is not set", USER_ID_ENV)));
        }

        if Url::parse(&self.line.endpoint).is_err() {
            return Err(ConfigError::Message("Invalid LINE endpoint URL".into()));
        }

        if self.scraper.request_timeout == 0 {
            return Err(ConfigError::Message("Scraper request_timeout must be greater than 0".into()));
        }

        for product in &self.products {
            if Url::parse(&product.url).is_err() {
                return Err(ConfigError::Message(format!("Invalid product URL: {}", product.url)));
            }
        }

        Ok(())
    }
}
