use async_trait::async_trait;
use config::ConfigError;
use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::debug;

use crate::config::ScraperConfig;
use crate::utils::error::{AppError, ExtractError};

/// Source of product page bodies.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ExtractError>;
}

/// Plain HTTP fetcher posing as a desktop browser with Japanese locale.
///
/// One attempt per page; any non-2xx status is reported as
/// [`ExtractError::HttpStatus`] so that block pages are never parsed.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, AppError> {
        let accept_language = HeaderValue::from_str(&config.accept_language).map_err(|_| {
            ConfigError::Message(format!("Invalid accept_language: {:?}", config.accept_language))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, accept_language);

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        let start_time = std::time::Instant::now();
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(
            "Fetched {} ({} bytes) in {} ms",
            url,
            body.len(),
            start_time.elapsed().as_millis()
        );
        Ok(body)
    }
}
