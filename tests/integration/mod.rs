// Integration test helpers
// Product pages and the LINE push endpoint are both served by wiremock.

pub mod run_tests;

use kakaku_watcher::{
    AppConfig,
    config::{LineConfig, ScraperConfig, StoreConfig, DEFAULT_ACCEPT_LANGUAGE, DEFAULT_USER_AGENT},
    models::{Product, SiteKind},
    PriceStore,
};
use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PUSH_PATH: &str = "/v2/bot/message/push";
pub const TEST_TOKEN: &str = "integration-token";
pub const TEST_USER: &str = "U00000000000000000000000000000000";

/// Everything one simulated run needs.
pub struct TestEnv {
    pub shop: MockServer,
    pub line: MockServer,
    pub dir: TempDir,
}

impl TestEnv {
    pub async fn start() -> Self {
        Self {
            shop: MockServer::start().await,
            line: MockServer::start().await,
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn url(&self, page: &str) -> String {
        format!("{}{}", self.shop.uri(), page)
    }

    pub fn product(&self, site: SiteKind, page: &str) -> Product {
        Product::new(site, self.url(page), 0)
    }

    pub fn store(&self) -> PriceStore {
        PriceStore::new(self.dir.path().join("prices.json"))
    }

    pub fn config(&self, products: Vec<Product>) -> AppConfig {
        AppConfig {
            line: LineConfig {
                channel_access_token: TEST_TOKEN.to_string(),
                user_id: TEST_USER.to_string(),
                endpoint: format!("{}{}", self.line.uri(), PUSH_PATH),
            },
            scraper: ScraperConfig {
                request_timeout: 5,
                request_delay_ms: 0,
                user_agent: DEFAULT_USER_AGENT.to_string(),
                accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            },
            store: StoreConfig {
                path: self.dir.path().join("prices.json"),
            },
            products,
        }
    }

    pub async fn serve_page(&self, page: &str, html: String) {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(&self.shop)
            .await;
    }

    pub async fn serve_status(&self, page: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.shop)
            .await;
    }

    pub async fn accept_pushes(&self) {
        Mock::given(method("POST"))
            .and(path(PUSH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&self.line)
            .await;
    }

    /// Text of every message pushed to LINE so far.
    pub async fn pushed_messages(&self) -> Vec<String> {
        self.line
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                let body: Value = serde_json::from_slice(&request.body).expect("json body");
                body["messages"][0]["text"].as_str().unwrap_or_default().to_string()
            })
            .collect()
    }
}

pub fn yodobashi_page(name: &str, price: &str) -> String {
    format!(
        r#"<html><body><h1 id="products_maintitle">{name}</h1>
           <span id="js_mtn_purchase_price">{price}</span></body></html>"#
    )
}

pub fn bic_page(name: &str, price: &str) -> String {
    format!(r#"<html><body><h1>{name}</h1><p class="bcs_price">{price}</p></body></html>"#)
}

pub fn amazon_page(name: &str, availability: &str, price: &str) -> String {
    format!(
        r#"<html><body><span id="productTitle">{name}</span>
           <div id="availability">{availability}</div>
           <span class="a-price"><span class="a-offscreen">{price}</span></span></body></html>"#
    )
}
