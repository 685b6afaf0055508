use scraper::Html;

use crate::models::SiteKind;
use crate::plugins::traits::{Extraction, PageExtractor, parse_price, require_text};
use crate::utils::error::ExtractError;

#[derive(Debug, Clone)]
pub struct YodobashiExtractor {
    pub name_selector: String,
    pub price_selector: String,
}

impl Default for YodobashiExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl YodobashiExtractor {
    pub fn new() -> Self {
        YodobashiExtractor {
            name_selector: "#products_maintitle".to_string(),
            price_selector: "#js_mtn_purchase_price".to_string(),
        }
    }
}

impl PageExtractor for YodobashiExtractor {
    fn site(&self) -> SiteKind {
        SiteKind::Yodobashi
    }

    fn extract(&self, html: &str) -> Result<Extraction, ExtractError> {
        let document = Html::parse_document(html);
        let name = require_text(&document, &self.name_selector, "商品名")?;
        let price_text = require_text(&document, &self.price_selector, "価格")?;

        Ok(Extraction {
            name,
            price: parse_price(&price_text)?,
        })
    }
}
