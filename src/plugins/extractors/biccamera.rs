use scraper::Html;

use crate::models::SiteKind;
use crate::plugins::traits::{Extraction, PageExtractor, parse_price, require_text};
use crate::utils::error::ExtractError;

#[derive(Debug, Clone)]
pub struct BicCameraExtractor {
    pub name_selector: String,
    pub price_selector: String,
}

impl Default for BicCameraExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BicCameraExtractor {
    pub fn new() -> Self {
        BicCameraExtractor {
            name_selector: "h1".to_string(),
            price_selector: ".bcs_price".to_string(),
        }
    }
}

impl PageExtractor for BicCameraExtractor {
    fn site(&self) -> SiteKind {
        SiteKind::BicCamera
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
