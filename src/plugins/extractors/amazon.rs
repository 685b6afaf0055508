use scraper::Html;

use crate::models::SiteKind;
use crate::plugins::traits::{Extraction, PageExtractor, parse_price, require_text, select_text};
use crate::utils::error::ExtractError;

/// Amazon.co.jp product pages.
///
/// The title is checked first, then the stock status, and only then are the
/// price locations tried in order. The first location with non-blank text
/// wins; later ones are never consulted even if that text fails to parse.
#[derive(Debug, Clone)]
pub struct AmazonExtractor {
    pub title_selector: String,
    pub availability_selector: String,
    pub out_of_stock_marker: String,
    pub price_selectors: Vec<String>,
}

impl Default for AmazonExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AmazonExtractor {
    pub fn new() -> Self {
        AmazonExtractor {
            title_selector: "#productTitle".to_string(),
            availability_selector: "#availability".to_string(),
            out_of_stock_marker: "在庫切れ".to_string(),
            price_selectors: vec![
                ".a-price .a-offscreen".to_string(), // regular and sale price
                "#priceblock_ourprice".to_string(),
                "#priceblock_dealprice".to_string(),
                ".a-price-whole".to_string(),
            ],
        }
    }
}

impl PageExtractor for AmazonExtractor {
    fn site(&self) -> SiteKind {
        SiteKind::Amazon
    }

    fn extract(&self, html: &str) -> Result<Extraction, ExtractError> {
        let document = Html::parse_document(html);

        let name = require_text(&document, &self.title_selector, "商品タイトル")?;

        if let Some(availability) = select_text(&document, &self.availability_selector) {
            if availability.contains(&self.out_of_stock_marker) {
                return Err(ExtractError::OutOfStock);
            }
        }

        let price_text = self
            .price_selectors
            .iter()
            .filter_map(|selector| select_text(&document, selector))
            .find(|text| !text.is_empty())
            .ok_or_else(|| ExtractError::NotFound {
                field: "価格",
                selector: self.price_selectors.join(", "),
            })?;

        Ok(Extraction {
            name,
            price: parse_price(&price_text)?,
        })
    }
}
