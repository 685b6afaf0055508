use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::SiteKind;
use crate::utils::error::ExtractError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub name: String,
    pub price: u64,
}

/// Reads the product name and price out of one retailer's product page.
pub trait PageExtractor: Send + Sync {
    fn site(&self) -> SiteKind;

    fn extract(&self, html: &str) -> Result<Extraction, ExtractError>;
}

/// Trimmed text of the first node matching `selector`, if any.
pub fn select_text(document: &Html, selector: &str) -> Option<String> {
    let parsed = Selector::parse(selector).ok()?;
    document
        .select(&parsed)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Like [`select_text`] but a missing node is an error naming the field.
pub fn require_text(document: &Html, selector: &str, field: &'static str) -> Result<String, ExtractError> {
    select_text(document, selector).ok_or_else(|| ExtractError::NotFound {
        field,
        selector: selector.to_string(),
    })
}

static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").expect("valid non-digit pattern"));

/// Keeps every decimal digit in `text` and parses the result as whole yen.
///
/// Separators and currency marks are dropped without inspection, so
/// `"￥12,800（税込）"` reads as 12800. Full-width digits are accepted; a
/// digit from any other script makes the price unreadable.
pub fn parse_price(text: &str) -> Result<u64, ExtractError> {
    let invalid = || ExtractError::InvalidPrice {
        text: text.trim().to_string(),
    };

    let digits = NON_DIGIT.replace_all(text, "");
    if digits.is_empty() {
        return Err(invalid());
    }

    digits.chars().try_fold(0u64, |total, c| {
        let digit = match c {
            '０'..='９' => c as u32 - '０' as u32,
            _ => c.to_digit(10).ok_or_else(invalid)?,
        };
        total
            .checked_mul(10)
            .and_then(|total| total.checked_add(u64::from(digit)))
            .ok_or_else(invalid)
    })
}
