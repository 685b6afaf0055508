use serde::{Deserialize, Serialize};
use std::fmt;

pub mod alert;
pub mod price_record;
pub mod product;

// Re-exports for convenience
pub use alert::*;
pub use price_record::*;
pub use product::*;

/// Retailer page formats the watcher knows how to read.
///
/// Deserialized from its plain tag so that every config source (TOML file,
/// environment, JSON) maps an unknown tag to `Unsupported`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SiteKind {
    Yodobashi,
    #[serde(rename = "bic")]
    BicCamera,
    Amazon,
    /// Any tag the running binary has no extractor for.
    Unsupported,
}

impl From<String> for SiteKind {
    fn from(tag: String) -> Self {
        match tag.trim() {
            "yodobashi" => SiteKind::Yodobashi,
            "bic" => SiteKind::BicCamera,
            "amazon" => SiteKind::Amazon,
            _ => SiteKind::Unsupported,
        }
    }
}

impl SiteKind {
    /// Tag used in product files and as the prefix of price record keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteKind::Yodobashi => "yodobashi",
            SiteKind::BicCamera => "bic",
            SiteKind::Amazon => "amazon",
            SiteKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
