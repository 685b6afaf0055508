pub mod extractor;
pub mod notifier;

pub use extractor::{Extraction, PageExtractor, parse_price, require_text, select_text};
pub use notifier::Notifier;
