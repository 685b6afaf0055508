use std::collections::HashMap;

use super::extractors::{AmazonExtractor, BicCameraExtractor, YodobashiExtractor};
use super::traits::PageExtractor;
use crate::models::SiteKind;

pub type PageExtractorBox = Box<dyn PageExtractor>;

/// Maps each site kind to the extractor that knows its page layout.
///
/// Registering an extractor for a site that already has one replaces it,
/// which is how updated selectors are swapped in without touching the
/// price check itself.
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: HashMap<SiteKind, PageExtractorBox>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Registry holding the built-in Yodobashi, Bic Camera and Amazon extractors.
    pub fn with_default_extractors() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(YodobashiExtractor::new()));
        registry.register(Box::new(BicCameraExtractor::new()));
        registry.register(Box::new(AmazonExtractor::new()));
        registry
    }

    pub fn register(&mut self, extractor: PageExtractorBox) {
        self.extractors.insert(extractor.site(), extractor);
    }

    pub fn get(&self, site: SiteKind) -> Option<&dyn PageExtractor> {
        self.extractors.get(&site).map(|extractor| extractor.as_ref())
    }
}
