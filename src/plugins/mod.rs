pub mod traits;
pub mod manager;
pub mod extractors;
pub mod notifiers;

pub use manager::ExtractorRegistry;
pub use traits::{Notifier, PageExtractor};
