pub mod config;
pub mod models;
pub mod plugins;
pub mod price_check;
pub mod scraper;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::AppConfig;
pub use price_check::{CheckOutcome, PriceChecker, RunReport};
pub use store::PriceStore;
pub use utils::error::{AppError, ExtractError};

pub type Result<T> = std::result::Result<T, AppError>;
