// Extractor implementations, one per supported retailer
pub mod amazon;
pub mod biccamera;
pub mod yodobashi;

pub use amazon::AmazonExtractor;
pub use biccamera::BicCameraExtractor;
pub use yodobashi::YodobashiExtractor;
