// Notifier implementations
pub mod line;

pub use line::LineNotifier;
