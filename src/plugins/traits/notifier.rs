use async_trait::async_trait;

use crate::utils::error::AppError;

/// Delivers the single message a run produces.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &'static str;

    /// Any error here aborts the run; there is no fallback channel.
    async fn send(&self, message: &str) -> Result<(), AppError>;
}
