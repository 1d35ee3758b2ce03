use super::Error;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsGateway: Send + Sync {
    ///
    /// ### Returns
    /// Provider status line for logging
    ///
    async fn send(&self, from: &str, to: &str, message: &str) -> Result<String, Error>;
}
