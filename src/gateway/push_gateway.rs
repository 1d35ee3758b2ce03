use super::Error;
use crate::dto::NotificationPayload;
use async_trait::async_trait;

/// Transport acknowledgement for one cohort send
#[derive(Debug, Clone)]
pub struct GatewayResult {
    pub status: u16,
    pub raw_response: String,
}

///
/// Mobile push transport. One call covers a whole cohort; recipients are
/// addressed by the email tag registered on their devices.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(
        &self,
        payload: &NotificationPayload,
        recipient_emails: &[String],
    ) -> Result<GatewayResult, Error>;
}
