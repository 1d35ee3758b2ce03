use crate::{dto::Job, error::Error};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsService: Send + Sync {
    ///
    /// Text every translator in the job's resolved candidate pool about
    /// the booking. Individual send failures are logged and skipped.
    ///
    /// ### Returns
    /// Number of translators the send was attempted for
    ///
    /// ### Errors
    /// - [Error::Validation] when the job has no due time or duration
    ///
    async fn send_to_potential_translators(&self, job: &Job) -> Result<usize, Error>;
}
