use crate::{
    dto::{Job, User},
    error::Error,
};
use async_trait::async_trait;

///
/// Email flows with structurally fixed recipients: the job owner (override
/// email first, profile email otherwise) and the job's assigned
/// translator. Not eligibility-filtered. Every send is attempted
/// independently; a failed recipient never blocks the others.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailService: Send + Sync {
    ///
    /// Session ended: invoice mail to the customer, salary mail to the
    /// assigned translator
    ///
    async fn send_session_ended(&self, job: &Job, session_time: &str) -> Result<(), Error>;

    ///
    /// Job was reassigned: customer, previous translator (when one
    /// existed) and new translator each get their own template
    ///
    async fn send_changed_translator(
        &self,
        job: &Job,
        old_translator: Option<User>,
        new_translator: &User,
    ) -> Result<(), Error>;

    /// Booking time changed: customer and assigned translator
    async fn send_changed_date(&self, job: &Job, old_time: &str) -> Result<(), Error>;

    /// Booking language changed: customer and assigned translator
    async fn send_changed_lang(&self, job: &Job, old_lang: &str) -> Result<(), Error>;
}
