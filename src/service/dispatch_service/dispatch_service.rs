use crate::{
    dto::{DispatchResult, Job, JobData, User},
    error::Error,
};
use async_trait::async_trait;
use uuid::Uuid;

///
/// Push dispatch flows. Every flow is best-effort: gateway failures are
/// logged and reflected in the returned counts, never raised; only a
/// malformed job aborts a dispatch.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DispatchService: Send + Sync {
    ///
    /// Notify every eligible translator about a new booking. Recipients
    /// are split into an immediate and a delayed cohort; the delayed
    /// cohort's payload carries a send_after of the next business opening.
    ///
    /// ### Returns
    /// Per-cohort recipient counts and gateway outcome
    ///
    /// ### Errors
    /// - [Error::Validation] when the job has no due time or duration
    ///
    async fn notify_suitable_translators(
        &self,
        job: &Job,
        data: JobData,
        exclude_user_id: Option<Uuid>,
    ) -> Result<DispatchResult, Error>;

    ///
    /// Admin cancelled the job: rebuild the job data bag from the store
    /// and re-run the suitable-translators dispatch with no exclusion
    ///
    async fn notify_admin_cancelled(&self, job_id: i64) -> Result<DispatchResult, Error>;

    ///
    /// Tell the job owner that no translator accepted the booking
    ///
    async fn notify_expired(&self, job: &Job, user: &User) -> Result<(), Error>;

    ///
    /// Remind the translator shortly before the session starts
    ///
    async fn notify_session_start_reminder(
        &self,
        user: &User,
        job: &Job,
        language: &str,
    ) -> Result<(), Error>;

    ///
    /// Tell the translator a pending booking change has been resolved
    /// and the job is theirs
    ///
    async fn notify_assignment_confirmed(
        &self,
        user: &User,
        job: &Job,
        language: &str,
    ) -> Result<(), Error>;
}
