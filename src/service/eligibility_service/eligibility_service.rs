use crate::{
    dto::{Job, User},
    error::Error,
};
use async_trait::async_trait;
use uuid::Uuid;

///
/// Decides which translators may be notified about a job. Pure membership
/// given the store snapshot; never mutates anything.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EligibilityService: Send + Sync {
    ///
    /// Filter the whole user pool down to translators eligible for the job.
    /// `exclude_user_id = None` excludes nobody.
    ///
    async fn eligible_translators(
        &self,
        job: &Job,
        exclude_user_id: Option<Uuid>,
    ) -> Result<Vec<User>, Error>;

    ///
    /// Same predicate applied to a caller-supplied candidate pool,
    /// used by the SMS path with the job's already-resolved translators
    ///
    async fn filter_candidates(
        &self,
        job: &Job,
        candidates: Vec<User>,
        exclude_user_id: Option<Uuid>,
    ) -> Result<Vec<User>, Error>;
}
