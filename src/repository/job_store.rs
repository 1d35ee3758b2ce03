use super::Error;
use crate::dto::{Job, PotentialAssignment, User};
use async_trait::async_trait;
use uuid::Uuid;

///
/// Persistence seam supplying booking data to the dispatch services.
///
/// The notification core only ever reads; bookings are created and mutated
/// by the booking flow that embeds this crate.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobStore: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::JobNotExist] when no job has the id
    ///
    async fn find_job(&self, id: i64) -> Result<Job, Error>;

    ///
    /// ### Errors
    /// - [Error::UserNotExist] when no user has the id
    ///
    async fn find_user(&self, id: Uuid) -> Result<User, Error>;

    async fn list_users(&self) -> Result<Vec<User>, Error>;

    ///
    /// All potential-job relations of the user, across jobs
    ///
    async fn potential_assignments(&self, user_id: Uuid) -> Result<Vec<PotentialAssignment>, Error>;

    ///
    /// Translators already resolved as candidates for the job,
    /// a much narrower pool than [JobStore::list_users]
    ///
    async fn potential_translators(&self, job_id: i64) -> Result<Vec<User>, Error>;

    ///
    /// Translator of the job's active assignment record
    /// (not cancelled, not completed), if any
    ///
    async fn assigned_translator(&self, job_id: i64) -> Result<Option<User>, Error>;

    ///
    /// Display name of a language, e.g. "franska"
    ///
    async fn language_name(&self, language_id: i64) -> Result<String, Error>;
}
