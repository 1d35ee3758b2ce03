use crate::dto::User;
use time::OffsetDateTime;

///
/// Time-of-day delivery policy: whether a push to a translator has to wait,
/// and until when.
///
#[cfg_attr(test, mockall::automock)]
pub trait DelayService: Send + Sync {
    ///
    /// True iff the current time falls inside the configured night window
    /// and the translator opted out of nighttime notifications
    ///
    fn needs_delay(&self, user: &User) -> bool;

    ///
    /// Next business-day opening after now, skipping weekends and holidays
    ///
    fn next_business_time(&self) -> OffsetDateTime;
}
