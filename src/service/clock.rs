use time::OffsetDateTime;

///
/// Source of "now" for the delay policy, injected so time-dependent
/// decisions stay deterministic in tests
///
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
