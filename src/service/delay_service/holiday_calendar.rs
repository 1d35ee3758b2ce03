use time::Date;

///
/// Marks dates on which deferred pushes must not fire. Weekends are
/// always skipped by the delay service; this covers everything else.
///
#[cfg_attr(test, mockall::automock)]
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, date: Date) -> bool;
}

/// Calendar without public holidays
pub struct WeekendOnlyCalendar;

impl HolidayCalendar for WeekendOnlyCalendar {
    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
