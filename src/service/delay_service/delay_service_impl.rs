use super::{DelayService, DelayServiceConfig, HolidayCalendar};
use crate::{dto::User, service::clock::Clock};
use std::sync::Arc;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, Time, Weekday};

pub struct DelayServiceImpl {
    config: DelayServiceConfig,
    clock: Arc<dyn Clock>,
    calendar: Arc<dyn HolidayCalendar>,
}

impl DelayServiceImpl {
    pub fn new(
        config: DelayServiceConfig,
        clock: Arc<dyn Clock>,
        calendar: Arc<dyn HolidayCalendar>,
    ) -> Self {
        Self {
            config,
            clock,
            calendar,
        }
    }

    fn is_night_time(&self, time: Time) -> bool {
        let start = self.config.night_window_start;
        let end = self.config.night_window_end;

        if start <= end {
            time >= start && time < end
        } else {
            // window wraps midnight
            time >= start || time < end
        }
    }

    fn is_business_day(&self, date: time::Date) -> bool {
        !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
            && !self.calendar.is_holiday(date)
    }
}

impl DelayService for DelayServiceImpl {
    fn needs_delay(&self, user: &User) -> bool {
        let now = self.clock.now().to_offset(self.config.utc_offset);
        if !self.is_night_time(now.time()) {
            return false;
        }

        user.preferences.suppress_nighttime_notifications
    }

    fn next_business_time(&self) -> OffsetDateTime {
        let now = self.clock.now().to_offset(self.config.utc_offset);

        let mut date = now.date();
        let opening = PrimitiveDateTime::new(date, self.config.business_day_start)
            .assume_offset(self.config.utc_offset);
        if opening <= now {
            date = date.saturating_add(Duration::days(1));
        }
        while !self.is_business_day(date) {
            date = date.saturating_add(Duration::days(1));
        }

        PrimitiveDateTime::new(date, self.config.business_day_start)
            .assume_offset(self.config.utc_offset)
    }
}
