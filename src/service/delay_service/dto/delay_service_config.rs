use time::{Time, UtcOffset};

pub struct DelayServiceConfig {
    /// Inclusive start of the night window, local time
    pub night_window_start: Time,
    /// Exclusive end of the night window; may lie before the start,
    /// in which case the window wraps midnight
    pub night_window_end: Time,
    /// Local time at which the next business day opens
    pub business_day_start: Time,
    pub utc_offset: UtcOffset,
}
