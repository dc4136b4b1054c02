//! Local-time calendar features derived from UTC timestamps.

pub mod holidays;

use crate::types::season::Season;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeDelta, Timelike, Utc, Weekday};
use chrono_tz::{OffsetComponents, Tz};
use holidays::HolidayCalendar;

pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_month_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_day_of_next_month = NaiveDate::from_ymd_opt(next_month_year, next_month, 1)?;
    let last_day_of_current_month = first_day_of_next_month - Duration::days(1);
    Some(last_day_of_current_month.day())
}

/// Calendar features of one instant, as seen from a local time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarFeatures {
    /// The local offset includes a daylight-saving component.
    pub daylight_savings: bool,
    /// The local date is in the holiday calendar.
    pub holiday: bool,
    /// Saturday or Sunday in local time.
    pub is_weekend: bool,
    pub year: i32,
    pub month: u32,
    /// Local day of month divided by the number of days in that month, in `(0, 1]`.
    pub day_percent: f64,
    pub hour: u32,
    pub season: Season,
}

impl CalendarFeatures {
    /// Derives the features of `instant` in `timezone`.
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use load_weather::{CalendarFeatures, HolidayCalendar, Season};
    ///
    /// let holidays = HolidayCalendar::us([2024]);
    /// // 2024-07-04 17:00 UTC is noon in Chicago.
    /// let instant = Utc.with_ymd_and_hms(2024, 7, 4, 17, 0, 0).unwrap();
    /// let features = CalendarFeatures::derive(instant, chrono_tz::America::Chicago, &holidays);
    ///
    /// assert!(features.holiday);
    /// assert!(features.daylight_savings);
    /// assert_eq!(features.hour, 12);
    /// assert_eq!(features.season, Season::Summer);
    /// ```
    pub fn derive(instant: DateTime<Utc>, timezone: Tz, holidays: &HolidayCalendar) -> Self {
        let local = instant.with_timezone(&timezone);
        let date = local.date_naive();
        let (year, month) = (local.year(), local.month());
        // A valid local date always has a month length; the fallback only guards the division.
        let month_days = days_in_month(year, month).unwrap_or(31);

        CalendarFeatures {
            daylight_savings: local.offset().dst_offset() != TimeDelta::zero(),
            holiday: holidays.contains(date),
            is_weekend: matches!(local.weekday(), Weekday::Sat | Weekday::Sun),
            year,
            month,
            day_percent: local.day() as f64 / month_days as f64,
            hour: local.hour(),
            season: Season::from_month(month).unwrap_or(Season::Winter),
        }
    }
}
