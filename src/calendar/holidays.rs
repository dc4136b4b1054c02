//! US federal holiday calendar, including observed dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::{BTreeMap, BTreeSet};

/// Set of public holidays over a fixed range of years.
///
/// Built with [`HolidayCalendar::us`], which follows the federal calendar: fixed-date
/// holidays that fall on a Saturday are observed on the Friday before, those on a
/// Sunday on the Monday after. Both the actual and the observed date count as holidays.
/// Only dates inside the requested years are kept, so an observed New Year's Day on
/// December 31st belongs to the earlier year.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    dates: BTreeMap<NaiveDate, &'static str>,
}

impl HolidayCalendar {
    /// US federal holidays for the given years.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use load_weather::HolidayCalendar;
    ///
    /// let holidays = HolidayCalendar::us([2023, 2024]);
    /// let thanksgiving = NaiveDate::from_ymd_opt(2023, 11, 23).unwrap();
    /// assert_eq!(holidays.name(thanksgiving), Some("Thanksgiving"));
    /// ```
    pub fn us(years: impl IntoIterator<Item = i32>) -> Self {
        let years: BTreeSet<i32> = years.into_iter().collect();
        let mut dates = BTreeMap::new();

        // Neighbouring years contribute observed dates that cross the year boundary.
        let candidates = years
            .iter()
            .flat_map(|year| [year - 1, *year, year + 1])
            .collect::<BTreeSet<_>>();

        for year in candidates {
            for (date, name) in us_federal_holidays(year) {
                if years.contains(&date.year()) {
                    dates.entry(date).or_insert(name);
                }
            }
        }
        Self { dates }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains_key(&date)
    }

    pub fn name(&self, date: NaiveDate) -> Option<&'static str> {
        self.dates.get(&date).copied()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.dates.len()
    }
}

fn us_federal_holidays(year: i32) -> Vec<(NaiveDate, &'static str)> {
    let mut holidays = Vec::new();

    let mut fixed = |month: u32, day: u32, name: &'static str| {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            holidays.push((date, name));
            if let Some(observed) = observed(date) {
                holidays.push((observed, name));
            }
        }
    };
    fixed(1, 1, "New Year's Day");
    if year >= 2021 {
        fixed(6, 19, "Juneteenth National Independence Day");
    }
    fixed(7, 4, "Independence Day");
    fixed(11, 11, "Veterans Day");
    fixed(12, 25, "Christmas Day");

    let floating = [
        (1, Weekday::Mon, 3, "Martin Luther King Jr. Day"),
        (2, Weekday::Mon, 3, "Washington's Birthday"),
        (9, Weekday::Mon, 1, "Labor Day"),
        (10, Weekday::Mon, 2, "Columbus Day"),
        (11, Weekday::Thu, 4, "Thanksgiving"),
    ];
    for (month, weekday, n, name) in floating {
        if let Some(date) = NaiveDate::from_weekday_of_month_opt(year, month, weekday, n) {
            holidays.push((date, name));
        }
    }
    if let Some(date) = last_weekday_of_month(year, 5, Weekday::Mon) {
        holidays.push((date, "Memorial Day"));
    }
    holidays
}

/// Weekday a weekend holiday is observed on, `None` when it falls on a weekday.
fn observed(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => Some(date - Duration::days(1)),
        Weekday::Sun => Some(date + Duration::days(1)),
        _ => None,
    }
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last_day = super::days_in_month(year, month)?;
    let last = NaiveDate::from_ymd_opt(year, month, last_day)?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    Some(last - Duration::days(back as i64))
}
