use crate::calendar::holidays::HolidayCalendar;
use crate::calendar::CalendarFeatures;
use crate::pipeline::error::PipelineError;
use crate::pipeline::{DATE_COLUMN, POWER_COLUMN};
use crate::types::season::Season;
use chrono::DateTime;
use chrono_tz::Tz;
use log::info;
use polars::prelude::*;

pub const POWER_1HR_COLUMN: &str = "power_1hr";
pub const POWER_1DAY_COLUMN: &str = "power_1day";
pub const RUNTIME_COLUMN: &str = "runtime";

const HOURS_PER_DAY: i32 = 24;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Adds local calendar, season, runtime and lagged-load features.
///
/// Calendar fields are computed in `timezone`: daylight-saving flag, holiday flag,
/// weekend flag, year, month, fractional day of month, hour and the one-hot season.
/// `runtime` counts hours since the earliest timestamp. After sorting by time,
/// `power_1hr` and `power_1day` hold the load 1 and 24 rows earlier; the first 24
/// rows have no day lag and are dropped. The `date` column is dropped last.
pub fn add_features(
    frame: DataFrame,
    timezone: Tz,
    holidays: &HolidayCalendar,
) -> Result<DataFrame, PipelineError> {
    let millis = timestamps(&frame)?;
    let start = millis.iter().copied().min().unwrap_or_default();

    let rows = frame.height();
    let mut daylight_savings = Vec::with_capacity(rows);
    let mut holiday = Vec::with_capacity(rows);
    let mut is_weekend = Vec::with_capacity(rows);
    let mut year = Vec::with_capacity(rows);
    let mut month = Vec::with_capacity(rows);
    let mut day_percent = Vec::with_capacity(rows);
    let mut hour = Vec::with_capacity(rows);
    let mut seasons = Vec::with_capacity(rows);
    let mut runtime = Vec::with_capacity(rows);

    for (row, &ms) in millis.iter().enumerate() {
        let instant = DateTime::from_timestamp_millis(ms)
            .ok_or(PipelineError::InvalidTimestamp { row, millis: ms })?;
        let features = CalendarFeatures::derive(instant, timezone, holidays);
        daylight_savings.push(features.daylight_savings);
        holiday.push(features.holiday);
        is_weekend.push(features.is_weekend);
        year.push(features.year);
        month.push(features.month as i32);
        day_percent.push(features.day_percent);
        hour.push(features.hour as i32);
        seasons.push(features.season);
        runtime.push((ms - start) as f64 / MILLIS_PER_HOUR);
    }

    let mut df = frame;
    df.with_column(Series::new("daylight_savings".into(), daylight_savings))?;
    df.with_column(Series::new("holiday".into(), holiday))?;
    df.with_column(Series::new("is_weekend".into(), is_weekend))?;
    df.with_column(Series::new("year".into(), year))?;
    df.with_column(Series::new("month".into(), month))?;
    df.with_column(Series::new("day_percent".into(), day_percent))?;
    df.with_column(Series::new("hour".into(), hour))?;
    for season in Season::ALL {
        let flags: Vec<bool> = seasons.iter().map(|s| *s == season).collect();
        df.with_column(Series::new(season.column_name().into(), flags))?;
    }
    df.with_column(Series::new(RUNTIME_COLUMN.into(), runtime))?;

    let lagged = add_power_lags(df)?;
    info!(
        "Feature table has {} rows, {} columns",
        lagged.height(),
        lagged.width()
    );
    Ok(lagged)
}

/// Sorts by time, shifts the load by 1 and 24 rows and drops rows without a day lag
/// along with the `date` column.
pub fn add_power_lags(frame: DataFrame) -> Result<DataFrame, PipelineError> {
    let lagged = frame
        .lazy()
        .sort([DATE_COLUMN], SortMultipleOptions::default())
        .with_columns([
            col(POWER_COLUMN).shift(lit(1)).alias(POWER_1HR_COLUMN),
            col(POWER_COLUMN)
                .shift(lit(HOURS_PER_DAY))
                .alias(POWER_1DAY_COLUMN),
        ])
        .filter(col(POWER_1DAY_COLUMN).is_not_null())
        .collect()?;
    Ok(lagged.drop(DATE_COLUMN)?)
}

/// Epoch milliseconds of the `date` column, failing on nulls.
fn timestamps(frame: &DataFrame) -> Result<Vec<i64>, PipelineError> {
    let physical = frame.column(DATE_COLUMN)?.cast(&DataType::Int64)?;
    physical
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or(PipelineError::MissingTimestamp { row }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::fixtures::{hour_millis, power_frame};

    fn hourly_power(hours: i64) -> Result<DataFrame, PolarsError> {
        // Shuffled row order so the sort before lagging matters.
        let order: Vec<i64> = (0..hours).rev().collect();
        let millis: Vec<i64> = order.iter().map(|h| hour_millis(*h)).collect();
        let loads: Vec<f64> = order.iter().map(|h| 1_000.0 + *h as f64).collect();
        power_frame(&millis, &loads)
    }

    #[test]
    fn lags_follow_chronological_order() -> Result<(), Box<dyn std::error::Error>> {
        let df = add_features(
            hourly_power(30)?,
            chrono_tz::America::Chicago,
            &HolidayCalendar::us([2024]),
        )?;

        assert_eq!(df.height(), 6);
        let power = df.column(POWER_COLUMN)?.f64()?;
        let hr = df.column(POWER_1HR_COLUMN)?.f64()?;
        let day = df.column(POWER_1DAY_COLUMN)?.f64()?;
        for row in 0..df.height() {
            let current = power.get(row).ok_or("null power")?;
            assert_eq!(current, 1_024.0 + row as f64);
            assert_eq!(hr.get(row), Some(current - 1.0));
            assert_eq!(day.get(row), Some(current - 24.0));
        }
        assert!(df.column(DATE_COLUMN).is_err());
        Ok(())
    }

    #[test]
    fn short_series_has_no_rows() -> Result<(), Box<dyn std::error::Error>> {
        let df = add_features(
            hourly_power(24)?,
            chrono_tz::America::Chicago,
            &HolidayCalendar::default(),
        )?;
        assert_eq!(df.height(), 0);
        Ok(())
    }

    #[test]
    fn calendar_columns() -> Result<(), Box<dyn std::error::Error>> {
        // Fixture hour 0 is 2024-01-01 00:00 UTC, i.e. 2023-12-31 18:00 in Chicago.
        let df = add_features(
            hourly_power(48)?,
            chrono_tz::America::Chicago,
            &HolidayCalendar::us([2023, 2024]),
        )?;

        // Row 0 is hour 24: 2024-01-01 18:00 CST, New Year's Day, a Monday.
        assert_eq!(df.column("year")?.i32()?.get(0), Some(2024));
        assert_eq!(df.column("month")?.i32()?.get(0), Some(1));
        assert_eq!(df.column("hour")?.i32()?.get(0), Some(18));
        assert_eq!(df.column("holiday")?.bool()?.get(0), Some(true));
        assert_eq!(df.column("is_weekend")?.bool()?.get(0), Some(false));
        assert_eq!(df.column("daylight_savings")?.bool()?.get(0), Some(false));
        assert_eq!(df.column("season_winter")?.bool()?.get(0), Some(true));
        assert_eq!(df.column("season_summer")?.bool()?.get(0), Some(false));
        let day_percent = df.column("day_percent")?.f64()?.get(0).ok_or("null")?;
        assert!((day_percent - 1.0 / 31.0).abs() < 1e-12);
        assert_eq!(df.column(RUNTIME_COLUMN)?.f64()?.get(0), Some(24.0));
        assert_eq!(df.column(RUNTIME_COLUMN)?.f64()?.get(23), Some(47.0));
        Ok(())
    }

    #[test]
    fn null_timestamp_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dates = Series::new(DATE_COLUMN.into(), vec![Some(hour_millis(0)), None])
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
        let df = DataFrame::new(vec![
            dates.into(),
            Series::new(POWER_COLUMN.into(), vec![1.0, 2.0]).into(),
        ])?;
        let result = add_features(df, chrono_tz::America::Chicago, &HolidayCalendar::default());
        assert!(matches!(result, Err(PipelineError::MissingTimestamp { row: 1 })));
        Ok(())
    }
}
