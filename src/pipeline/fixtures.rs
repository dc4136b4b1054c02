//! Small synthetic inputs shaped like the real power and archive files.

use crate::parquet::write_parquet;
use crate::pipeline::{DATE_COLUMN, POWER_COLUMN};
use crate::types::hourly_variable::HourlyVariable;
use polars::prelude::*;
use std::path::Path;

/// 2024-01-01 00:00 UTC.
pub const FIXTURE_START_MILLIS: i64 = 1_704_067_200_000;
/// Load at fixture hour 0; hour `h` reads `FIXTURE_LOAD_BASE + h`.
pub const FIXTURE_LOAD_BASE: f64 = 10_000.0;

pub fn hour_millis(hour: i64) -> i64 {
    FIXTURE_START_MILLIS + hour * 3_600_000
}

pub fn naive_utc_series(name: &str, millis: &[i64]) -> PolarsResult<Series> {
    Series::new(name.into(), millis.to_vec())
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
}

/// Already-normalized `(date, power)` frame.
pub fn power_frame(millis: &[i64], loads: &[f64]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        naive_utc_series(DATE_COLUMN, millis)?.into(),
        Series::new(POWER_COLUMN.into(), loads.to_vec()).into(),
    ])
}

/// Raw archive frame in metric units. Every hour reads 10 °C, 25.4 mm of rain, 2.54 cm
/// of snowfall, 0.0508 m of snow depth, 16.09 km/h of wind and 80 % humidity; `is_day`
/// alternates starting at night.
pub fn raw_weather_frame(millis: &[i64], codes: &[f64]) -> PolarsResult<DataFrame> {
    let rows = millis.len();
    let mut columns: Vec<Column> = vec![naive_utc_series(DATE_COLUMN, millis)?.into()];
    for variable in HourlyVariable::ALL {
        let values: Vec<f64> = match variable {
            HourlyVariable::WeatherCode => codes.to_vec(),
            HourlyVariable::IsDay => (0..rows).map(|i| (i % 2) as f64).collect(),
            _ => vec![fixture_value(variable); rows],
        };
        columns.push(Series::new(variable.name().into(), values).into());
    }
    DataFrame::new(columns)
}

fn fixture_value(variable: HourlyVariable) -> f64 {
    match variable {
        HourlyVariable::Temperature2m | HourlyVariable::ApparentTemperature => 10.0,
        HourlyVariable::RelativeHumidity2m => 80.0,
        HourlyVariable::Precipitation | HourlyVariable::Rain => 25.4,
        HourlyVariable::Snowfall => 2.54,
        HourlyVariable::SnowDepth => 0.0508,
        HourlyVariable::CloudCover => 50.0,
        HourlyVariable::WindSpeed10m => 16.09,
        HourlyVariable::SunshineDuration => 3600.0,
        HourlyVariable::WeatherCode | HourlyVariable::IsDay => 0.0,
    }
}

/// Writes `tva_load.parquet` plus one `<city>-hourly-data.parquet` per city, all
/// covering the same `hours` consecutive hours.
pub fn write_fixture_folder(dir: &Path, cities: &[&str], hours: i64) -> Result<(), Box<dyn std::error::Error>> {
    let millis: Vec<i64> = (0..hours).map(hour_millis).collect();

    let mut power = DataFrame::new(vec![
        naive_utc_series("period", &millis)?.into(),
        Series::new(
            "value".into(),
            (0..hours).map(|h| FIXTURE_LOAD_BASE + h as f64).collect::<Vec<_>>(),
        )
        .into(),
    ])?;
    write_parquet(&mut power, &dir.join("tva_load.parquet"))?;

    let codes: Vec<f64> = (0..hours).map(|h| (h * 7 % 100) as f64).collect();
    for city in cities {
        let mut weather = raw_weather_frame(&millis, &codes)?;
        write_parquet(&mut weather, &dir.join(format!("{city}-hourly-data.parquet")))?;
    }
    Ok(())
}
