//! Serde model of the archive API's JSON response.

use crate::pipeline::DATE_COLUMN;
use crate::types::hourly_variable::HourlyVariable;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// One location of an archive response. A multi-location request returns a JSON array
/// of these, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub utc_offset_seconds: i64,
    pub hourly: HourlySeries,
}

/// Hourly arrays, all the same length as `time`. Values are nullable: the archive
/// reports gaps as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    /// Unix seconds, UTC (requested with `timeformat=unixtime`).
    pub time: Vec<i64>,
    pub temperature_2m: Vec<Option<f64>>,
    pub relative_humidity_2m: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    pub rain: Vec<Option<f64>>,
    pub snowfall: Vec<Option<f64>>,
    pub snow_depth: Vec<Option<f64>>,
    pub weather_code: Vec<Option<f64>>,
    pub apparent_temperature: Vec<Option<f64>>,
    pub cloud_cover: Vec<Option<f64>>,
    pub wind_speed_10m: Vec<Option<f64>>,
    pub is_day: Vec<Option<f64>>,
    pub sunshine_duration: Vec<Option<f64>>,
}

impl HourlySeries {
    pub fn values(&self, variable: HourlyVariable) -> &[Option<f64>] {
        match variable {
            HourlyVariable::Temperature2m => &self.temperature_2m,
            HourlyVariable::RelativeHumidity2m => &self.relative_humidity_2m,
            HourlyVariable::Precipitation => &self.precipitation,
            HourlyVariable::Rain => &self.rain,
            HourlyVariable::Snowfall => &self.snowfall,
            HourlyVariable::SnowDepth => &self.snow_depth,
            HourlyVariable::WeatherCode => &self.weather_code,
            HourlyVariable::ApparentTemperature => &self.apparent_temperature,
            HourlyVariable::CloudCover => &self.cloud_cover,
            HourlyVariable::WindSpeed10m => &self.wind_speed_10m,
            HourlyVariable::IsDay => &self.is_day,
            HourlyVariable::SunshineDuration => &self.sunshine_duration,
        }
    }

    /// `date` (naive UTC, ms) followed by one float column per variable in request order.
    ///
    /// Fails if an array's length differs from `time`.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let millis: Vec<i64> = self.time.iter().map(|secs| secs * 1000).collect();
        let date = Series::new(DATE_COLUMN.into(), millis)
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

        let mut columns: Vec<Column> = Vec::with_capacity(HourlyVariable::ALL.len() + 1);
        columns.push(date.into());
        for variable in HourlyVariable::ALL {
            let values = self.values(variable).to_vec();
            columns.push(Series::new(variable.name().into(), values).into());
        }
        DataFrame::new(columns)
    }
}
