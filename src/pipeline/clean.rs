use crate::pipeline::error::PipelineError;
use crate::pipeline::POWER_COLUMN;
use crate::types::hourly_variable::HourlyVariable;
use crate::types::weather_category::WeatherCategory;
use log::info;
use polars::prelude::*;

/// Loads at or below this value are impossible readings.
pub const MIN_POWER: f64 = 0.0;
/// Loads at or above this value are sensor outliers.
pub const MAX_POWER: f64 = 900_000.0;

/// Drops invalid load readings and the redundant `<city>_weather_code_none` columns.
///
/// A row survives iff `MIN_POWER < power < MAX_POWER`; null loads are dropped too.
/// The "no precipitation" indicator is implied by every other weather indicator of the
/// city being false, so it carries no information.
pub fn clean_frame(frame: DataFrame, cities: &[String]) -> Result<DataFrame, PipelineError> {
    let before = frame.height();
    let mut df = frame
        .lazy()
        .filter(
            col(POWER_COLUMN)
                .gt(lit(MIN_POWER))
                .and(col(POWER_COLUMN).lt(lit(MAX_POWER))),
        )
        .collect()?;
    info!(
        "Removed {} rows with power outside ({}, {})",
        before - df.height(),
        MIN_POWER,
        MAX_POWER
    );

    let base = HourlyVariable::WeatherCode.name();
    for city in cities {
        let name = format!("{}_{}", city, WeatherCategory::None.column_name(base));
        df = df.drop(&name)?;
    }
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::combine::combine_frames;
    use crate::pipeline::fixtures::{hour_millis, power_frame, raw_weather_frame};
    use crate::pipeline::weather::{normalize_weather, CityWeather};

    fn combined(loads: &[f64]) -> Result<(DataFrame, Vec<String>), Box<dyn std::error::Error>> {
        let millis: Vec<i64> = (0..loads.len() as i64).map(hour_millis).collect();
        let power = power_frame(&millis, loads)?;
        let raw = raw_weather_frame(&millis, &vec![0.0; loads.len()])?;
        let weather = CityWeather {
            city: "memphis".to_string(),
            frame: normalize_weather(raw.lazy(), "memphis").collect()?,
        };
        let combined = combine_frames(power, vec![weather])?;
        Ok((combined.frame, combined.cities))
    }

    #[test]
    fn keeps_rows_strictly_inside_bounds() -> Result<(), Box<dyn std::error::Error>> {
        let loads = [-5.0, 0.0, 0.5, 15_000.0, 899_999.0, 900_000.0, 1_200_000.0];
        let (frame, cities) = combined(&loads)?;

        let cleaned = clean_frame(frame, &cities)?;

        let mut kept: Vec<f64> = cleaned
            .column(POWER_COLUMN)?
            .f64()?
            .into_iter()
            .flatten()
            .collect();
        kept.sort_by(f64::total_cmp);
        assert_eq!(kept, vec![0.5, 15_000.0, 899_999.0]);
        Ok(())
    }

    #[test]
    fn drops_none_indicator_only() -> Result<(), Box<dyn std::error::Error>> {
        let (frame, cities) = combined(&[10.0, 20.0])?;
        let width = frame.width();

        let cleaned = clean_frame(frame, &cities)?;

        assert_eq!(cleaned.width(), width - 1);
        assert!(cleaned.column("memphis_weather_code_none").is_err());
        assert!(cleaned.column("memphis_weather_code_drizzle").is_ok());
        Ok(())
    }

    #[test]
    fn missing_indicator_column_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let (frame, _) = combined(&[10.0])?;
        let result = clean_frame(frame, &["atlanta".to_string()]);
        assert!(result.is_err());
        Ok(())
    }
}
