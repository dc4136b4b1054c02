use crate::pipeline::error::PipelineError;
use crate::pipeline::{scan_parquet, utc_key, DATE_COLUMN};
use crate::types::hourly_variable::HourlyVariable;
use crate::types::weather_category::WeatherCategory;
use log::info;
use polars::prelude::*;
use std::path::Path;

/// Normalized weather of one city: `date` plus city-prefixed columns.
#[derive(Debug, Clone)]
pub struct CityWeather {
    pub city: String,
    pub frame: DataFrame,
}

/// City name encoded in a weather file name: everything before the first `-`
/// (`memphis-hourly-data.parquet` → `memphis`). `None` when that prefix is empty.
pub fn city_from_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    file_name
        .split('-')
        .next()
        .filter(|city| !city.is_empty())
        .map(str::to_string)
}

/// Reads one city's weather file and normalizes it with [`normalize_weather`].
pub fn read_weather(path: &Path) -> Result<CityWeather, PipelineError> {
    info!("Reading weather from {}", path.display());
    let city =
        city_from_path(path).ok_or_else(|| PipelineError::CityName(path.to_path_buf()))?;
    let frame = scan_parquet(path)?;
    let df = normalize_weather(frame, &city)
        .collect()
        .map_err(|e| PipelineError::Normalize(path.to_path_buf(), e))?;
    info!("Read {} hours of weather for {}", df.height(), city);
    Ok(CityWeather { city, frame: df })
}

/// Converts a raw archive frame to US units and a fixed one-hot weather encoding.
///
/// * temperatures °C → °F, precipitation and rain mm → in, snowfall cm → in,
///   snow depth m → in, wind speed km/h → mph
/// * `is_day` becomes a boolean (`== 1`)
/// * `weather_code` is replaced by one indicator column per [`WeatherCategory`]
/// * every column except `date` gets the `<city>_` prefix
pub fn normalize_weather(frame: LazyFrame, city: &str) -> LazyFrame {
    let prefixed = |name: &str| format!("{}_{}", city, name);

    let mut exprs = vec![utc_key(col(DATE_COLUMN)).alias(DATE_COLUMN)];
    for variable in HourlyVariable::ALL {
        let name = variable.name();
        let expr = match variable {
            HourlyVariable::WeatherCode => continue,
            HourlyVariable::IsDay => col(name).eq(lit(1.0)).fill_null(lit(false)),
            _ => {
                let value = col(name).cast(DataType::Float64);
                match variable.conversion() {
                    Some(conversion) => conversion.expr(value),
                    None => value,
                }
            }
        };
        exprs.push(expr.alias(prefixed(name)));
    }

    let code_name = HourlyVariable::WeatherCode.name();
    let code = col(code_name).cast(DataType::Float64);
    for category in WeatherCategory::ALL {
        exprs.push(
            category
                .indicator(code.clone())
                .alias(prefixed(&category.column_name(code_name))),
        );
    }

    frame.select(exprs)
}
