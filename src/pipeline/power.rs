use crate::pipeline::error::PipelineError;
use crate::pipeline::{scan_parquet, utc_key, DATE_COLUMN, POWER_COLUMN};
use log::info;
use polars::prelude::*;
use std::path::Path;

const SOURCE_TIME_COLUMN: &str = "period";
const SOURCE_VALUE_COLUMN: &str = "value";

/// Reads the regional load file into a `(date, power)` frame.
///
/// The source `period` column carries no time zone. It is taken to be UTC wall-clock
/// time; if the grid operator ever publishes local time instead, every local calendar
/// feature downstream shifts by the zone offset without any error being raised.
pub fn read_power(path: &Path) -> Result<DataFrame, PipelineError> {
    info!("Reading power file {}", path.display());
    let frame = scan_parquet(path)?;
    let df = normalize_power(frame)
        .collect()
        .map_err(|e| PipelineError::Normalize(path.to_path_buf(), e))?;
    info!("Read {} power rows from {}", df.height(), path.display());
    Ok(df)
}

/// Renames the source columns to `date`/`power` and settles their types.
pub fn normalize_power(frame: LazyFrame) -> LazyFrame {
    frame.select([
        utc_key(col(SOURCE_TIME_COLUMN)).alias(DATE_COLUMN),
        col(SOURCE_VALUE_COLUMN)
            .cast(DataType::Float64)
            .alias(POWER_COLUMN),
    ])
}
