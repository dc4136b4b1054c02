//! The combine pipeline: read power and weather, join, clean, derive features, write.

pub mod clean;
pub mod combine;
pub mod config;
pub mod error;
pub mod features;
pub mod power;
pub mod weather;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::calendar::holidays::HolidayCalendar;
use crate::parquet::write_parquet;
use config::PipelineConfig;
use error::PipelineError;
use log::info;
use polars::prelude::*;
use std::path::Path;

/// Join key shared by every table: naive UTC, millisecond precision.
pub const DATE_COLUMN: &str = "date";
pub const POWER_COLUMN: &str = "power";

/// Normalizes a timestamp expression to the join key type.
///
/// Goes through the epoch value, so zone-aware inputs keep their instant and naive
/// inputs are read as UTC wall clock.
pub fn utc_key(timestamp: Expr) -> Expr {
    timestamp
        .dt()
        .timestamp(TimeUnit::Milliseconds)
        .cast(DataType::Datetime(TimeUnit::Milliseconds, None))
}

pub(crate) fn scan_parquet(path: &Path) -> Result<LazyFrame, PipelineError> {
    LazyFrame::scan_parquet(path, Default::default())
        .map_err(|e| PipelineError::ParquetScan(path.to_path_buf(), e))
}

/// Builds the feature table from the configured inputs without writing it.
pub fn build_table(config: &PipelineConfig) -> Result<DataFrame, PipelineError> {
    let inputs = combine::discover_inputs(
        &config.data_folder,
        &config.power_file_name,
        &config.weather_suffix,
    )?;
    let combined = combine::read_files(&inputs)?;
    info!("Cleaning dataframe");
    let cleaned = clean::clean_frame(combined.frame, &combined.cities)?;
    info!("Adding dates");
    let holidays = HolidayCalendar::us(config.holiday_years.iter().copied());
    features::add_features(cleaned, config.timezone, &holidays)
}

/// Runs the whole pipeline and writes the feature table to `config.output_path`.
///
/// ```no_run
/// use load_weather::{run_pipeline, PipelineConfig};
///
/// # fn main() -> Result<(), load_weather::PipelineError> {
/// let table = run_pipeline(&PipelineConfig::default())?;
/// println!("{} rows x {} columns", table.height(), table.width());
/// # Ok(())
/// # }
/// ```
pub fn run_pipeline(config: &PipelineConfig) -> Result<DataFrame, PipelineError> {
    let mut table = build_table(config)?;
    write_parquet(&mut table, &config.output_path)?;
    info!(
        "Wrote {} rows, {} columns to {}",
        table.height(),
        table.width(),
        config.output_path.display()
    );
    Ok(table)
}
