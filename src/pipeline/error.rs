use crate::parquet::ParquetWriteError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to read input folder '{0}'")]
    FolderRead(PathBuf, #[source] std::io::Error),

    #[error("Power file '{file_name}' not found in '{folder}'")]
    PowerFileMissing { folder: PathBuf, file_name: String },

    #[error("No weather files ending in '{suffix}' found in '{folder}'")]
    WeatherFilesMissing { folder: PathBuf, suffix: String },

    #[error("Weather file '{0}' does not start with a city name")]
    CityName(PathBuf),

    #[error("Failed to scan parquet file '{0}'")]
    ParquetScan(PathBuf, #[source] PolarsError),

    // Missing or mistyped columns surface here, when the normalized frame is collected.
    #[error("Failed to normalize '{0}'")]
    Normalize(PathBuf, #[source] PolarsError),

    #[error("Failed to merge weather for city '{city}'")]
    WeatherMerge {
        city: String,
        #[source]
        source: PolarsError,
    },

    #[error("Missing timestamp at row {row}")]
    MissingTimestamp { row: usize },

    #[error("Timestamp {millis} ms at row {row} is out of range")]
    InvalidTimestamp { row: usize, millis: i64 },

    #[error(transparent)]
    ParquetWrite(#[from] ParquetWriteError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
