use log::debug;
use polars::error::PolarsError;
use polars::prelude::{DataFrame, ParquetCompression, ParquetWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParquetWriteError {
    #[error("Failed to create directory '{0}'")]
    DirCreation(PathBuf, #[source] std::io::Error),

    #[error("I/O error writing parquet file '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing parquet file '{0}'")]
    Polars(PathBuf, #[source] PolarsError),
}

/// Writes a DataFrame to a Snappy-compressed parquet file, creating parent directories.
/// `ParquetWriter` needs `&mut df` since it may rechunk the frame.
pub fn write_parquet(df: &mut DataFrame, path: &Path) -> Result<(), ParquetWriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| ParquetWriteError::DirCreation(parent.to_path_buf(), e))?;
    }
    let file = std::fs::File::create(path)
        .map_err(|e| ParquetWriteError::Io(path.to_path_buf(), e))?;
    let bytes = ParquetWriter::new(file)
        .with_compression(ParquetCompression::Snappy)
        .finish(df)
        .map_err(|e| ParquetWriteError::Polars(path.to_path_buf(), e))?;
    debug!("Wrote {} bytes to {}", bytes, path.display());
    Ok(())
}
