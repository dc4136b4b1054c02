//! Downloads hourly weather for a set of cities from the historical archive and writes
//! one parquet file per city.

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod retry;

use crate::acquisition::client::{ArchiveClient, ArchiveRequest};
use crate::acquisition::config::AcquisitionConfig;
use crate::acquisition::error::AcquisitionError;
use crate::parquet::write_parquet;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use log::info;
use std::path::PathBuf;

/// Fetches the configured cities and writes `<output_folder>/<city>-<file_suffix>` for each.
///
/// Returns the written paths in city order. Nothing is written unless the archive
/// returned exactly one series per city.
pub async fn acquire(config: &AcquisitionConfig) -> Result<Vec<PathBuf>, AcquisitionError> {
    let cache_dir = match &config.cache_dir {
        Some(dir) => dir.clone(),
        None => get_cache_dir()?,
    };
    ensure_cache_dir_exists(&cache_dir).await?;

    let client = ArchiveClient::new(&cache_dir, &config.base_url, config.retry);
    let request = ArchiveRequest {
        cities: config.cities.clone(),
        start_date: config.start_date,
        end_date: config.end_date,
        timezone: config.timezone.clone(),
    };
    let responses = client.fetch(&request).await?;

    let mut written = Vec::with_capacity(config.cities.len());
    for (city, response) in config.cities.iter().zip(responses) {
        let mut frame =
            response
                .hourly
                .to_frame()
                .map_err(|source| AcquisitionError::FrameBuild {
                    city: city.name.clone(),
                    source,
                })?;
        let path = config
            .output_folder
            .join(format!("{}-{}", city.name, config.file_suffix));
        info!("Writing {} hourly rows for {} to {}", frame.height(), city.name, path.display());

        let path_clone = path.clone();
        tokio::task::spawn_blocking(move || write_parquet(&mut frame, &path_clone)).await??;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::response::tests::SAMPLE;
    use crate::acquisition::response::ArchiveResponse;
    use crate::pipeline::DATE_COLUMN;
    use crate::pipeline::scan_parquet;
    use crate::types::city::{City, LatLon};
    use polars::prelude::*;

    #[tokio::test]
    async fn writes_one_file_per_city_from_cache() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let cache_dir = dir.path().join("cache");
        let output = dir.path().join("data");
        let config = AcquisitionConfig::builder()
            .cities(vec![City::new("nashville", LatLon(36.16, -86.78))])
            .cache_dir(&cache_dir)
            .output_folder(&output)
            .base_url("http://127.0.0.1:9/v1/archive")
            .build();

        let responses: Vec<ArchiveResponse> = serde_json::from_str(SAMPLE)?;
        let request = ArchiveRequest {
            cities: config.cities.clone(),
            start_date: config.start_date,
            end_date: config.end_date,
            timezone: config.timezone.clone(),
        };
        std::fs::create_dir_all(&cache_dir)?;
        ArchiveClient::cache(responses, &cache_dir.join(request.cache_file_name())).await?;

        let written = acquire(&config).await?;

        assert_eq!(written, vec![output.join("nashville-hourly-data.parquet")]);
        let df = scan_parquet(&written[0])?.collect()?;
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 13);
        assert_eq!(
            df.column(DATE_COLUMN)?.dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        Ok(())
    }
}
