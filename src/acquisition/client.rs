use crate::acquisition::error::AcquisitionError;
use crate::acquisition::response::ArchiveResponse;
use crate::acquisition::retry::RetryPolicy;
use crate::types::city::City;
use crate::types::hourly_variable::HourlyVariable;
use bincode::config::{Configuration, Fixint, LittleEndian};
use chrono::NaiveDate;
use log::{info, warn};
use reqwest::Client;
use std::path::{Path, PathBuf};

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

/// One archive query: hourly variables for a set of cities over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveRequest {
    pub cities: Vec<City>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub timezone: String,
}

impl ArchiveRequest {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let join = |values: Vec<String>| values.join(",");
        vec![
            (
                "latitude",
                join(self.cities.iter().map(|c| c.location.0.to_string()).collect()),
            ),
            (
                "longitude",
                join(self.cities.iter().map(|c| c.location.1.to_string()).collect()),
            ),
            ("start_date", self.start_date.format("%Y-%m-%d").to_string()),
            ("end_date", self.end_date.format("%Y-%m-%d").to_string()),
            (
                "hourly",
                join(HourlyVariable::ALL.iter().map(|v| v.name().to_string()).collect()),
            ),
            ("timezone", self.timezone.clone()),
            ("timeformat", "unixtime".to_string()),
        ]
    }

    /// Cache file for this request. Responses never expire, so the name pins everything
    /// that changes the answer: the cities and the date range.
    pub fn cache_file_name(&self) -> String {
        let cities: Vec<&str> = self.cities.iter().map(|c| c.name.as_str()).collect();
        format!(
            "archive-{}-{}-{}.bin",
            cities.join("_"),
            self.start_date.format("%Y%m%d"),
            self.end_date.format("%Y%m%d")
        )
    }
}

/// Client for the historical weather archive with an on-disk response cache.
pub struct ArchiveClient {
    cache_dir: PathBuf,
    base_url: String,
    retry: RetryPolicy,
    download_client: Client,
}

impl ArchiveClient {
    pub fn new(cache_dir: &Path, base_url: &str, retry: RetryPolicy) -> Self {
        ArchiveClient {
            cache_dir: cache_dir.to_path_buf(),
            base_url: base_url.to_string(),
            retry,
            download_client: Client::new(),
        }
    }

    /// Returns the archive response for `request`, one entry per city in request order.
    ///
    /// A cached response is returned without touching the network. Otherwise the archive
    /// is queried (with retries) and the decoded response cached before returning.
    pub async fn fetch(
        &self,
        request: &ArchiveRequest,
    ) -> Result<Vec<ArchiveResponse>, AcquisitionError> {
        let cache_file = self.cache_dir.join(request.cache_file_name());

        if cache_file.exists() {
            info!("Cache hit for archive request at {:?}", cache_file);
            let path_clone = cache_file.clone();
            let responses =
                tokio::task::spawn_blocking(move || Self::get_cached(&path_clone)).await??;
            Self::validate(&responses, request.cities.len())?;
            return Ok(responses);
        }

        warn!(
            "Cache miss for archive request {}. Downloading.",
            request.cache_file_name()
        );
        let responses = self.download(request).await?;
        Self::validate(&responses, request.cities.len())?;
        Self::cache(responses.clone(), &cache_file).await?;
        Ok(responses)
    }

    /// One series per requested location, each with arrays as long as its `time` axis.
    fn validate(responses: &[ArchiveResponse], expected: usize) -> Result<(), AcquisitionError> {
        if responses.len() != expected {
            return Err(AcquisitionError::LocationCountMismatch {
                expected,
                found: responses.len(),
            });
        }
        for (location, response) in responses.iter().enumerate() {
            let hours = response.hourly.time.len();
            for variable in HourlyVariable::ALL {
                let found = response.hourly.values(variable).len();
                if found != hours {
                    return Err(AcquisitionError::RaggedSeries {
                        location,
                        variable: variable.name(),
                        expected: hours,
                        found,
                    });
                }
            }
        }
        Ok(())
    }

    async fn download(
        &self,
        request: &ArchiveRequest,
    ) -> Result<Vec<ArchiveResponse>, AcquisitionError> {
        let params = request.query_params();
        let mut retry = 0;
        loop {
            match self.try_download(&params).await {
                Ok(responses) => return Ok(responses),
                Err(e) if retry < self.retry.max_retries && Self::is_transient(&e) => {
                    retry += 1;
                    let delay = self.retry.delay_before(retry);
                    warn!(
                        "Attempt {}/{} failed: {}. Retrying in {:?}",
                        retry,
                        self.retry.max_retries + 1,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_download(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<Vec<ArchiveResponse>, AcquisitionError> {
        info!("Downloading data from {}", self.base_url);
        let response = self
            .download_client
            .get(&self.base_url)
            .query(params)
            .send()
            .await
            .map_err(|e| AcquisitionError::NetworkRequest(self.base_url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    AcquisitionError::HttpStatus {
                        url: self.base_url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    AcquisitionError::NetworkRequest(self.base_url.clone(), e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| AcquisitionError::NetworkRequest(self.base_url.clone(), e))?;
        info!("Downloaded {} bytes", body.len());
        let responses = tokio::task::spawn_blocking(move || {
            serde_json::from_slice::<Vec<ArchiveResponse>>(&body).map_err(AcquisitionError::from)
        })
        .await??;
        Ok(responses)
    }

    fn is_transient(error: &AcquisitionError) -> bool {
        match error {
            AcquisitionError::NetworkRequest(..) => true,
            AcquisitionError::HttpStatus { status, .. } => RetryPolicy::is_retryable_status(*status),
            _ => false,
        }
    }

    fn get_cached(cache_path: &Path) -> Result<Vec<ArchiveResponse>, AcquisitionError> {
        let bytes = std::fs::read(cache_path)
            .map_err(|e| AcquisitionError::CacheRead(cache_path.to_path_buf(), e))?;
        let (decoded, _) =
            bincode::serde::decode_from_slice::<Vec<ArchiveResponse>, _>(&bytes, BINCODE_CONFIG)
                .map_err(|e| AcquisitionError::CacheDecode(cache_path.to_path_buf(), Box::new(e)))?;
        Ok(decoded)
    }

    pub(crate) async fn cache(
        responses: Vec<ArchiveResponse>,
        cache_path: &Path,
    ) -> Result<(), AcquisitionError> {
        let encoded = tokio::task::spawn_blocking(move || {
            bincode::serde::encode_to_vec(responses, BINCODE_CONFIG)
                .map_err(|e| AcquisitionError::CacheEncode(Box::new(e)))
        })
        .await??;
        // Written next to the target and renamed, so an interrupted write never leaves a
        // truncated cache file behind.
        let partial = cache_path.with_extension("bin.partial");
        tokio::fs::write(&partial, &encoded)
            .await
            .map_err(|e| AcquisitionError::CacheWrite(partial.clone(), e))?;
        tokio::fs::rename(&partial, cache_path)
            .await
            .map_err(|e| AcquisitionError::CacheWrite(cache_path.to_path_buf(), e))?;
        info!(
            "Wrote cache ({} bytes) to {}",
            encoded.len(),
            cache_path.display()
        );
        Ok(())
    }
}
