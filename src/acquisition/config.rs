use crate::acquisition::retry::RetryPolicy;
use crate::types::city::City;
use bon::Builder;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

const DEFAULT_START: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 1) {
    Some(date) => date,
    None => panic!("invalid default start date"),
};
const DEFAULT_END: NaiveDate = match NaiveDate::from_ymd_opt(2024, 12, 31) {
    Some(date) => date,
    None => panic!("invalid default end date"),
};

/// What to download from the weather archive and where to put it.
///
/// Defaults cover Nashville, Memphis and Knoxville for 2023-2024, written to `data/`.
#[derive(Debug, Clone, Builder)]
pub struct AcquisitionConfig {
    #[builder(default = City::tennessee())]
    pub cities: Vec<City>,

    #[builder(default = DEFAULT_START)]
    pub start_date: NaiveDate,

    /// Inclusive.
    #[builder(default = DEFAULT_END)]
    pub end_date: NaiveDate,

    /// Time zone the archive aligns days to. Timestamps in the output stay UTC.
    #[builder(into, default = String::from("America/Chicago"))]
    pub timezone: String,

    #[builder(into, default = PathBuf::from("data"))]
    pub output_folder: PathBuf,

    /// Weather files are named `<city>-<suffix>`.
    #[builder(into, default = String::from("hourly-data.parquet"))]
    pub file_suffix: String,

    /// Response cache location; `None` uses the system cache directory.
    #[builder(into)]
    pub cache_dir: Option<PathBuf>,

    #[builder(into, default = String::from(ARCHIVE_URL))]
    pub base_url: String,

    #[builder(default)]
    pub retry: RetryPolicy,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
