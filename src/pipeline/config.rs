use bon::Builder;
use chrono_tz::Tz;
use std::path::PathBuf;

/// Inputs, output and calendar settings of the combine pipeline.
///
/// Every field has a default matching the Tennessee Valley load dataset, so
/// `PipelineConfig::default()` reproduces the reference run. Tests point the folders
/// at small synthetic fixtures instead.
///
/// ```rust
/// use load_weather::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .data_folder("fixtures")
///     .output_path("fixtures/out.parquet")
///     .holiday_years(vec![2024])
///     .build();
/// assert_eq!(config.power_file_name, "tva_load.parquet");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct PipelineConfig {
    /// Folder holding the power file and the per-city weather files.
    #[builder(into, default = PathBuf::from("data"))]
    pub data_folder: PathBuf,

    /// Where the feature table is written.
    #[builder(into, default = PathBuf::from("data/combined_files.parquet"))]
    pub output_path: PathBuf,

    /// Exact file name of the power file.
    #[builder(into, default = String::from("tva_load.parquet"))]
    pub power_file_name: String,

    /// File-name suffix identifying weather files. The city is the name's prefix before the first `-`.
    #[builder(into, default = String::from("hourly-data.parquet"))]
    pub weather_suffix: String,

    /// Zone local calendar features are computed in. Two of the three cities are on Central time.
    #[builder(default = chrono_tz::America::Chicago)]
    pub timezone: Tz,

    /// Years covered by the holiday calendar.
    #[builder(default = vec![2023, 2024])]
    pub holiday_years: Vec<i32>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
