mod acquisition;
mod calendar;
mod error;
mod parquet;
mod pipeline;
mod types;
mod utils;

pub use error::LoadWeatherError;

pub use acquisition::acquire;
pub use acquisition::client::{ArchiveClient, ArchiveRequest};
pub use acquisition::config::{AcquisitionConfig, ARCHIVE_URL};
pub use acquisition::error::AcquisitionError;
pub use acquisition::response::{ArchiveResponse, HourlySeries};
pub use acquisition::retry::RetryPolicy;

pub use calendar::holidays::HolidayCalendar;
pub use calendar::CalendarFeatures;

pub use parquet::{write_parquet, ParquetWriteError};

pub use pipeline::clean::{clean_frame, MAX_POWER, MIN_POWER};
pub use pipeline::combine::{combine_frames, discover_inputs, read_files, CombinedFrame, InputFiles};
pub use pipeline::config::PipelineConfig;
pub use pipeline::error::PipelineError;
pub use pipeline::features::{
    add_features, add_power_lags, POWER_1DAY_COLUMN, POWER_1HR_COLUMN, RUNTIME_COLUMN,
};
pub use pipeline::power::{normalize_power, read_power};
pub use pipeline::weather::{city_from_path, normalize_weather, read_weather, CityWeather};
pub use pipeline::{build_table, run_pipeline, utc_key, DATE_COLUMN, POWER_COLUMN};

pub use types::city::{City, LatLon};
pub use types::hourly_variable::HourlyVariable;
pub use types::season::Season;
pub use types::units::Conversion;
pub use types::weather_category::WeatherCategory;
