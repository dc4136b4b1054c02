use crate::pipeline::error::PipelineError;
use crate::pipeline::power::read_power;
use crate::pipeline::weather::{read_weather, CityWeather};
use crate::pipeline::DATE_COLUMN;
use log::{debug, info};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Input files discovered in the data folder.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFiles {
    pub power: PathBuf,
    /// Sorted by file name.
    pub weather: Vec<PathBuf>,
}

/// Power joined with the weather of every city, plus the cities in merge order.
#[derive(Debug, Clone)]
pub struct CombinedFrame {
    pub frame: DataFrame,
    pub cities: Vec<String>,
}

/// Finds the power file (exact name match) and the weather files (suffix match) in `folder`.
///
/// Weather files are returned sorted so the merged column order does not depend on
/// directory iteration order.
pub fn discover_inputs(
    folder: &Path,
    power_file_name: &str,
    weather_suffix: &str,
) -> Result<InputFiles, PipelineError> {
    let entries = std::fs::read_dir(folder)
        .map_err(|e| PipelineError::FolderRead(folder.to_path_buf(), e))?;

    let mut power = None;
    let mut weather = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PipelineError::FolderRead(folder.to_path_buf(), e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name == power_file_name {
            power = Some(entry.path());
        } else if name.ends_with(weather_suffix) {
            weather.push(entry.path());
        }
    }
    weather.sort();

    let power = power.ok_or_else(|| PipelineError::PowerFileMissing {
        folder: folder.to_path_buf(),
        file_name: power_file_name.to_string(),
    })?;
    if weather.is_empty() {
        return Err(PipelineError::WeatherFilesMissing {
            folder: folder.to_path_buf(),
            suffix: weather_suffix.to_string(),
        });
    }
    debug!("Found power file {:?} and weather files {:?}", power, weather);
    Ok(InputFiles { power, weather })
}

/// Reads and normalizes every discovered input, then joins them with [`combine_frames`].
pub fn read_files(inputs: &InputFiles) -> Result<CombinedFrame, PipelineError> {
    let power = read_power(&inputs.power)?;
    let weather = inputs
        .weather
        .iter()
        .map(|path| read_weather(path))
        .collect::<Result<Vec<_>, _>>()?;
    combine_frames(power, weather)
}

/// Merges the city weather frames with a full outer join on `date` (union of hours,
/// missing readings become null), then keeps only the hours present in both the power
/// frame and that weather union.
pub fn combine_frames(
    power: DataFrame,
    weather: Vec<CityWeather>,
) -> Result<CombinedFrame, PipelineError> {
    let mut cities = Vec::with_capacity(weather.len());
    let mut merged: Option<DataFrame> = None;

    for CityWeather { city, frame } in weather {
        merged = Some(match merged {
            None => frame,
            Some(acc) => acc
                .lazy()
                .join(
                    frame.lazy(),
                    [col(DATE_COLUMN)],
                    [col(DATE_COLUMN)],
                    JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns),
                )
                .collect()
                .map_err(|source| PipelineError::WeatherMerge {
                    city: city.clone(),
                    source,
                })?,
        });
        cities.push(city);
    }

    let weather = match merged {
        Some(df) => df,
        None => DataFrame::new(vec![Series::new_empty(
            DATE_COLUMN.into(),
            &DataType::Datetime(TimeUnit::Milliseconds, None),
        )
        .into()])?,
    };
    info!(
        "Merged weather for {} cities: {} hours",
        cities.len(),
        weather.height()
    );

    let frame = power
        .lazy()
        .join(
            weather.lazy(),
            [col(DATE_COLUMN)],
            [col(DATE_COLUMN)],
            JoinArgs::new(JoinType::Inner),
        )
        .collect()?;
    info!("Combined frame has {} rows, {} columns", frame.height(), frame.width());

    Ok(CombinedFrame { frame, cities })
}
