//! The hourly variables requested from the weather archive, and how each one is
//! normalized before it reaches the combined table.

use crate::types::units::Conversion;
use std::fmt;

/// An hourly variable of the Open-Meteo historical archive.
///
/// The variant order of [`HourlyVariable::ALL`] is the order in which variables are
/// requested and written to the per-city weather files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourlyVariable {
    /// Air temperature at 2 m, °C.
    Temperature2m,
    /// Relative humidity at 2 m, %.
    RelativeHumidity2m,
    /// Total precipitation of the preceding hour, mm.
    Precipitation,
    /// Liquid precipitation of the preceding hour, mm.
    Rain,
    /// Snowfall of the preceding hour, cm.
    Snowfall,
    /// Snow depth on the ground, m.
    SnowDepth,
    /// WMO weather interpretation code.
    WeatherCode,
    /// Perceived temperature, °C.
    ApparentTemperature,
    /// Total cloud cover, %.
    CloudCover,
    /// Wind speed at 10 m, km/h.
    WindSpeed10m,
    /// 1 during daylight, 0 at night.
    IsDay,
    /// Seconds of sunshine in the preceding hour.
    SunshineDuration,
}

impl HourlyVariable {
    pub const ALL: [HourlyVariable; 12] = [
        HourlyVariable::Temperature2m,
        HourlyVariable::RelativeHumidity2m,
        HourlyVariable::Precipitation,
        HourlyVariable::Rain,
        HourlyVariable::Snowfall,
        HourlyVariable::SnowDepth,
        HourlyVariable::WeatherCode,
        HourlyVariable::ApparentTemperature,
        HourlyVariable::CloudCover,
        HourlyVariable::WindSpeed10m,
        HourlyVariable::IsDay,
        HourlyVariable::SunshineDuration,
    ];

    /// API parameter and column name.
    pub fn name(&self) -> &'static str {
        match self {
            HourlyVariable::Temperature2m => "temperature_2m",
            HourlyVariable::RelativeHumidity2m => "relative_humidity_2m",
            HourlyVariable::Precipitation => "precipitation",
            HourlyVariable::Rain => "rain",
            HourlyVariable::Snowfall => "snowfall",
            HourlyVariable::SnowDepth => "snow_depth",
            HourlyVariable::WeatherCode => "weather_code",
            HourlyVariable::ApparentTemperature => "apparent_temperature",
            HourlyVariable::CloudCover => "cloud_cover",
            HourlyVariable::WindSpeed10m => "wind_speed_10m",
            HourlyVariable::IsDay => "is_day",
            HourlyVariable::SunshineDuration => "sunshine_duration",
        }
    }

    /// Unit conversion applied by the weather normalizer, if any.
    pub fn conversion(&self) -> Option<Conversion> {
        match self {
            HourlyVariable::Temperature2m | HourlyVariable::ApparentTemperature => {
                Some(Conversion::CelsiusToFahrenheit)
            }
            HourlyVariable::Precipitation | HourlyVariable::Rain => {
                Some(Conversion::MillimetresToInches)
            }
            HourlyVariable::Snowfall => Some(Conversion::CentimetresToInches),
            HourlyVariable::SnowDepth => Some(Conversion::MetresToInches),
            HourlyVariable::WindSpeed10m => Some(Conversion::KmhToMph),
            _ => None,
        }
    }
}

impl fmt::Display for HourlyVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
