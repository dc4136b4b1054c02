//! Defines the `WeatherCategory` enum, grouping WMO weather interpretation codes
//! into the coarse conditions that end up as one-hot feature columns.

use polars::prelude::{lit, Expr};
use std::fmt;

/// Coarse weather condition derived from a WMO weather interpretation code (0-99).
///
/// The archive API reports the WMO 4677 "present weather" code for every hour. Keeping
/// the full code range would add close to a hundred indicator columns per city, so the
/// codes are grouped into ordered bands by their tens digit:
///
/// | Code      | Category                              |
/// |-----------|---------------------------------------|
/// | 0 - 49    | [`WeatherCategory::None`]               |
/// | 50 - 59   | [`WeatherCategory::Drizzle`]            |
/// | 60 - 69   | [`WeatherCategory::Rain`]               |
/// | 70 - 79   | [`WeatherCategory::SolidPrecipitation`] |
/// | 80 - 99   | [`WeatherCategory::Thunderstorm`]       |
/// | otherwise | [`WeatherCategory::Unknown`]            |
///
/// Band upper bounds are inclusive and each band starts just above the previous one, so
/// fractional codes land in the same band they would with an `<=` threshold chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCategory {
    /// No precipitation at the station (codes 0-49).
    None,
    /// Drizzle (codes 50-59).
    Drizzle,
    /// Rain (codes 60-69).
    Rain,
    /// Solid precipitation not in showers: snow, ice pellets, snow grains (codes 70-79).
    SolidPrecipitation,
    /// Showery precipitation, with or without thunderstorm (codes 80-99).
    Thunderstorm,
    /// Missing or out of range code.
    Unknown,
}

const BANDS: [(f64, WeatherCategory); 5] = [
    (49.0, WeatherCategory::None),
    (59.0, WeatherCategory::Drizzle),
    (69.0, WeatherCategory::Rain),
    (79.0, WeatherCategory::SolidPrecipitation),
    (99.0, WeatherCategory::Thunderstorm),
];

const LOWEST_CODE: f64 = 0.0;

impl WeatherCategory {
    /// Every category, in band order. This fixes the set (and order) of one-hot columns
    /// independent of which codes show up in a given input.
    pub const ALL: [WeatherCategory; 6] = [
        WeatherCategory::None,
        WeatherCategory::Drizzle,
        WeatherCategory::Rain,
        WeatherCategory::SolidPrecipitation,
        WeatherCategory::Thunderstorm,
        WeatherCategory::Unknown,
    ];

    /// Buckets a weather code into its category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use load_weather::WeatherCategory;
    ///
    /// assert_eq!(WeatherCategory::from_code(3.0), WeatherCategory::None);
    /// assert_eq!(WeatherCategory::from_code(61.0), WeatherCategory::Rain);
    /// assert_eq!(WeatherCategory::from_code(95.0), WeatherCategory::Thunderstorm);
    /// assert_eq!(WeatherCategory::from_code(120.0), WeatherCategory::Unknown);
    /// assert_eq!(WeatherCategory::from_code(f64::NAN), WeatherCategory::Unknown);
    /// ```
    pub fn from_code(code: f64) -> Self {
        if code.is_nan() || code < LOWEST_CODE {
            return WeatherCategory::Unknown;
        }
        BANDS
            .iter()
            .find(|(upper, _)| code <= *upper)
            .map(|(_, category)| *category)
            .unwrap_or(WeatherCategory::Unknown)
    }

    /// Snake-case label used in column names.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCategory::None => "none",
            WeatherCategory::Drizzle => "drizzle",
            WeatherCategory::Rain => "rain",
            WeatherCategory::SolidPrecipitation => "solid_precipitation",
            WeatherCategory::Thunderstorm => "thunderstorm",
            WeatherCategory::Unknown => "unknown",
        }
    }

    /// Name of this category's indicator column for the given base column,
    /// e.g. `weather_code_rain`.
    pub fn column_name(&self, base: &str) -> String {
        format!("{}_{}", base, self.label())
    }

    /// `(lower, lower_inclusive, upper)` bounds of the band, `None` for `Unknown`.
    fn bounds(&self) -> Option<(f64, bool, f64)> {
        let index = BANDS.iter().position(|(_, category)| category == self)?;
        let upper = BANDS[index].0;
        if index == 0 {
            Some((LOWEST_CODE, true, upper))
        } else {
            Some((BANDS[index - 1].0, false, upper))
        }
    }

    /// Boolean indicator expression for this category over a numeric code expression.
    ///
    /// Missing codes yield `false` for every banded category and `true` for `Unknown`,
    /// so exactly one indicator is set per row.
    pub fn indicator(&self, code: Expr) -> Expr {
        match self.bounds() {
            Some((lower, lower_inclusive, upper)) => {
                let above = if lower_inclusive {
                    code.clone().gt_eq(lit(lower))
                } else {
                    code.clone().gt(lit(lower))
                };
                above.and(code.lt_eq(lit(upper))).fill_null(lit(false))
            }
            None => {
                let any_band = BANDS
                    .iter()
                    .map(|(_, category)| category.indicator(code.clone()))
                    .reduce(|acc, band| acc.or(band))
                    .unwrap_or_else(|| lit(false));
                any_band.not()
            }
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
