//! Meteorological seasons and the month bands that map to them.

use std::fmt;

/// Meteorological season of the northern hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// December, January, February.
    Winter,
    /// March through May.
    Spring,
    /// June through August.
    Summer,
    /// September through November.
    Fall,
}

// Inclusive upper month of each band. December wraps back into winter.
const MONTH_BANDS: [(u32, Season); 5] = [
    (2, Season::Winter),
    (5, Season::Spring),
    (8, Season::Summer),
    (11, Season::Fall),
    (12, Season::Winter),
];

impl Season {
    /// One-hot column order.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// Maps a calendar month (1-12) to its season, `None` for anything else.
    ///
    /// ```rust
    /// use load_weather::Season;
    ///
    /// assert_eq!(Season::from_month(12), Some(Season::Winter));
    /// assert_eq!(Season::from_month(4), Some(Season::Spring));
    /// assert_eq!(Season::from_month(13), None);
    /// ```
    pub fn from_month(month: u32) -> Option<Self> {
        if month == 0 {
            return None;
        }
        MONTH_BANDS
            .iter()
            .find(|(upper, _)| month <= *upper)
            .map(|(_, season)| *season)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }

    /// Indicator column name, e.g. `season_winter`.
    pub fn column_name(&self) -> String {
        format!("season_{}", self.label())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
