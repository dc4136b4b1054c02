use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use load_weather::LatLon;
///
/// let nashville = LatLon(36.1659, -86.7844);
/// assert_eq!(nashville.0, 36.1659); // Latitude
/// assert_eq!(nashville.1, -86.7844); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// A city whose weather feeds the combined table.
///
/// The name becomes the file-name prefix of the city's weather file and the
/// column prefix of its weather fields, so it should be lowercase and contain no `-`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub location: LatLon,
}

impl City {
    pub fn new(name: impl Into<String>, location: LatLon) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// Nashville, Memphis and Knoxville, Tennessee.
    pub fn tennessee() -> Vec<City> {
        vec![
            City::new("nashville", LatLon(36.1659, -86.7844)),
            City::new("memphis", LatLon(35.1495, -90.049)),
            City::new("knoxville", LatLon(35.9606, -83.9207)),
        ]
    }
}
