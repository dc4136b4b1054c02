//! Metric to US customary unit conversions applied to the archive variables.

use polars::prelude::{lit, Expr};

/// A linear unit conversion from the archive's metric unit to the output unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// °C to °F: `F = C * 9 / 5 + 32`.
    CelsiusToFahrenheit,
    /// Millimetres to inches.
    MillimetresToInches,
    /// Centimetres to inches.
    CentimetresToInches,
    /// Metres to inches.
    MetresToInches,
    /// Kilometres per hour to miles per hour.
    KmhToMph,
}

const MM_PER_INCH: f64 = 25.4;
const CM_PER_INCH: f64 = 2.54;
const M_PER_INCH: f64 = 0.0254;
const KM_PER_MILE: f64 = 1.609;

impl Conversion {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Conversion::CelsiusToFahrenheit => value * 9.0 / 5.0 + 32.0,
            Conversion::MillimetresToInches => value / MM_PER_INCH,
            Conversion::CentimetresToInches => value / CM_PER_INCH,
            Conversion::MetresToInches => value / M_PER_INCH,
            Conversion::KmhToMph => value / KM_PER_MILE,
        }
    }

    /// Inverse of [`Conversion::apply`].
    #[cfg(test)]
    fn invert(&self, value: f64) -> f64 {
        match self {
            Conversion::CelsiusToFahrenheit => (value - 32.0) * 5.0 / 9.0,
            Conversion::MillimetresToInches => value * MM_PER_INCH,
            Conversion::CentimetresToInches => value * CM_PER_INCH,
            Conversion::MetresToInches => value * M_PER_INCH,
            Conversion::KmhToMph => value * KM_PER_MILE,
        }
    }

    /// Same arithmetic as [`Conversion::apply`], as a lazy column expression.
    pub fn expr(&self, value: Expr) -> Expr {
        match self {
            Conversion::CelsiusToFahrenheit => value * lit(9.0) / lit(5.0) + lit(32.0),
            Conversion::MillimetresToInches => value / lit(MM_PER_INCH),
            Conversion::CentimetresToInches => value / lit(CM_PER_INCH),
            Conversion::MetresToInches => value / lit(M_PER_INCH),
            Conversion::KmhToMph => value / lit(KM_PER_MILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    const ALL: [Conversion; 5] = [
        Conversion::CelsiusToFahrenheit,
        Conversion::MillimetresToInches,
        Conversion::CentimetresToInches,
        Conversion::MetresToInches,
        Conversion::KmhToMph,
    ];

    #[test]
    fn known_values() {
        assert_eq!(Conversion::CelsiusToFahrenheit.apply(0.0), 32.0);
        assert_eq!(Conversion::CelsiusToFahrenheit.apply(100.0), 212.0);
        assert!((Conversion::CelsiusToFahrenheit.apply(-40.0) + 40.0).abs() < 1e-12);
        assert!((Conversion::MillimetresToInches.apply(25.4) - 1.0).abs() < 1e-12);
        assert!((Conversion::CentimetresToInches.apply(2.54) - 1.0).abs() < 1e-12);
        assert!((Conversion::MetresToInches.apply(0.0254) - 1.0).abs() < 1e-12);
        assert!((Conversion::KmhToMph.apply(1.609) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn conversions_invert() {
        for conversion in ALL {
            for value in [-30.5, 0.0, 0.2, 12.0, 1234.5] {
                let back = conversion.invert(conversion.apply(value));
                assert!((back - value).abs() < 1e-9, "{conversion:?} {value} -> {back}");
            }
        }
    }

    #[test]
    fn expr_matches_scalar() -> Result<(), Box<dyn std::error::Error>> {
        let values = vec![-12.5, 0.0, 3.3, 41.0];
        let df = DataFrame::new(vec![Series::new("v".into(), values.clone()).into()])?;
        for conversion in ALL {
            let out = df
                .clone()
                .lazy()
                .select([conversion.expr(col("v")).alias("v")])
                .collect()?;
            let converted = out.column("v")?.f64()?;
            for (row, value) in values.iter().enumerate() {
                let got = converted.get(row).ok_or("null value")?;
                assert!((got - conversion.apply(*value)).abs() < 1e-9);
            }
        }
        Ok(())
    }
}
