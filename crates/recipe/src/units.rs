//! Units of measure and quantities.
//!
//! Unit strings arrive from hand-written JSON, AI-drafted recipes and BeerXML
//! documents, so they are normalized by prefix rather than matched exactly:
//! `"kg"`, `"Kilograms"` and `"kilo"` all end up as [`Unit::Kilograms`].
//! Anything unrecognized is kept verbatim as [`Unit::Other`].

use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

pub const KILOGRAMS_PER_POUND: f64 = 0.453592;
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;
pub const GRAMS_PER_OUNCE: f64 = 28.3495;
pub const GRAMS_PER_POUND: f64 = 453.592;
pub const LITERS_PER_GALLON: f64 = 3.78541;
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// A canonical unit of measure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(from = "String", into = "String"))]
pub enum Unit {
    Kilograms,
    Pounds,
    Grams,
    Ounces,
    Liters,
    Gallons,
    Minutes,
    Days,
    /// Countable items, such as yeast packs.
    Units,
    /// Unrecognized unit, kept exactly as it was given.
    Other(String),
}
impl Unit {
    /// Normalizes a free-form unit string by case-insensitive prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use brewkit_recipe::Unit;
    /// assert_eq!(Unit::normalize("kg"), Unit::Kilograms);
    /// assert_eq!(Unit::normalize(" Gallons "), Unit::Gallons);
    /// assert_eq!(Unit::normalize("lbs"), Unit::Pounds);
    /// assert_eq!(Unit::normalize("tsp"), Unit::Other("tsp".to_string()));
    /// ```
    pub fn normalize(unit: &str) -> Self {
        let key = unit.trim().to_lowercase();
        let starts = |prefixes: &[&str]| prefixes.iter().any(|p| key.starts_with(p));
        if starts(&["kg", "kilo"]) {
            Self::Kilograms
        } else if starts(&["lb", "pound"]) {
            Self::Pounds
        } else if starts(&["gal"]) {
            Self::Gallons
        } else if starts(&["g"]) {
            Self::Grams
        } else if starts(&["oz", "ounce"]) {
            Self::Ounces
        } else if starts(&["l"]) {
            Self::Liters
        } else if starts(&["min"]) {
            Self::Minutes
        } else if starts(&["day"]) {
            Self::Days
        } else if starts(&["unit", "pkg"]) {
            Self::Units
        } else {
            Self::Other(unit.to_string())
        }
    }

    /// Returns the canonical key for the unit.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Kilograms => "kilograms",
            Self::Pounds => "pounds",
            Self::Grams => "grams",
            Self::Ounces => "ounces",
            Self::Liters => "liters",
            Self::Gallons => "gallons",
            Self::Minutes => "minutes",
            Self::Days => "days",
            Self::Units => "units",
            Self::Other(s) => s.as_str(),
        }
    }
}
impl FromStr for Unit {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}
impl From<String> for Unit {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}
impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}
impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A numeric amount paired with its unit.
///
/// Conversions never fail. A unit from another dimension (or an unrecognized
/// one) is assumed to already be in the requested unit, so the value passes
/// through unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    pub unit: Unit,
    pub value: f64,
}
impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { unit, value }
    }

    pub fn kilograms(value: f64) -> Self {
        Self::new(value, Unit::Kilograms)
    }

    pub fn grams(value: f64) -> Self {
        Self::new(value, Unit::Grams)
    }

    pub fn liters(value: f64) -> Self {
        Self::new(value, Unit::Liters)
    }

    pub fn minutes(value: f64) -> Self {
        Self::new(value, Unit::Minutes)
    }

    pub fn in_kilograms(&self) -> f64 {
        match self.unit {
            Unit::Pounds => self.value * KILOGRAMS_PER_POUND,
            Unit::Grams => self.value / 1000.0,
            Unit::Ounces => self.value * GRAMS_PER_OUNCE / 1000.0,
            _ => self.value,
        }
    }

    pub fn in_pounds(&self) -> f64 {
        match self.unit {
            Unit::Kilograms => self.value * POUNDS_PER_KILOGRAM,
            Unit::Grams => self.value / GRAMS_PER_POUND,
            Unit::Ounces => self.value / 16.0,
            _ => self.value,
        }
    }

    pub fn in_grams(&self) -> f64 {
        match self.unit {
            Unit::Ounces => self.value * GRAMS_PER_OUNCE,
            Unit::Kilograms => self.value * 1000.0,
            Unit::Pounds => self.value * GRAMS_PER_POUND,
            _ => self.value,
        }
    }

    pub fn in_liters(&self) -> f64 {
        match self.unit {
            Unit::Gallons => self.value * LITERS_PER_GALLON,
            _ => self.value,
        }
    }

    pub fn in_minutes(&self) -> f64 {
        match self.unit {
            Unit::Days => self.value * MINUTES_PER_DAY,
            _ => self.value,
        }
    }
}
impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("kg", Unit::Kilograms)]
    #[case("Kilograms", Unit::Kilograms)]
    #[case("kilo", Unit::Kilograms)]
    #[case("kilograms", Unit::Kilograms)]
    #[case("lb", Unit::Pounds)]
    #[case("Pounds", Unit::Pounds)]
    #[case("g", Unit::Grams)]
    #[case("grams", Unit::Grams)]
    #[case("gal", Unit::Gallons)]
    #[case("US Gallons", Unit::Other("US Gallons".to_string()))]
    #[case("gallons", Unit::Gallons)]
    #[case("oz", Unit::Ounces)]
    #[case("Ounces", Unit::Ounces)]
    #[case("l", Unit::Liters)]
    #[case("Litres", Unit::Liters)]
    #[case("  min ", Unit::Minutes)]
    #[case("days", Unit::Days)]
    #[case("units", Unit::Units)]
    #[case("tsp", Unit::Other("tsp".to_string()))]
    fn normalize(#[case] input: &str, #[case] expected: Unit) {
        assert_eq!(Unit::normalize(input), expected);
    }

    #[test]
    fn unrecognized_units_pass_through() {
        let quantity = Quantity::new(12.5, Unit::Other("handfuls".to_string()));
        assert_eq!(quantity.in_kilograms(), 12.5);
        assert_eq!(quantity.in_liters(), 12.5);
        assert_eq!(quantity.to_string(), "12.5 handfuls");
    }

    #[rstest]
    #[case(Quantity::new(10.0, Unit::Pounds), 4.53592)]
    #[case(Quantity::grams(2500.0), 2.5)]
    #[case(Quantity::kilograms(3.0), 3.0)]
    fn converts_to_kilograms(#[case] quantity: Quantity, #[case] expected: f64) {
        assert!((quantity.in_kilograms() - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(Quantity::new(2.0, Unit::Ounces), 56.699)]
    #[case(Quantity::kilograms(0.03), 30.0)]
    #[case(Quantity::grams(42.0), 42.0)]
    fn converts_to_grams(#[case] quantity: Quantity, #[case] expected: f64) {
        assert!((quantity.in_grams() - expected).abs() < 1e-9);
    }

    #[test]
    fn converts_volume_and_time() {
        assert!((Quantity::new(5.0, Unit::Gallons).in_liters() - 18.92705).abs() < 1e-9);
        assert_eq!(Quantity::new(3.0, Unit::Days).in_minutes(), 4320.0);
        assert_eq!(Quantity::minutes(60.0).in_minutes(), 60.0);
    }
}
