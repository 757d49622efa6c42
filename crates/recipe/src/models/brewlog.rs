use super::sanitize;
use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

/// A single brew session of a recipe, tracked from brew day to bottling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrewLogEntry {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "recipeId"))]
    pub recipe_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: BrewStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub measurements: Measurements,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bottling: Option<Bottling>,
}
impl BrewLogEntry {
    pub fn new(id: impl Into<String>, recipe_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            recipe_id: recipe_id.into(),
            status: BrewStatus::default(),
            notes: String::new(),
            measurements: Measurements::default(),
            bottling: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(from = "String", into = "String"))]
pub enum BrewStatus {
    #[default]
    Brewing,
    Fermenting,
    Bottled,
}
impl BrewStatus {
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Brewing => "brewing",
            Self::Fermenting => "fermenting",
            Self::Bottled => "bottled",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brewing => "Brewing",
            Self::Fermenting => "Fermenting",
            Self::Bottled => "Bottled",
        }
    }
}
impl FromStr for BrewStatus {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "fermenting" => Self::Fermenting,
            "bottled" => Self::Bottled,
            _ => Self::Brewing,
        })
    }
}

/// Readings taken during a brew session. All optional.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurements {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub actual_og: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub actual_fg: Option<f64>,
    /// Liters.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub actual_volume: Option<f64>,
    /// Degrees Celsius.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fermentation_temp: Option<f64>,
    /// Alpha acid measured on brew day, keyed by hop name.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "HashMap::is_empty"))]
    pub measured_alpha: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bottling {
    /// Target carbonation, in volumes of CO2.
    pub target_co2: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sugar_type: SugarType,
    /// Grams of priming sugar actually used.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub sugar_amount: Option<f64>,
    /// Liters bottled.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bottling_volume: Option<f64>,
}

/// Sugar used for bottle conditioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(from = "String", into = "String"))]
pub enum SugarType {
    /// Sucrose.
    #[default]
    TableSugar,
    /// Dextrose, or corn sugar.
    Glucose,
    /// Dry malt extract.
    Dme,
}
impl SugarType {
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::TableSugar => "table_sugar",
            Self::Glucose => "glucose",
            Self::Dme => "dme",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TableSugar => "Table Sugar",
            Self::Glucose => "Glucose",
            Self::Dme => "Dry Malt Extract",
        }
    }
}
impl FromStr for SugarType {
    type Err = Infallible;
    /// Unrecognized sugars are treated as [`SugarType::TableSugar`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "glucose" | "dextrose" | "corn_sugar" => Self::Glucose,
            "dme" | "dry_malt_extract" | "spraymalt" => Self::Dme,
            _ => Self::TableSugar,
        })
    }
}
string_conversions!(BrewStatus, SugarType);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("table_sugar", SugarType::TableSugar)]
    #[case("sucrose", SugarType::TableSugar)]
    #[case("Corn Sugar", SugarType::Glucose)]
    #[case("dextrose", SugarType::Glucose)]
    #[case("DME", SugarType::Dme)]
    #[case("Dry Malt Extract", SugarType::Dme)]
    fn parse_sugar(#[case] input: &str, #[case] expected: SugarType) {
        assert_eq!(input.parse::<SugarType>().unwrap(), expected);
    }

    #[test]
    fn new_entry_starts_brewing() {
        let entry = BrewLogEntry::new("log-1", "recipe-1");
        assert_eq!(entry.status, BrewStatus::Brewing);
        assert!(entry.bottling.is_none());
        assert_eq!("Bottled".parse::<BrewStatus>().unwrap(), BrewStatus::Bottled);
    }
}
