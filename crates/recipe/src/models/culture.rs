use super::{or_unset, sanitize};
use crate::defaults;
use crate::units::Quantity;
use std::convert::Infallible;
use std::str::FromStr;

/// A fermenting organism: yeast or bacteria.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Culture {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub culture_type: CultureType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub form: CultureForm,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub amount: Option<Quantity>,
    /// Apparent attenuation, in percent.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub attenuation: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "libraryId", default, skip_serializing_if = "Option::is_none"))]
    pub library_id: Option<String>,
}
impl Culture {
    pub fn new(name: impl Into<String>, culture_type: CultureType, form: CultureForm) -> Self {
        Self {
            name: name.into(),
            culture_type,
            form,
            amount: None,
            attenuation: None,
            library_id: None,
        }
    }

    pub fn with_attenuation(mut self, attenuation: f64) -> Self {
        self.attenuation = Some(attenuation);
        self
    }

    /// Attenuation percentage, defaulting to 75.
    pub fn attenuation(&self) -> f64 {
        or_unset(self.attenuation, defaults::ATTENUATION)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(from = "String", into = "String"))]
pub enum CultureType {
    #[default]
    Ale,
    Lager,
    Wheat,
    Wine,
    Champagne,
}
impl CultureType {
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Ale => "ale",
            Self::Lager => "lager",
            Self::Wheat => "wheat",
            Self::Wine => "wine",
            Self::Champagne => "champagne",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ale => "Ale",
            Self::Lager => "Lager",
            Self::Wheat => "Wheat",
            Self::Wine => "Wine",
            Self::Champagne => "Champagne",
        }
    }
}
impl FromStr for CultureType {
    type Err = Infallible;
    /// Unrecognized types fall back to [`CultureType::Ale`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "lager" => Self::Lager,
            "wheat" => Self::Wheat,
            "wine" => Self::Wine,
            "champagne" => Self::Champagne,
            _ => Self::Ale,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(from = "String", into = "String"))]
pub enum CultureForm {
    Liquid,
    #[default]
    Dry,
    Slant,
    Culture,
}
impl CultureForm {
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Liquid => "liquid",
            Self::Dry => "dry",
            Self::Slant => "slant",
            Self::Culture => "culture",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liquid => "Liquid",
            Self::Dry => "Dry",
            Self::Slant => "Slant",
            Self::Culture => "Culture",
        }
    }
}
impl FromStr for CultureForm {
    type Err = Infallible;
    /// Unrecognized forms fall back to [`CultureForm::Dry`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "liquid" => Self::Liquid,
            "slant" => Self::Slant,
            "culture" => Self::Culture,
            _ => Self::Dry,
        })
    }
}

string_conversions!(CultureType, CultureForm);
