use super::{CultureForm, sanitize};
use std::convert::Infallible;
use std::str::FromStr;

/// A reusable catalog entry in the user's ingredient library.
///
/// Recipe ingredients point back at entries through their `library_id`. The
/// reference is lookup-only: removing an entry leaves recipes untouched and
/// merely orphans the id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LibraryIngredient {
    /// Absent for import candidates that have not been added to a library yet.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub id: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: IngredientKind,
    /// Fermentable colour, in SRM.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<f64>,
    /// Fermentable yield, in percent.
    #[cfg_attr(feature = "serde", serde(rename = "yield", default, skip_serializing_if = "Option::is_none"))]
    pub yield_pct: Option<f64>,
    /// Hop alpha acid, in percent.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alpha: Option<f64>,
    /// Culture attenuation, in percent.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub attenuation: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub form: Option<CultureForm>,
    /// Style category.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub category: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "miscType", default, skip_serializing_if = "Option::is_none"))]
    pub misc_type: Option<String>,
}
impl LibraryIngredient {
    pub fn new(name: impl Into<String>, kind: IngredientKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind,
            color: None,
            yield_pct: None,
            alpha: None,
            attenuation: None,
            form: None,
            category: None,
            misc_type: None,
        }
    }

    /// Case-insensitive identity check used when matching recipe ingredients.
    pub fn matches(&self, kind: IngredientKind, name: &str) -> bool {
        self.kind == kind && self.name.to_lowercase() == name.to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(from = "String", into = "String"))]
pub enum IngredientKind {
    Fermentable,
    Hop,
    Culture,
    Misc,
    Style,
}
impl IngredientKind {
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Fermentable => "fermentable",
            Self::Hop => "hop",
            Self::Culture => "culture",
            Self::Misc => "misc",
            Self::Style => "style",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fermentable => "Fermentable",
            Self::Hop => "Hop",
            Self::Culture => "Culture",
            Self::Misc => "Misc",
            Self::Style => "Style",
        }
    }
}
impl FromStr for IngredientKind {
    type Err = Infallible;
    /// Unrecognized kinds are treated as [`IngredientKind::Misc`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "fermentable" | "grain" => Self::Fermentable,
            "hop" => Self::Hop,
            "culture" | "yeast" => Self::Culture,
            "style" => Self::Style,
            _ => Self::Misc,
        })
    }
}
string_conversions!(IngredientKind);
