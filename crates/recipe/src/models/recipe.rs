use super::{Culture, Fermentable, Hop, Misc, Scalar, Water, sanitize};
use crate::units::Quantity;
use std::convert::Infallible;
use std::str::FromStr;

/// A brewing formulation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    /// Absent until the recipe has been persisted (or imported).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub id: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub recipe_type: RecipeType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub author: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub notes: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub style: Option<Style>,
    /// Post-boil target volume.
    pub batch_size: Quantity,
    pub efficiency: Efficiency,
    pub boil_time: Quantity,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ingredients: Ingredients,
    /// Derived figures; filled in by a calculator, never required.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub specifications: Option<Specifications>,
}
impl Recipe {
    /// An empty all-grain recipe: 20 L batch, 75% efficiency, 60 minute boil.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            recipe_type: RecipeType::default(),
            author: String::new(),
            notes: None,
            style: None,
            batch_size: Quantity::liters(20.0),
            efficiency: Efficiency { brewhouse: 75.0 },
            boil_time: Quantity::minutes(60.0),
            ingredients: Ingredients::default(),
            specifications: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ingredients {
    #[cfg_attr(feature = "serde", serde(default))]
    pub fermentables: Vec<Fermentable>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hops: Vec<Hop>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cultures: Vec<Culture>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub miscellaneous: Vec<Misc>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub water: Vec<Water>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Efficiency {
    /// Brewhouse efficiency, in percent.
    pub brewhouse: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub category: Option<String>,
}

/// Derived brewing figures. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Specifications {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub og: Option<Scalar>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fg: Option<Scalar>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub abv: Option<Scalar>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ibu: Option<Scalar>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<Scalar>,
}
impl Specifications {
    pub fn is_empty(&self) -> bool {
        self.og.is_none() && self.fg.is_none() && self.abv.is_none() && self.ibu.is_none() && self.color.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(from = "String", into = "String"))]
pub enum RecipeType {
    #[default]
    AllGrain,
    Extract,
    PartialMash,
}
impl RecipeType {
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::AllGrain => "all_grain",
            Self::Extract => "extract",
            Self::PartialMash => "partial_mash",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllGrain => "All Grain",
            Self::Extract => "Extract",
            Self::PartialMash => "Partial Mash",
        }
    }
}
impl FromStr for RecipeType {
    type Err = Infallible;
    /// Unrecognized or blank types fall back to [`RecipeType::AllGrain`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "extract" => Self::Extract,
            "partial_mash" => Self::PartialMash,
            _ => Self::AllGrain,
        })
    }
}
string_conversions!(RecipeType);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("All Grain", RecipeType::AllGrain)]
    #[case("Extract", RecipeType::Extract)]
    #[case("Partial Mash", RecipeType::PartialMash)]
    #[case("partial_mash", RecipeType::PartialMash)]
    #[case("", RecipeType::AllGrain)]
    #[case("Cider", RecipeType::AllGrain)]
    fn parse_type(#[case] input: &str, #[case] expected: RecipeType) {
        assert_eq!(input.parse::<RecipeType>().unwrap(), expected);
    }

    #[test]
    fn display_is_inverse_of_parse() {
        for kind in [RecipeType::AllGrain, RecipeType::Extract, RecipeType::PartialMash] {
            assert_eq!(kind.to_string().parse::<RecipeType>().unwrap(), kind);
        }
    }

    #[test]
    fn new_recipe_is_empty() {
        let recipe = Recipe::new("Blank");
        assert!(recipe.ingredients.fermentables.is_empty());
        assert!(recipe.specifications.is_none());
        assert!(Specifications::default().is_empty());
    }
}
