/// String conversions shared by the lenient model enums: `From<String>` via
/// their infallible `FromStr`, `Into<String>` via `as_key`, and `Display` via
/// the human-readable `as_str`.
macro_rules! string_conversions {
    ($($ty:ty),+) => {$(
        impl From<String> for $ty {
            fn from(value: String) -> Self {
                let Ok(parsed) = value.parse();
                parsed
            }
        }
        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_key().to_string()
            }
        }
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    )+};
}

mod brewlog;
mod culture;
mod fermentable;
mod hop;
mod library;
mod misc;
mod recipe;

pub use self::brewlog::{Bottling, BrewLogEntry, BrewStatus, Measurements, SugarType};
pub use self::culture::{Culture, CultureForm, CultureType};
pub use self::fermentable::{Fermentable, Yield};
pub use self::hop::{Hop, HopUse};
pub use self::library::{IngredientKind, LibraryIngredient};
pub use self::misc::{Misc, Water};
pub use self::recipe::{Efficiency, Ingredients, Recipe, RecipeType, Specifications, Style};

/// A single numeric reading wrapped in a named field, e.g. `{"value": 1.037}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scalar {
    pub value: f64,
}
impl Scalar {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}
impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Resolves an optional reading against its documented default.
///
/// Absent, zero and non-finite readings are all "unset".
///
/// ```
/// use brewkit_recipe::models::or_unset;
/// assert_eq!(or_unset(Some(5.5), 5.0), 5.5);
/// assert_eq!(or_unset(Some(0.0), 5.0), 5.0);
/// assert_eq!(or_unset(Some(f64::NAN), 5.0), 5.0);
/// assert_eq!(or_unset(None, 5.0), 5.0);
/// ```
pub fn or_unset(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v != 0.0).unwrap_or(default)
}

/// Lowercases and collapses separators so `"First Wort"`, `"first-wort"` and
/// `"first_wort"` compare equal.
fn sanitize(s: impl AsRef<str>) -> String {
    s.as_ref().trim().to_lowercase().replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("First Wort", "first_wort")]
    #[case("  dry-hop ", "dry_hop")]
    #[case("ALL GRAIN", "all_grain")]
    fn sanitize_collapses_separators(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize(input), expected);
    }
}
