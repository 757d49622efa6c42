use super::{Scalar, or_unset};
use crate::defaults;
use crate::units::Quantity;

/// A sugar source: grain, extract or sugar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fermentable {
    pub name: String,
    /// Free-text category such as `grain`, `sugar` or `dry extract`.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub fermentable_type: String,
    pub amount: Quantity,
    #[cfg_attr(feature = "serde", serde(rename = "yield", default, skip_serializing_if = "Option::is_none"))]
    pub potential_yield: Option<Yield>,
    /// Colour in SRM.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<Scalar>,
    #[cfg_attr(feature = "serde", serde(rename = "libraryId", default, skip_serializing_if = "Option::is_none"))]
    pub library_id: Option<String>,
}

/// Extract potential, expressed as specific gravity (e.g. `1.037`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Yield {
    pub potential: Scalar,
}

impl Fermentable {
    pub fn new(name: impl Into<String>, amount: Quantity) -> Self {
        Self {
            name: name.into(),
            fermentable_type: String::new(),
            amount,
            potential_yield: None,
            color: None,
            library_id: None,
        }
    }

    pub fn with_potential(mut self, potential: f64) -> Self {
        self.potential_yield = Some(Yield { potential: potential.into() });
        self
    }

    pub fn with_color(mut self, srm: f64) -> Self {
        self.color = Some(srm.into());
        self
    }

    /// Specific-gravity potential, defaulting to 1.037.
    pub fn potential(&self) -> f64 {
        or_unset(self.potential_yield.map(|y| y.potential.value), defaults::POTENTIAL)
    }

    /// Colour in SRM, defaulting to 2.
    pub fn color_srm(&self) -> f64 {
        or_unset(self.color.map(|c| c.value), defaults::COLOR_SRM)
    }

    /// Converts a BeerXML-style percentage yield into specific-gravity potential.
    ///
    /// ```
    /// use brewkit_recipe::models::Fermentable;
    /// let potential = Fermentable::potential_from_yield(80.0);
    /// assert!((potential - 1.0368).abs() < 1e-9);
    /// ```
    pub fn potential_from_yield(yield_pct: f64) -> f64 {
        1.0 + yield_pct / 100.0 * defaults::POTENTIAL_PER_YIELD
    }

    /// Inverse of [`potential_from_yield`](Self::potential_from_yield).
    pub fn yield_from_potential(potential: f64) -> f64 {
        (potential - 1.0) * 100.0 / defaults::POTENTIAL_PER_YIELD
    }
}
