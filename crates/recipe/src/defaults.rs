//! Documented fallbacks for readings a recipe leaves unset.

/// Specific-gravity potential of a fermentable (37 points per pound per gallon).
pub const POTENTIAL: f64 = 1.037;
/// Fermentable colour, in SRM.
pub const COLOR_SRM: f64 = 2.0;
/// Hop alpha acid, in percent.
pub const ALPHA_ACID: f64 = 5.0;
/// Culture attenuation, in percent.
pub const ATTENUATION: f64 = 75.0;
/// Fermentable yield, in percent, used when no potential is known.
pub const YIELD_PCT: f64 = 75.0;
/// Gravity points contributed per percent of yield: `potential = 1 + yield / 100 * 0.046`.
pub const POTENTIAL_PER_YIELD: f64 = 0.046;
