//! Deterministic brewing calculations.
//!
//! Every function in this crate is total: missing readings fall back to the
//! defaults documented in [`brewkit_recipe::defaults`], a zero batch volume is
//! treated as one liter, and no result is ever NaN or infinite.

mod abv;
pub mod brewlog;
mod color;
mod priming;
mod stats;

pub use crate::abv::{Conditioning, abv};
pub use crate::color::srm_to_hex;
pub use crate::priming::{priming_sugar, residual_co2};
pub use crate::stats::{
    AlphaOverrides, RecipeStats, calculate, final_gravity, morey_color, original_gravity, tinseth_ibu,
};

/// Rounds to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Replaces NaN and infinities with `fallback`.
pub(crate) fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
