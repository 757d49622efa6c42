//! Recipe-level estimates: gravity, colour and bitterness.

use std::collections::HashMap;

use brewkit_recipe::{Culture, Fermentable, Hop, HopUse, LITERS_PER_GALLON, Recipe, defaults};
use tracing::instrument;

use crate::abv::{Conditioning, abv};
use crate::{finite_or, round_to};

/// Gravity points per kilogram per liter for each point per pound per gallon.
const PKL_PER_PPG: f64 = 8.3454;
/// Minutes of steep time credited to a whirlpool addition.
const WHIRLPOOL_MINUTES: f64 = 10.0;
/// Whirlpool additions isomerize at half the rate of the boil.
const WHIRLPOOL_FACTOR: f64 = 0.5;

/// Alpha acid percentages keyed by hop name, replacing the recipe's nominal
/// values (e.g. with figures measured on brew day).
pub type AlphaOverrides = HashMap<String, f64>;

/// Derived specifications of a recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeStats {
    /// Original gravity, 3 decimals.
    pub og: f64,
    /// Final gravity, 3 decimals.
    pub fg: f64,
    /// Alcohol by volume in percent, 1 decimal.
    pub abv: f64,
    /// Colour in SRM, 1 decimal.
    pub color: f64,
    /// International Bitterness Units.
    pub ibu: u32,
}
impl Default for RecipeStats {
    fn default() -> Self {
        Self {
            og: 1.0,
            fg: 1.0,
            abv: 0.0,
            color: 0.0,
            ibu: 0,
        }
    }
}

/// Calculates OG, FG, ABV, colour and IBU for a recipe.
///
/// Optional `overrides` replace the alpha acid of hops by name. Intermediate
/// values are kept at full precision; only the returned figures are rounded.
#[instrument(
    skip_all,
    fields(
        recipe = %recipe.name,
        fermentables = recipe.ingredients.fermentables.len(),
        hops = recipe.ingredients.hops.len(),
    )
)]
pub fn calculate(recipe: &Recipe, overrides: Option<&AlphaOverrides>) -> RecipeStats {
    let liters = batch_liters(recipe);
    let ingredients = &recipe.ingredients;
    let og = original_gravity(&ingredients.fermentables, recipe.efficiency.brewhouse, liters);
    let fg = final_gravity(og, &ingredients.cultures);
    // Without fermentables there is no wort to bitter.
    let ibu = match ingredients.fermentables.is_empty() {
        true => 0.0,
        false => tinseth_ibu(&ingredients.hops, og, liters, overrides),
    };
    let stats = RecipeStats {
        og: round_to(og, 3),
        fg: round_to(fg, 3),
        abv: abv(og, fg, Conditioning::None),
        color: round_to(morey_color(&ingredients.fermentables, liters), 1),
        ibu: ibu.round().max(0.0) as u32,
    };
    tracing::debug!(?stats, "calculated recipe statistics");
    stats
}

/// Batch volume in liters, treating a zero or nonsensical volume as one liter.
fn batch_liters(recipe: &Recipe) -> f64 {
    let liters = recipe.batch_size.in_liters();
    if liters.is_finite() && liters > 0.0 {
        liters
    } else {
        tracing::debug!(batch_size = %recipe.batch_size, "unusable batch size, assuming 1 L");
        1.0
    }
}

/// Estimated original gravity (unrounded).
///
/// `efficiency` is the brewhouse efficiency in percent.
pub fn original_gravity(fermentables: &[Fermentable], efficiency: f64, liters: f64) -> f64 {
    let efficiency = efficiency / 100.0;
    let points: f64 = fermentables
        .iter()
        .map(|f| {
            let ppg = (f.potential() - 1.0) * 1000.0;
            f.amount.in_kilograms() * ppg * PKL_PER_PPG * efficiency / liters
        })
        .sum();
    finite_or(1.0 + points / 1000.0, 1.0)
}

/// Estimated final gravity (unrounded), from the mean attenuation of all
/// cultures, or 75% when there are none.
pub fn final_gravity(og: f64, cultures: &[Culture]) -> f64 {
    let attenuation = if cultures.is_empty() {
        defaults::ATTENUATION
    } else {
        cultures.iter().map(Culture::attenuation).sum::<f64>() / cultures.len() as f64
    };
    finite_or(1.0 + (og - 1.0) * (1.0 - attenuation / 100.0), 1.0)
}

/// Beer colour in SRM (unrounded) using the Morey equation.
pub fn morey_color(fermentables: &[Fermentable], liters: f64) -> f64 {
    let gallons = liters / LITERS_PER_GALLON;
    let mcu: f64 = fermentables.iter().map(|f| f.amount.in_pounds() * f.color_srm() / gallons).sum();
    if mcu > 0.0 { finite_or(1.4922 * mcu.powf(0.6859), 0.0) } else { 0.0 }
}

/// Bitterness in IBU (unrounded) using the Tinseth method.
///
/// Only boil, first wort and whirlpool additions count. Hops without an
/// amount or a time are skipped.
///
/// ```
/// use brewkit_calc::tinseth_ibu;
/// use brewkit_recipe::{Hop, HopUse, Quantity};
/// let hop = Hop::new("Magnum", HopUse::Boil)
///     .with_alpha(10.0)
///     .with_amount(Quantity::grams(50.0))
///     .with_time(Quantity::minutes(60.0));
/// assert_eq!(tinseth_ibu(&[hop], 1.050, 20.0, None).round(), 58.0);
/// ```
pub fn tinseth_ibu(hops: &[Hop], og: f64, liters: f64, overrides: Option<&AlphaOverrides>) -> f64 {
    let bigness = 1.65 * 0.000125f64.powf(og - 1.0);
    let ibu: f64 = hops
        .iter()
        .filter(|hop| hop.hop_use.is_bittering())
        .filter_map(|hop| {
            let (Some(amount), Some(time)) = (&hop.amount, &hop.time) else {
                tracing::trace!(hop = %hop.name, "skipping hop without amount or time");
                return None;
            };
            let alpha = overrides.and_then(|o| o.get(&hop.name).copied()).unwrap_or_else(|| hop.alpha());
            let utilization = match hop.hop_use {
                HopUse::Whirlpool => bigness * time_factor(WHIRLPOOL_MINUTES) * WHIRLPOOL_FACTOR,
                _ => bigness * time_factor(time.in_minutes()),
            };
            Some(alpha * amount.in_grams() * utilization * 10.0 / liters)
        })
        .sum();
    finite_or(ibu, 0.0)
}

fn time_factor(minutes: f64) -> f64 {
    (1.0 - (-0.04 * minutes).exp()) / 4.15
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewkit_recipe::{CultureForm, CultureType, Quantity, Unit};
    use rstest::rstest;

    fn pilsner() -> Recipe {
        let mut recipe = Recipe::new("Pils");
        recipe.ingredients.fermentables.push(
            Fermentable::new("Pilsner Malt", Quantity::kilograms(5.0)).with_potential(1.037).with_color(3.0),
        );
        recipe.ingredients.hops.push(
            Hop::new("Cascade", HopUse::Boil)
                .with_alpha(5.5)
                .with_amount(Quantity::grams(30.0))
                .with_time(Quantity::minutes(60.0)),
        );
        recipe
            .ingredients
            .cultures
            .push(Culture::new("US-05", CultureType::Ale, CultureForm::Dry).with_attenuation(78.0));
        recipe
    }

    #[test]
    fn full_recipe() {
        let stats = calculate(&pilsner(), None);
        assert_eq!(stats, RecipeStats { og: 1.058, fg: 1.013, abv: 5.9, color: 5.2, ibu: 18 });
    }

    #[test]
    fn empty_recipe_is_neutral() {
        let stats = calculate(&Recipe::new("Water"), None);
        assert_eq!(stats, RecipeStats::default());
    }

    #[test]
    fn no_fermentables_means_no_gravity_colour_or_bitterness() {
        let mut recipe = pilsner();
        recipe.ingredients.fermentables.clear();
        let stats = calculate(&recipe, None);
        assert_eq!(stats.og, 1.0);
        assert_eq!(stats.color, 0.0);
        assert_eq!(stats.abv, 0.0);
        assert_eq!(stats.ibu, 0);
    }

    #[test]
    fn no_cultures_uses_default_attenuation() {
        let mut recipe = pilsner();
        recipe.ingredients.cultures.clear();
        let og = original_gravity(&recipe.ingredients.fermentables, 75.0, 20.0);
        let expected = 1.0 + (og - 1.0) * 0.25;
        assert_eq!(calculate(&recipe, None).fg, round_to(expected, 3));
    }

    #[test]
    fn averages_attenuation_across_cultures() {
        let cultures = [
            Culture::new("A", CultureType::Ale, CultureForm::Dry).with_attenuation(70.0),
            Culture::new("B", CultureType::Ale, CultureForm::Dry).with_attenuation(80.0),
        ];
        assert!((final_gravity(1.060, &cultures) - 1.015).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(f64::NAN)]
    fn unusable_batch_size_is_one_liter(#[case] volume: f64) {
        let mut recipe = pilsner();
        recipe.batch_size = Quantity::liters(volume);
        let stats = calculate(&recipe, None);
        let mut one_liter = pilsner();
        one_liter.batch_size = Quantity::liters(1.0);
        assert_eq!(stats, calculate(&one_liter, None));
        assert!(stats.og.is_finite() && stats.fg.is_finite() && stats.color.is_finite());
    }

    #[test]
    fn gallon_batches_are_converted() {
        let mut recipe = pilsner();
        recipe.batch_size = Quantity::new(20.0 / LITERS_PER_GALLON, Unit::Gallons);
        assert_eq!(calculate(&recipe, None), calculate(&pilsner(), None));
    }

    #[test]
    fn imperial_amounts_are_converted() {
        let mut recipe = pilsner();
        recipe.ingredients.fermentables[0].amount = Quantity::new(5.0 / 0.453592, Unit::Pounds);
        recipe.ingredients.hops[0].amount = Some(Quantity::new(30.0 / 28.3495, Unit::Ounces));
        assert_eq!(calculate(&recipe, None), calculate(&pilsner(), None));
    }

    #[test]
    fn reference_tinseth_value() {
        let hop = Hop::new("Magnum", HopUse::Boil)
            .with_alpha(10.0)
            .with_amount(Quantity::grams(50.0))
            .with_time(Quantity::minutes(60.0));
        let ibu = tinseth_ibu(&[hop], 1.050, 20.0, None);
        assert!((ibu - 57.666).abs() < 0.001, "got {ibu}");
    }

    #[rstest]
    #[case(HopUse::DryHop)]
    #[case(HopUse::Mash)]
    fn non_bittering_uses_are_ignored(#[case] hop_use: HopUse) {
        let hop = Hop::new("Citra", hop_use)
            .with_alpha(12.0)
            .with_amount(Quantity::grams(100.0))
            .with_time(Quantity::minutes(60.0));
        assert_eq!(tinseth_ibu(&[hop], 1.050, 20.0, None), 0.0);
    }

    #[test]
    fn whirlpool_uses_fixed_steep() {
        let short = Hop::new("Citra", HopUse::Whirlpool)
            .with_alpha(12.0)
            .with_amount(Quantity::grams(50.0))
            .with_time(Quantity::minutes(5.0));
        let long = short.clone().with_time(Quantity::minutes(30.0));
        let expected = 12.0 * 50.0 * 1.65 * 0.000125f64.powf(0.05) * time_factor(10.0) * 0.5 * 10.0 / 20.0;
        assert_eq!(tinseth_ibu(&[short], 1.050, 20.0, None), tinseth_ibu(&[long], 1.050, 20.0, None));
        let whirlpool = Hop::new("Citra", HopUse::Whirlpool)
            .with_alpha(12.0)
            .with_amount(Quantity::grams(50.0))
            .with_time(Quantity::minutes(0.0));
        assert!((tinseth_ibu(&[whirlpool], 1.050, 20.0, None) - expected).abs() < 1e-9);
    }

    #[test]
    fn hops_missing_amount_or_time_are_skipped() {
        let no_amount = Hop::new("A", HopUse::Boil).with_time(Quantity::minutes(60.0));
        let no_time = Hop::new("B", HopUse::Boil).with_amount(Quantity::grams(50.0));
        assert_eq!(tinseth_ibu(&[no_amount, no_time], 1.050, 20.0, None), 0.0);
    }

    #[test]
    fn alpha_overrides_replace_nominal_values() {
        let recipe = pilsner();
        let overrides = AlphaOverrides::from([("Cascade".to_string(), 11.0)]);
        let nominal = calculate(&recipe, None).ibu;
        let measured = calculate(&recipe, Some(&overrides)).ibu;
        assert_eq!(nominal, 18);
        assert_eq!(measured, 35);
        let zeroed = AlphaOverrides::from([("Cascade".to_string(), 0.0)]);
        assert_eq!(calculate(&recipe, Some(&zeroed)).ibu, 0);
    }
}
