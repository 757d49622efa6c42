//! Figures for a brew session, as opposed to a recipe's estimates.
//!
//! Brew-day readings take precedence over the recipe; when a reading is
//! missing the recipe's stored specification is used, and failing that a
//! typical value.

use brewkit_recipe::Recipe;
use brewkit_recipe::models::{BrewLogEntry, BrewStatus, SugarType};

use crate::abv::{Conditioning, abv};
use crate::priming::priming_sugar;
use crate::stats::{RecipeStats, calculate};

/// Original gravity assumed when neither the log nor the recipe has one.
const TYPICAL_OG: f64 = 1.050;
/// Final gravity assumed when neither the log nor the recipe has one.
const TYPICAL_FG: f64 = 1.010;

/// Fallbacks for a priming suggestion when the log doesn't say.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimingDefaults {
    pub target_co2: f64,
    pub volume_liters: f64,
    pub temperature_celsius: f64,
    pub sugar: SugarType,
}
impl Default for PrimingDefaults {
    fn default() -> Self {
        Self {
            target_co2: 2.4,
            volume_liters: 20.0,
            temperature_celsius: 20.0,
            sugar: SugarType::TableSugar,
        }
    }
}

fn reading(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Alcohol content of the brew, including the priming sugar once bottled.
pub fn actual_abv(entry: &BrewLogEntry, recipe: &Recipe) -> f64 {
    let specs = recipe.specifications.unwrap_or_default();
    let og = reading(entry.measurements.actual_og)
        .or_else(|| reading(specs.og.map(|s| s.value)))
        .unwrap_or(TYPICAL_OG);
    let fg = reading(entry.measurements.actual_fg)
        .or_else(|| reading(specs.fg.map(|s| s.value)))
        .unwrap_or(TYPICAL_FG);
    let conditioning = match (entry.status, &entry.bottling) {
        (BrewStatus::Bottled, Some(bottling)) => Conditioning::Bottled {
            sugar_grams: bottling.sugar_amount.unwrap_or(0.0),
            volume_liters: bottling.bottling_volume.unwrap_or(0.0),
        },
        _ => Conditioning::None,
    };
    abv(og, fg, conditioning)
}

/// Suggested grams of priming sugar for bottling this brew.
pub fn suggested_priming(entry: &BrewLogEntry, defaults: &PrimingDefaults) -> u32 {
    let bottling = entry.bottling.as_ref();
    let volume = reading(bottling.and_then(|b| b.bottling_volume))
        .or_else(|| reading(entry.measurements.actual_volume))
        .unwrap_or(defaults.volume_liters);
    let target = reading(bottling.map(|b| b.target_co2)).unwrap_or(defaults.target_co2);
    let temp = entry.measurements.fermentation_temp.filter(|t| t.is_finite()).unwrap_or(defaults.temperature_celsius);
    let sugar = bottling.map(|b| b.sugar_type).unwrap_or(defaults.sugar);
    tracing::debug!(volume, target, temp, %sugar, "suggesting priming sugar");
    priming_sugar(target, volume, temp, sugar)
}

/// Recipe statistics using the alpha acids measured on brew day.
pub fn brew_day_stats(entry: &BrewLogEntry, recipe: &Recipe) -> RecipeStats {
    let overrides = &entry.measurements.measured_alpha;
    calculate(recipe, (!overrides.is_empty()).then_some(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewkit_recipe::models::{Bottling, Scalar, Specifications};
    use brewkit_recipe::{Fermentable, Hop, HopUse, Quantity};

    fn recipe() -> Recipe {
        let mut recipe = Recipe::new("Session");
        recipe.specifications = Some(Specifications {
            og: Some(Scalar::new(1.048)),
            fg: Some(Scalar::new(1.012)),
            ..Default::default()
        });
        recipe
    }

    #[test]
    fn measured_gravities_win() {
        let mut entry = BrewLogEntry::new("1", "r");
        entry.measurements.actual_og = Some(1.060);
        entry.measurements.actual_fg = Some(1.010);
        assert_eq!(actual_abv(&entry, &recipe()), abv(1.060, 1.010, Conditioning::None));
    }

    #[test]
    fn falls_back_to_recipe_then_typical() {
        let entry = BrewLogEntry::new("1", "r");
        assert_eq!(actual_abv(&entry, &recipe()), abv(1.048, 1.012, Conditioning::None));
        assert_eq!(actual_abv(&entry, &Recipe::new("Bare")), abv(1.050, 1.010, Conditioning::None));
    }

    #[test]
    fn bottled_brews_include_priming() {
        let mut entry = BrewLogEntry::new("1", "r");
        entry.bottling = Some(Bottling {
            target_co2: 2.4,
            sugar_type: SugarType::TableSugar,
            sugar_amount: Some(160.0),
            bottling_volume: Some(20.0),
        });
        let fermenting = actual_abv(&entry, &Recipe::new("Bare"));
        entry.status = BrewStatus::Bottled;
        let bottled = actual_abv(&entry, &Recipe::new("Bare"));
        assert_eq!(fermenting, 5.3);
        assert_eq!(bottled, 5.7);
    }

    #[test]
    fn priming_prefers_bottling_then_measured_volume() {
        let defaults = PrimingDefaults::default();
        let mut entry = BrewLogEntry::new("1", "r");
        assert_eq!(suggested_priming(&entry, &defaults), priming_sugar(2.4, 20.0, 20.0, SugarType::TableSugar));
        entry.measurements.actual_volume = Some(18.0);
        entry.measurements.fermentation_temp = Some(12.0);
        assert_eq!(suggested_priming(&entry, &defaults), priming_sugar(2.4, 18.0, 12.0, SugarType::TableSugar));
        entry.bottling = Some(Bottling {
            target_co2: 2.8,
            sugar_type: SugarType::Dme,
            sugar_amount: None,
            bottling_volume: Some(15.0),
        });
        assert_eq!(suggested_priming(&entry, &defaults), priming_sugar(2.8, 15.0, 12.0, SugarType::Dme));
    }

    #[test]
    fn brew_day_alpha_is_applied() {
        let mut recipe = Recipe::new("Bitter");
        recipe.ingredients.fermentables.push(Fermentable::new("Maris Otter", Quantity::kilograms(4.0)));
        recipe.ingredients.hops.push(
            Hop::new("Fuggle", HopUse::Boil)
                .with_alpha(4.0)
                .with_amount(Quantity::grams(40.0))
                .with_time(Quantity::minutes(60.0)),
        );
        let mut entry = BrewLogEntry::new("1", "r");
        assert_eq!(brew_day_stats(&entry, &recipe), calculate(&recipe, None));
        entry.measurements.measured_alpha.insert("Fuggle".to_string(), 6.0);
        assert!(brew_day_stats(&entry, &recipe).ibu > calculate(&recipe, None).ibu);
    }
}
