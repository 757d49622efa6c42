//! Command implementations. Each returns the text to print.

use brewkit_beerxml::Exporter;
use brewkit_calc::brewlog::{PrimingDefaults, actual_abv, brew_day_stats, suggested_priming};
use brewkit_calc::{AlphaOverrides, Conditioning, RecipeStats, abv, calculate, priming_sugar, srm_to_hex};
use brewkit_config::{Config, PrimingConfig};
use brewkit_recipe::Recipe;
use brewkit_recipe::models::SugarType;
use exn::{OptionExt, ResultExt};
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::input;

fn priming_defaults(config: &PrimingConfig) -> PrimingDefaults {
    PrimingDefaults {
        target_co2: config.target_co2,
        volume_liters: config.volume_liters,
        temperature_celsius: config.temperature_celsius,
        sugar: config.sugar,
    }
}

fn stats_line(stats: &RecipeStats) -> String {
    format!(
        "OG {:.3}  FG {:.3}  ABV {:.1}%  IBU {}  Colour {:.1} SRM ({})",
        stats.og,
        stats.fg,
        stats.abv,
        stats.ibu,
        stats.color,
        srm_to_hex(stats.color)
    )
}

/// Statistics for every recipe in `text` (recipe JSON or BeerXML).
#[instrument(skip_all, fields(overrides = overrides.len()))]
pub fn stats(text: &str, overrides: &AlphaOverrides) -> Result<String> {
    let overrides = (!overrides.is_empty()).then_some(overrides);
    let lines: Vec<String> = input::recipes(text)?
        .iter()
        .map(|recipe| format!("{}\n  {}", recipe.name, stats_line(&calculate(recipe, overrides))))
        .collect();
    Ok(lines.join("\n"))
}

/// The BeerXML document in `text` as pretty-printed JSON.
pub fn import(text: &str, source: &str) -> Result<String> {
    let result = brewkit_beerxml::parse(text);
    if result.is_empty() {
        exn::bail!(ErrorKind::NothingImportable(source.to_string()));
    }
    serde_json::to_string_pretty(&result).or_raise(|| ErrorKind::Output)
}

/// Recipe JSON, or library JSON when `library` is set, as BeerXML.
pub fn export(text: &str, library: bool, config: &Config) -> Result<String> {
    let exporter = Exporter::new()
        .with_brewer(config.brewer.clone())
        .with_boil_allowance(config.export.boil_allowance_liters);
    if library {
        return Ok(exporter.library(&input::library(text)?));
    }
    let recipes: Vec<Recipe> = input::recipes(text)?;
    Ok(exporter.recipes(&recipes))
}

pub fn abv_report(og: f64, fg: f64, sugar: Option<f64>, volume: Option<f64>, config: &PrimingConfig) -> String {
    let conditioning = match sugar {
        Some(sugar_grams) => Conditioning::Bottled {
            sugar_grams,
            volume_liters: volume.unwrap_or(config.volume_liters),
        },
        None => Conditioning::None,
    };
    format!("{:.1}% ABV", abv(og, fg, conditioning))
}

pub fn priming_report(
    co2: Option<f64>,
    volume: Option<f64>,
    temp: Option<f64>,
    sugar: Option<SugarType>,
    config: &PrimingConfig,
) -> String {
    let co2 = co2.unwrap_or(config.target_co2);
    let volume = volume.unwrap_or(config.volume_liters);
    let temp = temp.unwrap_or(config.temperature_celsius);
    let sugar = sugar.unwrap_or(config.sugar);
    let grams = priming_sugar(co2, volume, temp, sugar);
    format!("{grams} g of {sugar} for {volume} L at {co2} volumes CO2 ({temp} °C)")
}

/// Actual ABV, brew-day statistics and a priming suggestion for a brew log entry.
pub fn log_report(entry_text: &str, recipe_text: &str, config: &PrimingConfig) -> Result<String> {
    let entry = input::brew_log_entry(entry_text)?;
    let recipes = input::recipes(recipe_text)?;
    let recipe = recipes
        .iter()
        .find(|recipe| recipe.id.as_deref() == Some(entry.recipe_id.as_str()))
        .or_else(|| recipes.first())
        .ok_or_raise(|| ErrorKind::InvalidInput("no recipes found".to_string()))?;
    let stats = brew_day_stats(&entry, recipe);
    let grams = suggested_priming(&entry, &priming_defaults(config));
    Ok(format!(
        "{} ({})\n  Estimated: {}\n  Actual ABV {:.1}%\n  Priming: {} g",
        recipe.name,
        entry.status,
        stats_line(&stats),
        actual_abv(&entry, recipe),
        grams
    ))
}
