//! Recipe, ingredient and brew log models shared by the brewkit crates.
//!
//! Everything here is plain data. Optional readings (potential, colour, alpha
//! acid, attenuation) resolve to the defaults in [`defaults`] through the
//! accessor methods on each model, so calculators and codecs never have to
//! agree on fallback values themselves.
//!
//! With the `serde` feature enabled, every model (de)serializes using the
//! same JSON shape as the rest of the application (`batch_size`,
//! `alpha_acid`, `libraryId`, ...), and unit and enum strings are accepted
//! leniently.

pub mod defaults;
mod library;
pub mod models;
mod units;

pub use crate::library::{Library, new_id};
pub use crate::models::{
    Culture, CultureForm, CultureType, Fermentable, Hop, HopUse, IngredientKind, LibraryIngredient, Recipe,
    RecipeType,
};
pub use crate::units::{
    GRAMS_PER_OUNCE, GRAMS_PER_POUND, KILOGRAMS_PER_POUND, LITERS_PER_GALLON, MINUTES_PER_DAY, POUNDS_PER_KILOGRAM,
    Quantity, Unit,
};

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_drafted_recipe_json() {
        let json = r#"{
            "name": "Drafted IPA",
            "type": "All Grain",
            "author": "AI",
            "batch_size": {"unit": "L", "value": 20},
            "efficiency": {"brewhouse": 72},
            "boil_time": {"unit": "min", "value": 60},
            "ingredients": {
                "fermentables": [
                    {"name": "Maris Otter", "type": "grain",
                     "amount": {"unit": "kg", "value": 5.2}, "color": {"value": 3}}
                ],
                "hops": [
                    {"name": "Citra", "use": "Dry Hop",
                     "amount": {"unit": "g", "value": 50}, "time": {"unit": "days", "value": 4}}
                ],
                "cultures": [
                    {"name": "US-05", "type": "ale", "form": "dry"}
                ]
            }
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.recipe_type, RecipeType::AllGrain);
        assert_eq!(recipe.batch_size.unit, Unit::Liters);
        assert_eq!(recipe.ingredients.fermentables[0].amount.unit, Unit::Kilograms);
        assert_eq!(recipe.ingredients.fermentables[0].potential(), 1.037);
        assert_eq!(recipe.ingredients.hops[0].hop_use, HopUse::DryHop);
        assert_eq!(recipe.ingredients.hops[0].time.as_ref().unwrap().unit, Unit::Days);
        assert_eq!(recipe.ingredients.cultures[0].attenuation(), 75.0);
        assert!(recipe.specifications.is_none());
    }

    #[test]
    fn serializes_canonical_keys() {
        let mut hop = Hop::new("Cascade", HopUse::FirstWort).with_amount(Quantity::grams(30.0));
        hop.library_id = Some("lib-1".to_string());
        let value = serde_json::to_value(&hop).unwrap();
        assert_eq!(value["use"], "first_wort");
        assert_eq!(value["amount"]["unit"], "grams");
        assert_eq!(value["libraryId"], "lib-1");
        assert!(value.get("alpha_acid").is_none());
    }
}
