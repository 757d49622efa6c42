//! Standalone ingredients, found outside of any recipe.

use super::fields::Fields;
use crate::consts;
use brewkit_recipe::models::or_unset;
use brewkit_recipe::{CultureForm, Fermentable, IngredientKind, LibraryIngredient};
use roxmltree::Node;

pub(crate) fn fermentable(node: Node<'_, '_>) -> LibraryIngredient {
    let fields = Fields::new(node);
    let mut entry = LibraryIngredient::new(fields.text(consts::NAME), IngredientKind::Fermentable);
    let potential = or_unset(fields.optional_number(consts::POTENTIAL), 0.0);
    entry.yield_pct = fields
        .optional_number(consts::YIELD)
        .or_else(|| (potential != 0.0).then(|| Fermentable::yield_from_potential(potential)));
    entry.color = fields.optional_number(consts::COLOR);
    entry
}

pub(crate) fn hop(node: Node<'_, '_>) -> LibraryIngredient {
    let fields = Fields::new(node);
    let mut entry = LibraryIngredient::new(fields.text(consts::NAME), IngredientKind::Hop);
    entry.alpha = fields.optional_number(consts::ALPHA);
    entry
}

pub(crate) fn culture(node: Node<'_, '_>) -> LibraryIngredient {
    let fields = Fields::new(node);
    let mut entry = LibraryIngredient::new(fields.text(consts::NAME), IngredientKind::Culture);
    entry.attenuation = fields.optional_number(consts::ATTENUATION);
    entry.form = fields.optional_text(consts::FORM).map(|form| form.parse::<CultureForm>().unwrap_or_default());
    entry
}

pub(crate) fn misc(node: Node<'_, '_>) -> LibraryIngredient {
    let fields = Fields::new(node);
    let mut entry = LibraryIngredient::new(fields.text(consts::NAME), IngredientKind::Misc);
    entry.misc_type = fields.optional_text(consts::TYPE);
    entry
}

pub(crate) fn style(node: Node<'_, '_>) -> LibraryIngredient {
    let fields = Fields::new(node);
    let mut entry = LibraryIngredient::new(fields.text(consts::NAME), IngredientKind::Style);
    entry.category = fields.optional_text(consts::CATEGORY);
    entry
}
