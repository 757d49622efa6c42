//! The link step between imported recipes and the ingredient library.
//!
//! Imported recipes carry plain ingredient data. Linking matches each
//! fermentable, hop and culture against the library by kind and
//! case-insensitive name, creating entries for anything new, and records the
//! entry id on the recipe ingredient.

use tracing::instrument;
use uuid::Uuid;

use crate::defaults;
use crate::models::{Fermentable, IngredientKind, LibraryIngredient, Recipe, or_unset};

/// Generates a fresh identifier for recipes and library entries.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// An in-memory view over the user's ingredient library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    entries: Vec<LibraryIngredient>,
}
impl Library {
    pub fn new(entries: Vec<LibraryIngredient>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LibraryIngredient] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LibraryIngredient> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds an entry by kind and case-insensitive name.
    pub fn find(&self, kind: IngredientKind, name: &str) -> Option<&LibraryIngredient> {
        self.entries.iter().find(|entry| entry.matches(kind, name))
    }

    /// Looks up an entry by id. Orphaned ids simply return `None`.
    pub fn get(&self, id: &str) -> Option<&LibraryIngredient> {
        self.entries.iter().find(|entry| entry.id.as_deref() == Some(id))
    }

    /// Adds an entry, assigning it an id if it doesn't have one yet, and
    /// returns that id.
    pub fn insert(&mut self, mut entry: LibraryIngredient) -> String {
        let id = entry.id.get_or_insert_with(new_id).clone();
        self.entries.push(entry);
        id
    }

    /// Removes an entry by id. Recipes referencing it keep the now-orphaned id.
    pub fn remove(&mut self, id: &str) -> Option<LibraryIngredient> {
        let position = self.entries.iter().position(|entry| entry.id.as_deref() == Some(id))?;
        Some(self.entries.remove(position))
    }

    /// Returns the id of the matching entry, or inserts `candidate` and returns its new id.
    fn resolve(&mut self, candidate: LibraryIngredient) -> String {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.matches(candidate.kind, &candidate.name)) {
            return entry.id.get_or_insert_with(new_id).clone();
        }
        tracing::debug!(name = %candidate.name, kind = %candidate.kind, "adding ingredient to library");
        self.insert(candidate)
    }

    /// Links every fermentable, hop and culture of `recipe` to a library entry,
    /// creating entries that don't exist yet.
    #[instrument(skip_all, fields(recipe = %recipe.name, library_size = self.entries.len()))]
    pub fn link(&mut self, mut recipe: Recipe) -> Recipe {
        for fermentable in &mut recipe.ingredients.fermentables {
            let mut candidate = LibraryIngredient::new(&fermentable.name, IngredientKind::Fermentable);
            candidate.color = Some(fermentable.color_srm());
            let potential = or_unset(fermentable.potential_yield.map(|y| y.potential.value), 0.0);
            candidate.yield_pct = Some(if potential == 0.0 {
                defaults::YIELD_PCT
            } else {
                Fermentable::yield_from_potential(potential).round()
            });
            fermentable.library_id = Some(self.resolve(candidate));
        }
        for hop in &mut recipe.ingredients.hops {
            let mut candidate = LibraryIngredient::new(&hop.name, IngredientKind::Hop);
            candidate.alpha = Some(hop.alpha());
            hop.library_id = Some(self.resolve(candidate));
        }
        for culture in &mut recipe.ingredients.cultures {
            let mut candidate = LibraryIngredient::new(&culture.name, IngredientKind::Culture);
            candidate.attenuation = Some(culture.attenuation());
            candidate.form = Some(culture.form);
            culture.library_id = Some(self.resolve(candidate));
        }
        recipe
    }
}
impl From<Vec<LibraryIngredient>> for Library {
    fn from(entries: Vec<LibraryIngredient>) -> Self {
        Self::new(entries)
    }
}
