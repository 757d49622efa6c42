//! BeerXML import and export.
//!
//! [`parse`] turns a BeerXML document into an [`ImportResult`]: recipes with
//! their nested ingredients, plus standalone ingredients that can be offered
//! to the ingredient library. [`Exporter`] goes the other way, writing either
//! a `<RECIPES>` document or the non-standard `<BREW_LIBRARY>` document used
//! for library backups.
//!
//! Only the fields both directions understand survive a round trip. Recipe
//! ids, library links and the pre-boil volume do not.

mod consts;
pub mod error;
mod export;
mod import;

pub use crate::export::{
    DEFAULT_BOIL_ALLOWANCE_LITERS, DEFAULT_BREWER, Exporter, escape, export_library, export_recipe,
};
pub use crate::import::{ImportResult, Importer, parse};
