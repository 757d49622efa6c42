//! Reading BeerXML documents.

mod fields;
mod library;
mod recipe;

use self::fields::is_tag;
use crate::consts;
use crate::error::{ErrorKind, Result};
use brewkit_recipe::models::Water;
use brewkit_recipe::{LibraryIngredient, Recipe};
use roxmltree::{Document, Node, ParsingOptions};
use tracing::instrument;

/// Everything importable from a single BeerXML document.
///
/// Recipes carry their own ingredients. The remaining lists hold standalone
/// entries found outside of any `<RECIPE>`, ready to be offered to the
/// ingredient library.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportResult {
    pub recipes: Vec<Recipe>,
    pub fermentables: Vec<LibraryIngredient>,
    pub hops: Vec<LibraryIngredient>,
    pub cultures: Vec<LibraryIngredient>,
    pub miscs: Vec<LibraryIngredient>,
    pub styles: Vec<LibraryIngredient>,
    pub waters: Vec<Water>,
}
impl ImportResult {
    /// Returns `true` if the document contained nothing importable.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
            && self.fermentables.is_empty()
            && self.hops.is_empty()
            && self.cultures.is_empty()
            && self.miscs.is_empty()
            && self.styles.is_empty()
            && self.waters.is_empty()
    }

    /// All standalone library candidates, in document section order.
    pub fn library_candidates(&self) -> impl Iterator<Item = &LibraryIngredient> {
        self.fermentables
            .iter()
            .chain(&self.hops)
            .chain(&self.cultures)
            .chain(&self.miscs)
            .chain(&self.styles)
    }
}

/// A parsed BeerXML document.
#[derive(Debug)]
pub struct Importer<'input> {
    document: Document<'input>,
}
impl<'input> Importer<'input> {
    /// Parses `xml`, failing if it is not well-formed.
    ///
    /// Tag names are matched case-insensitively and the root element is not
    /// checked, so `<RECIPES>`, `<BREW_LIBRARY>` and bare sections all work.
    pub fn try_from_str(xml: &'input str) -> Result<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = match Document::parse_with_options(xml, options) {
            Ok(document) => document,
            Err(err) => exn::bail!(ErrorKind::MalformedXml(err.to_string())),
        };
        Ok(Self { document })
    }

    /// Elements named `tag` that aren't inside a `<RECIPE>`.
    fn standalone(&self, tag: &'static str) -> impl Iterator<Item = Node<'_, 'input>> {
        self.document
            .descendants()
            .filter(move |node| is_tag(node, tag))
            .filter(|node| !node.ancestors().skip(1).any(|ancestor| is_tag(&ancestor, consts::RECIPE)))
    }

    /// Every `<RECIPE>` in the document, each with a fresh id.
    pub fn recipes(&self) -> Vec<Recipe> {
        self.document
            .descendants()
            .filter(|node| is_tag(node, consts::RECIPE))
            .map(recipe::recipe)
            .collect()
    }

    #[instrument(skip(self))]
    pub fn import(&self) -> ImportResult {
        let result = ImportResult {
            recipes: self.recipes(),
            fermentables: self.standalone(consts::FERMENTABLE).map(library::fermentable).collect(),
            hops: self.standalone(consts::HOP).map(library::hop).collect(),
            cultures: self.standalone(consts::YEAST).map(library::culture).collect(),
            miscs: self.standalone(consts::MISC).map(library::misc).collect(),
            styles: self.standalone(consts::STYLE).map(library::style).collect(),
            waters: self.standalone(consts::WATER).map(recipe::water).collect(),
        };
        tracing::debug!(
            recipes = result.recipes.len(),
            library_candidates = result.library_candidates().count(),
            waters = result.waters.len(),
            "imported BeerXML document"
        );
        result
    }
}

/// Lenient entry point: a malformed document is logged and yields an empty
/// [`ImportResult`]. Callers should treat [`ImportResult::is_empty`] as
/// "nothing importable".
///
/// ```
/// let result = brewkit_beerxml::parse("<RECIPES><RECIPE><NAME>Stout</NAME></RECIPE></RECIPES>");
/// assert_eq!(result.recipes[0].name, "Stout");
/// assert!(brewkit_beerxml::parse("<RECIPES><RECIPE>").is_empty());
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse(xml: &str) -> ImportResult {
    match Importer::try_from_str(xml) {
        Ok(importer) => importer.import(),
        Err(err) => {
            tracing::warn!(error = ?err, "BeerXML document could not be parsed");
            ImportResult::default()
        }
    }
}
