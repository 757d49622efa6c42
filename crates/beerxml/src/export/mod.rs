//! Writing BeerXML documents.
//!
//! Amounts are always written in BeerXML's base units: kilograms for
//! fermentables and hops, liters for volumes and minutes for times.

mod writer;

pub use self::writer::escape;
use self::writer::XmlWriter;
use crate::consts;
use brewkit_recipe::models::{Misc, Specifications, Style, Water, or_unset};
use brewkit_recipe::{
    Culture, CultureForm, Fermentable, Hop, IngredientKind, LibraryIngredient, Recipe, Unit, defaults,
};
use tracing::instrument;

/// Brewer credited when a recipe has no author.
pub const DEFAULT_BREWER: &str = "BrewMaster AI";
/// Liters added to the batch size to estimate `BOIL_SIZE`.
pub const DEFAULT_BOIL_ALLOWANCE_LITERS: f64 = 5.0;

/// Renders recipes and library entries as BeerXML.
///
/// ```
/// use brewkit_beerxml::Exporter;
/// use brewkit_recipe::Recipe;
///
/// let xml = Exporter::default().with_brewer("Sam").recipe(&Recipe::new("Mild"));
/// assert!(xml.contains("<BREWER>Sam</BREWER>"));
/// assert!(xml.contains("<BOIL_SIZE>25</BOIL_SIZE>"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Exporter {
    brewer: String,
    boil_allowance_liters: f64,
}
impl Default for Exporter {
    fn default() -> Self {
        Self {
            brewer: DEFAULT_BREWER.to_string(),
            boil_allowance_liters: DEFAULT_BOIL_ALLOWANCE_LITERS,
        }
    }
}

/// Builder
impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brewer to credit on recipes without an author.
    pub fn with_brewer(mut self, brewer: impl Into<String>) -> Self {
        self.brewer = brewer.into();
        self
    }

    /// Liters added to the batch size for the estimated pre-boil volume.
    pub fn with_boil_allowance(mut self, liters: f64) -> Self {
        self.boil_allowance_liters = liters;
        self
    }
}

/// Documents
impl Exporter {
    /// A `<RECIPES>` document holding a single recipe.
    pub fn recipe(&self, recipe: &Recipe) -> String {
        self.recipes(std::slice::from_ref(recipe))
    }

    #[instrument(skip_all, fields(recipes = recipes.len()))]
    pub fn recipes(&self, recipes: &[Recipe]) -> String {
        let mut xml = XmlWriter::new();
        xml.open(consts::RECIPES);
        for recipe in recipes {
            self.write_recipe(&mut xml, recipe);
        }
        xml.close(consts::RECIPES);
        xml.finish()
    }

    /// A `<BREW_LIBRARY>` document. Sections without entries are left out.
    #[instrument(skip_all, fields(entries = entries.len()))]
    pub fn library(&self, entries: &[LibraryIngredient]) -> String {
        let of = |kind: IngredientKind| entries.iter().filter(move |entry| entry.kind == kind).collect::<Vec<_>>();
        let mut xml = XmlWriter::new();
        xml.open(consts::BREW_LIBRARY);
        section(&mut xml, consts::FERMENTABLES, &of(IngredientKind::Fermentable), |xml, entry| {
            xml.open(consts::FERMENTABLE);
            xml.text(consts::NAME, &entry.name);
            xml.value(consts::VERSION, 1);
            xml.value(consts::TYPE, "Grain");
            xml.number(consts::YIELD, or_unset(entry.yield_pct, defaults::YIELD_PCT));
            xml.number(consts::COLOR, entry.color.unwrap_or(0.0));
            xml.close(consts::FERMENTABLE);
        });
        section(&mut xml, consts::HOPS, &of(IngredientKind::Hop), |xml, entry| {
            xml.open(consts::HOP);
            xml.text(consts::NAME, &entry.name);
            xml.value(consts::VERSION, 1);
            xml.number(consts::ALPHA, entry.alpha.unwrap_or(0.0));
            xml.value(consts::USE, "Boil");
            xml.close(consts::HOP);
        });
        section(&mut xml, consts::YEASTS, &of(IngredientKind::Culture), |xml, entry| {
            xml.open(consts::YEAST);
            xml.text(consts::NAME, &entry.name);
            xml.value(consts::VERSION, 1);
            xml.value(consts::TYPE, "Ale");
            xml.value(consts::FORM, entry.form.unwrap_or(CultureForm::Dry));
            xml.number(consts::ATTENUATION, or_unset(entry.attenuation, defaults::ATTENUATION));
            xml.close(consts::YEAST);
        });
        section(&mut xml, consts::MISCS, &of(IngredientKind::Misc), |xml, entry| {
            xml.open(consts::MISC);
            xml.text(consts::NAME, &entry.name);
            xml.value(consts::VERSION, 1);
            xml.text(consts::TYPE, entry.misc_type.as_deref().unwrap_or("Other"));
            xml.close(consts::MISC);
        });
        section(&mut xml, consts::STYLES, &of(IngredientKind::Style), |xml, entry| {
            write_style(xml, &entry.name, entry.category.as_deref());
        });
        xml.close(consts::BREW_LIBRARY);
        xml.finish()
    }
}

/// Sections
impl Exporter {
    fn write_recipe(&self, xml: &mut XmlWriter, recipe: &Recipe) {
        let batch_liters = recipe.batch_size.in_liters();
        let brewer = if recipe.author.trim().is_empty() { self.brewer.as_str() } else { recipe.author.as_str() };
        xml.open(consts::RECIPE);
        xml.text(consts::NAME, &recipe.name);
        xml.value(consts::VERSION, 1);
        xml.value(consts::TYPE, recipe.recipe_type);
        xml.text(consts::BREWER, brewer);
        xml.number(consts::BATCH_SIZE, batch_liters);
        xml.number(consts::BOIL_SIZE, batch_liters + self.boil_allowance_liters);
        xml.number(consts::BOIL_TIME, recipe.boil_time.in_minutes());
        xml.number(consts::EFFICIENCY, recipe.efficiency.brewhouse);
        if let Some(Style { name, category }) = &recipe.style {
            write_style(xml, name, category.as_deref());
        }
        if let Some(notes) = recipe.notes.as_deref().filter(|notes| !notes.is_empty()) {
            xml.text(consts::NOTES, notes);
        }

        let ingredients = &recipe.ingredients;
        xml.open(consts::FERMENTABLES);
        ingredients.fermentables.iter().for_each(|f| write_fermentable(xml, f));
        xml.close(consts::FERMENTABLES);
        xml.open(consts::HOPS);
        ingredients.hops.iter().for_each(|h| write_hop(xml, h));
        xml.close(consts::HOPS);
        xml.open(consts::YEASTS);
        ingredients.cultures.iter().for_each(|c| write_culture(xml, c));
        xml.close(consts::YEASTS);
        section(xml, consts::MISCS, &ingredients.miscellaneous, |xml, misc| write_misc(xml, misc));
        section(xml, consts::WATERS, &ingredients.water, |xml, water| write_water(xml, water));

        if let Some(specifications) = &recipe.specifications {
            write_specifications(xml, specifications);
        }
        xml.close(consts::RECIPE);
    }
}

/// Writes `items` wrapped in `tag`, or nothing at all when there are none.
fn section<T>(xml: &mut XmlWriter, tag: &str, items: &[T], mut write: impl FnMut(&mut XmlWriter, &T)) {
    if items.is_empty() {
        return;
    }
    xml.open(tag);
    for item in items {
        write(xml, item);
    }
    xml.close(tag);
}

/// `"dry extract"` → `"Dry Extract"`.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_style(xml: &mut XmlWriter, name: &str, category: Option<&str>) {
    xml.open(consts::STYLE);
    xml.text(consts::NAME, name);
    xml.text(consts::CATEGORY, category.unwrap_or_default());
    xml.value(consts::VERSION, 1);
    xml.close(consts::STYLE);
}

fn write_fermentable(xml: &mut XmlWriter, fermentable: &Fermentable) {
    let potential = or_unset(fermentable.potential_yield.map(|y| y.potential.value), 0.0);
    let yield_pct = if potential != 0.0 { Fermentable::yield_from_potential(potential) } else { defaults::YIELD_PCT };
    let fermentable_type = match title_case(&fermentable.fermentable_type) {
        blank if blank.is_empty() => "Grain".to_string(),
        titled => titled,
    };
    xml.open(consts::FERMENTABLE);
    xml.text(consts::NAME, &fermentable.name);
    xml.value(consts::VERSION, 1);
    xml.number(consts::AMOUNT, fermentable.amount.in_kilograms());
    xml.text(consts::TYPE, &fermentable_type);
    xml.number(consts::YIELD, yield_pct);
    xml.number(consts::COLOR, fermentable.color.map(|c| c.value).unwrap_or(0.0));
    xml.close(consts::FERMENTABLE);
}

fn write_hop(xml: &mut XmlWriter, hop: &Hop) {
    xml.open(consts::HOP);
    xml.text(consts::NAME, &hop.name);
    xml.value(consts::VERSION, 1);
    xml.number(consts::ALPHA, hop.alpha_acid.map(|a| a.value).unwrap_or(0.0));
    xml.number(consts::AMOUNT, hop.amount.as_ref().map(|a| a.in_grams() / 1000.0).unwrap_or(0.0));
    xml.value(consts::USE, hop.hop_use);
    xml.number(consts::TIME, hop.time.as_ref().map(|t| t.in_minutes()).unwrap_or(0.0));
    xml.close(consts::HOP);
}

fn write_culture(xml: &mut XmlWriter, culture: &Culture) {
    xml.open(consts::YEAST);
    xml.text(consts::NAME, &culture.name);
    xml.value(consts::VERSION, 1);
    xml.value(consts::TYPE, culture.culture_type);
    xml.value(consts::FORM, culture.form);
    xml.number(consts::ATTENUATION, culture.attenuation());
    xml.close(consts::YEAST);
}

fn write_misc(xml: &mut XmlWriter, misc: &Misc) {
    let by_volume = matches!(misc.amount.unit, Unit::Liters | Unit::Gallons);
    let amount = if by_volume { misc.amount.in_liters() } else { misc.amount.in_kilograms() };
    xml.open(consts::MISC);
    xml.text(consts::NAME, &misc.name);
    xml.value(consts::VERSION, 1);
    xml.text(consts::TYPE, &misc.misc_type);
    xml.text(consts::USE, &misc.misc_use);
    xml.number(consts::TIME, misc.time.in_minutes());
    xml.number(consts::AMOUNT, amount);
    xml.value(consts::AMOUNT_IS_WEIGHT, if by_volume { "FALSE" } else { "TRUE" });
    xml.close(consts::MISC);
}

fn write_water(xml: &mut XmlWriter, water: &Water) {
    xml.open(consts::WATER);
    xml.text(consts::NAME, &water.name);
    xml.value(consts::VERSION, 1);
    xml.number(consts::AMOUNT, water.amount.in_liters());
    xml.close(consts::WATER);
}

fn write_specifications(xml: &mut XmlWriter, specifications: &Specifications) {
    let fields = [
        (consts::EST_OG, specifications.og),
        (consts::EST_FG, specifications.fg),
        (consts::EST_ABV, specifications.abv),
        (consts::IBU, specifications.ibu),
        (consts::EST_COLOR, specifications.color),
    ];
    for (tag, scalar) in fields {
        if let Some(scalar) = scalar {
            xml.number(tag, scalar.value);
        }
    }
}

/// [`Exporter::recipe`] with default options.
pub fn export_recipe(recipe: &Recipe) -> String {
    Exporter::default().recipe(recipe)
}

/// [`Exporter::library`] with default options.
pub fn export_library(entries: &[LibraryIngredient]) -> String {
    Exporter::default().library(entries)
}
