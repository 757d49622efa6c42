//! Recipes and the ingredients nested inside them.

use super::fields::{Fields, is_tag};
use crate::consts;
use brewkit_recipe::models::{Efficiency, Misc, Scalar, Specifications, Style, Water, or_unset};
use brewkit_recipe::{
    Culture, CultureForm, CultureType, Fermentable, Hop, HopUse, Quantity, Recipe, RecipeType, defaults, new_id,
};
use roxmltree::Node;

/// Elements named `tag` anywhere below `node`.
fn nested<'a, 'input>(node: Node<'a, 'input>, tag: &'static str) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants().skip(1).filter(move |n| is_tag(n, tag))
}

pub(crate) fn recipe(node: Node<'_, '_>) -> Recipe {
    let fields = Fields::new(node);
    let mut recipe = Recipe::new(fields.text(consts::NAME));
    recipe.id = Some(new_id());
    recipe.recipe_type = fields.text(consts::TYPE).parse::<RecipeType>().unwrap_or_default();
    recipe.author = fields.text(consts::BREWER);
    recipe.notes = fields.optional_text(consts::NOTES);
    recipe.style = fields.child(consts::STYLE).map(style);
    recipe.batch_size = Quantity::liters(fields.number(consts::BATCH_SIZE));
    recipe.efficiency = Efficiency { brewhouse: fields.number(consts::EFFICIENCY) };
    recipe.boil_time = Quantity::minutes(fields.number(consts::BOIL_TIME));

    let specifications = Specifications {
        og: fields.optional_number(consts::EST_OG).map(Scalar::new),
        fg: fields.optional_number(consts::EST_FG).map(Scalar::new),
        abv: fields.optional_number(consts::EST_ABV).map(Scalar::new),
        ibu: fields.optional_number(consts::IBU).map(Scalar::new),
        color: fields.optional_number(consts::EST_COLOR).map(Scalar::new),
    };
    recipe.specifications = (!specifications.is_empty()).then_some(specifications);

    let ingredients = &mut recipe.ingredients;
    ingredients.fermentables = nested(node, consts::FERMENTABLE).map(fermentable).collect();
    ingredients.hops = nested(node, consts::HOP).map(hop).collect();
    ingredients.cultures = nested(node, consts::YEAST).map(culture).collect();
    ingredients.miscellaneous = nested(node, consts::MISC).map(misc).collect();
    ingredients.water = nested(node, consts::WATER).map(water).collect();
    tracing::trace!(
        name = %recipe.name,
        fermentables = recipe.ingredients.fermentables.len(),
        hops = recipe.ingredients.hops.len(),
        cultures = recipe.ingredients.cultures.len(),
        "parsed recipe"
    );
    recipe
}

pub(crate) fn style(node: Node<'_, '_>) -> Style {
    let fields = Fields::new(node);
    Style {
        name: fields.text(consts::NAME),
        category: fields.optional_text(consts::CATEGORY),
    }
}

/// Potential from `POTENTIAL` when set, otherwise derived from the `YIELD`
/// percentage, otherwise the default.
fn potential(fields: &Fields<'_, '_>) -> f64 {
    let given = or_unset(fields.optional_number(consts::POTENTIAL), 0.0);
    if given != 0.0 {
        return given;
    }
    let yield_pct = or_unset(fields.optional_number(consts::YIELD), 0.0);
    if yield_pct != 0.0 {
        return Fermentable::potential_from_yield(yield_pct);
    }
    defaults::POTENTIAL
}

fn fermentable(node: Node<'_, '_>) -> Fermentable {
    let fields = Fields::new(node);
    let amount = Quantity::kilograms(fields.number(consts::AMOUNT));
    let mut fermentable = Fermentable::new(fields.text(consts::NAME), amount).with_potential(potential(&fields));
    fermentable.fermentable_type = fields.text(consts::TYPE).to_lowercase();
    fermentable.color = fields.optional_number(consts::COLOR).map(Scalar::new);
    fermentable
}

fn hop(node: Node<'_, '_>) -> Hop {
    let fields = Fields::new(node);
    let mut hop = Hop::new(fields.text(consts::NAME), fields.text(consts::USE).parse::<HopUse>().unwrap_or_default())
        .with_amount(Quantity::grams(fields.number(consts::AMOUNT) * 1000.0))
        .with_time(Quantity::minutes(fields.number(consts::TIME)));
    hop.alpha_acid = fields.optional_number(consts::ALPHA).map(Scalar::new);
    hop
}

fn culture(node: Node<'_, '_>) -> Culture {
    let fields = Fields::new(node);
    Culture::new(
        fields.text(consts::NAME),
        fields.text(consts::TYPE).parse::<CultureType>().unwrap_or_default(),
        fields.text(consts::FORM).parse::<CultureForm>().unwrap_or_default(),
    )
    .with_attenuation(or_unset(fields.optional_number(consts::ATTENUATION), defaults::ATTENUATION))
}

fn misc(node: Node<'_, '_>) -> Misc {
    let fields = Fields::new(node);
    let amount = fields.number(consts::AMOUNT);
    Misc {
        name: fields.text(consts::NAME),
        misc_type: fields.text(consts::TYPE),
        misc_use: fields.text(consts::USE),
        amount: match fields.flag(consts::AMOUNT_IS_WEIGHT) {
            Some(false) => Quantity::liters(amount),
            _ => Quantity::kilograms(amount),
        },
        time: Quantity::minutes(fields.number(consts::TIME)),
    }
}

pub(crate) fn water(node: Node<'_, '_>) -> Water {
    let fields = Fields::new(node);
    Water {
        name: fields.text(consts::NAME),
        amount: Quantity::liters(fields.number(consts::AMOUNT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewkit_recipe::Unit;
    use roxmltree::Document;
    use rstest::rstest;

    fn parse_recipe(xml: &str) -> Recipe {
        let document = Document::parse(xml).unwrap();
        recipe(document.root_element())
    }

    #[test]
    fn reads_recipe_fields() {
        let recipe = parse_recipe(
            "<RECIPE><NAME>Helles</NAME><TYPE>Partial Mash</TYPE><BREWER>Sam</BREWER>\
             <BATCH_SIZE>23</BATCH_SIZE><EFFICIENCY>68</EFFICIENCY><BOIL_TIME>90</BOIL_TIME>\
             <NOTES>Lager cold.</NOTES><STYLE><NAME>Munich Helles</NAME><CATEGORY>Pale Lager</CATEGORY></STYLE>\
             <EST_OG>1.048</EST_OG><IBU>20</IBU></RECIPE>",
        );
        assert_eq!(recipe.name, "Helles");
        assert_eq!(recipe.recipe_type, RecipeType::PartialMash);
        assert_eq!(recipe.author, "Sam");
        assert_eq!(recipe.batch_size, Quantity::liters(23.0));
        assert_eq!(recipe.efficiency.brewhouse, 68.0);
        assert_eq!(recipe.boil_time, Quantity::minutes(90.0));
        assert_eq!(recipe.notes.as_deref(), Some("Lager cold."));
        let style = recipe.style.unwrap();
        assert_eq!(style.name, "Munich Helles");
        assert_eq!(style.category.as_deref(), Some("Pale Lager"));
        let specs = recipe.specifications.unwrap();
        assert_eq!(specs.og, Some(Scalar::new(1.048)));
        assert_eq!(specs.ibu, Some(Scalar::new(20.0)));
        assert_eq!(specs.fg, None);
        assert!(recipe.id.is_some());
    }

    #[test]
    fn missing_fields_fall_back() {
        let recipe = parse_recipe("<RECIPE><NAME>Bare</NAME></RECIPE>");
        assert_eq!(recipe.recipe_type, RecipeType::AllGrain);
        assert_eq!(recipe.author, "");
        assert_eq!(recipe.batch_size.value, 0.0);
        assert!(recipe.specifications.is_none());
        assert!(recipe.style.is_none());
        assert!(recipe.ingredients.fermentables.is_empty());
    }

    #[rstest]
    #[case("<POTENTIAL>1.040</POTENTIAL><YIELD>70</YIELD>", 1.040)]
    #[case("<YIELD>80</YIELD>", 1.0368)]
    #[case("<POTENTIAL>0</POTENTIAL><YIELD>80</YIELD>", 1.0368)]
    #[case("", 1.037)]
    fn fermentable_potential(#[case] extra: &str, #[case] expected: f64) {
        let xml = format!("<FERMENTABLE><NAME>Malt</NAME><AMOUNT>4</AMOUNT>{extra}</FERMENTABLE>");
        let document = Document::parse(&xml).unwrap();
        let parsed = fermentable(document.root_element());
        assert!((parsed.potential() - expected).abs() < 1e-9);
        assert_eq!(parsed.amount, Quantity::kilograms(4.0));
    }

    #[test]
    fn hop_amounts_are_grams() {
        let document = Document::parse(
            "<HOP><NAME>Saaz</NAME><ALPHA>3.5</ALPHA><AMOUNT>0.025</AMOUNT><USE>Aroma</USE><TIME>10</TIME></HOP>",
        )
        .unwrap();
        let parsed = hop(document.root_element());
        let amount = parsed.amount.as_ref().unwrap();
        assert_eq!(amount.unit, Unit::Grams);
        assert!((amount.value - 25.0).abs() < 1e-9);
        assert_eq!(parsed.hop_use, HopUse::Whirlpool);
        assert_eq!(parsed.alpha(), 3.5);
        assert_eq!(parsed.time, Some(Quantity::minutes(10.0)));
    }

    #[test]
    fn yeast_defaults() {
        let document = Document::parse("<YEAST><NAME>Mystery</NAME><TYPE>Kveik</TYPE></YEAST>").unwrap();
        let parsed = culture(document.root_element());
        assert_eq!(parsed.culture_type, CultureType::Ale);
        assert_eq!(parsed.form, CultureForm::Dry);
        assert_eq!(parsed.attenuation(), 75.0);
    }

    #[test]
    fn misc_volume_or_weight() {
        let document = Document::parse(
            "<MISCS><MISC><NAME>Irish Moss</NAME><AMOUNT>0.005</AMOUNT><AMOUNT_IS_WEIGHT>TRUE</AMOUNT_IS_WEIGHT></MISC>\
             <MISC><NAME>Lactic Acid</NAME><AMOUNT>0.002</AMOUNT><AMOUNT_IS_WEIGHT>FALSE</AMOUNT_IS_WEIGHT></MISC>\
             </MISCS>",
        )
        .unwrap();
        let miscs: Vec<Misc> = nested(document.root_element(), consts::MISC).map(misc).collect();
        assert_eq!(miscs[0].amount.unit, Unit::Kilograms);
        assert_eq!(miscs[1].amount.unit, Unit::Liters);
    }
}
