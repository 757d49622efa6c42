//! Reading command input: files (or stdin) holding recipe JSON or BeerXML.

use std::io::Read;
use std::path::Path;

use brewkit_recipe::models::BrewLogEntry;
use brewkit_recipe::{LibraryIngredient, Recipe};
use exn::ResultExt;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ErrorKind, Result};

/// Reads `path`, or standard input when the path is `-`.
pub fn read(path: &Path) -> Result<String> {
    let name = path.display().to_string();
    if name == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).or_raise(|| ErrorKind::Read("standard input".to_string()))?;
        return Ok(text);
    }
    std::fs::read_to_string(path).or_raise(|| ErrorKind::Read(name))
}

/// BeerXML documents start with markup; everything else is treated as JSON.
pub fn is_xml(text: &str) -> bool {
    text.trim_start().starts_with('<')
}

fn from_json<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).or_raise(|| ErrorKind::InvalidInput(format!("not a valid {what}")))
}

/// A single JSON object or an array of them.
fn one_or_many<T: DeserializeOwned>(text: &str, what: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(text).or_raise(|| ErrorKind::InvalidInput("not valid JSON".to_string()))?;
    if value.is_array() { from_json(value, what) } else { Ok(vec![from_json(value, what)?]) }
}

/// Recipes from recipe JSON or a BeerXML document.
pub fn recipes(text: &str) -> Result<Vec<Recipe>> {
    let recipes = if is_xml(text) { brewkit_beerxml::parse(text).recipes } else { one_or_many(text, "recipe")? };
    if recipes.is_empty() {
        exn::bail!(ErrorKind::InvalidInput("no recipes found".to_string()));
    }
    Ok(recipes)
}

pub fn library(text: &str) -> Result<Vec<LibraryIngredient>> {
    one_or_many(text, "library ingredient")
}

pub fn brew_log_entry(text: &str) -> Result<BrewLogEntry> {
    let value: Value = serde_json::from_str(text).or_raise(|| ErrorKind::InvalidInput("not valid JSON".to_string()))?;
    from_json(value, "brew log entry")
}

/// Parses `NAME=PCT`, as given to `--alpha`.
pub fn parse_alpha(arg: &str) -> std::result::Result<(String, f64), String> {
    let (name, pct) = arg.rsplit_once('=').ok_or_else(|| format!("expected NAME=PCT, found '{arg}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing hop name in '{arg}'"));
    }
    let pct = pct.trim().parse::<f64>().map_err(|err| format!("invalid alpha acid '{pct}': {err}"))?;
    Ok((name.to_string(), pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Cascade=6.2", Some(("Cascade", 6.2)))]
    #[case(" East Kent Goldings = 5 ", Some(("East Kent Goldings", 5.0)))]
    #[case("A=B=7", Some(("A=B", 7.0)))]
    #[case("Cascade", None)]
    #[case("=5", None)]
    #[case("Cascade=high", None)]
    fn alpha_arguments(#[case] input: &str, #[case] expected: Option<(&str, f64)>) {
        let parsed = parse_alpha(input).ok();
        assert_eq!(parsed, expected.map(|(name, pct)| (name.to_string(), pct)));
    }

    #[test]
    fn recipes_from_json_object_or_array() {
        let one = r#"{"name": "Mild", "batch_size": {"unit": "liters", "value": 20},
            "efficiency": {"brewhouse": 70}, "boil_time": {"unit": "minutes", "value": 60}}"#;
        assert_eq!(recipes(one).unwrap()[0].name, "Mild");
        let many = format!("[{one}, {one}]");
        assert_eq!(recipes(&many).unwrap().len(), 2);
    }

    #[test]
    fn recipes_from_beerxml() {
        let xml = "  <RECIPES><RECIPE><NAME>Porter</NAME></RECIPE></RECIPES>";
        assert!(is_xml(xml));
        assert_eq!(recipes(xml).unwrap()[0].name, "Porter");
    }

    #[rstest]
    #[case("<RECIPES></RECIPES>")]
    #[case("[]")]
    #[case("{\"name\": 5}")]
    #[case("definitely not json")]
    fn bad_recipe_input(#[case] text: &str) {
        let err = recipes(text).unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidInput(_)));
    }

    #[test]
    fn missing_files() {
        let err = read(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Read(_)));
        assert!(err.is_retryable());
    }
}
