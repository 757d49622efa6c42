use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Same prefix `parseFloat` would accept, so "5.2 %" and "60 min" still read as numbers.
regex!(LEADING_NUMBER, r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?");

// Containers.
pub(crate) const RECIPES: &str = "RECIPES";
pub(crate) const RECIPE: &str = "RECIPE";
pub(crate) const BREW_LIBRARY: &str = "BREW_LIBRARY";
pub(crate) const FERMENTABLES: &str = "FERMENTABLES";
pub(crate) const FERMENTABLE: &str = "FERMENTABLE";
pub(crate) const HOPS: &str = "HOPS";
pub(crate) const HOP: &str = "HOP";
pub(crate) const YEASTS: &str = "YEASTS";
pub(crate) const YEAST: &str = "YEAST";
pub(crate) const MISCS: &str = "MISCS";
pub(crate) const MISC: &str = "MISC";
pub(crate) const WATERS: &str = "WATERS";
pub(crate) const WATER: &str = "WATER";
pub(crate) const STYLES: &str = "STYLES";
pub(crate) const STYLE: &str = "STYLE";

// Fields.
pub(crate) const NAME: &str = "NAME";
pub(crate) const VERSION: &str = "VERSION";
pub(crate) const TYPE: &str = "TYPE";
pub(crate) const BREWER: &str = "BREWER";
pub(crate) const NOTES: &str = "NOTES";
pub(crate) const CATEGORY: &str = "CATEGORY";
pub(crate) const BATCH_SIZE: &str = "BATCH_SIZE";
pub(crate) const BOIL_SIZE: &str = "BOIL_SIZE";
pub(crate) const BOIL_TIME: &str = "BOIL_TIME";
pub(crate) const EFFICIENCY: &str = "EFFICIENCY";
pub(crate) const EST_OG: &str = "EST_OG";
pub(crate) const EST_FG: &str = "EST_FG";
pub(crate) const EST_ABV: &str = "EST_ABV";
pub(crate) const IBU: &str = "IBU";
pub(crate) const EST_COLOR: &str = "EST_COLOR";
pub(crate) const AMOUNT: &str = "AMOUNT";
pub(crate) const AMOUNT_IS_WEIGHT: &str = "AMOUNT_IS_WEIGHT";
pub(crate) const POTENTIAL: &str = "POTENTIAL";
pub(crate) const YIELD: &str = "YIELD";
pub(crate) const COLOR: &str = "COLOR";
pub(crate) const ALPHA: &str = "ALPHA";
pub(crate) const USE: &str = "USE";
pub(crate) const TIME: &str = "TIME";
pub(crate) const FORM: &str = "FORM";
pub(crate) const ATTENUATION: &str = "ATTENUATION";
