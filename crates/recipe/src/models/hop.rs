use super::{Scalar, or_unset, sanitize};
use crate::defaults;
use crate::units::Quantity;
use std::convert::Infallible;
use std::str::FromStr;

/// A bittering or aroma hop addition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hop {
    pub name: String,
    /// Weight of the addition; hops without one are ignored for bitterness.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub amount: Option<Quantity>,
    /// Alpha acid content, in percent.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alpha_acid: Option<Scalar>,
    #[cfg_attr(feature = "serde", serde(rename = "use", default))]
    pub hop_use: HopUse,
    /// Minutes in the boil, or days for a dry hop.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub time: Option<Quantity>,
    #[cfg_attr(feature = "serde", serde(rename = "libraryId", default, skip_serializing_if = "Option::is_none"))]
    pub library_id: Option<String>,
}
impl Hop {
    pub fn new(name: impl Into<String>, hop_use: HopUse) -> Self {
        Self {
            name: name.into(),
            amount: None,
            alpha_acid: None,
            hop_use,
            time: None,
            library_id: None,
        }
    }

    pub fn with_amount(mut self, amount: Quantity) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha_acid = Some(alpha.into());
        self
    }

    pub fn with_time(mut self, time: Quantity) -> Self {
        self.time = Some(time);
        self
    }

    /// Alpha acid percentage, defaulting to 5.
    pub fn alpha(&self) -> f64 {
        or_unset(self.alpha_acid.map(|a| a.value), defaults::ALPHA_ACID)
    }
}

/// When in the process a hop is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(from = "String", into = "String"))]
pub enum HopUse {
    #[default]
    Boil,
    DryHop,
    Mash,
    FirstWort,
    /// Hot-side addition after flame-out. BeerXML calls this "Aroma".
    Whirlpool,
}
impl HopUse {
    /// Returns `true` if the addition isomerizes and contributes bitterness.
    pub fn is_bittering(&self) -> bool {
        matches!(self, Self::Boil | Self::FirstWort | Self::Whirlpool)
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Boil => "boil",
            Self::DryHop => "dry_hop",
            Self::Mash => "mash",
            Self::FirstWort => "first_wort",
            Self::Whirlpool => "whirlpool",
        }
    }

    /// Returns the BeerXML display string for the use.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boil => "Boil",
            Self::DryHop => "Dry Hop",
            Self::Mash => "Mash",
            Self::FirstWort => "First Wort",
            Self::Whirlpool => "Aroma",
        }
    }
}
impl FromStr for HopUse {
    type Err = Infallible;
    /// Unrecognized uses fall back to [`HopUse::Boil`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "dry_hop" | "dryhop" => Self::DryHop,
            "mash" => Self::Mash,
            "first_wort" | "firstwort" | "fwh" => Self::FirstWort,
            "whirlpool" | "aroma" | "flameout" | "hop_stand" => Self::Whirlpool,
            _ => Self::Boil,
        })
    }
}
string_conversions!(HopUse);
