use crate::units::Quantity;

/// Anything that isn't a fermentable, hop or culture: finings, spices, salts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Misc {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub misc_type: String,
    #[cfg_attr(feature = "serde", serde(rename = "use", default))]
    pub misc_use: String,
    pub amount: Quantity,
    pub time: Quantity,
}

/// A water addition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Water {
    pub name: String,
    pub amount: Quantity,
}
