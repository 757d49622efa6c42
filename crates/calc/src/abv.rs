use crate::round_to;

/// Multiplier turning a gravity drop into percent alcohol by volume.
const ABV_FACTOR: f64 = 131.25;
/// ABV added per gram of priming sugar per liter (2 g/L is roughly +0.1%).
const PRIMING_ABV_PER_GRAM_LITER: f64 = 0.05;

/// How the finished beer was packaged, for the purposes of ABV.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Conditioning {
    /// No refermentation: recipe estimates, kegged or still beer.
    #[default]
    None,
    /// Bottle conditioned with `sugar_grams` of priming sugar in `volume_liters`.
    Bottled { sugar_grams: f64, volume_liters: f64 },
}

/// Alcohol by volume from original and final gravity, to one decimal.
///
/// Returns exactly 0 when either gravity is unset (zero, negative or
/// non-finite) or when `og <= fg`.
///
/// ```
/// use brewkit_calc::{Conditioning, abv};
/// assert_eq!(abv(1.050, 1.010, Conditioning::None), 5.3);
/// assert_eq!(abv(1.010, 1.050, Conditioning::None), 0.0);
/// let bottled = Conditioning::Bottled { sugar_grams: 120.0, volume_liters: 20.0 };
/// assert_eq!(abv(1.050, 1.010, bottled), 5.6);
/// ```
pub fn abv(og: f64, fg: f64, conditioning: Conditioning) -> f64 {
    let unset = |g: f64| !g.is_finite() || g <= 0.0;
    if unset(og) || unset(fg) || og <= fg {
        return 0.0;
    }
    let mut abv = (og - fg) * ABV_FACTOR;
    if let Conditioning::Bottled { sugar_grams, volume_liters } = conditioning
        && sugar_grams > 0.0
        && volume_liters > 0.0
    {
        abv += sugar_grams / volume_liters * PRIMING_ABV_PER_GRAM_LITER;
    }
    let abv = round_to(abv, 1);
    if abv.is_finite() { abv } else { 0.0 }
}
