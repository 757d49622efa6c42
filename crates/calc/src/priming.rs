use brewkit_recipe::models::SugarType;

/// Grams of table sugar per liter per volume of CO2.
const SUCROSE_GRAMS_PER_VOLUME_LITER: f64 = 4.0;

/// CO2 volumes still dissolved in beer after fermenting at `temp_c` degrees Celsius.
pub fn residual_co2(temp_c: f64) -> f64 {
    1.57 * 0.97f64.powf(temp_c)
}

/// Grams of priming sugar needed to reach `target_co2` volumes in `liters` of
/// beer that finished fermenting at `temp_c`.
///
/// Glucose needs 15% more than table sugar by weight, and dry malt extract 40% more.
///
/// ```
/// use brewkit_calc::priming_sugar;
/// use brewkit_recipe::models::SugarType;
/// assert_eq!(priming_sugar(2.4, 20.0, 20.0, SugarType::TableSugar), 124);
/// assert_eq!(priming_sugar(2.4, 20.0, 20.0, SugarType::Glucose), 142);
/// assert_eq!(priming_sugar(2.4, 20.0, 20.0, SugarType::Dme), 173);
/// ```
pub fn priming_sugar(target_co2: f64, liters: f64, temp_c: f64, sugar: SugarType) -> u32 {
    let needed = (target_co2 - residual_co2(temp_c)).max(0.0);
    let grams = needed * SUCROSE_GRAMS_PER_VOLUME_LITER * liters;
    let grams = match sugar {
        SugarType::TableSugar => grams,
        SugarType::Glucose => grams * 1.15,
        SugarType::Dme => grams * 1.4,
    };
    if grams.is_finite() { grams.round().max(0.0) as u32 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn residual_drops_with_temperature() {
        assert!((residual_co2(0.0) - 1.57).abs() < 1e-12);
        assert!(residual_co2(10.0) > residual_co2(20.0));
    }

    #[rstest]
    #[case(0.5, 20.0, 20.0)]
    #[case(2.4, 0.0, 20.0)]
    #[case(2.4, -10.0, 20.0)]
    #[case(f64::NAN, 20.0, 20.0)]
    fn nothing_needed(#[case] target: f64, #[case] liters: f64, #[case] temp: f64) {
        assert_eq!(priming_sugar(target, liters, temp, SugarType::TableSugar), 0);
    }

    #[test]
    fn scales_with_volume() {
        let ten = priming_sugar(2.6, 10.0, 18.0, SugarType::TableSugar);
        let forty = priming_sugar(2.6, 40.0, 18.0, SugarType::TableSugar);
        assert!((i64::from(forty) - 4 * i64::from(ten)).abs() <= 2);
    }
}
