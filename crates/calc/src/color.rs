/// SRM upper bounds and the display colour used below each bound.
const PALETTE: [(f64, &str); 14] = [
    (2.0, "#FFE699"),
    (4.0, "#FFD878"),
    (6.0, "#FFCA5A"),
    (8.0, "#FFBF42"),
    (10.0, "#FBB123"),
    (13.0, "#F8A600"),
    (17.0, "#F39C00"),
    (20.0, "#EA8F00"),
    (24.0, "#E58500"),
    (29.0, "#D37200"),
    (35.0, "#C16100"),
    (40.0, "#AF5000"),
    (45.0, "#9A4000"),
    (50.0, "#823000"),
];
const DARKEST: &str = "#241000";

/// Approximate hex colour of beer at the given SRM, for display.
///
/// ```
/// use brewkit_calc::srm_to_hex;
/// assert_eq!(srm_to_hex(5.2), "#FFCA5A");
/// assert_eq!(srm_to_hex(80.0), "#241000");
/// ```
pub fn srm_to_hex(srm: f64) -> &'static str {
    PALETTE.iter().find(|(bound, _)| srm < *bound).map(|(_, hex)| *hex).unwrap_or(DARKEST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "#FFE699")]
    #[case(1.99, "#FFE699")]
    #[case(2.0, "#FFD878")]
    #[case(12.9, "#F8A600")]
    #[case(49.9, "#823000")]
    #[case(50.0, "#241000")]
    fn palette_bounds(#[case] srm: f64, #[case] expected: &str) {
        assert_eq!(srm_to_hex(srm), expected);
    }
}
