use crate::consts;
use roxmltree::Node;

/// Returns `true` when `node` is an element named `tag`, ignoring case.
pub(crate) fn is_tag(node: &Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().name().eq_ignore_ascii_case(tag)
}

/// Reads the leading number of `text`, the way a lenient float parser would.
pub(crate) fn leading_number(text: &str) -> Option<f64> {
    let found = consts::LEADING_NUMBER.find(text.trim_start())?;
    found.as_str().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Text accessor over the direct children of a BeerXML element.
///
/// Missing text reads as an empty string and missing numbers as zero, so
/// the parsers only ever deal with defaults, never absent nodes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a, 'input> {
    node: Node<'a, 'input>,
}
impl<'a, 'input> Fields<'a, 'input> {
    pub(crate) fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    pub(crate) fn child(&self, tag: &str) -> Option<Node<'a, 'input>> {
        self.node.children().find(|child| is_tag(child, tag))
    }

    pub(crate) fn has(&self, tag: &str) -> bool {
        self.child(tag).is_some()
    }

    /// Trimmed text content of the child, or an empty string.
    pub(crate) fn text(&self, tag: &str) -> String {
        let Some(child) = self.child(tag) else {
            return String::new();
        };
        child
            .descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Text content of the child, or `None` when it is missing or blank.
    pub(crate) fn optional_text(&self, tag: &str) -> Option<String> {
        Some(self.text(tag)).filter(|text| !text.is_empty())
    }

    /// Numeric content of the child, or `None` when the child is missing.
    /// A present child without a leading number reads as zero.
    pub(crate) fn optional_number(&self, tag: &str) -> Option<f64> {
        self.has(tag).then(|| leading_number(&self.text(tag)).unwrap_or(0.0))
    }

    pub(crate) fn number(&self, tag: &str) -> f64 {
        self.optional_number(tag).unwrap_or(0.0)
    }

    /// BeerXML booleans are spelled `TRUE`/`FALSE` in any case.
    pub(crate) fn flag(&self, tag: &str) -> Option<bool> {
        match self.text(tag).to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;
    use rstest::rstest;

    #[rstest]
    #[case("5.2", Some(5.2))]
    #[case("5.2 %", Some(5.2))]
    #[case("  60 min", Some(60.0))]
    #[case("-1.5", Some(-1.5))]
    #[case(".5", Some(0.5))]
    #[case("1e3", Some(1000.0))]
    #[case("abc", None)]
    #[case("", None)]
    fn leading_numbers(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(leading_number(input), expected);
    }

    #[test]
    fn reads_direct_children_only() {
        let xml = "<HOP><NAME> Cascade </NAME><alpha>5.5</alpha><INNER><TIME>60</TIME></INNER><USE/></HOP>";
        let document = Document::parse(xml).unwrap();
        let fields = Fields::new(document.root_element());
        assert_eq!(fields.text("NAME"), "Cascade");
        assert_eq!(fields.number("ALPHA"), 5.5);
        assert!(!fields.has("TIME"));
        assert_eq!(fields.number("TIME"), 0.0);
        assert_eq!(fields.optional_number("USE"), Some(0.0));
        assert_eq!(fields.optional_text("USE"), None);
        assert_eq!(fields.optional_number("FORM"), None);
    }

    #[test]
    fn reads_flags() {
        let document = Document::parse("<MISC><A>TRUE</A><B>false</B><C>maybe</C></MISC>").unwrap();
        let fields = Fields::new(document.root_element());
        assert_eq!(fields.flag("A"), Some(true));
        assert_eq!(fields.flag("B"), Some(false));
        assert_eq!(fields.flag("C"), None);
        assert_eq!(fields.flag("D"), None);
    }
}
