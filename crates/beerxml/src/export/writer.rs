use std::fmt::Display;

/// Escapes the five characters XML reserves.
///
/// ```
/// assert_eq!(brewkit_beerxml::escape(r#"Bob's "IPA" & <Sons>"#), "Bob&apos;s &quot;IPA&quot; &amp; &lt;Sons&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Line-oriented XML writer, two spaces of indentation per level.
#[derive(Debug)]
pub(crate) struct XmlWriter {
    lines: Vec<String>,
    depth: usize,
}
impl XmlWriter {
    pub(crate) fn new() -> Self {
        Self {
            lines: vec![r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string()],
            depth: 0,
        }
    }

    fn line(&mut self, content: impl Display) {
        self.lines.push(format!("{}{content}", "  ".repeat(self.depth)));
    }

    pub(crate) fn open(&mut self, tag: &str) {
        self.line(format_args!("<{tag}>"));
        self.depth += 1;
    }

    pub(crate) fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(format_args!("</{tag}>"));
    }

    /// Writes an escaped text element.
    pub(crate) fn text(&mut self, tag: &str, value: &str) {
        self.line(format_args!("<{tag}>{}</{tag}>", escape(value)));
    }

    /// Writes a numeric (or otherwise markup-free) element.
    pub(crate) fn value(&mut self, tag: &str, value: impl Display) {
        self.line(format_args!("<{tag}>{value}</{tag}>"));
    }

    /// Writes a numeric element. NaN and infinities are written as 0.
    pub(crate) fn number(&mut self, tag: &str, value: f64) {
        let value = if value.is_finite() { value } else { 0.0 };
        self.value(tag, value);
    }

    pub(crate) fn finish(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pale Ale", "Pale Ale")]
    #[case("a < b > c", "a &lt; b &gt; c")]
    #[case("&amp;", "&amp;amp;")]
    #[case("", "")]
    fn escapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape(input), expected);
    }

    #[test]
    fn indents_nested_elements() {
        let mut writer = XmlWriter::new();
        writer.open("HOPS");
        writer.open("HOP");
        writer.text("NAME", "Citra & Mosaic");
        writer.number("ALPHA", 12.5);
        writer.close("HOP");
        writer.close("HOPS");
        let xml = writer.finish();
        let lines: Vec<_> = xml.lines().collect();
        assert_eq!(lines[1], "<HOPS>");
        assert_eq!(lines[3], "    <NAME>Citra &amp; Mosaic</NAME>");
        assert_eq!(lines[4], "    <ALPHA>12.5</ALPHA>");
        assert_eq!(lines[6], "</HOPS>");
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn non_finite_numbers_are_written_as_zero(#[case] value: f64) {
        let mut writer = XmlWriter::new();
        writer.number("AMOUNT", value);
        assert_eq!(writer.finish().lines().nth(1), Some("<AMOUNT>0</AMOUNT>"));
    }
}
