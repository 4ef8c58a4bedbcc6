//! HTML output.

use std::borrow::Cow;
use std::fmt::Write;

use dox_flags::FlagSet;

use crate::Formatter;
use crate::escape::escape_html;
use crate::scan::{Scanner, Tag, Token};

/// Formatter producing HTML fragments.
///
/// [`format`](Formatter::format) entity-escapes the whole input, turning
/// every tag inert. [`convert_formatting`](Formatter::convert_formatting)
/// then restores the tags in [`RESTORED`](Self::RESTORED) to live markup
/// and converts code spans and URLs. Everything else stays escaped, so
/// input can never smuggle live markup through the pipeline.
pub struct HtmlFormatter {
    scanner: Scanner,
}

impl HtmlFormatter {
    /// Dialect tags restored to live markup after escaping.
    pub const RESTORED: [&'static str; 6] = ["ol", "ul", "li", "b", "i", "code"];

    const RESTORED_TAGS: [Tag; 6] = [Tag::Ol, Tag::Ul, Tag::Li, Tag::B, Tag::I, Tag::Code];

    #[must_use]
    pub fn new() -> Self {
        Self {
            scanner: Scanner::escaped(FlagSet::of(&Self::RESTORED_TAGS)),
        }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for HtmlFormatter {
    fn format<'a>(&self, text: &'a str) -> Cow<'a, str> {
        escape_html(text)
    }

    fn convert_formatting(&self, text: &mut String) {
        let tokens = self.scanner.scan(text);
        if let [Token::Literal(_)] = tokens[..] {
            return;
        }

        let mut out = String::with_capacity(text.len());
        for token in tokens {
            match token {
                Token::Literal(chunk) => out.push_str(chunk),
                Token::Open(tag) => write!(out, "<{}>", tag.name()).unwrap(),
                Token::Close(tag) => write!(out, "</{}>", tag.name()).unwrap(),
                Token::Code(code) => write!(out, "<code>{code}</code>").unwrap(),
                Token::Url(url) => write!(out, r#"<a href="{url}">{url}</a>"#).unwrap(),
            }
        }
        *text = out;
    }

    fn make_link(&self, identifier: &str, anchor: Option<&str>, title: &str) -> String {
        match anchor {
            Some(anchor) => format!(r#"<a href="{identifier}.html#{anchor}">{title}</a>"#),
            None => format!(r#"<a href="{identifier}.html">{title}</a>"#),
        }
    }

    fn make_heading(&self, level: u8, text: &str) -> String {
        format!("\n<h{level}>{}</h{level}>\n", self.format(text))
    }

    fn make_list(&self, items: &[String]) -> String {
        let mut out = String::from("<ul>\n");
        for item in items {
            writeln!(out, "<li>{item}</li>").unwrap();
        }
        out.push_str("</ul>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(text: &str) -> String {
        HtmlFormatter::new().render(text)
    }

    #[test]
    fn test_restored_tags_round_trip() {
        for name in HtmlFormatter::RESTORED {
            let text = format!("<{name}>x</{name}>");
            assert_eq!(render(&text), text);
        }
    }

    #[test]
    fn test_restored_names_match_tag_set() {
        let names: Vec<_> = HtmlFormatter::RESTORED_TAGS
            .iter()
            .map(|tag| tag.name())
            .collect();
        assert_eq!(names, HtmlFormatter::RESTORED);
    }

    #[test]
    fn test_script_tag_stays_escaped() {
        assert_eq!(
            render("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_paragraph_tags_stay_escaped() {
        // `p` and `pre` are dialect tags, but not restored in HTML
        assert_eq!(render("<p>a</p>"), "&lt;p&gt;a&lt;/p&gt;");
        assert_eq!(render("<pre>a</pre>"), "&lt;pre&gt;a&lt;/pre&gt;");
    }

    #[test]
    fn test_code_span() {
        assert_eq!(render("run `make` now"), "run <code>make</code> now");
    }

    #[test]
    fn test_code_span_contents_stay_escaped() {
        assert_eq!(render("`a < b`"), "<code>a &lt; b</code>");
    }

    #[test]
    fn test_autolink() {
        assert_eq!(
            render("see http://example.com please"),
            r#"see <a href="http://example.com">http://example.com</a> please"#
        );
    }

    #[test]
    fn test_unbalanced_backtick_passes_through() {
        assert_eq!(render("a ` b"), "a ` b");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(render("nothing to see here"), "nothing to see here");
    }

    #[test]
    fn test_make_link_without_anchor() {
        assert_eq!(
            HtmlFormatter::new().make_link("class_User", None, "User"),
            r#"<a href="class_User.html">User</a>"#
        );
    }

    #[test]
    fn test_make_link_with_anchor() {
        assert_eq!(
            HtmlFormatter::new().make_link("class_User", Some("save"), "User::save"),
            r#"<a href="class_User.html#save">User::save</a>"#
        );
    }

    #[test]
    fn test_make_heading_uses_exact_level() {
        assert_eq!(
            HtmlFormatter::new().make_heading(1, "Title"),
            "\n<h1>Title</h1>\n"
        );
        assert_eq!(
            HtmlFormatter::new().make_heading(5, "Deep"),
            "\n<h5>Deep</h5>\n"
        );
    }

    #[test]
    fn test_make_heading_escapes_text() {
        assert_eq!(
            HtmlFormatter::new().make_heading(2, "a < b"),
            "\n<h2>a &lt; b</h2>\n"
        );
    }

    #[test]
    fn test_make_target_is_plain_concatenation() {
        assert_eq!(
            HtmlFormatter::new().make_target("table_", "users"),
            "table_users"
        );
    }

    #[test]
    fn test_make_list_wraps_items_in_ul() {
        let html = HtmlFormatter::new();
        let items = vec![
            html.make_link("a", None, "A"),
            html.make_link("b", None, "B"),
        ];
        assert_eq!(
            html.make_list(&items),
            "<ul>\n<li><a href=\"a.html\">A</a></li>\n<li><a href=\"b.html\">B</a></li>\n</ul>\n"
        );
    }
}
