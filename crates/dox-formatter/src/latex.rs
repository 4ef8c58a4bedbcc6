//! LaTeX output.

use std::borrow::Cow;
use std::fmt::Write;

use dox_flags::FlagSet;

use crate::Formatter;
use crate::escape::escape_latex;
use crate::scan::{Scanner, Tag, Token};

/// Formatter producing LaTeX fragments.
///
/// Escaping leaves angle brackets alone, so
/// [`convert_formatting`](Formatter::convert_formatting) matches dialect
/// tags literally and transliterates lists and emphasis into LaTeX
/// environments and commands. `<p>`, `<pre>` and `<code>` have no
/// counterpart here and pass through as text.
///
/// Cross-references never contain underscores:
/// [`make_target`](Formatter::make_target) and
/// [`make_link`](Formatter::make_link) share one label sanitizer, so both
/// sides of a reference always agree. Anchors have no LaTeX counterpart;
/// links always resolve to the identifier's label as a whole.
pub struct LatexFormatter {
    scanner: Scanner,
}

impl LatexFormatter {
    const CONVERTED: [Tag; 5] = [Tag::Ul, Tag::Ol, Tag::Li, Tag::B, Tag::I];

    #[must_use]
    pub fn new() -> Self {
        Self {
            scanner: Scanner::literal(FlagSet::of(&Self::CONVERTED)),
        }
    }
}

impl Default for LatexFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite an identifier into a form valid inside `\label`/`\hyperref`.
fn label_name(identifier: &str) -> String {
    identifier.replace('_', "@")
}

fn open_syntax(tag: Tag) -> &'static str {
    match tag {
        Tag::Ul => "\\begin{itemize}\n",
        Tag::Ol => "\\begin{enumerate}\n",
        Tag::Li => "\\item ",
        Tag::B => "\\textbf{",
        Tag::I => "\\textit{",
        // Not in CONVERTED; the scanner never produces these
        Tag::P | Tag::Pre | Tag::Code => "",
    }
}

fn close_syntax(tag: Tag) -> &'static str {
    match tag {
        Tag::Ul => "\n\\end{itemize}",
        Tag::Ol => "\n\\end{enumerate}",
        Tag::B | Tag::I => "}",
        Tag::Li | Tag::P | Tag::Pre | Tag::Code => "",
    }
}

impl Formatter for LatexFormatter {
    fn format<'a>(&self, text: &'a str) -> Cow<'a, str> {
        escape_latex(text)
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
                Token::Open(tag) => out.push_str(open_syntax(tag)),
                Token::Close(tag) => out.push_str(close_syntax(tag)),
                Token::Code(code) => write!(out, "\\texttt{{{code}}}").unwrap(),
                Token::Url(url) => write!(out, "\\url{{{url}}}").unwrap(),
            }
        }
        *text = out;
    }

    fn make_link(&self, identifier: &str, _anchor: Option<&str>, title: &str) -> String {
        format!("\\hyperref[{}]{{{title}}}", label_name(identifier))
    }

    fn make_heading(&self, level: u8, text: &str) -> String {
        let command = match level {
            1 => "section",
            2 => "subsection",
            _ => "subsubsection",
        };
        format!("\\{command}{{{}}}", self.format(text))
    }

    fn make_target(&self, prefix: &str, identifier: &str) -> String {
        format!("{prefix}@{}", label_name(identifier))
    }

    fn make_list(&self, items: &[String]) -> String {
        let mut out = String::from("\\begin{itemize}\n");
        for item in items {
            writeln!(out, "\\item {item}").unwrap();
        }
        out.push_str("\\end{itemize}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(text: &str) -> String {
        LatexFormatter::new().render(text)
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            render("<ul><li>foo</li><li>bar</li></ul>"),
            "\\begin{itemize}\n\\item foo\\item bar\n\\end{itemize}"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            render("<ol><li>first</li></ol>"),
            "\\begin{enumerate}\n\\item first\n\\end{enumerate}"
        );
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(render("<b>strong</b>"), "\\textbf{strong}");
        assert_eq!(render("<i>slanted</i>"), "\\textit{slanted}");
    }

    #[test]
    fn test_code_span() {
        assert_eq!(render("run `make` now"), "run \\texttt{make} now");
    }

    #[test]
    fn test_url() {
        assert_eq!(
            render("see https://example.com please"),
            "see \\url{https://example.com} please"
        );
    }

    #[test]
    fn test_special_characters_are_escaped() {
        assert_eq!(render("100% of $5"), "100\\% of \\$5");
        assert_eq!(render("foo_bar"), "foo\\_bar");
    }

    #[test]
    fn test_code_tag_passes_through() {
        // `<code>` has no LaTeX transliteration; only backtick spans do
        assert_eq!(render("<code>x</code>"), "<code>x</code>");
    }

    #[test]
    fn test_paragraph_tags_pass_through() {
        assert_eq!(render("<p>a</p>"), "<p>a</p>");
        assert_eq!(render("<pre>a</pre>"), "<pre>a</pre>");
    }

    #[test]
    fn test_make_heading_levels() {
        let latex = LatexFormatter::new();
        assert_eq!(latex.make_heading(1, "Top"), "\\section{Top}");
        assert_eq!(latex.make_heading(2, "Mid"), "\\subsection{Mid}");
        assert_eq!(latex.make_heading(3, "Deep"), "\\subsubsection{Deep}");
    }

    #[test]
    fn test_make_heading_falls_back_to_deepest_level() {
        let latex = LatexFormatter::new();
        assert_eq!(latex.make_heading(5, "Deep"), "\\subsubsection{Deep}");
        assert_eq!(latex.make_heading(0, "Odd"), "\\subsubsection{Odd}");
    }

    #[test]
    fn test_make_heading_escapes_text() {
        assert_eq!(
            LatexFormatter::new().make_heading(1, "debug_mode"),
            "\\section{debug\\_mode}"
        );
    }

    #[test]
    fn test_make_target_replaces_underscores() {
        assert_eq!(
            LatexFormatter::new().make_target("table", "foo_bar"),
            "table@foo@bar"
        );
    }

    #[test]
    fn test_make_link_agrees_with_make_target() {
        let latex = LatexFormatter::new();
        let target = latex.make_target("table", "foo_bar");
        let link = latex.make_link("table_foo_bar", None, "foo_bar");
        assert_eq!(link, format!("\\hyperref[{target}]{{foo_bar}}"));
    }

    #[test]
    fn test_make_list_wraps_items_in_itemize() {
        let items = vec!["first".to_owned(), "second".to_owned()];
        assert_eq!(
            LatexFormatter::new().make_list(&items),
            "\\begin{itemize}\n\\item first\n\\item second\n\\end{itemize}\n"
        );
    }
}
