//! Target-specific character escaping.

use std::borrow::Cow;

/// Escape HTML-significant characters.
///
/// Rewrites `&`, `<`, `>`, `"` and `'` into entities. Every input character
/// is inspected exactly once, so text containing entities already is escaped
/// like any other text and `&` never double-escapes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(['&', '<', '>', '"', '\'']) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 8);
    escaped.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Escape LaTeX-special characters.
///
/// Handles `\`, `{`, `}`, `$`, `&`, `#`, `_`, `%`, `~` and `^` in a single
/// pass over the input. Angle brackets are left alone: the LaTeX converter
/// matches markup tags literally.
pub fn escape_latex(text: &str) -> Cow<'_, str> {
    const SPECIAL: [char; 10] = ['\\', '{', '}', '$', '&', '#', '_', '%', '~', '^'];

    let Some(first) = text.find(SPECIAL) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 16);
    escaped.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match ch {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            '$' => escaped.push_str("\\$"),
            '&' => escaped.push_str("\\&"),
            '#' => escaped.push_str("\\#"),
            '_' => escaped.push_str("\\_"),
            '%' => escaped.push_str("\\%"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
