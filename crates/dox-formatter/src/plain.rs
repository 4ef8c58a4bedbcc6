//! Undecorated text output.

use std::borrow::Cow;

use crate::Formatter;

/// Formatter that leaves text exactly as it is.
///
/// Plain text has no live syntax to escape and no markup representation to
/// restore, so both pipeline phases are identity operations. Links keep
/// only their display text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }

    fn convert_formatting(&self, _text: &mut String) {}

    fn make_link(&self, _identifier: &str, _anchor: Option<&str>, title: &str) -> String {
        title.to_owned()
    }

    fn make_heading(&self, _level: u8, text: &str) -> String {
        format!("\n{text}\n")
    }
}
