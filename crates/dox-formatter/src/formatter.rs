//! The formatting contract shared by all output targets.

use std::borrow::Cow;

/// Converts documentation markup into one concrete output format.
///
/// Implementations are stateless and shared per output mode; every method
/// takes `&self` and the same instance may be used from any number of
/// threads at once.
///
/// Body text goes through a fixed two-phase pipeline:
/// [`format`](Self::format) escapes everything that is syntactically live
/// in the target, then [`convert_formatting`](Self::convert_formatting)
/// rewrites the recognized markup subset into target syntax.
/// [`render`](Self::render) runs both phases in the only supported order.
/// Structural elements (links, headings, cross-reference targets) are
/// produced by their dedicated constructors and never go through the body
/// pipeline.
pub trait Formatter: Send + Sync {
    /// Escape characters that are syntactically significant in the target
    /// format.
    ///
    /// Safe on arbitrary untrusted text: the result contains no live target
    /// syntax derived from the input. Returns the input borrowed when
    /// nothing needs escaping.
    fn format<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Rewrite recognized markup into target syntax, in place.
    ///
    /// Must run on text that already went through [`format`](Self::format),
    /// never before it; the escape phase neutralizes all markup so this
    /// phase can re-enable only the recognized subset.
    fn convert_formatting(&self, text: &mut String);

    /// Build a link to the entity named `identifier`, displaying `title`.
    ///
    /// `anchor` scopes the link to a position within the target; `None`
    /// links to the target as a whole.
    fn make_link(&self, identifier: &str, anchor: Option<&str>, title: &str) -> String;

    /// Wrap `text` as a heading of the given nesting level.
    ///
    /// `text` is passed through [`format`](Self::format) first, so heading
    /// titles are escaped consistently with body text.
    fn make_heading(&self, level: u8, text: &str) -> String;

    /// Build the cross-reference label that links to `identifier` resolve
    /// to.
    ///
    /// The default joins `prefix` and `identifier` unchanged. Targets whose
    /// label syntax forbids certain characters override this together with
    /// [`make_link`](Self::make_link), keeping both sides of a reference in
    /// agreement.
    fn make_target(&self, prefix: &str, identifier: &str) -> String {
        format!("{prefix}{identifier}")
    }

    /// Assemble already-rendered fragments into a bulleted list.
    ///
    /// Used for generated pages such as indexes, where the items (typically
    /// links from [`make_link`](Self::make_link)) are built outside the body
    /// pipeline. The default puts one item per line; targets with native
    /// list syntax override it.
    fn make_list(&self, items: &[String]) -> String {
        let mut out = String::new();
        for item in items {
            out.push_str(item);
            out.push('\n');
        }
        out
    }

    /// Escape and convert `text` in one step.
    fn render(&self, text: &str) -> String {
        let mut out = self.format(text).into_owned();
        self.convert_formatting(&mut out);
        out
    }
}
