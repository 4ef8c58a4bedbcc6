//! Single-pass token scanner for the markup dialect.
//!
//! Both converting formatters walk their input exactly once, left to right,
//! splitting it into literal runs and markup tokens. Each token is rendered
//! exactly once by the formatter, so there are no ordering dependencies
//! between rewrites and no way for one rewrite to re-trigger another.

use std::sync::LazyLock;

use dox_flags::{Flag, FlagSet};
use regex::{Captures, Regex};

/// A tag in the markup dialect.
///
/// This is the full tag vocabulary recognized in input text. Which tags a
/// formatter actually converts is decided per formatter through a
/// [`FlagSet`]; the rest pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    P,
    Pre,
    Ol,
    Ul,
    Li,
    B,
    I,
    Code,
}

impl Tag {
    pub(crate) const ALL: [Tag; 8] = [
        Tag::P,
        Tag::Pre,
        Tag::Ol,
        Tag::Ul,
        Tag::Li,
        Tag::B,
        Tag::I,
        Tag::Code,
    ];

    /// Tag name as it appears in markup, without brackets.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Tag::P => "p",
            Tag::Pre => "pre",
            Tag::Ol => "ol",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::B => "b",
            Tag::I => "i",
            Tag::Code => "code",
        }
    }

    fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.iter().copied().find(|tag| tag.name() == name)
    }
}

impl Flag for Tag {
    fn bit(self) -> u32 {
        self as u32
    }
}

/// One classified region of input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// Text with no recognized markup, emitted verbatim.
    Literal(&'t str),
    /// Opening dialect tag accepted by the scanner's tag set.
    Open(Tag),
    /// Closing dialect tag accepted by the scanner's tag set.
    Close(Tag),
    /// Contents of an inline code span, without the backticks.
    Code(&'t str),
    /// Bare `http://` or `https://` URL.
    Url(&'t str),
}

/// Tag alternation written once so both patterns stay in sync; longer names
/// come before their prefixes.
fn markup_pattern(tag_open: &str, tag_close: &str) -> Regex {
    let names = "pre|p|code|ol|ul|li|b|i";
    Regex::new(&format!(
        r"{tag_open}(?P<close>/)?(?P<tag>{names}){tag_close}|`(?P<code>[^`]+)`|(?P<url>https?://\S+)"
    ))
    .expect("invalid markup pattern")
}

/// Matches dialect markup in entity-escaped text, where every tag has
/// become `&lt;name&gt;`.
static ESCAPED: LazyLock<Regex> = LazyLock::new(|| markup_pattern("&lt;", "&gt;"));

/// Matches dialect markup written literally as `<name>`.
static LITERAL: LazyLock<Regex> = LazyLock::new(|| markup_pattern("<", ">"));

/// Splits text into [`Token`]s for one formatter.
///
/// The scanner recognizes the whole dialect but only classifies tags in its
/// tag set as [`Token::Open`]/[`Token::Close`]; all other matches come back
/// as [`Token::Literal`] slices of the input.
pub(crate) struct Scanner {
    pattern: &'static Regex,
    tags: FlagSet<Tag>,
}

impl Scanner {
    /// Scanner over entity-escaped text (`&lt;b&gt;`).
    pub(crate) fn escaped(tags: FlagSet<Tag>) -> Self {
        Self {
            pattern: &ESCAPED,
            tags,
        }
    }

    /// Scanner over literal tag text (`<b>`).
    pub(crate) fn literal(tags: FlagSet<Tag>) -> Self {
        Self {
            pattern: &LITERAL,
            tags,
        }
    }

    /// Split `text` into literal runs and markup tokens, left to right.
    ///
    /// Concatenating the tokens' source regions reproduces `text` exactly.
    /// Input without any markup, including the empty string, yields a
    /// single literal spanning the whole input.
    pub(crate) fn scan<'t>(&self, text: &'t str) -> Vec<Token<'t>> {
        let mut tokens = Vec::new();
        let mut last = 0;
        for caps in self.pattern.captures_iter(text) {
            let Some(matched) = caps.get(0) else { continue };
            if matched.start() > last {
                tokens.push(Token::Literal(&text[last..matched.start()]));
            }
            tokens.push(self.classify(&caps, matched.as_str()));
            last = matched.end();
        }
        if last < text.len() || tokens.is_empty() {
            tokens.push(Token::Literal(&text[last..]));
        }
        tokens
    }

    fn classify<'t>(&self, caps: &Captures<'t>, matched: &'t str) -> Token<'t> {
        if let Some(name) = caps.name("tag") {
            let Some(tag) = Tag::from_name(name.as_str()) else {
                return Token::Literal(matched);
            };
            if !self.tags.contains(tag) {
                return Token::Literal(matched);
            }
            if caps.name("close").is_some() {
                return Token::Close(tag);
            }
            return Token::Open(tag);
        }
        if let Some(code) = caps.name("code") {
            return Token::Code(code.as_str());
        }
        if let Some(url) = caps.name("url") {
            return Token::Url(url.as_str());
        }
        Token::Literal(matched)
    }
}
