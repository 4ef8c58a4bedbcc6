//! Formatter lookup by output mode.

use crate::{Formatter, HtmlFormatter, LatexFormatter, OutputMode, PlainFormatter};

/// Immutable mapping from [`OutputMode`] to its [`Formatter`].
///
/// Built once at startup and passed by reference wherever formatting
/// happens; there is no process-global state. Every mode always has a
/// formatter, and [`get`](Self::get) dispatches exhaustively. Tests can
/// swap in a double per mode with
/// [`with_formatter`](Self::with_formatter).
pub struct FormatterRegistry {
    plain: Box<dyn Formatter>,
    html: Box<dyn Formatter>,
    latex: Box<dyn Formatter>,
}

impl FormatterRegistry {
    /// Registry with the standard formatter for every mode.
    #[must_use]
    pub fn new() -> Self {
        Self {
            plain: Box::new(PlainFormatter),
            html: Box::new(HtmlFormatter::new()),
            latex: Box::new(LatexFormatter::new()),
        }
    }

    /// Replace the formatter used for one mode.
    #[must_use]
    pub fn with_formatter(mut self, mode: OutputMode, formatter: Box<dyn Formatter>) -> Self {
        match mode {
            OutputMode::Plain => self.plain = formatter,
            OutputMode::Html => self.html = formatter,
            OutputMode::Latex => self.latex = formatter,
        }
        self
    }

    /// The formatter for `mode`.
    #[must_use]
    pub fn get(&self, mode: OutputMode) -> &dyn Formatter {
        match mode {
            OutputMode::Plain => self.plain.as_ref(),
            OutputMode::Html => self.html.as_ref(),
            OutputMode::Latex => self.latex.as_ref(),
        }
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
