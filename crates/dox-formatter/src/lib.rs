//! Markup formatting with pluggable output targets.
//!
//! Documentation text arrives in a small markup dialect: the tags `<p>`,
//! `<pre>`, `<ul>`, `<ol>`, `<li>`, `<b>`, `<i>` and `<code>`, inline code
//! between backticks, and bare `http://`/`https://` URLs. This crate turns
//! such text into one of three output formats. Each target implements the
//! [`Formatter`] trait and is looked up through a [`FormatterRegistry`]:
//!
//! - [`PlainFormatter`]: undecorated text
//! - [`HtmlFormatter`]: HTML fragments
//! - [`LatexFormatter`]: LaTeX fragments
//!
//! Body text goes through a strict two-phase pipeline. [`Formatter::format`]
//! escapes everything that is live syntax in the target, then
//! [`Formatter::convert_formatting`] re-enables only the recognized markup.
//! Tags outside the dialect therefore come out inert, no matter what the
//! input contains.
//!
//! # Example
//!
//! ```
//! use dox_formatter::{FormatterRegistry, OutputMode};
//!
//! let registry = FormatterRegistry::new();
//! let html = registry.get(OutputMode::Html);
//! assert_eq!(
//!     html.render("use `find` on <b>any</b> list"),
//!     "use <code>find</code> on <b>any</b> list"
//! );
//! ```

mod escape;
mod formatter;
mod html;
mod latex;
mod mode;
mod plain;
mod registry;
mod scan;

pub use escape::{escape_html, escape_latex};
pub use formatter::Formatter;
pub use html::HtmlFormatter;
pub use latex::LatexFormatter;
pub use mode::{OutputMode, ParseModeError};
pub use plain::PlainFormatter;
pub use registry::FormatterRegistry;
