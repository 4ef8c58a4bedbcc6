//! Page generation for the dox documentation generator.
//!
//! This crate turns rendered markup into written documentation pages. The
//! [`PageSink`] trait abstracts where pages end up, which enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Target flexibility** (HTML trees, LaTeX inputs, plain text dumps)
//! - **Clean separation** between formatting and I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`PageSink`] trait with a single `write_page()` method
//! - [`HtmlPageSink`] wrapping each body in a standalone HTML document
//! - [`FilePageSink`] writing bodies verbatim with a caller-chosen extension
//! - [`MockPageSink`] for testing (behind `mock` feature flag)
//! - [`DocBuilder`] driving a formatter over a source directory and writing
//!   one page per source file plus an index
//!
//! # Example
//!
//! ```ignore
//! use dox_formatter::HtmlFormatter;
//! use dox_page::{BuildConfig, DocBuilder, HtmlPageSink};
//!
//! let html = HtmlFormatter::new();
//! let builder = DocBuilder::new(
//!     &html,
//!     BuildConfig {
//!         project_title: "My Project".to_owned(),
//!         source_dir: "docsrc".into(),
//!     },
//! );
//! let pages = builder.build(&HtmlPageSink::new("doc"))?;
//! ```

mod builder;
mod file;
mod html;
#[cfg(feature = "mock")]
mod mock;
mod sink;

pub use builder::{BuildConfig, BuildError, DocBuilder};
pub use file::FilePageSink;
pub use html::{HtmlPageSink, html_document};
#[cfg(feature = "mock")]
pub use mock::{MockPageSink, WrittenPage};
pub use sink::{PageError, PageSink};
