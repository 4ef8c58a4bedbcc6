//! HTML page sink.

use std::fmt::Write as _;
use std::path::PathBuf;

use dox_formatter::escape_html;

use crate::sink::{PageError, PageSink, validate_name};

/// Writes each page as a standalone HTML document under an output directory.
///
/// Page names map to `<name>.html`, the same targets the HTML formatter's
/// links point at. The output directory is created on first write.
#[derive(Debug)]
pub struct HtmlPageSink {
    out_dir: PathBuf,
}

impl HtmlPageSink {
    /// Create a sink writing into `out_dir`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

impl PageSink for HtmlPageSink {
    fn write_page(&self, name: &str, title: &str, body: &str) -> Result<(), PageError> {
        validate_name(name)?;
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(format!("{name}.html"));
        tracing::debug!(path = %path.display(), "Writing HTML page");
        std::fs::write(&path, html_document(title, body))?;
        Ok(())
    }
}

/// Wrap a rendered body in a minimal standalone HTML document.
///
/// The title is escaped here, so callers pass it raw. The body is taken
/// verbatim and is expected to already be valid HTML.
#[must_use]
pub fn html_document(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 256);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    writeln!(html, "<title>{}</title>", escape_html(title)).unwrap();
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}
