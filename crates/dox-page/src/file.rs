//! Plain file page sink.

use std::path::PathBuf;

use crate::sink::{PageError, PageSink, validate_name};

/// Writes page bodies verbatim as `<name>.<extension>` files.
///
/// Used for the LaTeX and plain text targets, where the rendered body is
/// already the complete file content. The title is carried by the body, so
/// the sink ignores it.
#[derive(Debug)]
pub struct FilePageSink {
    out_dir: PathBuf,
    extension: String,
}

impl FilePageSink {
    /// Create a sink writing `<name>.<extension>` files into `out_dir`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            extension: extension.into(),
        }
    }
}

impl PageSink for FilePageSink {
    fn write_page(&self, name: &str, _title: &str, body: &str) -> Result<(), PageError> {
        validate_name(name)?;
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(format!("{name}.{}", self.extension));
        tracing::debug!(path = %path.display(), "Writing page");
        std::fs::write(&path, body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_page_stores_body_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FilePageSink::new(dir.path(), "tex");

        sink.write_page("schema", "Schema", "\\section{Schema}\ncontent")
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("schema.tex")).unwrap();
        assert_eq!(written, "\\section{Schema}\ncontent");
    }

    #[test]
    fn test_write_page_uses_configured_extension() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FilePageSink::new(dir.path(), "txt");

        sink.write_page("notes", "Notes", "plain body").unwrap();

        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_write_page_rejects_parent_dir_name() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FilePageSink::new(dir.path(), "txt");

        let err = sink.write_page("..", "t", "body").unwrap_err();
        assert!(matches!(err, PageError::InvalidName(_)));
    }
}
