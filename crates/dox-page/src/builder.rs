//! End-to-end page generation.
//!
//! [`DocBuilder`] drives a formatter over a directory of markup sources and
//! writes one page per source file, plus an index page, through a
//! [`PageSink`].

use std::fs;
use std::path::PathBuf;

use dox_formatter::Formatter;

use crate::sink::{PageError, PageSink};

/// Configuration for a documentation build.
#[derive(Debug)]
pub struct BuildConfig {
    /// Title of the generated index page.
    pub project_title: String,
    /// Directory scanned for `.txt` markup sources.
    pub source_dir: PathBuf,
}

/// Error returned by [`DocBuilder::build`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Source directory missing or not a directory.
    #[error("source directory not found: {}", .0.display())]
    MissingSourceDir(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A page could not be written.
    #[error("{0}")]
    Page(#[from] PageError),
}

/// A markup source file found in the source directory.
struct SourceFile {
    name: String,
    path: PathBuf,
}

/// A rendered page ready to be written.
struct Page {
    name: String,
    title: String,
    body: String,
}

/// Builds documentation pages from a directory of markup sources.
///
/// One page is generated per `.txt` file, named after the file stem, plus
/// an `index` page linking every generated page. Sources are processed in
/// name order so the output is deterministic.
pub struct DocBuilder<'a> {
    formatter: &'a dyn Formatter,
    config: BuildConfig,
}

impl<'a> DocBuilder<'a> {
    /// Create a builder rendering through `formatter`.
    #[must_use]
    pub fn new(formatter: &'a dyn Formatter, config: BuildConfig) -> Self {
        Self { formatter, config }
    }

    /// Render every source file and write the pages through `sink`.
    ///
    /// Returns the number of pages written, including the index.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingSourceDir`] if the source directory does
    /// not exist, or the first read or sink failure encountered.
    pub fn build(&self, sink: &dyn PageSink) -> Result<usize, BuildError> {
        let sources = self.collect_sources()?;
        let mut entries = Vec::with_capacity(sources.len());
        for source in &sources {
            let page = self.build_page(source)?;
            sink.write_page(&page.name, &page.title, &page.body)?;
            entries.push((page.name, page.title));
        }

        let index = self.build_index(&entries);
        sink.write_page("index", &self.config.project_title, &index)?;

        Ok(entries.len() + 1)
    }

    /// Collect `.txt` sources from the source directory, sorted by name.
    ///
    /// Hidden files and subdirectories are skipped; pages are flat.
    fn collect_sources(&self) -> Result<Vec<SourceFile>, BuildError> {
        let dir = &self.config.source_dir;
        if !dir.is_dir() {
            return Err(BuildError::MissingSourceDir(dir.clone()));
        }

        let mut sources = Vec::new();
        for entry in fs::read_dir(dir)?.filter_map(Result::ok) {
            if !entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if !path.extension().is_some_and(|e| e == "txt") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            sources.push(SourceFile {
                name: name.to_owned(),
                path,
            });
        }
        sources.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(sources)
    }

    /// Render one source file into a page.
    ///
    /// The page name and title are both the file stem. The body is a
    /// level-1 heading followed by the rendered markup.
    fn build_page(&self, source: &SourceFile) -> Result<Page, BuildError> {
        tracing::debug!(path = %source.path.display(), "Rendering page");
        let text = fs::read_to_string(&source.path)?;

        let mut body = self.formatter.make_heading(1, &source.name);
        body.push('\n');
        body.push_str(&self.formatter.render(&text));

        Ok(Page {
            name: source.name.clone(),
            title: source.name.clone(),
            body,
        })
    }

    /// Render the index page linking every generated page.
    fn build_index(&self, entries: &[(String, String)]) -> String {
        let mut body = self.formatter.make_heading(1, &self.config.project_title);
        body.push('\n');

        let links: Vec<String> = entries
            .iter()
            .map(|(name, title)| {
                self.formatter
                    .make_link(name, None, &self.formatter.format(title))
            })
            .collect();
        body.push_str(&self.formatter.make_list(&links));
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dox_formatter::{HtmlFormatter, PlainFormatter};
    use pretty_assertions::assert_eq;

    use crate::{FilePageSink, MockPageSink};

    fn config(source_dir: &std::path::Path) -> BuildConfig {
        BuildConfig {
            project_title: "My Project".to_owned(),
            source_dir: source_dir.to_path_buf(),
        }
    }

    #[test]
    fn test_build_writes_one_page_per_source_plus_index() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("alpha.txt"), "first").unwrap();
        fs::write(src.join("beta.txt"), "second").unwrap();

        let builder = DocBuilder::new(&PlainFormatter, config(&src));
        let sink = FilePageSink::new(&out, "txt");
        let pages = builder.build(&sink).unwrap();

        assert_eq!(pages, 3);
        assert!(out.join("alpha.txt").exists());
        assert!(out.join("beta.txt").exists());
        assert!(out.join("index.txt").exists());
    }

    #[test]
    fn test_build_page_body_is_heading_then_rendered_markup() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("guide.txt"), "use <b>bold</b>").unwrap();

        let html = HtmlFormatter::new();
        let builder = DocBuilder::new(&html, config(&src));
        builder.build(&FilePageSink::new(&out, "html")).unwrap();

        let body = fs::read_to_string(out.join("guide.html")).unwrap();
        assert_eq!(body, "\n<h1>guide</h1>\n\nuse <b>bold</b>");
    }

    #[test]
    fn test_build_index_lists_pages_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        fs::create_dir(&src).unwrap();
        // Written out of order on purpose.
        fs::write(src.join("zeta.txt"), "z").unwrap();
        fs::write(src.join("alpha.txt"), "a").unwrap();

        let builder = DocBuilder::new(&PlainFormatter, config(&src));
        builder.build(&FilePageSink::new(&out, "txt")).unwrap();

        let index = fs::read_to_string(out.join("index.txt")).unwrap();
        assert_eq!(index, "\nMy Project\n\nalpha\nzeta\n");
    }

    #[test]
    fn test_build_index_uses_formatter_links() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("tables.txt"), "content").unwrap();

        let html = HtmlFormatter::new();
        let builder = DocBuilder::new(&html, config(&src));
        builder.build(&FilePageSink::new(&out, "html")).unwrap();

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("<h1>My Project</h1>"));
        assert!(index.contains("<ul>\n<li><a href=\"tables.html\">tables</a></li>\n</ul>\n"));
    }

    #[test]
    fn test_build_captures_pages_through_mock_sink() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("guide.txt"), "use `make`").unwrap();

        let html = HtmlFormatter::new();
        let builder = DocBuilder::new(&html, config(&src));
        let sink = MockPageSink::new();
        builder.build(&sink).unwrap();

        let page = sink.page("guide").unwrap();
        assert_eq!(page.title, "guide");
        assert_eq!(page.body, "\n<h1>guide</h1>\n\nuse <code>make</code>");

        let index = sink.page("index").unwrap();
        assert_eq!(index.title, "My Project");
        assert!(
            index
                .body
                .contains("<li><a href=\"guide.html\">guide</a></li>")
        );
    }

    #[test]
    fn test_build_skips_non_txt_and_hidden_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("real.txt"), "content").unwrap();
        fs::write(src.join("notes.md"), "ignored").unwrap();
        fs::write(src.join(".hidden.txt"), "ignored").unwrap();
        fs::create_dir(src.join("nested.txt")).unwrap();

        let builder = DocBuilder::new(&PlainFormatter, config(&src));
        let pages = builder.build(&FilePageSink::new(&out, "txt")).unwrap();

        assert_eq!(pages, 2);
        assert!(out.join("real.txt").exists());
        assert!(!out.join("notes.txt").exists());
    }

    #[test]
    fn test_build_empty_source_dir_writes_only_index() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        fs::create_dir(&src).unwrap();

        let builder = DocBuilder::new(&PlainFormatter, config(&src));
        let pages = builder.build(&FilePageSink::new(&out, "txt")).unwrap();

        assert_eq!(pages, 1);
        assert!(out.join("index.txt").exists());
    }

    #[test]
    fn test_build_missing_source_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("does-not-exist");

        let builder = DocBuilder::new(&PlainFormatter, config(&src));
        let sink = FilePageSink::new(dir.path(), "txt");

        let err = builder.build(&sink).unwrap_err();
        assert!(matches!(err, BuildError::MissingSourceDir(_)));
        assert!(err.to_string().contains("does-not-exist"));
    }
}
