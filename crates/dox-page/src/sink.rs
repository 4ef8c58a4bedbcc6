//! The [`PageSink`] trait and its error type.

/// Error writing a page through a [`PageSink`].
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Page name was empty or contained path components.
    #[error("invalid page name `{0}`")]
    InvalidName(String),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for rendered documentation pages.
///
/// A sink receives one call per page: the page's identifier, its
/// human-readable title, and the fully rendered body. How the three are
/// combined is up to the sink. The HTML sink wraps the body in a document
/// shell, the plain file sink writes it verbatim, and the mock sink records
/// it for inspection.
///
/// Implementations must be shareable across threads.
pub trait PageSink: Send + Sync {
    /// Write one rendered page.
    ///
    /// `name` is the page identifier the sink derives the output filename
    /// from. It must be a flat name: non-empty, no path separators, not
    /// `..`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidName`] if `name` is not a flat name, or
    /// [`PageError::Io`] if the underlying write fails.
    fn write_page(&self, name: &str, title: &str, body: &str) -> Result<(), PageError>;
}

/// Reject page names that are empty or could leave the output directory.
pub(crate) fn validate_name(name: &str) -> Result<(), PageError> {
    if name.is_empty() || name == ".." || name.contains(['/', '\\']) {
        return Err(PageError::InvalidName(name.to_owned()));
    }
    Ok(())
}
