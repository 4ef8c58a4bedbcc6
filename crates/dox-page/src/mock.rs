//! Mock page sink for testing.
//!
//! Provides [`MockPageSink`] for unit testing without filesystem access.

use std::sync::RwLock;

use crate::sink::{PageError, PageSink, validate_name};

/// A page captured by [`MockPageSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPage {
    /// Page identifier passed to `write_page`.
    pub name: String,
    /// Page title passed to `write_page`.
    pub title: String,
    /// Rendered body passed to `write_page`.
    pub body: String,
}

/// Mock sink that records every written page in memory.
///
/// Use it in tests that need to assert on generated pages without
/// touching the filesystem.
///
/// # Example
///
/// ```ignore
/// use dox_page::{MockPageSink, PageSink};
///
/// let sink = MockPageSink::new();
/// sink.write_page("index", "Home", "<p>hi</p>").unwrap();
///
/// assert_eq!(sink.pages().len(), 1);
/// assert_eq!(sink.page("index").unwrap().title, "Home");
/// ```
#[derive(Debug, Default)]
pub struct MockPageSink {
    pages: RwLock<Vec<WrittenPage>>,
}

impl MockPageSink {
    /// Create a new empty mock sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All pages written so far, in write order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn pages(&self) -> Vec<WrittenPage> {
        self.pages.read().unwrap().clone()
    }

    /// The recorded page with the given name, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn page(&self, name: &str) -> Option<WrittenPage> {
        self.pages
            .read()
            .unwrap()
            .iter()
            .find(|p| p.name == name)
            .cloned()
    }
}

impl PageSink for MockPageSink {
    fn write_page(&self, name: &str, title: &str, body: &str) -> Result<(), PageError> {
        validate_name(name)?;
        self.pages.write().unwrap().push(WrittenPage {
            name: name.to_owned(),
            title: title.to_owned(),
            body: body.to_owned(),
        });
        Ok(())
    }
}
