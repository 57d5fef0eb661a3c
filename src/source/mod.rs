//! Page source interfaces.
//!
//! The engine never extracts text from document formats itself: a
//! `PageSource` hands it the ordered page texts of a document by id.

use std::collections::HashMap;

use crate::errors::SuggestError;
use crate::types::{DocumentId, PageText};

/// Filesystem-backed page source over plain-text document dumps.
pub mod text_directory;

pub use text_directory::TextDirectoryPages;

/// Supplies the ordered page texts of reference documents.
///
/// For a fixed input snapshot, `pages` must return the same pages in the same
/// order on every call.
pub trait PageSource {
    /// Ordered page texts of `document`, or `DocumentUnavailable` when it cannot be read.
    fn pages(&self, document: &str) -> Result<Vec<PageText>, SuggestError>;
}

/// In-memory page source, mainly for tests and embedding callers.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPages {
    documents: HashMap<DocumentId, Vec<PageText>>,
}

impl InMemoryPages {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a document with its pages.
    pub fn with_document<I, P>(mut self, document: impl Into<DocumentId>, pages: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PageText>,
    {
        self.insert(document, pages);
        self
    }

    /// Add (or replace) a document with its pages.
    pub fn insert<I, P>(&mut self, document: impl Into<DocumentId>, pages: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PageText>,
    {
        self.documents
            .insert(document.into(), pages.into_iter().map(Into::into).collect());
    }
}

impl PageSource for InMemoryPages {
    fn pages(&self, document: &str) -> Result<Vec<PageText>, SuggestError> {
        self.documents
            .get(document)
            .cloned()
            .ok_or_else(|| SuggestError::DocumentUnavailable {
                document: document.to_string(),
                reason: "not present in memory".to_string(),
            })
    }
}
