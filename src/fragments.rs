//! Turns reference document pages into searchable fragments.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::LexiconConfig;
use crate::constants::fragments::MIN_FRAGMENT_TERMS;
use crate::data::Fragment;
use crate::errors::SuggestError;
use crate::source::PageSource;
use crate::types::{DocumentId, PageText, Subject};
use crate::utils::{split_sentences, text_terms};

/// Fragments per subject, in document-group order.
pub type FragmentsBySubject = IndexMap<Subject, Vec<Fragment>>;

/// Segment the pages of one document and keep sentences with at least three terms.
pub fn fragments_from_pages(
    document: &str,
    pages: &[PageText],
    lexicon: &LexiconConfig,
) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    for page in pages {
        for sentence in split_sentences(page, lexicon) {
            let terms = text_terms(&sentence, lexicon);
            if terms.len() < MIN_FRAGMENT_TERMS {
                continue;
            }
            fragments.push(Fragment {
                text: sentence,
                source: document.to_string(),
                terms,
            });
        }
    }
    fragments
}

/// Mine every configured document, grouped by subject.
///
/// Order is subject, then document, then page, then sentence. If any
/// document of a subject cannot be read, that subject's fragment list is left
/// empty and a warning is logged; other subjects are unaffected.
pub fn extract_fragments<S>(
    groups: &IndexMap<Subject, Vec<DocumentId>>,
    source: &S,
    lexicon: &LexiconConfig,
) -> FragmentsBySubject
where
    S: PageSource + ?Sized,
{
    let mut out = FragmentsBySubject::new();
    for (subject, documents) in groups {
        let fragments = match subject_fragments(documents, source, lexicon) {
            Ok(fragments) => fragments,
            Err(err) => {
                warn!(
                    subject = %subject,
                    error = %err,
                    "reference document unavailable; subject gets no fragments"
                );
                Vec::new()
            }
        };
        out.insert(subject.clone(), fragments);
    }
    out
}

fn subject_fragments<S>(
    documents: &[DocumentId],
    source: &S,
    lexicon: &LexiconConfig,
) -> Result<Vec<Fragment>, SuggestError>
where
    S: PageSource + ?Sized,
{
    let mut fragments = Vec::new();
    for document in documents {
        let pages = source.pages(document)?;
        let mined = fragments_from_pages(document, &pages, lexicon);
        debug!(
            document = %document,
            pages = pages.len(),
            fragments = mined.len(),
            "document mined"
        );
        fragments.extend(mined);
    }
    Ok(fragments)
}
