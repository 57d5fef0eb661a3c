#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line entry points.
pub mod app;
/// Suggestion text composition.
pub mod composer;
/// Lexicon and run configuration types.
pub mod config;
/// Centralized constants used across extraction, matching, and propagation.
pub mod constants;
/// Goal, fragment, and suggestion record types.
pub mod data;
/// Fragment extraction from reference documents.
pub mod fragments;
/// Hierarchical vocabulary index.
pub mod index;
/// Goal catalogue loading and report persistence.
pub mod ingestion;
/// Fragment relevance scoring.
pub mod matcher;
/// Aggregate run metrics.
pub mod metrics;
/// End-to-end generation pipeline.
pub mod pipeline;
/// Vocabulary propagation across the classification hierarchy.
pub mod propagation;
/// Page source traits and built-in sources.
pub mod source;
/// Input transports used by sources (filesystem today).
pub mod transport;
/// Shared type aliases.
pub mod types;
/// Text normalization, term extraction, and sentence segmentation.
pub mod utils;
/// Child-vocabulary validation and parsing.
pub mod vocab;

mod errors;

pub use config::{LexiconConfig, SuggestConfig};
pub use data::{Fragment, Goal, ReportMeta, Suggestion, SuggestionReport};
pub use errors::SuggestError;
pub use fragments::{FragmentsBySubject, extract_fragments};
pub use index::{IndexLevel, VocabularyIndex};
pub use matcher::{FragmentMatch, best_fragments};
pub use pipeline::{GenerationOutput, generate};
pub use propagation::{VocabOrigin, related_vocab};
pub use source::{InMemoryPages, PageSource, TextDirectoryPages};
pub use types::{DocumentId, GoalId, Sentence, Subject, Term, VocabPhrase};
pub use vocab::{child_word_ok, parse_vocab_list};
