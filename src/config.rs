use std::collections::HashSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::matcher::DEFAULT_FRAGMENTS_PER_GOAL;
use crate::errors::SuggestError;
use crate::types::{DocumentId, Subject};

const DEFAULT_STOPWORDS: &[&str] = &[
    "de",
    "het",
    "een",
    "en",
    "of",
    "in",
    "op",
    "te",
    "met",
    "van",
    "voor",
    "door",
    "bij",
    "aan",
    "als",
    "dat",
    "die",
    "dit",
    "deze",
    "zijn",
    "haar",
    "hun",
    "kan",
    "kunnen",
    "wordt",
    "worden",
    "ook",
    "nog",
    "niet",
    "wel",
    "dan",
    "naar",
    "uit",
    "onder",
    "tussen",
    "rond",
    "hier",
    "nu",
    "leerling",
    "leerlingen",
    "discipline",
    "doel",
    "doelen",
    "fase",
];

const DEFAULT_NOISY_PATTERNS: &[&str] = &[
    "katholiek onderwijs vlaanderen",
    "projectteam nieuw leerplan",
    "2026-01-30",
    "inhoud",
    "inhoudsopgave",
    "bijlage",
    "visietekst",
];

const DEFAULT_ABSTRACT_SUFFIXES: &[&str] = &["heid", "atie", "ering", "isme", "schap", "lijk"];

const DEFAULT_JARGON: &[&str] = &[
    "modeling",
    "transfer",
    "expliciet",
    "didactisch",
    "concepten",
    "ondersteuning",
];

const DEFAULT_INDICATORS: &[&str] = &["leer", "didact", "ondersteun"];

const DEFAULT_BASED_ON: &[&str] = &["data/goals.json", "Visieteksten en bijlagen (PDF)"];

const DEFAULT_DOCUMENT_GROUPS: &[(&str, &[&str])] = &[
    (
        "Nederlands en communicatie",
        &[
            "Opstap_visie-Ned_com.pdf",
            "Ned_com_Bijlage_1 (1).pdf",
            "Ned_com_Bijlage_2.pdf",
        ],
    ),
    (
        "Wetenschap en techniek",
        &[
            "Opstap_visie-W_T.pdf",
            "W_T_Bijlage_1.pdf",
            "W_T_Bijlage_2.pdf",
            "W_T_Bijlage_3.pdf",
        ],
    ),
    (
        "Wiskunde",
        &[
            "Opstap_visie-wiskunde.pdf",
            "Wiskunde_Bijlage_1.pdf",
            "Wiskunde_Bijlage_2.pdf",
        ],
    ),
];

fn owned_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|word| word.to_string()).collect()
}

fn owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// Word lists consulted by the lexical predicates.
///
/// Every predicate in the crate receives a `&LexiconConfig` instead of reading
/// process-wide lists, so tests can exercise each rule with a tailored lexicon.
/// All entries are expected in lowercase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Function words (and overly generic domain words) never used as terms or vocabulary.
    pub stopwords: HashSet<String>,
    /// Substrings marking boilerplate sentences (headers, tables of contents, date stamps).
    pub noisy_patterns: Vec<String>,
    /// Suffixes of abstract nouns considered too advanced for child vocabulary.
    pub abstract_suffixes: Vec<String>,
    /// Pedagogical jargon rejected as child vocabulary.
    pub jargon: HashSet<String>,
    /// Substrings that mark a fragment as pedagogically relevant.
    pub pedagogical_indicators: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            stopwords: owned_set(DEFAULT_STOPWORDS),
            noisy_patterns: owned_list(DEFAULT_NOISY_PATTERNS),
            abstract_suffixes: owned_list(DEFAULT_ABSTRACT_SUFFIXES),
            jargon: owned_set(DEFAULT_JARGON),
            pedagogical_indicators: owned_list(DEFAULT_INDICATORS),
        }
    }
}

impl LexiconConfig {
    /// Lexicon with every list empty.
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
            noisy_patterns: Vec::new(),
            abstract_suffixes: Vec::new(),
            jargon: HashSet::new(),
            pedagogical_indicators: Vec::new(),
        }
    }

    /// Replace the stopword list.
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        self
    }

    /// Replace the noisy sentence patterns.
    pub fn with_noisy_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noisy_patterns = patterns
            .into_iter()
            .map(|p| p.into().to_lowercase())
            .collect();
        self
    }

    /// Replace the abstract-noun suffixes.
    pub fn with_abstract_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abstract_suffixes = suffixes
            .into_iter()
            .map(|s| s.into().to_lowercase())
            .collect();
        self
    }

    /// Replace the jargon exclusion set.
    pub fn with_jargon<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.jargon = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        self
    }

    /// Replace the pedagogical indicator substrings.
    pub fn with_pedagogical_indicators<I, S>(mut self, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pedagogical_indicators = indicators
            .into_iter()
            .map(|i| i.into().to_lowercase())
            .collect();
        self
    }

    pub(crate) fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub(crate) fn is_noisy(&self, lowercase_sentence: &str) -> bool {
        self.noisy_patterns
            .iter()
            .any(|pattern| lowercase_sentence.contains(pattern.as_str()))
    }

    pub(crate) fn has_abstract_suffix(&self, word: &str) -> bool {
        self.abstract_suffixes
            .iter()
            .any(|suffix| word.ends_with(suffix.as_str()))
    }

    pub(crate) fn is_jargon(&self, word: &str) -> bool {
        self.jargon.contains(word)
    }

    pub(crate) fn has_indicator(&self, lowercase_text: &str) -> bool {
        self.pedagogical_indicators
            .iter()
            .any(|indicator| lowercase_text.contains(indicator.as_str()))
    }
}

/// Run configuration for a suggestion generation pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Reference documents per subject, in extraction order.
    pub document_groups: IndexMap<Subject, Vec<DocumentId>>,
    /// Maximum number of fragments quoted per goal.
    pub fragments_per_goal: usize,
    /// Input descriptions recorded in the report metadata.
    pub based_on: Vec<String>,
    /// Word lists used by the lexical predicates.
    pub lexicon: LexiconConfig,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        let document_groups = DEFAULT_DOCUMENT_GROUPS
            .iter()
            .map(|(subject, documents)| (subject.to_string(), owned_list(documents)))
            .collect();
        Self {
            document_groups,
            fragments_per_goal: DEFAULT_FRAGMENTS_PER_GOAL,
            based_on: owned_list(DEFAULT_BASED_ON),
            lexicon: LexiconConfig::default(),
        }
    }
}

impl SuggestConfig {
    /// Load a configuration file; keys absent from the JSON keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SuggestError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the number of fragments quoted per goal.
    pub fn with_fragments_per_goal(mut self, fragments_per_goal: usize) -> Self {
        self.fragments_per_goal = fragments_per_goal;
        self
    }

    /// Replace the document groups.
    pub fn with_document_groups(mut self, groups: IndexMap<Subject, Vec<DocumentId>>) -> Self {
        self.document_groups = groups;
        self
    }

    /// Replace the lexicon.
    pub fn with_lexicon(mut self, lexicon: LexiconConfig) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<(), SuggestError> {
        if self.fragments_per_goal == 0 {
            return Err(SuggestError::Configuration(
                "fragments_per_goal must be at least 1".to_string(),
            ));
        }
        for (subject, documents) in &self.document_groups {
            if subject.trim().is_empty() {
                return Err(SuggestError::Configuration(
                    "document group with an empty subject".to_string(),
                ));
            }
            if documents.iter().any(|doc| doc.trim().is_empty()) {
                return Err(SuggestError::Configuration(format!(
                    "document group '{subject}' lists an empty document id"
                )));
            }
        }
        Ok(())
    }
}
