use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use crate::types::{ClassValue, DocumentId, GoalId, Sentence, Subject, Term};

/// A curriculum goal as delivered by the catalogue.
///
/// Field names on the wire follow the catalogue JSON; any missing field is an
/// empty string. Classification values may legitimately be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goal {
    /// Stable goal identifier.
    pub id: GoalId,
    /// Curriculum code printed in the source workbook.
    pub code: String,
    /// Curriculum area (`vak`).
    #[serde(rename = "vak")]
    pub subject: Subject,
    /// Goal kind (`doelsoort`).
    #[serde(rename = "doelsoort")]
    pub goal_kind: String,
    /// Learning-field code (`lfmd`), carried through untouched.
    pub lfmd: String,
    /// Fine classification code A (`nrmd`).
    #[serde(rename = "nrmd")]
    pub fine_code_a: ClassValue,
    /// Fine classification code B (`md`).
    #[serde(rename = "md")]
    pub fine_code_b: ClassValue,
    /// Year or phase the goal targets (`fase`).
    #[serde(rename = "fase")]
    pub phase: String,
    /// Broad category (`domein`).
    #[serde(rename = "domein")]
    pub domain: ClassValue,
    /// Sub-category (`subdomein`).
    #[serde(rename = "subdomein")]
    pub sub_domain: ClassValue,
    /// Topical cluster within the sub-domain.
    pub cluster: ClassValue,
    /// Goal description (`leerplandoel`).
    #[serde(rename = "leerplandoel")]
    pub description: String,
    /// Free-text examples (`voorbeelden`).
    #[serde(rename = "voorbeelden")]
    pub examples: String,
    /// Free-text teacher note (`extra_toelichting`).
    #[serde(rename = "extra_toelichting")]
    pub teacher_note: String,
    /// Raw, delimiter-separated vocabulary list (`woordenschat`).
    #[serde(rename = "woordenschat")]
    pub vocabulary: String,
}

/// A sentence mined from a reference document.
///
/// Fragments produced by [`crate::fragments`] always hold 40..=260 characters
/// and at least three terms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Whitespace-normalized sentence text.
    pub text: Sentence,
    /// Document the sentence was taken from.
    pub source: DocumentId,
    /// Qualifying terms of `text`.
    pub terms: BTreeSet<Term>,
}

/// Generated suggestion for one goal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Id of the goal this suggestion belongs to.
    #[serde(rename = "id")]
    pub goal_id: GoalId,
    /// Curriculum code copied from the goal.
    pub code: String,
    /// Subject copied from the goal.
    #[serde(rename = "vak")]
    pub subject: Subject,
    /// Original examples followed by generated bullets.
    #[serde(rename = "suggested_voorbeelden")]
    pub examples: String,
    /// Generated teacher note bullets.
    #[serde(rename = "suggested_extra_toelichting")]
    pub teacher_note: String,
    /// Comma-joined vocabulary, empty when nothing resolved.
    #[serde(rename = "suggested_woordenschat")]
    pub vocabulary: String,
    /// Sorted, distinct documents quoted in this suggestion.
    #[serde(rename = "source_pdfs")]
    pub sources: Vec<DocumentId>,
}

/// Run metadata written alongside the suggestions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Local generation time, ISO-8601 with seconds precision.
    pub generated_at: String,
    /// Inputs the report was derived from.
    pub based_on: Vec<String>,
    /// Number of goals processed.
    #[serde(rename = "aantal_leerdoelen")]
    pub goal_count: usize,
    /// Names of the generated fields.
    #[serde(rename = "velden")]
    pub fields: Vec<String>,
}

/// Complete output of a generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionReport {
    /// Run metadata.
    pub meta: ReportMeta,
    /// One suggestion per goal, in catalogue order.
    pub suggestions: Vec<Suggestion>,
}

impl SuggestionReport {
    /// True when the run covered no goals.
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}
