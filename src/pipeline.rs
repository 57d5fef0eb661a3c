//! End-to-end suggestion generation over a fixed input snapshot.

use chrono::NaiveDateTime;
use rayon::prelude::*;
use tracing::info;

use crate::composer::compose_suggestion;
use crate::config::SuggestConfig;
use crate::constants::report::{GENERATED_AT_FORMAT, PRODUCED_FIELDS};
use crate::data::{Fragment, Goal, ReportMeta, Suggestion, SuggestionReport};
use crate::errors::SuggestError;
use crate::fragments::FragmentsBySubject;
use crate::index::VocabularyIndex;
use crate::matcher::best_fragments;
use crate::metrics::{GoalOutcome, RunSummary, summarize};
use crate::propagation::resolve_vocab;

/// Report plus run summary produced by [`generate`].
#[derive(Clone, Debug)]
pub struct GenerationOutput {
    /// Report ready to be written.
    pub report: SuggestionReport,
    /// Coverage counts for logging and the CLI.
    pub summary: RunSummary,
}

/// Compose the suggestion for a single goal against read-only shared state.
pub fn suggest_for_goal(
    goal: &Goal,
    fragments: &[Fragment],
    index: &VocabularyIndex,
    config: &SuggestConfig,
) -> (Suggestion, GoalOutcome) {
    let lexicon = &config.lexicon;
    let matches = best_fragments(goal, fragments, config.fragments_per_goal, lexicon);
    let vocab = resolve_vocab(goal, index, lexicon);
    let suggestion = compose_suggestion(goal, &matches, &vocab.phrases);
    let outcome = GoalOutcome {
        fragments: matches.len(),
        vocab_origin: vocab.origin,
    };
    (suggestion, outcome)
}

/// Generate one suggestion per goal, in goal order.
///
/// The vocabulary index is built once before any goal is processed. Goals are
/// then handled in parallel over read-only state; the output order and content
/// do not depend on scheduling, so repeated runs over the same snapshot differ
/// only in `generated_at`.
pub fn generate(
    goals: &[Goal],
    fragments: &FragmentsBySubject,
    config: &SuggestConfig,
    generated_at: NaiveDateTime,
) -> Result<GenerationOutput, SuggestError> {
    config.validate()?;
    let index = VocabularyIndex::build(goals, &config.lexicon);

    let (suggestions, outcomes): (Vec<Suggestion>, Vec<GoalOutcome>) = goals
        .par_iter()
        .map(|goal| {
            let subject_fragments = fragments
                .get(&goal.subject)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            suggest_for_goal(goal, subject_fragments, &index, config)
        })
        .unzip();

    let summary = summarize(&suggestions, &outcomes);
    info!(
        goals = summary.goals,
        with_fragments = summary.with_fragments,
        own_vocab = summary.own_vocab,
        propagated_vocab = summary.propagated_vocab,
        empty_vocab = summary.empty_vocab,
        cited_documents = summary.cited_documents.len(),
        "suggestions generated"
    );

    let report = SuggestionReport {
        meta: ReportMeta {
            generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
            based_on: config.based_on.clone(),
            goal_count: goals.len(),
            fields: PRODUCED_FIELDS.iter().map(|f| f.to_string()).collect(),
        },
        suggestions,
    };
    Ok(GenerationOutput { report, summary })
}
