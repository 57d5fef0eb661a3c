use std::collections::BTreeSet;

use crate::data::Suggestion;
use crate::propagation::VocabOrigin;
use crate::types::DocumentId;

/// Per-goal facts recorded while composing a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalOutcome {
    /// Number of fragments matched for the goal.
    pub fragments: usize,
    /// Where the goal's vocabulary came from.
    pub vocab_origin: VocabOrigin,
}

/// Aggregate coverage of a generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Goals processed.
    pub goals: usize,
    /// Goals with at least one matched fragment.
    pub with_fragments: usize,
    /// Goals that kept their own vocabulary.
    pub own_vocab: usize,
    /// Goals that received propagated vocabulary.
    pub propagated_vocab: usize,
    /// Goals left without vocabulary.
    pub empty_vocab: usize,
    /// Distinct documents cited across all suggestions.
    pub cited_documents: BTreeSet<DocumentId>,
}

impl RunSummary {
    /// Share of goals that received at least one fragment (0.0 for an empty run).
    pub fn fragment_coverage(&self) -> f64 {
        if self.goals == 0 {
            0.0
        } else {
            self.with_fragments as f64 / self.goals as f64
        }
    }
}

/// Summarize outcomes and suggestions of a run. Both slices follow goal order.
pub fn summarize(suggestions: &[Suggestion], outcomes: &[GoalOutcome]) -> RunSummary {
    let mut summary = RunSummary {
        goals: outcomes.len(),
        ..RunSummary::default()
    };
    for outcome in outcomes {
        if outcome.fragments > 0 {
            summary.with_fragments += 1;
        }
        match outcome.vocab_origin {
            VocabOrigin::Own => summary.own_vocab += 1,
            VocabOrigin::Propagated => summary.propagated_vocab += 1,
            VocabOrigin::Empty => summary.empty_vocab += 1,
        }
    }
    summary.cited_documents = suggestions
        .iter()
        .flat_map(|suggestion| suggestion.sources.iter().cloned())
        .collect();
    summary
}
