//! Builds the three suggestion text fields for a goal.

use std::collections::BTreeSet;

use crate::constants::report::VOCAB_JOIN;
use crate::data::{Goal, Suggestion};
use crate::matcher::FragmentMatch;
use crate::types::{DocumentId, VocabPhrase};

const EXAMPLES_HEADER: &str = "Originele voorbeelden:";
const NO_EXAMPLES: &str = "(geen voorbeeld in bronbestand)";
const GENERATED_HEADER: &str = "Aangevulde suggesties (gebaseerd op visieteksten):";
const FALLBACK_EXAMPLE: &str =
    "Voorzie herhaalde oefenkansen in herkenbare contexten en bouw de ondersteuning stapsgewijs af.";
const NOTE_SCAFFOLDING: &str = "Bouw dit doel op van sterk ondersteund naar meer zelfstandig handelen, met expliciete observatie van groei.";
const NOTE_EVALUATION: &str = "Koppel evaluatie aan concrete gedragsindicatoren in klasactiviteiten en plan doelgerichte herhaling.";

/// Examples field: the goal's own examples followed by generated bullets.
pub fn suggest_examples(goal: &Goal, matches: &[FragmentMatch<'_>]) -> String {
    let original = goal.examples.trim();
    let original = if original.is_empty() {
        NO_EXAMPLES
    } else {
        original
    };

    let mut lines = Vec::new();
    if !goal.cluster.is_empty() {
        lines.push(format!(
            "Werk doelgericht rond het cluster '{}' in dagelijkse klas- en speelsituaties.",
            goal.cluster
        ));
    }
    if !goal.phase.is_empty() {
        lines.push(format!(
            "Plan korte oefenmomenten op maat van {}, met herhaling verspreid over de week.",
            goal.phase.replace('.', "")
        ));
    }
    if let Some(top) = matches.first() {
        lines.push(format!(
            "Gebruik ook dit principe uit de visietekst: {}",
            top.fragment.text
        ));
    }
    if let Some(second) = matches.get(1) {
        lines.push(format!("Aanvullend: {}", second.fragment.text));
    }
    if lines.is_empty() {
        lines.push(FALLBACK_EXAMPLE.to_string());
    }

    format!(
        "{EXAMPLES_HEADER}\n{original}\n\n{GENERATED_HEADER}\n{}",
        bullets(&lines)
    )
}

/// Teacher note: two fixed bullets, the domain, and up to two quoted fragments.
pub fn suggest_teacher_note(goal: &Goal, matches: &[FragmentMatch<'_>]) -> String {
    let mut lines = vec![NOTE_SCAFFOLDING.to_string(), NOTE_EVALUATION.to_string()];
    if !goal.domain.is_empty() {
        lines.push(format!(
            "Veranker het doel in het domein '{}' en maak de samenhang met verwante doelen zichtbaar.",
            goal.domain
        ));
    }
    if let Some(top) = matches.first() {
        lines.push(format!(
            "Relevante richtlijn uit de visietekst: {}",
            top.fragment.text
        ));
    }
    if let Some(second) = matches.get(1) {
        lines.push(format!(
            "Aanvullende didactische hint: {}",
            second.fragment.text
        ));
    }
    bullets(&lines)
}

/// Vocabulary field: comma-joined phrases, empty when nothing resolved.
pub fn suggest_vocab(phrases: &[VocabPhrase]) -> String {
    phrases.join(VOCAB_JOIN)
}

/// Sorted distinct source documents of the matched fragments.
pub fn source_documents(matches: &[FragmentMatch<'_>]) -> Vec<DocumentId> {
    matches
        .iter()
        .map(|m| m.fragment.source.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Assemble the full suggestion record for `goal`.
pub fn compose_suggestion(
    goal: &Goal,
    matches: &[FragmentMatch<'_>],
    vocabulary: &[VocabPhrase],
) -> Suggestion {
    Suggestion {
        goal_id: goal.id.clone(),
        code: goal.code.clone(),
        subject: goal.subject.clone(),
        examples: suggest_examples(goal, matches),
        teacher_note: suggest_teacher_note(goal, matches),
        vocabulary: suggest_vocab(vocabulary),
        sources: source_documents(matches),
    }
}

fn bullets(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
