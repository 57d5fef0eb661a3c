//! Resolves the vocabulary suggested for a goal.
//!
//! A goal's own vocabulary always wins. Without it, phrases from goals that
//! share classification values are aggregated over the six index levels,
//! weighted by specificity, and kept only when they share a stem with the
//! goal's query terms.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;

use crate::config::LexiconConfig;
use crate::constants::propagation::{MAX_OWN_PHRASES, MAX_PROPAGATED_PHRASES};
use crate::data::Goal;
use crate::index::{IndexLevel, VocabularyIndex};
use crate::matcher::query_terms;
use crate::types::VocabPhrase;
use crate::vocab::{child_word_ok, crude_stem, parse_vocab_list};

/// Where a goal's resolved vocabulary came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VocabOrigin {
    /// Parsed from the goal's own vocabulary field.
    Own,
    /// Propagated from sibling goals through the index.
    Propagated,
    /// Nothing resolved.
    Empty,
}

/// Resolved vocabulary plus its origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedVocab {
    /// Where the phrases came from.
    pub origin: VocabOrigin,
    /// Phrases in suggestion order.
    pub phrases: Vec<VocabPhrase>,
}

/// Vocabulary phrases to suggest for `goal`.
///
/// Own vocabulary is returned deduplicated (first occurrence wins) and capped
/// at 12 without consulting the index. Otherwise at most 10 propagated phrases
/// are returned, highest aggregated score first.
pub fn related_vocab(
    goal: &Goal,
    index: &VocabularyIndex,
    lexicon: &LexiconConfig,
) -> Vec<VocabPhrase> {
    resolve_vocab(goal, index, lexicon).phrases
}

/// Like [`related_vocab`], also reporting whether the phrases were the goal's own.
pub fn resolve_vocab(
    goal: &Goal,
    index: &VocabularyIndex,
    lexicon: &LexiconConfig,
) -> ResolvedVocab {
    let own = parse_vocab_list(&goal.vocabulary, lexicon);
    if !own.is_empty() {
        return ResolvedVocab {
            origin: VocabOrigin::Own,
            phrases: dedup_capped(own, MAX_OWN_PHRASES),
        };
    }

    let stems = query_stems(goal, lexicon);
    let mut ranked: Vec<(f64, VocabPhrase)> = candidate_scores(goal, index)
        .into_iter()
        .filter(|(phrase, _)| is_topical(phrase, &stems, lexicon))
        .map(|(phrase, score)| (score, phrase))
        .collect();
    // Highest score first; equal scores fall back to descending phrase order.
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

    let phrases = dedup_capped(
        ranked.into_iter().map(|(_, phrase)| phrase),
        MAX_PROPAGATED_PHRASES,
    );
    let origin = if phrases.is_empty() {
        VocabOrigin::Empty
    } else {
        VocabOrigin::Propagated
    };
    ResolvedVocab { origin, phrases }
}

/// Aggregated `frequency × level weight` per candidate phrase, in first-seen order.
pub fn candidate_scores(goal: &Goal, index: &VocabularyIndex) -> IndexMap<VocabPhrase, f64> {
    let mut scores: IndexMap<VocabPhrase, f64> = IndexMap::new();
    for level in IndexLevel::PROPAGATION_ORDER {
        let Some(counts) = index.counts_for(level, goal) else {
            continue;
        };
        for (phrase, freq) in counts {
            *scores.entry(phrase.clone()).or_insert(0.0) += f64::from(*freq) * level.weight();
        }
    }
    scores
}

/// Crude stems of the goal's query terms.
pub fn query_stems(goal: &Goal, lexicon: &LexiconConfig) -> BTreeSet<String> {
    query_terms(goal, lexicon)
        .iter()
        .map(|term| crude_stem(term))
        .collect()
}

/// A phrase is topical when one of its child-appropriate words shares a stem
/// with the query (equal, containing, or contained). Phrases without any
/// child-appropriate word never qualify; with no query stems every other
/// phrase does.
fn is_topical(phrase: &str, stems: &BTreeSet<String>, lexicon: &LexiconConfig) -> bool {
    let words: Vec<&str> = phrase
        .split_whitespace()
        .filter(|word| child_word_ok(word, lexicon))
        .collect();
    if words.is_empty() {
        return false;
    }
    if stems.is_empty() {
        return true;
    }
    words.iter().any(|word| {
        let stem = crude_stem(word);
        stems
            .iter()
            .any(|query| stem == *query || query.contains(&stem) || stem.contains(query.as_str()))
    })
}

fn dedup_capped<I>(phrases: I, cap: usize) -> Vec<VocabPhrase>
where
    I: IntoIterator<Item = VocabPhrase>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for phrase in phrases {
        if out.len() >= cap {
            break;
        }
        if seen.insert(phrase.clone()) {
            out.push(phrase);
        }
    }
    out
}
