//! Relevance scoring of fragments against a goal.

use std::collections::{BTreeSet, HashSet};

use crate::config::LexiconConfig;
use crate::constants::matcher::{
    CLUSTER_BONUS, DEDUP_PREFIX_CHARS, INDICATOR_BONUS, SUB_DOMAIN_BONUS,
};
use crate::data::{Fragment, Goal};
use crate::types::Term;
use crate::utils::text_terms;

/// A fragment selected for a goal together with its relevance score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FragmentMatch<'a> {
    /// The matched fragment.
    pub fragment: &'a Fragment,
    /// Overlap plus bonuses.
    pub score: f64,
    /// Number of query terms shared with the fragment.
    pub overlap: usize,
}

/// Terms of the goal's description, domain, sub-domain, cluster, and examples.
pub fn query_terms(goal: &Goal, lexicon: &LexiconConfig) -> BTreeSet<Term> {
    let query = [
        goal.description.as_str(),
        goal.domain.as_str(),
        goal.sub_domain.as_str(),
        goal.cluster.as_str(),
        goal.examples.as_str(),
    ]
    .join(" ");
    text_terms(&query, lexicon)
}

/// Rank `fragments` against `goal` and return at most `n` distinct matches.
///
/// The score is the number of shared query terms, plus a bonus for a
/// pedagogical indicator and for the goal's cluster or sub-domain name
/// appearing in the fragment. Fragments sharing no term are skipped. Equal
/// scores keep extraction order (stable sort), and fragments whose first 120
/// characters repeat an earlier pick are dropped.
pub fn best_fragments<'a>(
    goal: &Goal,
    fragments: &'a [Fragment],
    n: usize,
    lexicon: &LexiconConfig,
) -> Vec<FragmentMatch<'a>> {
    let query = query_terms(goal, lexicon);
    if query.is_empty() || n == 0 {
        return Vec::new();
    }
    let cluster = goal.cluster.to_lowercase();
    let sub_domain = goal.sub_domain.to_lowercase();

    let mut scored: Vec<FragmentMatch<'a>> = fragments
        .iter()
        .filter_map(|fragment| {
            let overlap = query.intersection(&fragment.terms).count();
            if overlap == 0 {
                return None;
            }
            let lower = fragment.text.to_lowercase();
            let mut score = overlap as f64;
            if lexicon.has_indicator(&lower) {
                score += INDICATOR_BONUS;
            }
            if !cluster.is_empty() && lower.contains(&cluster) {
                score += CLUSTER_BONUS;
            }
            if !sub_domain.is_empty() && lower.contains(&sub_domain) {
                score += SUB_DOMAIN_BONUS;
            }
            Some(FragmentMatch {
                fragment,
                score,
                overlap,
            })
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut seen = HashSet::new();
    let mut picked = Vec::with_capacity(n);
    for candidate in scored {
        if !seen.insert(dedup_prefix(&candidate.fragment.text)) {
            continue;
        }
        picked.push(candidate);
        if picked.len() >= n {
            break;
        }
    }
    picked
}

fn dedup_prefix(text: &str) -> &str {
    match text.char_indices().nth(DEDUP_PREFIX_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
