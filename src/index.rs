//! Six-level hierarchical vocabulary index.
//!
//! Every goal that carries its own vocabulary contributes each parsed phrase to
//! six frequency tables keyed by its subject and classification values. The
//! index is built once from the full catalogue and exposes lookups only.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::LexiconConfig;
use crate::constants::propagation::{
    WEIGHT_CLUSTER, WEIGHT_FINE_CODE_A, WEIGHT_FINE_CODE_B, WEIGHT_SUB_DOMAIN,
    WEIGHT_SUB_DOMAIN_CLUSTER, WEIGHT_SUBJECT,
};
use crate::data::Goal;
use crate::types::{ClassValue, Subject, VocabPhrase};
use crate::vocab::parse_vocab_list;

/// Phrase frequencies in first-seen order.
pub type TermCounter = IndexMap<VocabPhrase, u32>;

type PairKey = (Subject, ClassValue);
type TripleKey = (Subject, ClassValue, ClassValue);

/// One level of the classification hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexLevel {
    /// (subject, fine-code-A)
    FineCodeA,
    /// (subject, fine-code-B)
    FineCodeB,
    /// (subject, sub-domain, cluster)
    SubDomainCluster,
    /// (subject, sub-domain)
    SubDomain,
    /// (subject, cluster)
    Cluster,
    /// (subject)
    Subject,
}

impl IndexLevel {
    /// Levels from most to least specific, in the order propagation consults them.
    pub const PROPAGATION_ORDER: [IndexLevel; 6] = [
        IndexLevel::FineCodeA,
        IndexLevel::FineCodeB,
        IndexLevel::SubDomainCluster,
        IndexLevel::SubDomain,
        IndexLevel::Cluster,
        IndexLevel::Subject,
    ];

    /// Weight applied to frequencies found at this level.
    pub const fn weight(self) -> f64 {
        match self {
            IndexLevel::FineCodeA => WEIGHT_FINE_CODE_A,
            IndexLevel::FineCodeB => WEIGHT_FINE_CODE_B,
            IndexLevel::SubDomainCluster => WEIGHT_SUB_DOMAIN_CLUSTER,
            IndexLevel::SubDomain => WEIGHT_SUB_DOMAIN,
            IndexLevel::Cluster => WEIGHT_CLUSTER,
            IndexLevel::Subject => WEIGHT_SUBJECT,
        }
    }
}

/// Immutable hierarchical aggregation of vocabulary phrase frequencies.
#[derive(Clone, Debug, Default)]
pub struct VocabularyIndex {
    by_subject: HashMap<Subject, TermCounter>,
    by_fine_code_a: HashMap<PairKey, TermCounter>,
    by_fine_code_b: HashMap<PairKey, TermCounter>,
    by_sub_domain_cluster: HashMap<TripleKey, TermCounter>,
    by_sub_domain: HashMap<PairKey, TermCounter>,
    by_cluster: HashMap<PairKey, TermCounter>,
}

impl VocabularyIndex {
    /// Build the index from every goal's own vocabulary.
    ///
    /// Goals whose vocabulary parses empty are skipped. The fine-code levels
    /// only receive goals with a non-empty code; the other levels use the raw
    /// (possibly empty) classification values.
    pub fn build(goals: &[Goal], lexicon: &LexiconConfig) -> Self {
        let mut index = Self::default();
        let mut contributing = 0usize;
        for goal in goals {
            let phrases = parse_vocab_list(&goal.vocabulary, lexicon);
            if phrases.is_empty() {
                continue;
            }
            contributing += 1;
            for phrase in phrases {
                index.record(goal, phrase);
            }
        }
        debug!(
            goals = goals.len(),
            contributing,
            subjects = index.by_subject.len(),
            "vocabulary index built"
        );
        index
    }

    fn record(&mut self, goal: &Goal, phrase: VocabPhrase) {
        let subject = &goal.subject;
        bump(
            self.by_subject.entry(subject.clone()).or_default(),
            &phrase,
        );
        if !goal.fine_code_a.is_empty() {
            bump(
                self.by_fine_code_a
                    .entry((subject.clone(), goal.fine_code_a.clone()))
                    .or_default(),
                &phrase,
            );
        }
        if !goal.fine_code_b.is_empty() {
            bump(
                self.by_fine_code_b
                    .entry((subject.clone(), goal.fine_code_b.clone()))
                    .or_default(),
                &phrase,
            );
        }
        bump(
            self.by_sub_domain_cluster
                .entry((
                    subject.clone(),
                    goal.sub_domain.clone(),
                    goal.cluster.clone(),
                ))
                .or_default(),
            &phrase,
        );
        bump(
            self.by_sub_domain
                .entry((subject.clone(), goal.sub_domain.clone()))
                .or_default(),
            &phrase,
        );
        bump(
            self.by_cluster
                .entry((subject.clone(), goal.cluster.clone()))
                .or_default(),
            &phrase,
        );
    }

    /// Frequencies stored at `level` under the goal's classification key.
    pub fn counts_for(&self, level: IndexLevel, goal: &Goal) -> Option<&TermCounter> {
        let subject = goal.subject.clone();
        match level {
            IndexLevel::FineCodeA => self
                .by_fine_code_a
                .get(&(subject, goal.fine_code_a.clone())),
            IndexLevel::FineCodeB => self
                .by_fine_code_b
                .get(&(subject, goal.fine_code_b.clone())),
            IndexLevel::SubDomainCluster => self.by_sub_domain_cluster.get(&(
                subject,
                goal.sub_domain.clone(),
                goal.cluster.clone(),
            )),
            IndexLevel::SubDomain => self
                .by_sub_domain
                .get(&(subject, goal.sub_domain.clone())),
            IndexLevel::Cluster => self.by_cluster.get(&(subject, goal.cluster.clone())),
            IndexLevel::Subject => self.by_subject.get(&subject),
        }
    }

    /// Number of distinct keys stored at `level`.
    pub fn key_count(&self, level: IndexLevel) -> usize {
        match level {
            IndexLevel::FineCodeA => self.by_fine_code_a.len(),
            IndexLevel::FineCodeB => self.by_fine_code_b.len(),
            IndexLevel::SubDomainCluster => self.by_sub_domain_cluster.len(),
            IndexLevel::SubDomain => self.by_sub_domain.len(),
            IndexLevel::Cluster => self.by_cluster.len(),
            IndexLevel::Subject => self.by_subject.len(),
        }
    }

    /// True when no goal contributed vocabulary.
    pub fn is_empty(&self) -> bool {
        self.by_subject.is_empty()
    }
}

fn bump(counter: &mut TermCounter, phrase: &str) {
    *counter.entry(phrase.to_string()).or_insert(0) += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(subject: &str, nrmd: &str, md: &str, sub: &str, cluster: &str, vocab: &str) -> Goal {
        Goal {
            subject: subject.into(),
            fine_code_a: nrmd.into(),
            fine_code_b: md.into(),
            sub_domain: sub.into(),
            cluster: cluster.into(),
            vocabulary: vocab.into(),
            ..Goal::default()
        }
    }

    #[test]
    fn build_counts_phrases_at_every_level() {
        let goals = vec![
            goal("Wiskunde", "1.1", "1", "Getallen", "tellen", "tellen, getal"),
            goal("Wiskunde", "1.1", "1", "Getallen", "tellen", "tellen"),
            goal("Wiskunde", "", "", "Meten", "tijd", "klok"),
        ];
        let index = VocabularyIndex::build(&goals, &LexiconConfig::default());
        let probe = goal("Wiskunde", "1.1", "1", "Getallen", "tellen", "");

        let fine_a = index.counts_for(IndexLevel::FineCodeA, &probe).unwrap();
        assert_eq!(fine_a.get("tellen"), Some(&2));
        assert_eq!(fine_a.get("getal"), Some(&1));
        assert_eq!(fine_a.get("klok"), None);

        let subject = index.counts_for(IndexLevel::Subject, &probe).unwrap();
        let order: Vec<&str> = subject.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["tellen", "getal", "klok"]);

        assert_eq!(index.key_count(IndexLevel::FineCodeA), 1);
        assert_eq!(index.key_count(IndexLevel::SubDomainCluster), 2);
    }

    #[test]
    fn empty_fine_codes_are_not_indexed() {
        let goals = vec![goal("Wiskunde", "", "", "Meten", "tijd", "klok")];
        let index = VocabularyIndex::build(&goals, &LexiconConfig::default());
        let probe = goal("Wiskunde", "", "", "Meten", "tijd", "");
        assert!(index.counts_for(IndexLevel::FineCodeA, &probe).is_none());
        assert!(index.counts_for(IndexLevel::FineCodeB, &probe).is_none());
        assert_eq!(
            index
                .counts_for(IndexLevel::Cluster, &probe)
                .and_then(|c| c.get("klok")),
            Some(&1)
        );
    }

    #[test]
    fn goals_without_valid_vocabulary_are_skipped() {
        let goals = vec![goal("Wiskunde", "1", "1", "a", "b", "groep3; ab")];
        let index = VocabularyIndex::build(&goals, &LexiconConfig::default());
        assert!(index.is_empty());
    }

    #[test]
    fn weights_follow_specificity() {
        let weights: Vec<f64> = IndexLevel::PROPAGATION_ORDER
            .iter()
            .map(|level| level.weight())
            .collect();
        assert_eq!(weights, vec![1.00, 0.90, 0.80, 0.55, 0.55, 0.15]);
    }
}
