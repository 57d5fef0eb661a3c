//! Child-vocabulary validation, vocabulary list parsing, and the crude stemmer
//! used for topical filtering.

use crate::config::LexiconConfig;
use crate::constants::vocab::{
    MAX_PHRASE_WORDS, MAX_WORD_CHARS, MIN_WORD_CHARS, PHRASE_DELIMITERS, STEM_MIN_CHARS,
    STEM_SUFFIXES,
};
use crate::types::VocabPhrase;
use crate::utils::normalize_inline_whitespace;

/// True when `word` is acceptable as child vocabulary.
///
/// Rejects words shorter than 3 or longer than 12 characters, stopwords, words
/// containing a digit, abstract nouns (by suffix), and pedagogical jargon.
pub fn child_word_ok(word: &str, lexicon: &LexiconConfig) -> bool {
    let word = word.trim().to_lowercase();
    let len = word.chars().count();
    if !(MIN_WORD_CHARS..=MAX_WORD_CHARS).contains(&len) {
        return false;
    }
    if lexicon.is_stopword(&word) {
        return false;
    }
    if word.chars().any(|ch| ch.is_ascii_digit()) {
        return false;
    }
    if lexicon.has_abstract_suffix(&word) {
        return false;
    }
    !lexicon.is_jargon(&word)
}

/// Parse a raw vocabulary field into normalized phrases.
///
/// Parts are separated by comma, semicolon, or newline. Each part is
/// lowercased and whitespace-collapsed; parts with more than three words, or
/// with any word failing [`child_word_ok`], are dropped. Input order is kept
/// and duplicates survive.
pub fn parse_vocab_list(text: &str, lexicon: &LexiconConfig) -> Vec<VocabPhrase> {
    text.split(PHRASE_DELIMITERS)
        .filter_map(|part| {
            let phrase = normalize_inline_whitespace(part.to_lowercase());
            if phrase.is_empty() {
                return None;
            }
            let words: Vec<&str> = phrase.split(' ').collect();
            if words.len() > MAX_PHRASE_WORDS {
                return None;
            }
            if !words.iter().all(|word| child_word_ok(word, lexicon)) {
                return None;
            }
            Some(phrase)
        })
        .collect()
}

/// Strip one trailing `en`, `s`, or `e` (first match, in that order) from
/// words longer than four characters.
///
/// `"tijden"` becomes `"tijd"` and `"grote"` becomes `"grot"`; topical
/// filtering depends on these exact outcomes.
pub fn crude_stem(word: &str) -> String {
    let word = word.trim().to_lowercase();
    if word.chars().count() > STEM_MIN_CHARS {
        for suffix in STEM_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                return stem.to_string();
            }
        }
    }
    word
}
