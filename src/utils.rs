//! Text normalization helpers: whitespace collapsing, term extraction, and
//! sentence segmentation for reference document pages.

use std::collections::BTreeSet;

use crate::config::LexiconConfig;
use crate::constants::sentences::{
    BREAK_GLYPHS, BREAK_REPLACEMENT, MAX_SENTENCE_CHARS, MAX_SENTENCE_PERIODS, MIN_SENTENCE_CHARS,
};
use crate::constants::terms::MIN_TERM_CHARS;
use crate::types::{Sentence, Term};

/// Collapse runs of whitespace into single spaces and trim.
///
/// The ASCII information separators (U+001C..=U+001F) count as whitespace;
/// PDF text dumps use them as line and field breaks.
pub fn normalize_inline_whitespace<T: AsRef<str>>(text: T) -> String {
    let mut normalized = String::new();
    let mut seen_space = false;
    for ch in text.as_ref().chars() {
        if is_inline_space(ch) {
            if !seen_space {
                normalized.push(' ');
                seen_space = true;
            }
        } else {
            normalized.push(ch);
            seen_space = false;
        }
    }
    normalized.trim().to_string()
}

fn is_inline_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{001C}'..='\u{001F}').contains(&ch)
}

/// Extract the set of qualifying lowercase terms from free text.
///
/// A token is a maximal run of ASCII letters, Latin-1 lowercase letters
/// (`à`..=`ÿ`), digits, and hyphens. Terms are tokens of at least four
/// characters that are not stopwords and contain no digit.
pub fn text_terms(text: &str, lexicon: &LexiconConfig) -> BTreeSet<Term> {
    let lower = text.to_lowercase();
    lower
        .split(|ch: char| !is_term_char(ch))
        .filter(|token| is_qualifying_term(token, lexicon))
        .map(str::to_string)
        .collect()
}

fn is_term_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ('à'..='ÿ').contains(&ch)
}

fn is_qualifying_term(token: &str, lexicon: &LexiconConfig) -> bool {
    token.chars().count() >= MIN_TERM_CHARS
        && !lexicon.is_stopword(token)
        && !token.chars().any(|ch| ch.is_ascii_digit())
}

/// Split raw page text into qualifying sentences, in reading order.
///
/// Bullet and ellipsis glyphs become sentence breaks, whitespace is collapsed,
/// and the text is split after `.`, `!` or `?`. Candidates that are too short,
/// too long, boilerplate, list-like, or purely numeric are dropped.
pub fn split_sentences(text: &str, lexicon: &LexiconConfig) -> Vec<Sentence> {
    let mut prepared = text.to_string();
    for glyph in BREAK_GLYPHS {
        prepared = prepared.replace(glyph, BREAK_REPLACEMENT);
    }
    let normalized = normalize_inline_whitespace(&prepared);
    sentence_chunks(&normalized)
        .into_iter()
        .filter_map(|chunk| qualify_sentence(chunk, lexicon))
        .collect()
}

/// Split whitespace-normalized text at every space preceded by terminal punctuation.
fn sentence_chunks(normalized: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (idx, ch) in normalized.char_indices() {
        if ch == ' ' && matches!(prev, Some('.' | '!' | '?')) {
            chunks.push(&normalized[start..idx]);
            start = idx + ch.len_utf8();
        }
        prev = Some(ch);
    }
    chunks.push(&normalized[start..]);
    chunks
}

fn qualify_sentence(chunk: &str, lexicon: &LexiconConfig) -> Option<Sentence> {
    let sentence = chunk.trim_matches(|ch| ch == ' ' || ch == '-');
    let len = sentence.chars().count();
    if !(MIN_SENTENCE_CHARS..=MAX_SENTENCE_CHARS).contains(&len) {
        return None;
    }
    let lower = sentence.to_lowercase();
    if lexicon.is_noisy(&lower) {
        return None;
    }
    if lower.matches('.').count() > MAX_SENTENCE_PERIODS {
        return None;
    }
    if sentence
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, ' ' | '.' | '-'))
    {
        return None;
    }
    Some(sentence.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> LexiconConfig {
        LexiconConfig::default()
    }

    #[test]
    fn normalize_inline_whitespace_collapses_runs() {
        let input = "Alpha\n\n  Beta\tGamma";
        assert_eq!(normalize_inline_whitespace(input), "Alpha Beta Gamma");
    }

    #[test]
    fn information_separators_break_sentences() {
        let text = "Kinderen bouwen samen een toren met blokken in de klas.\u{001F}\
                    Daarna tellen ze hoeveel blokken de toren hoog is geworden.";
        assert_eq!(
            split_sentences(text, &lexicon()),
            vec![
                "Kinderen bouwen samen een toren met blokken in de klas.",
                "Daarna tellen ze hoeveel blokken de toren hoog is geworden.",
            ]
        );
        assert_eq!(normalize_inline_whitespace("a\u{001C}\u{001D} b"), "a b");
    }

    #[test]
    fn text_terms_filters_short_stopwords_and_digits() {
        let terms = text_terms(
            "De leerlingen tellen 2024 blokjes in groep3 en zijn klaar-gezet",
            &lexicon(),
        );
        let got: Vec<&str> = terms.iter().map(String::as_str).collect();
        assert_eq!(got, vec!["blokjes", "klaar-gezet", "tellen"]);
    }

    #[test]
    fn text_terms_keeps_accented_letters_in_tokens() {
        let terms = text_terms("Één reeën-paar ÉCOLE", &lexicon());
        assert!(terms.contains("reeën-paar"));
        assert!(terms.contains("école"));
        assert!(!terms.contains("één"));
    }

    #[test]
    fn text_terms_splits_on_characters_outside_the_token_class() {
        let terms = text_terms("meten/wegen; vergelijken", &lexicon());
        let got: Vec<&str> = terms.iter().map(String::as_str).collect();
        assert_eq!(got, vec!["meten", "vergelijken", "wegen"]);
    }

    #[test]
    fn split_sentences_drops_noisy_boilerplate() {
        let text = "Katholiek Onderwijs Vlaanderen – Inhoudsopgave p.3";
        assert!(split_sentences(text, &lexicon()).is_empty());
    }

    #[test]
    fn split_sentences_breaks_on_bullets_and_terminal_punctuation() {
        let text = "• Kinderen ontdekken getallen door te tellen in spelsituaties.\n\
                    Waarom vergelijken kinderen hoeveelheden in de klas zo graag? Kort.";
        let result = split_sentences(text, &lexicon());
        assert_eq!(
            result,
            vec![
                "Kinderen ontdekken getallen door te tellen in spelsituaties.".to_string(),
                "Waarom vergelijken kinderen hoeveelheden in de klas zo graag?".to_string(),
            ]
        );
    }

    #[test]
    fn split_sentences_trims_hyphen_space_and_respects_bounds() {
        let long = format!("{}.", "a".repeat(261));
        let text =
            format!("- Ruimtelijke oriëntatie groeit door veel bewegen in de turnzaal. - {long}");
        let result = split_sentences(&text, &lexicon());
        assert_eq!(
            result,
            vec!["Ruimtelijke oriëntatie groeit door veel bewegen in de turnzaal.".to_string()]
        );
        for sentence in &result {
            let len = sentence.chars().count();
            assert!((MIN_SENTENCE_CHARS..=MAX_SENTENCE_CHARS).contains(&len));
        }
    }

    #[test]
    fn split_sentences_rejects_list_like_and_numeric_candidates() {
        let dotted = "Zie de paragrafen 1.2.3.4.5 voor meer uitleg over tellen en meten.";
        assert!(split_sentences(dotted, &lexicon()).is_empty());

        let numeric = "12 34 56 78 90 12 34 56 78 90 12 34 56 78 90 12 34";
        assert!(split_sentences(numeric, &lexicon()).is_empty());
    }

    #[test]
    fn split_sentences_uses_only_the_given_noise_patterns() {
        let text = "Katholiek Onderwijs Vlaanderen – Inhoudsopgave p.3";
        let result = split_sentences(text, &LexiconConfig::empty());
        assert_eq!(result, vec![text.to_string()]);
    }
}
