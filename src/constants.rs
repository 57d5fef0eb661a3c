/// Constants used by term extraction.
pub mod terms {
    /// Minimum character length of a query/fragment term.
    pub const MIN_TERM_CHARS: usize = 4;
}

/// Constants used by sentence segmentation.
pub mod sentences {
    /// Minimum sentence length in characters.
    pub const MIN_SENTENCE_CHARS: usize = 40;
    /// Maximum sentence length in characters.
    pub const MAX_SENTENCE_CHARS: usize = 260;
    /// Sentences with more periods than this are treated as lists or tables.
    pub const MAX_SENTENCE_PERIODS: usize = 4;
    /// Glyphs rewritten to a sentence break before splitting.
    pub const BREAK_GLYPHS: [char; 2] = ['•', '…'];
    /// Replacement inserted for each break glyph.
    pub const BREAK_REPLACEMENT: &str = ". ";
}

/// Constants used by fragment extraction.
pub mod fragments {
    /// Minimum number of distinct terms a sentence needs to become a fragment.
    pub const MIN_FRAGMENT_TERMS: usize = 3;
    /// Page separator used in plain-text document dumps.
    pub const PAGE_SEPARATOR: char = '\u{000C}';
    /// Extension of plain-text document dumps.
    pub const TEXT_EXTENSION: &str = "txt";
}

/// Constants used by vocabulary validation.
pub mod vocab {
    /// Minimum word length (characters) for child vocabulary.
    pub const MIN_WORD_CHARS: usize = 3;
    /// Maximum word length (characters) for child vocabulary.
    pub const MAX_WORD_CHARS: usize = 12;
    /// Maximum number of words in a vocabulary phrase.
    pub const MAX_PHRASE_WORDS: usize = 3;
    /// Delimiters separating phrases in a raw vocabulary field.
    pub const PHRASE_DELIMITERS: [char; 3] = [',', ';', '\n'];
    /// Suffixes stripped by the crude stemmer, tried in order.
    pub const STEM_SUFFIXES: [&str; 3] = ["en", "s", "e"];
    /// Words must be longer than this before a suffix is stripped.
    pub const STEM_MIN_CHARS: usize = 4;
}

/// Constants used by fragment matching.
pub mod matcher {
    /// Default number of fragments returned per goal.
    pub const DEFAULT_FRAGMENTS_PER_GOAL: usize = 3;
    /// Bonus for fragments containing a pedagogical indicator.
    pub const INDICATOR_BONUS: f64 = 0.3;
    /// Bonus when the goal's cluster name appears in the fragment.
    pub const CLUSTER_BONUS: f64 = 0.4;
    /// Bonus when the goal's sub-domain name appears in the fragment.
    pub const SUB_DOMAIN_BONUS: f64 = 0.4;
    /// Number of leading characters used to deduplicate fragments.
    pub const DEDUP_PREFIX_CHARS: usize = 120;
}

/// Constants used by vocabulary propagation.
pub mod propagation {
    /// Maximum own-vocabulary phrases returned.
    pub const MAX_OWN_PHRASES: usize = 12;
    /// Maximum propagated phrases returned.
    pub const MAX_PROPAGATED_PHRASES: usize = 10;
    /// Weight of the (subject, fine-code-A) level.
    pub const WEIGHT_FINE_CODE_A: f64 = 1.00;
    /// Weight of the (subject, fine-code-B) level.
    pub const WEIGHT_FINE_CODE_B: f64 = 0.90;
    /// Weight of the (subject, sub-domain, cluster) level.
    pub const WEIGHT_SUB_DOMAIN_CLUSTER: f64 = 0.80;
    /// Weight of the (subject, sub-domain) level.
    pub const WEIGHT_SUB_DOMAIN: f64 = 0.55;
    /// Weight of the (subject, cluster) level.
    pub const WEIGHT_CLUSTER: f64 = 0.55;
    /// Weight of the subject-wide level.
    pub const WEIGHT_SUBJECT: f64 = 0.15;
}

/// Constants used by the suggestion composer and report metadata.
pub mod report {
    /// Output field holding the generated examples text.
    pub const FIELD_EXAMPLES: &str = "suggested_voorbeelden";
    /// Output field holding the generated teacher note.
    pub const FIELD_TEACHER_NOTE: &str = "suggested_extra_toelichting";
    /// Output field holding the resolved vocabulary.
    pub const FIELD_VOCABULARY: &str = "suggested_woordenschat";
    /// Field names listed in the report metadata, in output order.
    pub const PRODUCED_FIELDS: [&str; 3] = [FIELD_EXAMPLES, FIELD_TEACHER_NOTE, FIELD_VOCABULARY];
    /// Timestamp layout used for `generated_at` (local time, seconds precision).
    pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    /// Separator joining vocabulary phrases in the output field.
    pub const VOCAB_JOIN: &str = ", ";
}
