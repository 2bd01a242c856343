//! Initial-string tokenization
//!
//! Parses a raw identifier into typed tags with a single alternation
//! pattern: the allowed literals in caller order, plus a dedicated
//! alternative for double-quoted free-text runs. Characters between matches
//! are dropped; this is a lenient best-effort parse, not validation.

use regex::Regex;
use tag_types::{IdGenerator, Tag, TagDraft};
use thiserror::Error;

/// Tokenizer construction error
#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("invalid tag alphabet: {0}")]
    Pattern(#[from] regex::Error),
}

/// Classifies a matched literal into a tag draft
///
/// One classifier per alphabet, supplied by the integrator. The tokenizer
/// consults it for every match; the builder consults it when an allowed key
/// inserts a tag. Any `Fn(&str) -> TagDraft<K, D>` qualifies.
pub trait TagClassifier<K, D> {
    /// Maps a matched substring to a draft
    fn classify(&self, literal: &str) -> TagDraft<K, D>;
}

impl<K, D, F> TagClassifier<K, D> for F
where
    F: Fn(&str) -> TagDraft<K, D>,
{
    fn classify(&self, literal: &str) -> TagDraft<K, D> {
        self(literal)
    }
}

/// Matches a double-quoted run of non-quote characters.
const QUOTED_RUN: &str = r#""[^"]+""#;

/// Scanner for initial identifier strings
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Builds a tokenizer for an allowed-literal alphabet
    ///
    /// Alternatives are tried in caller order and the leftmost wins, so a
    /// literal that is a prefix of another must come after it. The
    /// quoted-run alternative is always appended last.
    pub fn new<S: AsRef<str>>(allowed: &[S]) -> Result<Self, TokenizeError> {
        let mut alternatives: Vec<String> = allowed
            .iter()
            .map(|literal| regex::escape(literal.as_ref()))
            .collect();
        alternatives.push(QUOTED_RUN.to_string());
        let pattern = Regex::new(&alternatives.join("|"))?;
        Ok(Self { pattern })
    }

    /// Tokenizes `input`, assigning a fresh id to every match
    ///
    /// Unrecognized characters between matches are silently dropped; an
    /// empty input yields an empty sequence.
    pub fn tokenize<K, D>(
        &self,
        input: &str,
        classifier: &dyn TagClassifier<K, D>,
        ids: &mut dyn IdGenerator,
    ) -> Vec<Tag<K, D>> {
        self.pattern
            .find_iter(input)
            .map(|found| classifier.classify(found.as_str()).into_tag(ids.next_id()))
            .collect()
    }
}
