//! Reference ID-format alphabet
//!
//! The concrete tag vocabulary for composing site identifiers: character
//! placeholders, separator punctuation, a fixed site placeholder, quoted
//! free-text runs, and character ranges. Integrators with other vocabularies
//! supply their own kind enum and classifier; the builder is generic over
//! both.

use serde::{Deserialize, Serialize};
use tag_types::{DataPatch, Tag, TagDraft};

use crate::builder::BuilderOptions;
use crate::render::TagStyle;
use crate::tokenizer::TagClassifier;

/// Tag kinds for identifier composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdFormat {
    /// A numeric character position
    Number,
    /// An alphabetic character position
    Alpha,
    /// An alphanumeric character position
    AlphaNum,
    /// Group separator
    Hyphen,
    /// Group separator
    Underscore,
    /// Group separator
    Slash,
    /// The site placeholder, expanded by downstream systems
    Placeholder,
    /// A double-quoted free-text run
    Text,
    /// An inclusive character range
    Range,
}

impl IdFormat {
    /// The literal this kind matches in a raw identifier
    pub fn literal(&self) -> &'static str {
        match self {
            IdFormat::Number => "N",
            IdFormat::Alpha => "A",
            IdFormat::AlphaNum => "S",
            IdFormat::Hyphen => "-",
            IdFormat::Underscore => "_",
            IdFormat::Slash => "/",
            IdFormat::Placeholder => "{SITE_ID}",
            IdFormat::Text => "\"string\"",
            IdFormat::Range => "Range",
        }
    }

    /// True for kinds that end a visual group
    pub fn is_separator(&self) -> bool {
        matches!(
            self,
            IdFormat::Hyphen | IdFormat::Underscore | IdFormat::Slash
        )
    }
}

/// An inclusive start/end pair carried by range tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    pub start: String,
    pub end: String,
}

impl IdRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Payload for text and range tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdData {
    /// Quoted text carried by a [`IdFormat::Text`] tag
    pub text: Option<String>,
    /// Range carried by a [`IdFormat::Range`] tag
    pub range: Option<IdRange>,
}

impl DataPatch for IdData {
    // Field-wise shallow merge: an incoming Some replaces, None keeps.
    fn merge(&mut self, patch: Self) {
        if patch.text.is_some() {
            self.text = patch.text;
        }
        if patch.range.is_some() {
            self.range = patch.range;
        }
    }
}

/// Classifier for the reference alphabet
///
/// Quoted runs become [`IdFormat::Text`] tags carrying the quoted text;
/// known literals map to their kind; anything else degrades to a text tag
/// carrying the raw match.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdFormatClassifier;

impl TagClassifier<IdFormat, IdData> for IdFormatClassifier {
    fn classify(&self, literal: &str) -> TagDraft<IdFormat, IdData> {
        if literal.len() >= 2 && literal.starts_with('"') && literal.ends_with('"') {
            return TagDraft::new(IdFormat::Text).with_data(IdData {
                text: Some(literal.to_string()),
                range: None,
            });
        }
        match literal {
            "N" => TagDraft::new(IdFormat::Number),
            "A" => TagDraft::new(IdFormat::Alpha),
            "S" => TagDraft::new(IdFormat::AlphaNum),
            "-" => TagDraft::new(IdFormat::Hyphen),
            "_" => TagDraft::new(IdFormat::Underscore),
            "/" => TagDraft::new(IdFormat::Slash),
            "{SITE_ID}" => TagDraft::new(IdFormat::Placeholder),
            "Range" => TagDraft::new(IdFormat::Range),
            other => TagDraft::new(IdFormat::Text).with_data(IdData {
                text: Some(other.to_string()),
                range: None,
            }),
        }
    }
}

/// The default allowed-literal alphabet
///
/// The multi-character placeholder comes first so it is never shadowed by a
/// single-letter alternative at the same position.
pub fn default_allowed_tags() -> Vec<String> {
    [
        IdFormat::Placeholder,
        IdFormat::Alpha,
        IdFormat::AlphaNum,
        IdFormat::Hyphen,
        IdFormat::Number,
        IdFormat::Slash,
        IdFormat::Underscore,
    ]
    .iter()
    .map(|kind| kind.literal().to_string())
    .collect()
}

/// The default set of raw keys that insert tags
pub fn default_allowed_keys() -> Vec<char> {
    vec!['/', '-', '_', 'A', 'S', 'N']
}

/// Options for the reference alphabet with the given starting identifier
pub fn default_options(initial_id: impl Into<String>) -> BuilderOptions {
    BuilderOptions {
        initial_id: initial_id.into(),
        allowed_tags: default_allowed_tags(),
        allowed_keys: default_allowed_keys(),
    }
}

/// Style records for the reference alphabet
///
/// Separator flags split visual groups at hyphen, underscore, and slash;
/// text and range tags render from their payload the way hosts display
/// them, colors are opaque hints passed through to hosts.
pub fn default_styles() -> Vec<TagStyle<IdFormat, IdData>> {
    vec![
        TagStyle::new(IdFormat::Number, "N").with_color("#b4d8f1"),
        TagStyle::new(IdFormat::Alpha, "A").with_color("#fabb91"),
        TagStyle::new(IdFormat::AlphaNum, "S").with_color("#ffdea1"),
        TagStyle::new(IdFormat::Placeholder, "{SITE_ID}").with_color("#bce4b4"),
        TagStyle::new(IdFormat::Hyphen, "-").separator(),
        TagStyle::new(IdFormat::Underscore, "_").separator(),
        TagStyle::new(IdFormat::Slash, "/").separator(),
        TagStyle::new(IdFormat::Text, "\"string\"")
            .with_color("#ff6347")
            .with_renderer(render_text),
        TagStyle::new(IdFormat::Range, "Range")
            .with_color("#ffdefc")
            .with_renderer(render_range),
    ]
}

fn render_text(tag: &Tag<IdFormat, IdData>) -> String {
    tag.data
        .as_ref()
        .and_then(|data| data.text.clone())
        .unwrap_or_else(|| String::from("\"\""))
}

fn render_range(tag: &Tag<IdFormat, IdData>) -> String {
    match tag.data.as_ref().and_then(|data| data.range.as_ref()) {
        Some(range) => format!("Range ({}-{})", range.start, range.end),
        None => String::from("Range"),
    }
}
