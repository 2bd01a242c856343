//! # Builder Core
//!
//! Keyboard-driven construction of formatted identifiers from a sequence of
//! typed tags.
//!
//! ## Philosophy
//!
//! - **Tags, not characters**: the edited value is an ordered list of
//!   atomic typed tokens with a cursor in the gaps between them
//! - **Deterministic**: the same event trace with the same id generator
//!   yields the same state
//! - **Saturating edits**: out-of-range navigation and removal are no-ops,
//!   never errors, so keyboard-driven use needs no guards
//! - **Mechanism over policy**: the core owns sequence and cursor; hosts
//!   decide rendering and manage real input focus
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A text editor: tags are atomic; no undo/redo, multi-cursor, clipboard
//! - A validator of composed identifiers against external formats
//! - A styling system; hosts consume structured [`render::ViewFrame`] data
//!
//! ## Design
//!
//! - [`tokenizer::Tokenizer`]: parses an initial identifier into tags, once
//! - [`builder::IdBuilder`]: the sequence/cursor state machine and keyboard
//!   dispatch
//! - [`render::BuilderView`]: structured view frames with group boundaries
//! - [`format`]: the reference ID-format alphabet

pub mod builder;
pub mod format;
pub mod render;
pub mod tokenizer;

pub use builder::{BuilderOptions, BuilderSnapshot, IdBuilder, KeyOutcome};
pub use format::{IdData, IdFormat, IdFormatClassifier, IdRange};
pub use render::{BuilderView, TagCell, TagStyle, ViewFrame};
pub use tokenizer::{TagClassifier, TokenizeError, Tokenizer};
