#![no_std]

//! # Tag Types
//!
//! This crate defines the boundary types for the tag-sequence ID builder.
//!
//! ## Philosophy
//!
//! - **Tags, not strings**: an identifier under construction is a sequence
//!   of discrete typed tokens, not a character buffer
//! - **Explicit identity**: every tag carries an id assigned at creation,
//!   stable across mutation, never reused
//! - **No ambient authority**: id generation is an injected capability, not
//!   a process-wide generator
//! - **Testable**: types are serializable and can be injected for testing
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A text buffer or rope
//! - A rendering model (styles and views live with the builder)
//! - A keyboard driver (hosts translate their input into [`KeyEvent`])

extern crate alloc;

pub mod idgen;
pub mod key;
pub mod tag;

pub use idgen::{IdGenerator, RandomIds, SequenceIds};
pub use key::{Key, KeyEvent, KeyOrigin, KeyState};
pub use tag::{DataPatch, Tag, TagDraft, TagId};
