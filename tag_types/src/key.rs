//! Platform-independent key events
//!
//! Hosts translate whatever input they receive (DOM events, terminal bytes,
//! scan codes) into these types before handing them to the builder.

use serde::{Deserialize, Serialize};

/// Logical key, not a hardware scan code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character as produced by the keyboard layout
    Char(char),

    // Editing
    Backspace,
    Delete,

    // Navigation
    Left,
    Right,

    /// Unknown/unmapped key
    Unknown,
}

/// Key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    /// Key was pressed down
    Pressed,
    /// Key was released
    Released,
    /// Key is auto-repeating
    Repeat,
}

/// Where a key event originated
///
/// The builder swallows events typed into a non-empty inline text field so
/// that editing a string tag's text never also moves the tag cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyOrigin {
    /// The builder strip itself
    Builder,
    /// An inline editable text field belonging to a string tag;
    /// `populated` is true when the field currently holds text
    TextField { populated: bool },
}

impl KeyOrigin {
    /// True for events typed into a non-empty inline text field
    pub fn is_active_text_edit(&self) -> bool {
        matches!(self, Self::TextField { populated: true })
    }
}

/// A single keyboard event delivered to the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key involved
    pub key: Key,
    /// Event state (pressed, released, repeat)
    pub state: KeyState,
    /// Where the event originated
    pub origin: KeyOrigin,
}

impl KeyEvent {
    /// Creates a new key event
    pub fn new(key: Key, state: KeyState, origin: KeyOrigin) -> Self {
        Self { key, state, origin }
    }

    /// Creates a key pressed event from the builder strip
    pub fn pressed(key: Key) -> Self {
        Self::new(key, KeyState::Pressed, KeyOrigin::Builder)
    }

    /// Creates a key released event from the builder strip
    pub fn released(key: Key) -> Self {
        Self::new(key, KeyState::Released, KeyOrigin::Builder)
    }

    /// Creates a key pressed event originating in an inline text field
    pub fn from_text_field(key: Key, populated: bool) -> Self {
        Self::new(key, KeyState::Pressed, KeyOrigin::TextField { populated })
    }

    /// Returns true if this is a press event
    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }
}
