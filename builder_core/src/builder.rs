//! Tag-sequence builder state machine

use serde::{Deserialize, Serialize};
use tag_types::{DataPatch, IdGenerator, Key, KeyEvent, RandomIds, Tag, TagDraft, TagId};

use crate::tokenizer::{TagClassifier, TokenizeError, Tokenizer};

/// Builder construction options
///
/// The host-facing initialization contract: an identifier to parse into the
/// starting sequence, the literal alphabet, and the raw keys that insert
/// tags. The alphabet and key set are fixed for the builder's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderOptions {
    /// Identifier parsed into the starting sequence (may be empty)
    pub initial_id: String,
    /// Allowed literal alphabet, in match-precedence order
    pub allowed_tags: Vec<String>,
    /// Raw characters that insert a tag of the matching kind when pressed
    pub allowed_keys: Vec<char>,
}

/// Outcome from applying a key event to the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Sequence or cursor changed
    Changed,
    /// Key not recognized, or the edit saturated at a boundary
    Ignored,
    /// Event came from an actively edited text field and was dropped whole
    Swallowed,
}

/// Serializable snapshot of builder state
///
/// An owned copy: operations applied to the builder after a snapshot is
/// taken never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderSnapshot<K, D> {
    pub tags: Vec<Tag<K, D>>,
    pub focused: Option<usize>,
}

/// Tag-sequence builder
///
/// Owns the ordered tag list and the focus cursor. The cursor addresses the
/// gaps between tags: `None` is the gap before the first tag, `Some(i)` the
/// gap just after tag `i`, so `focused < tags.len()` holds after every
/// operation. Operations whose precondition fails are saturating no-ops;
/// nothing here panics or returns an error.
pub struct IdBuilder<K, D> {
    tags: Vec<Tag<K, D>>,
    focused: Option<usize>,
    allowed_keys: Vec<char>,
    classifier: Box<dyn TagClassifier<K, D>>,
    ids: Box<dyn IdGenerator>,
}

impl<K, D> IdBuilder<K, D> {
    /// Creates a builder with random tag ids
    pub fn new(
        classifier: impl TagClassifier<K, D> + 'static,
        options: BuilderOptions,
    ) -> Result<Self, TokenizeError> {
        Self::with_generator(classifier, options, Box::new(RandomIds))
    }

    /// Creates a builder with an injected id generator
    ///
    /// The initial identifier is parsed once, here; the starting cursor
    /// sits after the last parsed tag.
    pub fn with_generator(
        classifier: impl TagClassifier<K, D> + 'static,
        options: BuilderOptions,
        mut ids: Box<dyn IdGenerator>,
    ) -> Result<Self, TokenizeError> {
        let tokenizer = Tokenizer::new(&options.allowed_tags)?;
        let tags = if options.initial_id.is_empty() {
            Vec::new()
        } else {
            tokenizer.tokenize(&options.initial_id, &classifier, ids.as_mut())
        };
        let focused = tags.len().checked_sub(1);
        Ok(Self {
            tags,
            focused,
            allowed_keys: options.allowed_keys,
            classifier: Box::new(classifier),
            ids,
        })
    }

    // Accessors for hosts and tests

    /// The current tag sequence, in rendered order
    pub fn tags(&self) -> &[Tag<K, D>] {
        &self.tags
    }

    /// The gap the cursor sits at (`None` = before the first tag)
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// The raw characters that insert tags when pressed
    pub fn allowed_keys(&self) -> &[char] {
        &self.allowed_keys
    }

    /// Number of tags in the sequence
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when the sequence holds no tags
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// True when the cursor sits just after tag `index`
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// Takes an owned snapshot of sequence and cursor
    pub fn snapshot(&self) -> BuilderSnapshot<K, D>
    where
        K: Clone,
        D: Clone,
    {
        BuilderSnapshot {
            tags: self.tags.clone(),
            focused: self.focused,
        }
    }

    // Operations

    /// Gap index the next insertion targets
    fn insert_position(&self) -> usize {
        self.focused.map_or(0, |index| index + 1)
    }

    /// Inserts a new tag just after the cursor and focuses it
    pub fn insert(&mut self, draft: TagDraft<K, D>) -> TagId {
        let id = self.ids.next_id();
        let at = self.insert_position();
        self.tags.insert(at, draft.into_tag(id));
        self.focused = Some(at);
        id
    }

    /// Replaces the tag with `id` in place, or inserts the draft as new
    ///
    /// A replacement keeps the existing id and moves the cursor to the
    /// replaced tag; an unknown id behaves exactly like [`Self::insert`].
    pub fn upsert_by_id(&mut self, draft: TagDraft<K, D>, id: TagId) -> TagId {
        match self.tags.iter().position(|tag| tag.id == id) {
            Some(index) => {
                self.tags[index] = draft.into_tag(id);
                self.focused = Some(index);
                id
            }
            None => self.insert(draft),
        }
    }

    /// Removes the tag at the cursor; no-op at the leading gap
    pub fn remove_backward(&mut self) -> bool {
        match self.focused {
            Some(index) => {
                self.tags.remove(index);
                self.focused = index.checked_sub(1);
                true
            }
            None => false,
        }
    }

    /// Removes the tag just after the cursor; no-op when none exists
    ///
    /// The cursor does not move.
    pub fn remove_forward(&mut self) -> bool {
        let next = self.insert_position();
        if next < self.tags.len() {
            self.tags.remove(next);
            true
        } else {
            false
        }
    }

    /// Moves the cursor one gap right; no-op at the trailing gap
    pub fn go_forward(&mut self) -> bool {
        let next = self.insert_position();
        if next < self.tags.len() {
            self.focused = Some(next);
            true
        } else {
            false
        }
    }

    /// Moves the cursor one gap left; no-op at the leading gap
    pub fn go_backward(&mut self) -> bool {
        match self.focused {
            Some(index) => {
                self.focused = index.checked_sub(1);
                true
            }
            None => false,
        }
    }

    /// Places the cursor at an arbitrary gap; out-of-range is a no-op
    pub fn set_focused(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(i) if i >= self.tags.len() => false,
            _ => {
                self.focused = index;
                true
            }
        }
    }

    /// Shallow-merges a partial payload into the tag with `id`
    ///
    /// Sequence length, order, and every tag's id and kind are untouched; a
    /// tag holding no payload receives the patch wholesale. Unknown ids are
    /// a no-op.
    pub fn merge_data(&mut self, id: TagId, patch: D) -> bool
    where
        D: DataPatch,
    {
        match self.tags.iter_mut().find(|tag| tag.id == id) {
            Some(tag) => {
                match tag.data.as_mut() {
                    Some(data) => data.merge(patch),
                    None => tag.data = Some(patch),
                }
                true
            }
            None => false,
        }
    }

    /// Empties the sequence and rests the cursor at the leading gap
    pub fn clear(&mut self) {
        self.tags.clear();
        self.focused = None;
    }

    /// Applies one keyboard event
    ///
    /// Events typed into a non-empty inline text field are swallowed whole
    /// so text editing never also moves the tag cursor. Otherwise Backspace
    /// and Delete edit around the cursor, the arrows move it, and a
    /// character in the allowed-keys set inserts a payload-free tag of the
    /// matching kind. Non-press events and everything else are ignored.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        if !event.is_pressed() {
            return KeyOutcome::Ignored;
        }
        if event.origin.is_active_text_edit() {
            return KeyOutcome::Swallowed;
        }

        let changed = match event.key {
            Key::Backspace => self.remove_backward(),
            Key::Delete => self.remove_forward(),
            Key::Left => self.go_backward(),
            Key::Right => self.go_forward(),
            Key::Char(c) if self.allowed_keys.contains(&c) => {
                let literal = c.to_string();
                let draft = self.classifier.classify(&literal).without_data();
                self.insert(draft);
                true
            }
            _ => false,
        };

        if changed {
            KeyOutcome::Changed
        } else {
            KeyOutcome::Ignored
        }
    }
}
