//! Tag identity and sequence element types

use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tag
///
/// Assigned when a tag enters a sequence and stable for the tag's whole
/// lifetime. Ids are never reused within a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(Uuid);

impl TagId {
    /// Creates a new random tag ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a tag ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TagId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag:{}", self.0)
    }
}

/// A single typed token in an edited tag sequence
///
/// `K` is the integrator-supplied closed set of tag kinds; `D` is an opaque
/// auxiliary payload. The builder never inspects `data`; it is replaced
/// wholesale or merged via [`DataPatch`], nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag<K, D> {
    /// Identity, unique within the sequence
    pub id: TagId,
    /// Tag kind
    pub kind: K,
    /// Auxiliary payload (free text, a range, ...)
    pub data: Option<D>,
}

impl<K, D> Tag<K, D> {
    /// Creates a tag with no payload
    pub fn new(id: TagId, kind: K) -> Self {
        Self {
            id,
            kind,
            data: None,
        }
    }

    /// Attaches a payload to this tag
    pub fn with_data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }
}

/// A tag without an id
///
/// What classifiers produce and callers hand to insert operations; the
/// builder assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDraft<K, D> {
    /// Tag kind
    pub kind: K,
    /// Auxiliary payload
    pub data: Option<D>,
}

impl<K, D> TagDraft<K, D> {
    /// Creates a draft with no payload
    pub fn new(kind: K) -> Self {
        Self { kind, data: None }
    }

    /// Attaches a payload to this draft
    pub fn with_data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }

    /// Promotes the draft to a tag with the given id
    pub fn into_tag(self, id: TagId) -> Tag<K, D> {
        Tag {
            id,
            kind: self.kind,
            data: self.data,
        }
    }

    /// Drops any payload the draft carries
    pub fn without_data(mut self) -> Self {
        self.data = None;
        self
    }
}

/// Shallow-merge contract for tag payloads
///
/// The builder's data-merge operation folds an incoming partial payload
/// into the existing one via this trait. Implementors decide field
/// semantics; the reference payload treats an incoming `Some` field as a
/// replacement and keeps existing fields otherwise.
pub trait DataPatch {
    /// Folds `patch` into `self`
    fn merge(&mut self, patch: Self);
}
