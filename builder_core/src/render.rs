//! View production
//!
//! Views, not widgets: the builder emits structured frame data and hosts
//! draw it. Frames carry per-tag group boundaries (runs of tags
//! uninterrupted by a separator kind) so hosts can shape group corners
//! without recomputing runs, plus a one-line text rendering for console
//! hosts and test assertions.

use serde::{Deserialize, Serialize};
use tag_types::{Tag, TagId};

use crate::builder::IdBuilder;

/// Renders a tag to display text, taking precedence over the style label
pub type TagRenderer<K, D> = Box<dyn Fn(&Tag<K, D>) -> String>;

/// Caller-supplied display record for one tag kind
pub struct TagStyle<K, D> {
    /// The kind this record styles
    pub kind: K,
    /// Default display label
    pub label: String,
    /// Separator kinds end the visual group before them
    pub separator: bool,
    /// Opaque color hint, passed through to hosts untouched
    pub color: Option<String>,
    /// Optional custom renderer (text tags, range tags)
    pub renderer: Option<TagRenderer<K, D>>,
}

impl<K, D> TagStyle<K, D> {
    /// Creates a record with the given display label
    pub fn new(kind: K, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            separator: false,
            color: None,
            renderer: None,
        }
    }

    /// Marks this kind as a group separator
    pub fn separator(mut self) -> Self {
        self.separator = true;
        self
    }

    /// Attaches an opaque color hint
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attaches a custom renderer
    pub fn with_renderer(mut self, renderer: impl Fn(&Tag<K, D>) -> String + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }
}

/// One rendered tag in a frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCell {
    pub id: TagId,
    /// Display text (custom renderer output or the style label)
    pub text: String,
    /// The cursor sits just after this tag
    pub focused: bool,
    pub separator: bool,
    /// First tag of its visual group
    pub group_start: bool,
    /// Last tag of its visual group
    pub group_end: bool,
    pub color: Option<String>,
}

/// A complete view frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFrame {
    /// The cursor sits at the gap before the first tag
    pub leading_caret: bool,
    /// A clear action is meaningful (the sequence is non-empty)
    pub clear_enabled: bool,
    /// Host-supplied error label, carried verbatim
    pub error: Option<String>,
    pub cells: Vec<TagCell>,
}

/// Produces view frames from builder state
pub struct BuilderView<K, D> {
    styles: Vec<TagStyle<K, D>>,
    error: Option<String>,
}

impl<K: PartialEq, D> BuilderView<K, D> {
    /// Creates a view over a set of style records
    pub fn new(styles: Vec<TagStyle<K, D>>) -> Self {
        Self {
            styles,
            error: None,
        }
    }

    /// Sets the error label carried verbatim in every frame
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    fn style(&self, kind: &K) -> Option<&TagStyle<K, D>> {
        self.styles.iter().find(|style| style.kind == *kind)
    }

    fn is_separator(&self, tag: &Tag<K, D>) -> bool {
        self.style(&tag.kind).is_some_and(|style| style.separator)
    }

    fn text_for(&self, tag: &Tag<K, D>) -> String {
        match self.style(&tag.kind) {
            Some(style) => match &style.renderer {
                Some(render) => render(tag),
                None => style.label.clone(),
            },
            // Unregistered kind: render a placeholder rather than fail.
            None => String::from("?"),
        }
    }

    /// Builds a frame for the current builder state
    pub fn frame(&self, builder: &IdBuilder<K, D>) -> ViewFrame {
        let tags = builder.tags();
        let cells = tags
            .iter()
            .enumerate()
            .map(|(index, tag)| {
                let group_start = index == 0 || self.is_separator(&tags[index - 1]);
                let group_end = index + 1 == tags.len() || self.is_separator(&tags[index + 1]);
                TagCell {
                    id: tag.id,
                    text: self.text_for(tag),
                    focused: builder.is_focused(index),
                    separator: self.is_separator(tag),
                    group_start,
                    group_end,
                    color: self.style(&tag.kind).and_then(|style| style.color.clone()),
                }
            })
            .collect();

        ViewFrame {
            leading_caret: builder.focused_index().is_none(),
            clear_enabled: !builder.is_empty(),
            error: self.error.clone(),
            cells,
        }
    }

    /// Renders the sequence on one line with the cursor position bracketed
    ///
    /// `[]` leads the line when the cursor sits before the first tag;
    /// otherwise the tag the cursor follows is bracketed.
    pub fn render_line(&self, builder: &IdBuilder<K, D>) -> String {
        let mut parts: Vec<String> = Vec::new();
        if builder.focused_index().is_none() {
            parts.push(String::from("[]"));
        }
        for (index, tag) in builder.tags().iter().enumerate() {
            let text = self.text_for(tag);
            if builder.is_focused(index) {
                parts.push(format!("[{}]", text));
            } else {
                parts.push(text);
            }
        }
        parts.join(" ")
    }
}
