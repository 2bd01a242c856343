//! Integration tests for the ID builder
//!
//! These tests validate complete editing workflows using simulated keyboard
//! input over the reference alphabet, with deterministic ids.

use builder_core::{
    format, BuilderOptions, BuilderView, IdBuilder, IdData, IdFormat, IdFormatClassifier,
    KeyOutcome,
};
use tag_types::{IdGenerator, Key, KeyEvent, SequenceIds, TagDraft};

fn press(key: Key) -> KeyEvent {
    KeyEvent::pressed(key)
}

fn builder_from(initial: &str) -> IdBuilder<IdFormat, IdData> {
    IdBuilder::with_generator(
        IdFormatClassifier,
        format::default_options(initial),
        Box::new(SequenceIds::new()),
    )
    .unwrap()
}

fn kinds(builder: &IdBuilder<IdFormat, IdData>) -> Vec<IdFormat> {
    builder.tags().iter().map(|tag| tag.kind).collect()
}

#[test]
fn test_initial_identifier_parses_into_tags() {
    let builder = builder_from("NN_SSS/{SITE_ID}");

    assert_eq!(
        kinds(&builder),
        vec![
            IdFormat::Number,
            IdFormat::Number,
            IdFormat::Underscore,
            IdFormat::AlphaNum,
            IdFormat::AlphaNum,
            IdFormat::AlphaNum,
            IdFormat::Slash,
            IdFormat::Placeholder,
        ]
    );
    assert_eq!(builder.focused_index(), Some(7));
}

#[test]
fn test_backspace_then_delete_scenario() {
    // Sequence [A, N] with the cursor after N: Backspace removes N and the
    // cursor lands after A; Delete is then a no-op since no tag follows.
    let builder_options = BuilderOptions {
        initial_id: String::from("AN"),
        allowed_tags: vec![String::from("A"), String::from("N")],
        allowed_keys: vec!['A', 'N'],
    };
    let mut builder = IdBuilder::with_generator(
        IdFormatClassifier,
        builder_options,
        Box::new(SequenceIds::new()),
    )
    .unwrap();
    assert_eq!(builder.focused_index(), Some(1));

    assert_eq!(builder.handle_key(&press(Key::Backspace)), KeyOutcome::Changed);
    assert_eq!(kinds(&builder), vec![IdFormat::Alpha]);
    assert_eq!(builder.focused_index(), Some(0));

    assert_eq!(builder.handle_key(&press(Key::Delete)), KeyOutcome::Ignored);
    assert_eq!(kinds(&builder), vec![IdFormat::Alpha]);
    assert_eq!(builder.focused_index(), Some(0));
}

#[test]
fn test_typing_allowed_keys_builds_sequence() {
    let mut builder = builder_from("");

    for key in ['N', 'N', '-', 'S'] {
        assert_eq!(
            builder.handle_key(&press(Key::Char(key))),
            KeyOutcome::Changed
        );
    }

    assert_eq!(
        kinds(&builder),
        vec![
            IdFormat::Number,
            IdFormat::Number,
            IdFormat::Hyphen,
            IdFormat::AlphaNum,
        ]
    );
    assert_eq!(builder.focused_index(), Some(3));
    // Key-driven inserts never carry a payload.
    assert!(builder.tags().iter().all(|tag| tag.data.is_none()));
}

#[test]
fn test_disallowed_key_is_ignored() {
    let mut builder = builder_from("N");
    assert_eq!(
        builder.handle_key(&press(Key::Char('Z'))),
        KeyOutcome::Ignored
    );
    assert_eq!(builder.len(), 1);
}

#[test]
fn test_released_keys_are_ignored() {
    let mut builder = builder_from("N");
    assert_eq!(
        builder.handle_key(&KeyEvent::released(Key::Backspace)),
        KeyOutcome::Ignored
    );
    assert_eq!(builder.len(), 1);
}

#[test]
fn test_active_text_field_swallows_every_key() {
    let mut builder = builder_from("N\"hi\"A");
    let before = builder.snapshot();

    for key in [Key::Backspace, Key::Delete, Key::Left, Key::Right, Key::Char('N')] {
        assert_eq!(
            builder.handle_key(&KeyEvent::from_text_field(key, true)),
            KeyOutcome::Swallowed
        );
    }

    assert_eq!(builder.snapshot(), before);
}

#[test]
fn test_empty_text_field_does_not_swallow() {
    let mut builder = builder_from("N\"hi\"A");
    let outcome = builder.handle_key(&KeyEvent::from_text_field(Key::Backspace, false));

    assert_eq!(outcome, KeyOutcome::Changed);
    assert_eq!(builder.len(), 2);
}

#[test]
fn test_arrow_navigation_walks_the_gaps() {
    let mut builder = builder_from("NAS");
    assert_eq!(builder.focused_index(), Some(2));

    builder.handle_key(&press(Key::Left));
    builder.handle_key(&press(Key::Left));
    builder.handle_key(&press(Key::Left));
    assert_eq!(builder.focused_index(), None);

    // Saturated at the leading gap.
    assert_eq!(builder.handle_key(&press(Key::Left)), KeyOutcome::Ignored);
    assert_eq!(builder.focused_index(), None);

    builder.handle_key(&press(Key::Right));
    assert_eq!(builder.focused_index(), Some(0));
}

#[test]
fn test_range_tag_round_trip_through_upsert_and_merge() {
    let mut builder = builder_from("NN-");

    // A host widget adds a range tag, then edits it in place.
    let id = builder.upsert_by_id(
        TagDraft::new(IdFormat::Range),
        SequenceIds::starting_at(999).next_id(),
    );
    assert_eq!(builder.len(), 4);
    assert_eq!(builder.focused_index(), Some(3));

    builder.merge_data(
        id,
        IdData {
            text: None,
            range: Some(format::IdRange::new("a", "f")),
        },
    );
    builder.merge_data(
        id,
        IdData {
            text: None,
            range: Some(format::IdRange::new("a", "z")),
        },
    );

    let range = builder.tags()[3]
        .data
        .as_ref()
        .and_then(|data| data.range.as_ref())
        .unwrap();
    assert_eq!(range.end, "z");

    // Replacing through upsert keeps the id and position.
    builder.upsert_by_id(TagDraft::new(IdFormat::Number), id);
    assert_eq!(builder.tags()[3].id, id);
    assert_eq!(builder.tags()[3].kind, IdFormat::Number);
    assert_eq!(builder.len(), 4);
}

#[test]
fn test_string_tag_edit_session() {
    // Parse an identifier with a quoted run, edit the text through the
    // data-merge path, and confirm the view reflects it.
    let mut builder = builder_from("NN\"mystring\"AA");
    let text_id = builder.tags()[2].id;

    builder.merge_data(
        text_id,
        IdData {
            text: Some(String::from("\"renamed\"")),
            range: None,
        },
    );

    let view = BuilderView::new(format::default_styles());
    let frame = view.frame(&builder);
    assert_eq!(frame.cells[2].text, "\"renamed\"");
    assert_eq!(frame.cells.len(), 5);
}

#[test]
fn test_clear_resets_sequence_and_cursor() {
    let mut builder = builder_from("NN_SSS");
    builder.clear();

    assert!(builder.is_empty());
    assert_eq!(builder.focused_index(), None);

    // The builder stays usable after a clear.
    builder.handle_key(&press(Key::Char('N')));
    assert_eq!(kinds(&builder), vec![IdFormat::Number]);
    assert_eq!(builder.focused_index(), Some(0));
}

#[test]
fn test_full_compose_session() {
    let mut builder = builder_from("");
    let view = BuilderView::new(format::default_styles());

    // Type NN_S, step back over the S, delete it forward again.
    for key in ['N', 'N', '_', 'S'] {
        builder.handle_key(&press(Key::Char(key)));
    }
    assert_eq!(view.render_line(&builder), "N N _ [S]");

    builder.handle_key(&press(Key::Left));
    assert_eq!(view.render_line(&builder), "N N [_] S");

    builder.handle_key(&press(Key::Delete));
    assert_eq!(view.render_line(&builder), "N N [_]");

    builder.handle_key(&press(Key::Backspace));
    assert_eq!(view.render_line(&builder), "N [N]");

    let frame = view.frame(&builder);
    assert!(frame.cells[1].focused);
    assert!(frame.clear_enabled);
}

#[test]
fn test_deterministic_ids_reproduce_across_runs() {
    let first = builder_from("NN_S");
    let second = builder_from("NN_S");

    let first_ids: Vec<_> = first.tags().iter().map(|tag| tag.id).collect();
    let second_ids: Vec<_> = second.tags().iter().map(|tag| tag.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn test_random_builder_construction() {
    let builder = IdBuilder::new(IdFormatClassifier, format::default_options("NA")).unwrap();
    assert_eq!(builder.len(), 2);
    assert_ne!(builder.tags()[0].id, builder.tags()[1].id);
}
