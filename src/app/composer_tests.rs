//! Tests for ComposerField

use super::*;
use crate::test_utils::test_helpers::key;
use crossterm::event::KeyCode;

fn lines(text: &str) -> Vec<String> {
    text.split('\n').map(String::from).collect()
}

fn field() -> ComposerField {
    ComposerField::new(SurfaceId(7), "Status update", true, true)
}

#[test]
fn test_flat_offset_single_line() {
    assert_eq!(flat_offset(&lines("hello"), 0, 3), 3);
}

#[test]
fn test_flat_offset_counts_newlines() {
    assert_eq!(flat_offset(&lines("ab\ncdé\nf"), 2, 1), 8);
}

#[test]
fn test_row_col_inverse_of_flat_offset() {
    let l = lines("ab\ncdé\nf");
    for (row, line) in l.iter().enumerate() {
        for col in 0..=line.chars().count() {
            assert_eq!(row_col(&l, flat_offset(&l, row, col)), (row, col));
        }
    }
}

#[test]
fn test_row_col_clamps_past_end() {
    assert_eq!(row_col(&lines("ab\ncd"), 99), (1, 2));
}

#[test]
fn test_empty_field() {
    let field = field();
    assert_eq!(field.text(), "");
    assert_eq!(field.cursor(), 0);
    assert!(field.is_mention_enabled());
    assert_eq!(field.id(), SurfaceId(7));
}

#[test]
fn test_typed_text_and_cursor() {
    let mut field = field();
    field.textarea.insert_str("hi @bo");

    assert_eq!(field.text(), "hi @bo");
    assert_eq!(field.cursor(), 6);
}

#[test]
fn test_multi_line_text_joined_with_newline() {
    let mut field = field();
    field.textarea.insert_str("one");
    field.textarea.input(key(KeyCode::Enter));
    field.textarea.insert_str("@tw");

    assert_eq!(field.text(), "one\n@tw");
    assert_eq!(field.cursor(), 7);
}

#[test]
fn test_replace_text_moves_cursor() {
    let mut field = field();
    field.replace_text("one\n@\"Ada\" rest", 10);

    assert_eq!(field.textarea.lines(), ["one", "@\"Ada\" rest"]);
    assert_eq!(field.textarea.cursor(), (1, 6));
    assert_eq!(field.cursor(), 10);
}

#[test]
fn test_replace_text_keeps_block() {
    let mut field = field();
    field.set_area(Rect::new(0, 0, 30, 5));

    field.replace_text("x", 1);

    assert!(field.textarea.block().is_some());
}

#[test]
fn test_focus_and_anchor() {
    let mut field = field();
    field.set_area(Rect::new(3, 4, 50, 6));
    field.focus();

    assert!(field.is_focused());
    assert_eq!(field.anchor(), Anchor::new(Rect::new(3, 4, 50, 6)));
}

#[test]
fn test_clear_empties_field() {
    let mut field = field();
    field.textarea.insert_str("draft");
    field.clear();
    assert_eq!(field.text(), "");
    assert_eq!(field.cursor(), 0);
}

#[test]
fn test_jump_coordinates_saturate() {
    assert_eq!(saturate_u16(12), 12);
    assert_eq!(saturate_u16(65_535), u16::MAX);
    assert_eq!(saturate_u16(65_536), u16::MAX);
    assert_eq!(saturate_u16(200_000), u16::MAX);
}

#[test]
fn test_replace_text_with_long_line_keeps_cursor_at_end_of_view() {
    let mut field = field();
    let long = "x".repeat(70_000);

    field.replace_text(&long, 70_000);

    // Wrapping would have put the cursor near the start of the line
    assert!(field.textarea.cursor().1 >= usize::from(u16::MAX));
}
