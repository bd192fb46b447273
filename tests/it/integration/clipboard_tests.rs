//! Clipboard tests: copy, paste cascade, clamping, duplicate.

use crate::helpers::{editor_with_two_boxes, position_of, TestEditorBuilder};
use notesboard::input::Modifiers;
use notesboard::Point;

#[test]
fn test_paste_cascades_by_offset() {
    let mut t = TestEditorBuilder::new()
        .with_box((100.0, 100.0), (160.0, 100.0))
        .build();
    let original = t.ids[0];
    t.editor.select(original, false);

    assert!(t.editor.handle_key_down("c", Modifiers::command()));
    assert_eq!(t.editor.clipboard().len(), 1);

    assert!(t.editor.handle_key_down("v", Modifiers::command()));
    let first = t.editor.selected_ids();
    assert_eq!(first.len(), 1);
    assert_ne!(first[0], original);
    assert_eq!(position_of(&t.editor, first[0]), Point::new(120.0, 120.0));

    assert!(t.editor.handle_key_down("v", Modifiers::command()));
    let second = t.editor.selected_ids();
    assert_eq!(position_of(&t.editor, second[0]), Point::new(140.0, 140.0));

    assert_eq!(position_of(&t.editor, original), Point::new(100.0, 100.0));
    assert_eq!(t.editor.scene().len(), 3);
    assert_eq!(t.editor.history().len(), 3);
}

#[test]
fn test_paste_is_clamped_into_view() {
    let mut t = TestEditorBuilder::new()
        .with_box((1200.0, 700.0), (160.0, 100.0))
        .build();
    t.editor.select(t.ids[0], false);
    t.editor.copy();

    let pasted = t.editor.paste();
    assert_eq!(pasted.len(), 1);
    // Viewport is 1280x800 at zoom 1
    assert_eq!(position_of(&t.editor, pasted[0]), Point::new(1120.0, 700.0));
}

#[test]
fn test_paste_of_several_items_is_one_transaction() {
    let mut t = editor_with_two_boxes();
    t.editor.select_all();
    assert_eq!(t.editor.copy(), 2);

    let pasted = t.editor.paste();
    assert_eq!(pasted.len(), 2);
    assert_eq!(t.editor.history().len(), 2);
    assert_eq!(position_of(&t.editor, pasted[0]), Point::new(20.0, 20.0));
    assert_eq!(position_of(&t.editor, pasted[1]), Point::new(70.0, 70.0));

    t.editor.undo();
    assert_eq!(t.editor.scene().len(), 2);
}

#[test]
fn test_paste_with_empty_clipboard_does_nothing() {
    let mut t = editor_with_two_boxes();
    assert!(t.editor.paste().is_empty());
    assert_eq!(t.editor.history().len(), 1);
}

#[test]
fn test_clipboard_survives_deleting_the_source() {
    let mut t = editor_with_two_boxes();
    let a = t.ids[0];
    t.editor.select(a, false);
    t.editor.copy();
    t.editor.delete_selection();
    assert!(!t.editor.scene().contains(a));

    let pasted = t.editor.paste();
    assert_eq!(pasted.len(), 1);
    assert_eq!(position_of(&t.editor, pasted[0]), Point::new(20.0, 20.0));
}

#[test]
fn test_duplicate_selects_copies() {
    let mut t = editor_with_two_boxes();
    let a = t.ids[0];
    t.editor.select(a, false);

    assert!(t.editor.handle_key_down("d", Modifiers::command()));

    let copies = t.editor.selected_ids();
    assert_eq!(copies.len(), 1);
    assert_ne!(copies[0], a);
    assert_eq!(position_of(&t.editor, copies[0]), Point::new(20.0, 20.0));
    assert_eq!(t.editor.scene().len(), 3);
    assert_eq!(t.editor.history().len(), 2);
    // Duplicate leaves the clipboard alone
    assert!(t.editor.clipboard().is_empty());
}

#[test]
fn test_view_mode_allows_copy_but_not_paste() {
    let mut t = editor_with_two_boxes();
    t.editor.set_view_mode(true);
    t.editor.select_all();

    assert_eq!(t.editor.copy(), 2);
    assert!(t.editor.handle_key_down("v", Modifiers::command()));
    assert_eq!(t.editor.scene().len(), 2);
    assert_eq!(t.editor.clipboard()[0].position, Point::ZERO);
}
