//! Selection tests: marquee, additive marquee, delete, consistency.

use crate::helpers::{
    assert_selection_consistent, click, move_to, press, press_with, release, TestEditorBuilder,
};
use notesboard::input::Modifiers;

fn two_small_boxes() -> crate::helpers::TestEditor {
    TestEditorBuilder::new()
        .with_box((0.0, 0.0), (10.0, 10.0))
        .with_box((100.0, 100.0), (10.0, 10.0))
        .build()
}

#[test]
fn test_marquee_selects_intersecting_items() {
    let mut t = two_small_boxes();
    let (r1, r2) = (t.ids[0], t.ids[1]);

    press(&mut t.editor, (-5.0, -5.0), 0);
    assert!(t.editor.input_state().is_marquee_selecting());

    move_to(&mut t.editor, (20.0, 20.0), 50);
    assert_eq!(t.editor.selected_ids(), vec![r1]);

    move_to(&mut t.editor, (200.0, 200.0), 100);
    assert_eq!(t.editor.selected_ids(), vec![r1, r2]);

    // Shrinking the marquee deselects again
    move_to(&mut t.editor, (20.0, 20.0), 150);
    assert_eq!(t.editor.selected_ids(), vec![r1]);

    release(&mut t.editor, (20.0, 20.0), 200);
    assert_eq!(t.editor.selected_ids(), vec![r1]);
    assert_eq!(t.editor.history().len(), 1);
}

#[test]
fn test_plain_press_on_canvas_clears_selection() {
    let mut t = two_small_boxes();
    t.editor.select_all();

    click(&mut t.editor, (500.0, 500.0));
    assert!(t.editor.selection().is_empty());
}

#[test]
fn test_shift_marquee_extends_selection() {
    let mut t = two_small_boxes();
    let (r1, r2) = (t.ids[0], t.ids[1]);
    click(&mut t.editor, (105.0, 105.0));
    assert_eq!(t.editor.selected_ids(), vec![r2]);

    press_with(&mut t.editor, (-5.0, -5.0), 0, Modifiers::shift());
    move_to(&mut t.editor, (20.0, 20.0), 50);
    release(&mut t.editor, (20.0, 20.0), 100);

    assert_eq!(t.editor.selected_ids(), vec![r1, r2]);
}

#[test]
fn test_escape_during_marquee_restores_selection() {
    let mut t = two_small_boxes();
    let r2 = t.ids[1];
    click(&mut t.editor, (105.0, 105.0));

    press(&mut t.editor, (-5.0, -5.0), 0);
    move_to(&mut t.editor, (20.0, 20.0), 50);
    assert_eq!(t.editor.selected_ids(), vec![t.ids[0]]);

    t.editor.handle_key_down("Escape", Modifiers::none());
    assert_eq!(t.editor.selected_ids(), vec![r2]);
    assert!(t.editor.input_state().is_idle());
}

#[test]
fn test_escape_when_idle_clears_selection() {
    let mut t = two_small_boxes();
    t.editor.select_all();

    assert!(t.editor.handle_key_down("Escape", Modifiers::none()));
    assert!(t.editor.selection().is_empty());
}

#[test]
fn test_delete_removes_items_from_selection() {
    let mut t = two_small_boxes();
    let r2 = t.ids[1];
    t.editor.select_all();

    t.editor.select(t.ids[0], true); // toggle r1 back out
    assert!(t.editor.handle_key_down("Delete", Modifiers::none()));

    assert!(!t.editor.scene().contains(r2));
    assert_eq!(t.editor.scene().len(), 1);
    assert!(t.editor.selection().is_empty());
    assert_eq!(t.editor.history().len(), 2);
    assert_selection_consistent(&t.editor);
}

#[test]
fn test_delete_many_is_one_transaction() {
    let mut t = two_small_boxes();
    assert!(t.editor.handle_key_down("a", Modifiers::command()));
    assert_eq!(t.editor.selection().len(), 2);

    assert!(t.editor.handle_key_down("Backspace", Modifiers::none()));
    assert!(t.editor.scene().is_empty());
    assert_eq!(t.editor.history().len(), 2);

    t.editor.undo();
    assert_eq!(t.editor.scene().len(), 2);
    assert_selection_consistent(&t.editor);
}

#[test]
fn test_delete_with_empty_selection_does_nothing() {
    let mut t = two_small_boxes();
    assert!(!t.editor.delete_selection());
    assert_eq!(t.editor.history().len(), 1);
}

#[test]
fn test_select_ignores_unknown_ids() {
    let mut t = two_small_boxes();
    t.editor.select(notesboard::ItemId::new(), false);
    assert!(t.editor.selection().is_empty());
}
