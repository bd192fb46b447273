//! Pointer gesture tests: drag, resize, click, cancel, interrupted gestures.

use crate::helpers::{
    assert_close, click, drag, editor_with_two_boxes, hover_to, move_to, position_of, press,
    release, shift_click, TestEditorBuilder,
};
use notesboard::input::{HitTarget, Modifiers};
use notesboard::{Point, Size};

#[test]
fn test_group_drag_moves_selection_with_one_history_entry() {
    let mut t = editor_with_two_boxes();
    let (a, b) = (t.ids[0], t.ids[1]);
    t.editor.select(a, false);
    t.editor.select(b, true);
    let before = t.editor.history().len();

    drag(&mut t.editor, (5.0, 5.0), (15.0, 15.0));

    assert_close(position_of(&t.editor, a), Point::new(10.0, 10.0));
    assert_close(position_of(&t.editor, b), Point::new(60.0, 60.0));
    assert_eq!(t.editor.history().len(), before + 1);
    assert!(t.editor.input_state().is_idle());
}

#[test]
fn test_drag_of_unselected_item_moves_only_that_item() {
    let mut t = editor_with_two_boxes();
    let (a, b) = (t.ids[0], t.ids[1]);
    t.editor.select(b, false);

    drag(&mut t.editor, (5.0, 5.0), (25.0, 5.0));

    assert_close(position_of(&t.editor, a), Point::new(20.0, 0.0));
    assert_close(position_of(&t.editor, b), Point::new(50.0, 50.0));
    assert!(t.editor.selection().contains(a));
}

#[test]
fn test_drag_shows_draft_until_release() {
    let mut t = editor_with_two_boxes();
    let a = t.ids[0];

    press(&mut t.editor, (5.0, 5.0), 0);
    move_to(&mut t.editor, (45.0, 25.0), 100);

    assert_close(position_of(&t.editor, a), Point::new(40.0, 20.0));
    assert_eq!(t.editor.committed_scene().get(a).unwrap().position, Point::ZERO);
    assert_eq!(t.editor.history().len(), 1);

    release(&mut t.editor, (45.0, 25.0), 1000);
    assert_eq!(t.editor.committed_scene().get(a).unwrap().position, Point::new(40.0, 20.0));
}

#[test]
fn test_zero_delta_drag_adds_no_history() {
    let mut t = editor_with_two_boxes();
    let before = t.editor.history().len();

    press(&mut t.editor, (5.0, 5.0), 0);
    move_to(&mut t.editor, (60.0, 60.0), 100);
    move_to(&mut t.editor, (5.0, 5.0), 200);
    release(&mut t.editor, (5.0, 5.0), 1000);

    assert_eq!(t.editor.history().len(), before);
    assert_eq!(position_of(&t.editor, t.ids[0]), Point::ZERO);
}

#[test]
fn test_click_selects_without_history() {
    let mut t = editor_with_two_boxes();
    let (a, b) = (t.ids[0], t.ids[1]);

    click(&mut t.editor, (55.0, 55.0));
    assert_eq!(t.editor.selected_ids(), vec![b]);

    click(&mut t.editor, (5.0, 5.0));
    assert_eq!(t.editor.selected_ids(), vec![a]);

    shift_click(&mut t.editor, (55.0, 55.0));
    assert_eq!(t.editor.selected_ids(), vec![a, b]);

    shift_click(&mut t.editor, (5.0, 5.0));
    assert_eq!(t.editor.selected_ids(), vec![b]);

    assert_eq!(t.editor.history().len(), 1);
}

#[test]
fn test_slow_press_without_movement_is_not_a_click() {
    let mut t = editor_with_two_boxes();

    press(&mut t.editor, (5.0, 5.0), 0);
    release(&mut t.editor, (5.0, 5.0), 2000);

    // Too slow for a click: the item is picked up but nothing moved
    assert!(t.editor.selection().contains(t.ids[0]));
    assert_eq!(t.editor.history().len(), 1);
}

#[test]
fn test_escape_mid_drag_restores_scene() {
    let mut t = editor_with_two_boxes();
    let a = t.ids[0];
    let committed = t.editor.committed_scene().clone();

    press(&mut t.editor, (5.0, 5.0), 0);
    move_to(&mut t.editor, (100.0, 100.0), 100);
    assert_ne!(t.editor.scene(), &committed);

    assert!(t.editor.handle_key_down("Escape", Modifiers::none()));

    assert_eq!(t.editor.scene(), &committed);
    assert!(t.editor.input_state().is_idle());
    assert_eq!(t.editor.history().len(), 1);

    // The release that follows has nothing left to commit
    release(&mut t.editor, (100.0, 100.0), 1000);
    assert_eq!(position_of(&t.editor, a), Point::ZERO);
    assert_eq!(t.editor.history().len(), 1);
}

#[test]
fn test_blur_mid_resize_restores_scene() {
    let mut t = editor_with_two_boxes();
    let a = t.ids[0];

    press(&mut t.editor, (18.0, 18.0), 0);
    assert!(t.editor.input_state().is_resizing());
    move_to(&mut t.editor, (80.0, 80.0), 100);
    t.editor.handle_blur();

    assert_eq!(t.editor.scene().get(a).unwrap().size, Size::new(20.0, 20.0));
    assert!(t.editor.input_state().is_idle());
    assert_eq!(t.editor.history().len(), 1);
}

#[test]
fn test_release_outside_window_commits() {
    let mut t = editor_with_two_boxes();
    let a = t.ids[0];

    press(&mut t.editor, (5.0, 5.0), 0);
    move_to(&mut t.editor, (50.0, 50.0), 100);
    t.editor.handle_pointer_leave();
    assert!(t.editor.input_state().is_dragging_items());

    // Back in the window with no buttons held: the release happened outside.
    hover_to(&mut t.editor, (120.0, 120.0), 2000);

    assert!(t.editor.input_state().is_idle());
    assert_close(position_of(&t.editor, a), Point::new(115.0, 115.0));
    assert_eq!(t.editor.history().len(), 2);
}

#[test]
fn test_press_during_open_gesture_resolves_it_first() {
    let mut t = editor_with_two_boxes();

    press(&mut t.editor, (5.0, 5.0), 0);
    move_to(&mut t.editor, (30.0, 30.0), 100);
    press(&mut t.editor, (600.0, 600.0), 2000);

    // The open drag resolved at the new press, which then lands on the moved item
    assert_close(position_of(&t.editor, t.ids[0]), Point::new(595.0, 595.0));
    assert_eq!(t.editor.history().len(), 2);
    assert_eq!(t.editor.input_state().dragged_item_id(), Some(t.ids[0]));
}

#[test]
fn test_resize_from_corner_commits_once() {
    let mut t = editor_with_two_boxes();
    let a = t.ids[0];

    assert_eq!(t.editor.hit_test(Point::new(18.0, 18.0)), HitTarget::ResizeHandle(a));
    assert_eq!(t.editor.hit_test(Point::new(5.0, 5.0)), HitTarget::Item(a));
    assert_eq!(t.editor.hit_test(Point::new(300.0, 300.0)), HitTarget::Canvas);

    press(&mut t.editor, (18.0, 18.0), 0);
    move_to(&mut t.editor, (30.0, 30.0), 50);
    move_to(&mut t.editor, (48.0, 38.0), 100);
    release(&mut t.editor, (48.0, 38.0), 1000);

    let item = t.editor.scene().get(a).unwrap();
    assert_eq!(item.size, Size::new(50.0, 40.0));
    assert_eq!(item.position, Point::ZERO);
    assert_eq!(t.editor.history().len(), 2);
}

#[test]
fn test_resize_is_floored() {
    let mut t = editor_with_two_boxes();
    let a = t.ids[0];

    press(&mut t.editor, (18.0, 18.0), 0);
    move_to(&mut t.editor, (-40.0, -40.0), 100);
    release(&mut t.editor, (-40.0, -40.0), 1000);

    let size = t.editor.scene().get(a).unwrap().size;
    assert_eq!(size, Size::new(10.0, 10.0));
}

#[test]
fn test_topmost_item_wins_hit_test() {
    let mut t = TestEditorBuilder::new()
        .with_box((0.0, 0.0), (100.0, 100.0))
        .with_box((20.0, 20.0), (100.0, 100.0))
        .build();
    let top = t.ids[1];

    click(&mut t.editor, (50.0, 50.0));
    assert_eq!(t.editor.selected_ids(), vec![top]);
}

#[test]
fn test_view_mode_blocks_scene_gestures() {
    let mut t = editor_with_two_boxes();
    let a = t.ids[0];
    t.editor.set_view_mode(true);

    drag(&mut t.editor, (5.0, 5.0), (100.0, 100.0));
    assert_eq!(position_of(&t.editor, a), Point::ZERO);

    press(&mut t.editor, (18.0, 18.0), 0);
    assert!(!t.editor.input_state().is_resizing());
    move_to(&mut t.editor, (80.0, 80.0), 100);
    release(&mut t.editor, (80.0, 80.0), 1000);
    assert_eq!(t.editor.scene().get(a).unwrap().size, Size::new(20.0, 20.0));

    // Selection still works
    click(&mut t.editor, (5.0, 5.0));
    assert_eq!(t.editor.selected_ids(), vec![a]);
    assert_eq!(t.editor.history().len(), 1);
}

#[test]
fn test_entering_view_mode_abandons_drag() {
    let mut t = editor_with_two_boxes();

    press(&mut t.editor, (5.0, 5.0), 0);
    move_to(&mut t.editor, (90.0, 90.0), 100);
    t.editor.set_view_mode(true);

    assert!(t.editor.input_state().is_idle());
    assert_eq!(position_of(&t.editor, t.ids[0]), Point::ZERO);
}

#[test]
fn test_click_centre_of_small_item_selects_it() {
    let mut t = TestEditorBuilder::new()
        .with_box((100.0, 100.0), (10.0, 10.0))
        .build();
    let a = t.ids[0];

    assert_eq!(t.editor.hit_test(Point::new(105.0, 105.0)), HitTarget::Item(a));
    click(&mut t.editor, (105.0, 105.0));
    assert_eq!(t.editor.selected_ids(), vec![a]);
}

#[test]
fn test_quick_click_on_resize_corner_selects() {
    let mut t = editor_with_two_boxes();
    let (a, b) = (t.ids[0], t.ids[1]);
    t.editor.select(b, false);

    assert_eq!(t.editor.hit_test(Point::new(19.0, 19.0)), HitTarget::ResizeHandle(a));
    click(&mut t.editor, (19.0, 19.0));

    assert_eq!(t.editor.selected_ids(), vec![a]);
    assert_eq!(t.editor.scene().get(a).unwrap().size, Size::new(20.0, 20.0));
    assert_eq!(t.editor.history().len(), 1);
}

#[test]
fn test_renderer_feedback_mid_drag_keeps_the_drag() {
    let mut t = editor_with_two_boxes();
    let (a, b) = (t.ids[0], t.ids[1]);

    press(&mut t.editor, (5.0, 5.0), 0);
    move_to(&mut t.editor, (105.0, 105.0), 100);

    // Same size as before: nothing to commit and the drag is untouched
    assert!(!t.editor.on_size_intrinsic_change(b, Size::new(20.0, 20.0)));
    assert!(t.editor.input_state().is_dragging_items());

    // A real change commits underneath the open drag
    assert!(t.editor.on_size_intrinsic_change(b, Size::new(30.0, 25.0)));
    assert!(t.editor.input_state().is_dragging_items());
    assert_close(position_of(&t.editor, a), Point::new(100.0, 100.0));
    assert_eq!(t.editor.scene().get(b).unwrap().size, Size::new(30.0, 25.0));

    move_to(&mut t.editor, (205.0, 205.0), 200);
    release(&mut t.editor, (205.0, 205.0), 1000);

    assert_close(position_of(&t.editor, a), Point::new(200.0, 200.0));
    assert_eq!(t.editor.committed_scene().get(b).unwrap().size, Size::new(30.0, 25.0));
    assert_eq!(t.editor.history().len(), 3);

    // Undo takes back the drag only
    assert!(t.editor.undo());
    assert_eq!(position_of(&t.editor, a), Point::ZERO);
    assert_eq!(t.editor.scene().get(b).unwrap().size, Size::new(30.0, 25.0));
}

#[test]
fn test_label_edit_mid_resize_keeps_the_resize() {
    let mut t = editor_with_two_boxes();
    let a = t.ids[0];

    press(&mut t.editor, (18.0, 18.0), 0);
    move_to(&mut t.editor, (38.0, 28.0), 100);
    assert!(t.editor.set_label(a, Some("Queue".to_string())));

    assert!(t.editor.input_state().is_resizing());
    let draft = t.editor.scene().get(a).unwrap();
    assert_eq!(draft.size, Size::new(40.0, 30.0));
    assert_eq!(draft.label.as_deref(), Some("Queue"));

    release(&mut t.editor, (38.0, 28.0), 1000);
    let item = t.editor.committed_scene().get(a).unwrap();
    assert_eq!(item.size, Size::new(40.0, 30.0));
    assert_eq!(item.label.as_deref(), Some("Queue"));
    assert_eq!(t.editor.history().len(), 3);
}
