//! Unit tests for SelectionManager.

use crate::helpers::box_props;
use notesboard::{Point, Rect, Scene, SelectionManager, Size};

#[test]
fn test_marquee_r1_r2() {
    let (scene, r1) = Scene::new().add_item_with(box_props(), Point::ZERO, Size::new(10.0, 10.0));
    let (scene, r2) = scene.add_item_with(box_props(), Point::new(100.0, 100.0), Size::new(10.0, 10.0));
    let mut selection = SelectionManager::new();

    selection.marquee_select(Rect::new(Point::ZERO, Size::new(20.0, 20.0)), &scene);
    assert!(selection.contains(r1));
    assert!(!selection.contains(r2));

    selection.marquee_select(Rect::new(Point::ZERO, Size::new(200.0, 200.0)), &scene);
    assert!(selection.contains(r1));
    assert!(selection.contains(r2));
}

#[test]
fn test_reconcile_drops_missing_ids() {
    let (scene, a) = Scene::new().add_item_with(box_props(), Point::ZERO, Size::new(10.0, 10.0));
    let (scene, b) = scene.add_item_with(box_props(), Point::new(50.0, 0.0), Size::new(10.0, 10.0));
    let mut selection = SelectionManager::new();
    selection.select_all(&scene);

    let scene = scene.delete_item(a);
    selection.reconcile(&scene);

    assert_eq!(selection.ordered_ids(&scene), vec![b]);
    assert_eq!(selection.single(), Some(b));
}

#[test]
fn test_click_replaces_and_additive_click_toggles() {
    let (scene, a) = Scene::new().add_item_with(box_props(), Point::ZERO, Size::new(10.0, 10.0));
    let (_, b) = scene.add_item_with(box_props(), Point::new(50.0, 0.0), Size::new(10.0, 10.0));
    let mut selection = SelectionManager::new();

    selection.click(a, false);
    selection.click(b, true);
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.single(), None);

    selection.click(b, true);
    assert_eq!(selection.single(), Some(a));

    selection.click(b, false);
    assert_eq!(selection.single(), Some(b));
}
