//! Unit tests for settings module.

use notesboard::settings::{default_settings_path, EditorSettings};
use notesboard::{MemoryStore, PersistenceGateway, SceneEditor};
use tempfile::tempdir;

#[test]
fn test_default_paths() {
    // These should return Some on most systems
    let settings = default_settings_path();
    assert!(settings.is_some() || cfg!(target_os = "unknown"));
    if let Some(path) = settings {
        assert!(path.ends_with("notesboard/settings.json"));
    }
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let settings = EditorSettings::load_or_default(&dir.path().join("absent.json"));
    assert_eq!(settings, EditorSettings::default());
}

#[test]
fn test_settings_drive_editor_behavior() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "paste_offset": 50.0, "nudge_step": 4.0 }"#).unwrap();
    let settings = EditorSettings::load_from(&path).unwrap();

    let mut editor = SceneEditor::new(PersistenceGateway::new(MemoryStore::new()), settings);
    let id = editor
        .add_item(notesboard::ItemKind::Box, notesboard::Point::ZERO)
        .unwrap();
    editor.select(id, false);

    editor.handle_key_down("ArrowRight", notesboard::input::Modifiers::none());
    assert_eq!(editor.scene().get(id).unwrap().position.x, 4.0);

    editor.copy();
    let pasted = editor.paste();
    assert_eq!(
        editor.scene().get(pasted[0]).unwrap().position,
        notesboard::Point::new(54.0, 50.0)
    );
}
