//! Keyboard dispatch.

use super::SceneEditor;
use crate::input::Modifiers;
use crate::profile_scope;
use crate::shortcuts::ShortcutAction;
use crate::types::Point;
use tracing::trace;

impl SceneEditor {
    /// Handle a key press. Returns true if the key was bound to an action.
    pub fn handle_key_down(&mut self, key: &str, modifiers: Modifiers) -> bool {
        profile_scope!("handle_key_down");

        let Some(action) = self.shortcuts.resolve(key, modifiers) else {
            return false;
        };
        trace!("key {:?} -> {:?}", key, action);
        self.run_action(action);
        true
    }

    /// Run a shortcut action. Scene edits are blocked in view mode.
    pub fn run_action(&mut self, action: ShortcutAction) {
        if action.edits_scene() && self.view_mode {
            trace!("{:?} ignored in view mode", action);
            return;
        }

        match action {
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
            ShortcutAction::Copy => {
                self.copy();
            }
            ShortcutAction::Paste => {
                self.paste();
            }
            ShortcutAction::Duplicate => {
                self.duplicate_selection();
            }
            ShortcutAction::SelectAll => self.select_all(),
            ShortcutAction::Delete => {
                self.delete_selection();
            }
            ShortcutAction::Deselect => {
                // Escape first abandons a gesture; only an idle Escape clears.
                if !self.cancel_gesture() {
                    self.clear_selection();
                }
            }
            ShortcutAction::Nudge(dx, dy) => {
                self.nudge_selection(Point::new(dx, dy));
            }
            ShortcutAction::Rotate => {
                self.rotate_selection();
            }
            ShortcutAction::ZoomIn => {
                self.view.zoom_by(self.settings.zoom_step);
            }
            ShortcutAction::ZoomOut => {
                self.view.zoom_by(-self.settings.zoom_step);
            }
            ShortcutAction::ZoomReset => {
                self.view.zoom_reset();
            }
        }
    }
}
