//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. `key` follows
//! the DOM `KeyboardEvent.key` naming (`"z"`, `"Delete"`, `"ArrowLeft"`), which
//! every windowing layer we feed from can produce.

use crate::input::Modifiers;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShortcutAction {
    // ── Edit ──
    Undo,
    Redo,
    Copy,
    Paste,
    Duplicate,
    SelectAll,
    Delete,
    /// Cancel the active gesture, or clear the selection when idle.
    Deselect,
    /// Move the selection by (dx, dy) scene units.
    Nudge(f32, f32),
    /// Rotate the single selected item by one step.
    Rotate,

    // ── View ──
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

impl ShortcutAction {
    /// Whether the action can change the scene.
    pub fn edits_scene(&self) -> bool {
        matches!(
            self,
            Self::Undo
                | Self::Redo
                | Self::Paste
                | Self::Duplicate
                | Self::Delete
                | Self::Nudge(..)
                | Self::Rotate
        )
    }
}

/// Resolves key events into shortcut actions.
///
/// Ctrl and Cmd are interchangeable, so the same bindings work on every
/// platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortcutMap {
    pub nudge_step: f32,
    pub nudge_step_large: f32,
}

impl Default for ShortcutMap {
    fn default() -> Self {
        Self {
            nudge_step: crate::constants::NUDGE_STEP,
            nudge_step_large: crate::constants::NUDGE_STEP_LARGE,
        }
    }
}

impl ShortcutMap {
    pub fn new(nudge_step: f32, nudge_step_large: f32) -> Self {
        Self {
            nudge_step,
            nudge_step_large,
        }
    }

    /// Resolve a key event to an action, or `None` if the combo is unbound.
    pub fn resolve(&self, key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        let cmd = modifiers.secondary();

        // ── Modifier combos first (most specific) ──
        if cmd && modifiers.shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                "+" => Some(ShortcutAction::ZoomIn),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "c" | "C" => Some(ShortcutAction::Copy),
                "v" | "V" => Some(ShortcutAction::Paste),
                "d" | "D" => Some(ShortcutAction::Duplicate),
                "a" | "A" => Some(ShortcutAction::SelectAll),
                "=" | "+" => Some(ShortcutAction::ZoomIn),
                "-" => Some(ShortcutAction::ZoomOut),
                "0" => Some(ShortcutAction::ZoomReset),
                _ => None,
            };
        }

        if let Some((dx, dy)) = arrow_direction(key) {
            let step = if modifiers.shift {
                self.nudge_step_large
            } else {
                self.nudge_step
            };
            return Some(ShortcutAction::Nudge(dx * step, dy * step));
        }

        if modifiers.alt {
            return None;
        }

        // ── Single keys ──
        match key {
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            "Escape" => Some(ShortcutAction::Deselect),
            "r" | "R" if !modifiers.shift => Some(ShortcutAction::Rotate),
            _ => None,
        }
    }
}

fn arrow_direction(key: &str) -> Option<(f32, f32)> {
    match key {
        "ArrowLeft" => Some((-1.0, 0.0)),
        "ArrowRight" => Some((1.0, 0.0)),
        "ArrowUp" => Some((0.0, -1.0)),
        "ArrowDown" => Some((0.0, 1.0)),
        _ => None,
    }
}
