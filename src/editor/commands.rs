//! Editing commands - clipboard, delete, nudge, rotate, text fields, and
//! renderer feedback. Each command is at most one history entry.

use super::SceneEditor;
use crate::constants::ROTATION_STEP;
use crate::render::RendererFeedback;
use crate::types::{ItemId, ItemProps, Point, Size};
use tracing::debug;

impl SceneEditor {
    // ==================== Clipboard ====================

    /// Copy the selected items into the in-process clipboard.
    pub fn copy(&mut self) -> usize {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return 0;
        }
        self.clipboard = ids
            .iter()
            .filter_map(|id| self.scene.get(*id).cloned())
            .collect();
        debug!("copied {} items", self.clipboard.len());
        self.clipboard.len()
    }

    /// Insert copies of the clipboard, offset and kept inside the visible
    /// area, and select them. The clipboard shifts so the next paste lands
    /// one offset further on.
    pub fn paste(&mut self) -> Vec<ItemId> {
        if self.view_mode || self.clipboard.is_empty() {
            return Vec::new();
        }
        self.cancel_gesture();

        let offset = self.paste_offset();
        let bounds = self.view.visible_scene_rect();
        let mut next = self.scene.clone();
        let mut pasted = Vec::with_capacity(self.clipboard.len());
        for item in &self.clipboard {
            let (scene, id) = next.insert_copy(item, offset, bounds);
            next = scene;
            pasted.push(id);
        }

        if !self.apply_and_record(next, "paste") {
            return Vec::new();
        }
        self.selection.set(pasted.iter().copied());
        for item in &mut self.clipboard {
            item.position = item.position + offset;
        }
        pasted
    }

    /// Duplicate the selection in place (offset like a paste) and select the copies.
    pub fn duplicate_selection(&mut self) -> Vec<ItemId> {
        if self.view_mode {
            return Vec::new();
        }
        self.cancel_gesture();

        let ids = self.selected_ids();
        if ids.is_empty() {
            return Vec::new();
        }
        let offset = self.paste_offset();
        let bounds = self.view.visible_scene_rect();
        let mut next = self.scene.clone();
        let mut copies = Vec::with_capacity(ids.len());
        for id in ids {
            let (scene, copy) = next.duplicate_item(id, offset, bounds);
            next = scene;
            copies.extend(copy);
        }

        if !self.apply_and_record(next, "duplicate") {
            return Vec::new();
        }
        self.selection.set(copies.iter().copied());
        copies
    }

    fn paste_offset(&self) -> Point {
        Point::new(self.settings.paste_offset, self.settings.paste_offset)
    }

    // ==================== Selection edits ====================

    pub fn delete_selection(&mut self) -> bool {
        if self.view_mode {
            return false;
        }
        self.cancel_gesture();
        let ids = self.selected_ids();
        if ids.is_empty() {
            return false;
        }
        let next = self.scene.delete_items(&ids);
        self.apply_and_record(next, "delete items")
    }

    /// Move every selected item by `delta` scene units.
    pub fn nudge_selection(&mut self, delta: Point) -> bool {
        if self.view_mode {
            return false;
        }
        self.cancel_gesture();
        let starts: Vec<(ItemId, Point)> = self
            .selected_ids()
            .into_iter()
            .filter_map(|id| self.scene.get(id).map(|item| (id, item.position)))
            .collect();
        if starts.is_empty() {
            return false;
        }
        let next = self.scene.translate_items(&starts, delta);
        self.apply_and_record(next, "nudge")
    }

    /// Rotate the single selected item by one step, if its kind rotates.
    pub fn rotate_selection(&mut self) -> bool {
        if self.view_mode {
            return false;
        }
        let Some(id) = self.selection.single() else {
            return false;
        };
        let Some(item) = self.scene.get(id) else {
            return false;
        };
        if !self.registry.get().is_rotatable(item.kind()) {
            debug!("{:?} items do not rotate", item.kind());
            return false;
        }
        let degrees = item.rotation.unwrap_or(0.0) + ROTATION_STEP;
        self.cancel_gesture();
        let next = self.scene.update_rotation(id, degrees);
        self.apply_and_record(next, "rotate")
    }

    // ==================== Item edits ====================

    pub fn move_item(&mut self, id: ItemId, position: Point) -> bool {
        let next = self.scene.update_position(id, position);
        self.apply_and_record(next, "move item")
    }

    pub fn resize_item(&mut self, id: ItemId, size: Size) -> bool {
        let next = self.scene.update_size(id, size);
        self.apply_and_record(next, "resize item")
    }

    pub fn set_label(&mut self, id: ItemId, label: Option<String>) -> bool {
        let next = self.scene.update_label(id, label);
        self.apply_and_record(next, "set label")
    }

    pub fn set_comment(&mut self, id: ItemId, comment: Option<String>, label: Option<String>) -> bool {
        let next = self.scene.update_comment(id, comment, label);
        self.apply_and_record(next, "set comment")
    }

    // ==================== Renderer feedback ====================

    pub fn on_size_intrinsic_change(&mut self, id: ItemId, size: Size) -> bool {
        let next = self.scene.update_size(id, size);
        self.apply_and_record(next, "intrinsic size")
    }

    pub fn on_props_change(&mut self, id: ItemId, props: ItemProps) -> bool {
        let next = self.scene.update_props(id, props);
        self.apply_and_record(next, "props change")
    }

    pub fn apply_renderer_feedback(&mut self, id: ItemId, feedback: RendererFeedback) -> bool {
        match feedback {
            RendererFeedback::IntrinsicSize(size) => self.on_size_intrinsic_change(id, size),
            RendererFeedback::Props(props) => self.on_props_change(id, props),
        }
    }
}
