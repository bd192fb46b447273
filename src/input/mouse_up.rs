//! Pointer up handling - commit, click selection, cancel.

use crate::editor::SceneEditor;
use crate::input::state::{InputState, drag_draft, resize_draft};
use crate::input::PointerUpEvent;
use crate::profile_scope;
use crate::types::Point;
use tracing::trace;

impl SceneEditor {
    pub fn handle_pointer_up(&mut self, event: &PointerUpEvent) {
        profile_scope!("handle_pointer_up");
        self.finish_gesture(event.position, event.timestamp_ms);
    }

    /// Window lost focus: the open gesture is abandoned.
    pub fn handle_blur(&mut self) {
        if self.cancel_gesture() {
            trace!("gesture cancelled by blur");
        }
    }

    /// Resolve the open gesture at `position`, committing any scene change
    /// as a single history entry.
    pub(crate) fn finish_gesture(&mut self, position: Point, timestamp_ms: u64) {
        match std::mem::take(&mut self.input_state) {
            InputState::Idle => {}

            InputState::Panning { .. } => {
                trace!("pan finished");
            }

            InputState::DraggingItems {
                start,
                exceeded_slop,
                ..
            } => {
                let is_click = self.is_click(exceeded_slop, start.press_pos, start.pressed_at_ms, position, timestamp_ms);

                self.draft = None;
                if is_click {
                    self.selection.click(start.primary_item, start.additive);
                    trace!("click on {}", start.primary_item);
                    return;
                }
                if start.starts.is_empty() {
                    return;
                }

                if !self.selection.contains(start.primary_item) {
                    self.selection.click(start.primary_item, start.additive);
                }
                let next = drag_draft(&self.scene, &start, self.view.to_scene(position));
                self.apply_and_record(next, "move items");
            }

            InputState::ResizingItem {
                start,
                exceeded_slop,
                ..
            } => {
                self.draft = None;
                if self.is_click(exceeded_slop, start.press_pos, start.pressed_at_ms, position, timestamp_ms) {
                    self.selection.click(start.item_id, start.additive);
                    trace!("click on resize corner of {}", start.item_id);
                    return;
                }
                let next = resize_draft(
                    &self.scene,
                    start.item_id,
                    start.start_size,
                    start.start_scene_pos,
                    self.view.to_scene(position),
                );
                self.apply_and_record(next, "resize item");
            }

            InputState::MarqueeSelecting { .. } => {
                trace!("marquee finished with {} selected", self.selection.len());
            }
        }
    }

    /// A press released close to where it started and soon enough is a click.
    fn is_click(
        &self,
        exceeded_slop: bool,
        press_pos: Point,
        pressed_at_ms: u64,
        position: Point,
        timestamp_ms: u64,
    ) -> bool {
        let travelled = position.distance(press_pos);
        let held_ms = timestamp_ms.saturating_sub(pressed_at_ms);
        !exceeded_slop && travelled <= self.settings.click_slop && held_ms <= self.settings.click_max_ms
    }

    /// Abandon the open gesture, restoring the scene and selection it
    /// started from. Returns false when there was nothing to cancel.
    pub fn cancel_gesture(&mut self) -> bool {
        self.draft = None;
        match std::mem::take(&mut self.input_state) {
            InputState::Idle => false,
            InputState::MarqueeSelecting { initial, .. } => {
                self.selection.set(initial);
                self.selection.reconcile(&self.scene);
                true
            }
            _ => true,
        }
    }
}
