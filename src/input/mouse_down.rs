//! Pointer down handling - hit testing and gesture start.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during user interaction. Key optimizations:
//! - O(log n) hit testing via R-tree spatial index
//! - Coordinate transformations for zoom/pan
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::editor::SceneEditor;
use crate::input::state::{DragStart, ResizeStart};
use crate::input::{HitTarget, PointerButton, PointerDownEvent};
use crate::profile_scope;
use crate::types::{Item, ItemId, Point};
use tracing::trace;

impl SceneEditor {
    pub fn handle_pointer_down(&mut self, event: &PointerDownEvent) {
        profile_scope!("handle_pointer_down");

        // A press while a gesture is still open means we missed its release.
        if !self.input_state.is_idle() {
            trace!("pointer down during an open gesture, finishing it first");
            self.finish_gesture(event.position, event.timestamp_ms);
        }

        match event.button {
            PointerButton::Middle => {
                self.input_state.start_panning(event.position);
                trace!("pan started");
                return;
            }
            PointerButton::Right => return,
            PointerButton::Left => {}
        }

        let scene_pos = self.view.to_scene(event.position);

        match self.hit_test(event.position) {
            HitTarget::ResizeHandle(id) if !self.view_mode => {
                let Some(item) = self.scene.get(id) else { return };
                let start_size = item.size;
                self.input_state.start_resizing(ResizeStart {
                    item_id: id,
                    start_size,
                    start_scene_pos: scene_pos,
                    press_pos: event.position,
                    pressed_at_ms: event.timestamp_ms,
                    additive: event.modifiers.additive(),
                });
                trace!("resize started on {}", id);
            }
            HitTarget::ResizeHandle(id) | HitTarget::Item(id) => {
                self.begin_item_drag(id, scene_pos, event);
            }
            HitTarget::Canvas => {
                let initial = self.selection.ids().clone();
                let additive = event.modifiers.shift;
                if !additive {
                    self.selection.clear();
                }
                self.input_state.start_marquee(scene_pos, initial, additive);
                trace!("marquee started at ({:.1}, {:.1})", scene_pos.x, scene_pos.y);
            }
        }
    }

    /// What a press at `pointer` (viewport coordinates) would land on.
    pub fn hit_test(&self, pointer: Point) -> HitTarget {
        profile_scope!("hit_test_items");

        let scene_pos = self.view.to_scene(pointer);
        let Some(id) = self.index.topmost_at(scene_pos, &self.scene) else {
            return HitTarget::Canvas;
        };
        match self.scene.get(id) {
            Some(item) if self.in_resize_handle(item, scene_pos) => HitTarget::ResizeHandle(id),
            _ => HitTarget::Item(id),
        }
    }

    /// Bottom-right corner, a fixed number of pixels at any zoom, never more
    /// than a quarter of the item so the centre of a small item stays draggable.
    fn in_resize_handle(&self, item: &Item, scene_pos: Point) -> bool {
        let handle = self.settings.resize_handle_size / self.view.zoom();
        let handle_w = handle.min(item.size.width / 4.0);
        let handle_h = handle.min(item.size.height / 4.0);
        let rect = item.rect();
        scene_pos.x >= rect.max.x - handle_w && scene_pos.y >= rect.max.y - handle_h
    }

    fn begin_item_drag(&mut self, id: ItemId, scene_pos: Point, event: &PointerDownEvent) {
        let Some(item) = self.scene.get(id) else { return };
        let primary_start = item.position;

        // Drag the whole selection when the pressed item is part of it.
        let starts: Vec<(ItemId, Point)> = if self.view_mode {
            Vec::new()
        } else if self.selection.contains(id) {
            self.selection
                .ordered_ids(&self.scene)
                .into_iter()
                .filter_map(|sid| self.scene.get(sid).map(|it| (sid, it.position)))
                .collect()
        } else {
            vec![(id, primary_start)]
        };

        trace!("drag started on {} with {} item(s)", id, starts.len());
        self.input_state.start_dragging(DragStart {
            primary_item: id,
            primary_start,
            grab_offset: scene_pos - primary_start,
            starts,
            press_pos: event.position,
            pressed_at_ms: event.timestamp_ms,
            additive: event.modifiers.additive(),
        });
    }
}
