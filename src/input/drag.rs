//! Pointer move handling - item dragging, resizing, marquee, panning.
//!
//! ## Performance Notes
//!
//! Pointer move is called very frequently during gestures (potentially
//! 60+ times per second). Key optimizations:
//! - Early exit for the idle state
//! - Only the draft scene is rebuilt; history, index and store are untouched
//!   until release
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::editor::SceneEditor;
use crate::input::state::{InputState, drag_draft, resize_draft};
use crate::input::PointerMoveEvent;
use crate::profile_scope;
use crate::types::Rect;
use std::collections::HashSet;
use tracing::debug;

impl SceneEditor {
    pub fn handle_pointer_move(&mut self, event: &PointerMoveEvent) {
        profile_scope!("handle_pointer_move");

        if self.input_state.is_idle() {
            return;
        }

        // Release happened somewhere we could not see it.
        if !event.pressed {
            debug!("pointer moved with no buttons held, finishing gesture");
            self.finish_gesture(event.position, event.timestamp_ms);
            return;
        }

        let scene_pos = self.view.to_scene(event.position);
        let click_slop = self.settings.click_slop;

        match &mut self.input_state {
            InputState::Idle => {}

            InputState::Panning { last_pos } => {
                let delta = event.position - *last_pos;
                *last_pos = event.position;
                self.view.pan_by(delta);
            }

            InputState::DraggingItems {
                start,
                exceeded_slop,
                current,
            } => {
                if event.position.distance(start.press_pos) > click_slop {
                    *exceeded_slop = true;
                }
                *current = scene_pos;
                if !start.starts.is_empty() {
                    profile_scope!("drag_draft");
                    self.draft = Some(drag_draft(&self.scene, start, scene_pos));
                }
            }

            InputState::ResizingItem {
                start,
                exceeded_slop,
                current,
            } => {
                if event.position.distance(start.press_pos) > click_slop {
                    *exceeded_slop = true;
                }
                *current = scene_pos;
                self.draft = Some(resize_draft(
                    &self.scene,
                    start.item_id,
                    start.start_size,
                    start.start_scene_pos,
                    scene_pos,
                ));
            }

            InputState::MarqueeSelecting {
                start,
                current,
                initial,
                additive,
            } => {
                profile_scope!("marquee_select");
                *current = scene_pos;
                let rect = Rect::from_corners(*start, *current);
                let empty = HashSet::new();
                let base = if *additive { &*initial } else { &empty };
                self.selection
                    .marquee_select_with_base(rect, &self.index, &self.scene, base);
            }
        }
    }

    /// The pointer left the window. The gesture stays open; the next
    /// release-equivalent resolves it.
    pub fn handle_pointer_leave(&mut self) {
        if !self.input_state.is_idle() {
            tracing::trace!("pointer left the window mid-gesture");
        }
    }
}
