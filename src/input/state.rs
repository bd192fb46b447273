//! Input state machine - the drag controller behind every pointer gesture.
//!
//! A single explicit enum replaces ad-hoc drag flags and captured offsets,
//! making impossible states unrepresentable. The editor owns one value and
//! threads it through the pointer handlers.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingItems        (press on an item body)
//! Idle -> ResizingItem         (press on an item's resize corner)
//! Idle -> MarqueeSelecting     (press on empty canvas)
//! Idle -> Panning              (middle button press)
//!
//! Any -> Idle                  (release or release-equivalent: commits)
//! Any -> Idle                  (Escape or blur: rolls back)
//! ```
//!
//! The gesture math here is pure: given the committed scene and the current
//! pointer position it returns the draft scene to display. Positions are
//! always derived from the captured start values, never from the previous
//! draft, so rounding error cannot compound across moves.

use crate::scene::Scene;
use crate::types::{ItemId, Point, Rect, Size};
use std::collections::HashSet;

/// Everything captured when an item drag begins.
#[derive(Debug, Clone, PartialEq)]
pub struct DragStart {
    /// Item under the pointer
    pub primary_item: ItemId,
    /// Primary item's position when the drag began
    pub primary_start: Point,
    /// Scene-space offset from the primary item's origin to the pointer
    pub grab_offset: Point,
    /// Start position of every item that moves with the drag
    pub starts: Vec<(ItemId, Point)>,
    /// Pointer position at press, for click detection
    pub press_pos: Point,
    pub pressed_at_ms: u64,
    /// Shift/cmd held at press
    pub additive: bool,
}

/// Everything captured when a corner resize begins.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeStart {
    pub item_id: ItemId,
    /// Item size when the resize began
    pub start_size: Size,
    /// Pointer position at press, in scene coordinates
    pub start_scene_pos: Point,
    /// Pointer position at press, for click detection
    pub press_pos: Point,
    pub pressed_at_ms: u64,
    /// Shift/cmd held at press
    pub additive: bool,
}

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No active input operation
    #[default]
    Idle,

    /// Canvas panning (middle button)
    Panning {
        /// Last pointer position for delta calculation
        last_pos: Point,
    },

    /// Dragging one or more items
    DraggingItems {
        start: DragStart,
        /// Pointer has travelled beyond the click slop at some point
        exceeded_slop: bool,
        /// Last seen pointer position in scene coordinates
        current: Point,
    },

    /// Resizing an item from its bottom-right corner
    ResizingItem {
        start: ResizeStart,
        exceeded_slop: bool,
        current: Point,
    },

    /// Marquee/box selection
    MarqueeSelecting {
        /// Anchor corner in scene coordinates
        start: Point,
        /// Current corner in scene coordinates
        current: Point,
        /// Selection before the marquee began (restored on cancel)
        initial: HashSet<ItemId>,
        /// Keep `initial` selected in addition to marquee hits
        additive: bool,
    },
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a gesture that edits the scene is active
    pub fn is_editing_scene(&self) -> bool {
        matches!(self, Self::DraggingItems { .. } | Self::ResizingItem { .. })
    }

    pub fn is_dragging_items(&self) -> bool {
        matches!(self, Self::DraggingItems { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingItem { .. })
    }

    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::MarqueeSelecting { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Get the primary item ID being dragged, if any
    pub fn dragged_item_id(&self) -> Option<ItemId> {
        match self {
            Self::DraggingItems { start, .. } => Some(start.primary_item),
            _ => None,
        }
    }

    /// Get the item ID being resized, if any
    pub fn resized_item_id(&self) -> Option<ItemId> {
        match self {
            Self::ResizingItem { start, .. } => Some(start.item_id),
            _ => None,
        }
    }

    /// Current marquee rectangle in scene coordinates
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Self::MarqueeSelecting { start, current, .. } => Some(Rect::from_corners(*start, *current)),
            _ => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_dragging(&mut self, start: DragStart) {
        let current = start.primary_start + start.grab_offset;
        *self = Self::DraggingItems {
            start,
            exceeded_slop: false,
            current,
        };
    }

    pub fn start_resizing(&mut self, start: ResizeStart) {
        let current = start.start_scene_pos;
        *self = Self::ResizingItem {
            start,
            exceeded_slop: false,
            current,
        };
    }

    /// Draft scene for the open gesture at its last pointer position, built
    /// on top of `committed`. None for gestures that do not edit the scene.
    pub fn draft_over(&self, committed: &Scene) -> Option<Scene> {
        match self {
            Self::DraggingItems { start, current, .. } if !start.starts.is_empty() => {
                Some(drag_draft(committed, start, *current))
            }
            Self::ResizingItem { start, current, .. } => Some(resize_draft(
                committed,
                start.item_id,
                start.start_size,
                start.start_scene_pos,
                *current,
            )),
            _ => None,
        }
    }

    pub fn start_marquee(&mut self, start: Point, initial: HashSet<ItemId>, additive: bool) {
        *self = Self::MarqueeSelecting {
            start,
            current: start,
            initial,
            additive,
        };
    }

    pub fn start_panning(&mut self, pos: Point) {
        *self = Self::Panning { last_pos: pos };
    }
}

/// Draft scene for a drag whose pointer is now at `pointer_scene`.
///
/// The primary item lands at `pointer - grab_offset`; every other captured
/// item moves by the same delta from its own start.
pub fn drag_draft(committed: &Scene, start: &DragStart, pointer_scene: Point) -> Scene {
    let target = pointer_scene - start.grab_offset;
    let delta = target - start.primary_start;
    committed.translate_items(&start.starts, delta)
}

/// Draft scene for a resize whose pointer is now at `pointer_scene`.
pub fn resize_draft(
    committed: &Scene,
    item_id: ItemId,
    start_size: Size,
    start_scene_pos: Point,
    pointer_scene: Point,
) -> Scene {
    let delta = pointer_scene - start_scene_pos;
    committed.update_size(
        item_id,
        Size::new(start_size.width + delta.x, start_size.height + delta.y),
    )
}
