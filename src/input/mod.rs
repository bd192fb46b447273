//! Pointer and scroll input handling for the canvas.
//!
//! This module implements all pointer interaction logic for the editor,
//! including item selection, dragging, resizing, marquee selection, and panning.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. Gesture mutations go to a draft scene and
//! are committed to history exactly once, on release.
//!
//! ## Modules
//!
//! - `coords` - Pointer/scene coordinate conversion
//! - `state` - Input state machine enum and pure gesture math
//! - `mouse_down` - Pointer down handling (hit testing, gesture start)
//! - `drag` - Pointer move handling (drag, resize, marquee, pan)
//! - `mouse_up` - Pointer up handling (commit, click, cancel)
//! - `transform` - View state (zoom, pan, visible area) and scroll handling

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use state::{DragStart, InputState, ResizeStart, drag_draft, resize_draft};
pub use transform::ViewState;

use crate::types::{ItemId, Point};

/// Keyboard modifiers held during an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    /// Command on macOS, Super elsewhere
    pub platform: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn command() -> Self {
        Self {
            control: true,
            ..Self::default()
        }
    }

    /// Ctrl or Cmd, whichever the platform uses for shortcuts
    pub fn secondary(&self) -> bool {
        self.control || self.platform
    }

    /// Modifier that extends a selection instead of replacing it
    pub fn additive(&self) -> bool {
        self.shift || self.secondary()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Left,
    Middle,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDownEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    pub timestamp_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMoveEvent {
    pub position: Point,
    /// Whether any button is still held; a move with none held during a
    /// gesture is treated as the release we never saw.
    pub pressed: bool,
    pub modifiers: Modifiers,
    pub timestamp_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerUpEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    pub timestamp_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDelta {
    Pixels(Point),
    Lines(Point),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub position: Point,
    pub delta: ScrollDelta,
    pub modifiers: Modifiers,
}

/// What a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    ResizeHandle(ItemId),
    Item(ItemId),
    Canvas,
}
