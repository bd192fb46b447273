//! Editor-wide constants.
//!
//! Centralizes magic numbers so the defaults in `settings` and the
//! invariants in `scene`/`history` agree on the same values.

// ============================================================================
// Item Defaults
// ============================================================================

/// Smallest width or height any item may have, in scene units
pub const MIN_ITEM_SIZE: f32 = 10.0;

/// Offset applied to pasted and duplicated items
pub const PASTE_OFFSET: f32 = 20.0;

/// Rotation step for the rotate shortcut, in degrees
pub const ROTATION_STEP: f32 = 90.0;

/// Default markdown font size
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Default arrow stroke thickness
pub const DEFAULT_ARROW_THICKNESS: f32 = 2.0;

/// Default stroke color for boxes and arrows
pub const DEFAULT_STROKE_COLOR: &str = "#ffffff";

// ============================================================================
// History
// ============================================================================

/// Maximum undo history states to keep
pub const MAX_HISTORY_STATES: usize = 50;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 2.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom step for keyboard zoom
pub const ZOOM_STEP: f32 = 0.1;

/// Pixels of pan per scroll line
pub const SCROLL_LINE_PIXELS: f32 = 20.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Pointer travel (viewport pixels) below which a press-release is a click
pub const CLICK_SLOP: f32 = 4.0;

/// Longest press-release interval still treated as a click
pub const CLICK_MAX_MS: u64 = 500;

/// Size of the resize corner area in viewport pixels
pub const RESIZE_HANDLE_SIZE: f32 = 12.0;

/// Arrow-key nudge distance
pub const NUDGE_STEP: f32 = 1.0;

/// Arrow-key nudge distance with Shift held
pub const NUDGE_STEP_LARGE: f32 = 10.0;

// ============================================================================
// Persistence
// ============================================================================

/// Store key holding the current scene
pub const ITEMS_KEY: &str = "items";

/// Store key holding the snapshot history
pub const HISTORY_KEY: &str = "items-history";

/// Suffix for keys preserving unparseable raw values
pub const CORRUPT_SUFFIX: &str = ".corrupt";

/// Numbered backups tried after `<key>.corrupt` before giving up
pub const MAX_CORRUPT_BACKUPS: usize = 16;
