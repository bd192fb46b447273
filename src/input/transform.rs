//! View transformations - zoom, pan, visible area.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::editor::SceneEditor;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{ScrollDelta, ScrollEvent};
use crate::profile_scope;
use crate::types::{Point, Rect, Size};
use tracing::trace;

/// Ephemeral view of the scene. Never recorded in history or persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    zoom: f32,
    /// Pan offset in scene units
    pub pan: Point,
    /// Top-left of the canvas container in pointer coordinates
    pub origin: Point,
    /// Container size in pointer pixels
    pub viewport: Size,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: Point::ZERO,
            origin: Point::ZERO,
            viewport: Size::new(1280.0, 800.0),
        }
    }
}

impl ViewState {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom, clamped into the allowed range. Non-finite values are
    /// ignored. Returns true if it changed.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !zoom.is_finite() {
            trace!("ignoring non-finite zoom {}", zoom);
            return false;
        }
        let clamped = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let changed = (clamped - self.zoom).abs() > f32::EPSILON;
        self.zoom = clamped;
        changed
    }

    pub fn coords(&self) -> CoordinateContext {
        CoordinateContext::new(self.origin, self.zoom, self.pan)
    }

    pub fn to_scene(&self, pointer: Point) -> Point {
        CoordinateConverter::to_scene(pointer, &self.coords())
    }

    pub fn to_viewport(&self, scene: Point) -> Point {
        CoordinateConverter::to_viewport(scene, &self.coords())
    }

    /// Multiply the zoom by `factor`, keeping the scene point under `anchor`
    /// (pointer coordinates) fixed on screen. Returns true if the zoom changed.
    pub fn zoom_around(&mut self, factor: f32, anchor: Point) -> bool {
        let fixed = self.to_scene(anchor);
        if !self.set_zoom(self.zoom * factor) {
            return false;
        }
        // Solve (anchor - origin) / zoom - pan = fixed for pan.
        self.pan = Point::new(
            (anchor.x - self.origin.x) / self.zoom - fixed.x,
            (anchor.y - self.origin.y) / self.zoom - fixed.y,
        );
        true
    }

    /// Step the zoom by `step` around the viewport centre.
    pub fn zoom_by(&mut self, step: f32) -> bool {
        let center = self.center();
        let factor = (self.zoom + step) / self.zoom;
        self.zoom_around(factor, center)
    }

    pub fn zoom_reset(&mut self) -> bool {
        let center = self.center();
        self.zoom_around(DEFAULT_ZOOM / self.zoom, center)
    }

    /// Pan by a pointer-space delta.
    pub fn pan_by(&mut self, delta: Point) {
        if !delta.is_finite() {
            return;
        }
        let scene_delta = CoordinateConverter::delta_to_scene(delta, self.zoom);
        self.pan = self.pan + scene_delta;
    }

    /// Scene rectangle currently visible in the container.
    pub fn visible_scene_rect(&self) -> Rect {
        let far = Point::new(
            self.origin.x + self.viewport.width,
            self.origin.y + self.viewport.height,
        );
        Rect::from_corners(self.to_scene(self.origin), self.to_scene(far))
    }

    fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.viewport.width / 2.0,
            self.origin.y + self.viewport.height / 2.0,
        )
    }
}

impl SceneEditor {
    /// Scroll pans the view; with Ctrl/Cmd held it zooms around the pointer.
    /// Neither is recorded in history.
    pub fn handle_scroll(&mut self, event: &ScrollEvent) {
        profile_scope!("handle_scroll");

        // Zoom with Command (platform) or Control key
        if event.modifiers.secondary() {
            let zoom_factor = match event.delta {
                ScrollDelta::Pixels(delta) => 1.0 - delta.y / 500.0,
                ScrollDelta::Lines(delta) => 1.0 - delta.y / 50.0,
            };

            if (zoom_factor - 1.0).abs() > 0.001 && self.view.zoom_around(zoom_factor, event.position) {
                trace!("scroll zoom to {:.2}", self.view.zoom());
            }
            return;
        }

        // Default: canvas panning
        let line = self.settings.scroll_line_pixels;
        let delta = match event.delta {
            ScrollDelta::Pixels(delta) => delta,
            ScrollDelta::Lines(delta) => Point::new(delta.x * line, delta.y * line),
        };
        self.view.pan_by(delta);
    }
}
