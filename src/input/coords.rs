//! Coordinate conversion utilities for canvas interactions.
//!
//! Every gesture (drag start and move, resize, marquee, hit testing, paste
//! clamping) converts through these functions so floating-point behavior
//! never diverges between them.
//!
//! `scene = (pointer - origin) / zoom - pan`
//! `pointer = (scene + pan) * zoom + origin`

use crate::types::Point;

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateContext {
    /// Top-left of the canvas container in pointer coordinates
    pub origin: Point,
    pub zoom: f32,
    /// Pan offset in scene units
    pub pan: Point,
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(origin: Point, zoom: f32, pan: Point) -> Self {
        Self { origin, zoom, pan }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a pointer position to scene coordinates
    #[inline]
    pub fn to_scene(pointer: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            (pointer.x - ctx.origin.x) / ctx.zoom - ctx.pan.x,
            (pointer.y - ctx.origin.y) / ctx.zoom - ctx.pan.y,
        )
    }

    /// Convert a scene position to pointer coordinates
    #[inline]
    pub fn to_viewport(scene: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            (scene.x + ctx.pan.x) * ctx.zoom + ctx.origin.x,
            (scene.y + ctx.pan.y) * ctx.zoom + ctx.origin.y,
        )
    }

    /// Convert a pointer delta to a scene delta (for drag operations)
    #[inline]
    pub fn delta_to_scene(delta: Point, zoom: f32) -> Point {
        Point::new(delta.x / zoom, delta.y / zoom)
    }

    /// Convert a scene delta to a pointer delta
    #[inline]
    pub fn delta_to_viewport(delta: Point, zoom: f32) -> Point {
        Point::new(delta.x * zoom, delta.y * zoom)
    }
}
