//! Core types for the notes board scene.
//!
//! This module defines the geometry primitives, item identifiers, and the
//! closed catalogue of item kinds with their strongly typed props.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Geometry
// ============================================================================

/// A point in either viewport or scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of an item in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp both axes to at least `floor`.
    pub fn floored(self, floor: f32) -> Self {
        Self::new(self.width.max(floor), self.height.max(floor))
    }
}

/// Axis-aligned rectangle. `min` is always the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            min: origin,
            max: Point::new(origin.x + size.width, origin.y + size.height),
        }
    }

    /// Build a rectangle from any two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Closed-interval overlap test: rectangles sharing only an edge intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque, stable identifier of a scene item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Item Kinds
// ============================================================================

/// The fixed set of item kinds. Determines renderer and props shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Box,
    Arrow,
    Code,
    Database,
    Markdown,
    FolderTree,
}

impl ItemKind {
    /// Every kind, in declaration order, so `ALL[kind as usize] == kind`.
    pub const ALL: [ItemKind; 6] = [
        ItemKind::Box,
        ItemKind::Arrow,
        ItemKind::Code,
        ItemKind::Database,
        ItemKind::Markdown,
        ItemKind::FolderTree,
    ];

    pub fn all() -> &'static [ItemKind] {
        &Self::ALL
    }
}

/// Arrow head styles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowHead {
    None,
    #[default]
    Arrow,
    Diamond,
    Circle,
}

/// Kind-specific properties of an item.
///
/// The variant *is* the item's kind, so a kind can never drift from its
/// props. Renderers receive these verbatim; the editor core never looks
/// inside them beyond matching the variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ItemProps {
    /// Rectangle with optional fill and inline text
    Box {
        fill: Option<String>,
        stroke: String,
        corner_radius: f32,
        text: String,
    },
    /// Straight arrow spanning the item's bounding box
    Arrow {
        head: ArrowHead,
        thickness: f32,
        dashed: bool,
        color: String,
    },
    /// Source snippet, optionally fetched from a remote URL by the renderer
    Code {
        language: String,
        source: String,
        remote_url: Option<String>,
    },
    /// Database icon with an engine badge
    Database { engine: String, name: String },
    /// Free markdown text
    Markdown { text: String, font_size: f32 },
    /// Folder tree listing
    FolderTree {
        root: String,
        entries: Vec<String>,
        collapsed: bool,
    },
}

impl ItemProps {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemProps::Box { .. } => ItemKind::Box,
            ItemProps::Arrow { .. } => ItemKind::Arrow,
            ItemProps::Code { .. } => ItemKind::Code,
            ItemProps::Database { .. } => ItemKind::Database,
            ItemProps::Markdown { .. } => ItemKind::Markdown,
            ItemProps::FolderTree { .. } => ItemKind::FolderTree,
        }
    }
}

// ============================================================================
// Items
// ============================================================================

/// An item placed on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier for this item
    pub id: ItemId,
    /// Top-left corner in scene coordinates
    pub position: Point,
    /// Size in scene units
    pub size: Size,
    /// Kind-specific properties; the variant fixes the kind
    pub props: ItemProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_label: Option<String>,
    /// Rotation in degrees, clockwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
}

impl Item {
    pub fn new(position: Point, size: Size, props: ItemProps) -> Self {
        Self {
            id: ItemId::new(),
            position,
            size,
            props,
            label: None,
            comment: None,
            comment_label: None,
            rotation: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> ItemKind {
        self.props.kind()
    }

    /// Bounding rectangle in scene coordinates
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}
