//! Item kind catalogue.
//!
//! Maps every [`ItemKind`] to its display label, default size, default props,
//! and the kind-specific capabilities the editor checks before enabling a
//! shortcut.

use crate::constants::{DEFAULT_ARROW_THICKNESS, DEFAULT_FONT_SIZE, DEFAULT_STROKE_COLOR};
use crate::types::{ArrowHead, ItemKind, ItemProps, Size};

/// Catalogue entry for one kind.
#[derive(Clone, Debug)]
pub struct KindSpec {
    pub kind: ItemKind,
    pub label: &'static str,
    pub default_size: Size,
    pub rotatable: bool,
    factory: fn() -> ItemProps,
}

impl KindSpec {
    pub fn default_props(&self) -> ItemProps {
        (self.factory)()
    }
}

#[derive(Clone, Debug)]
pub struct ItemRegistry {
    /// Indexed by `kind as usize`
    specs: [KindSpec; ItemKind::ALL.len()],
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            specs: ItemKind::ALL.map(builtin_spec),
        }
    }

    pub fn spec(&self, kind: ItemKind) -> &KindSpec {
        &self.specs[kind as usize]
    }

    pub fn default_size(&self, kind: ItemKind) -> Size {
        self.spec(kind).default_size
    }

    pub fn default_props(&self, kind: ItemKind) -> ItemProps {
        self.spec(kind).default_props()
    }

    pub fn is_rotatable(&self, kind: ItemKind) -> bool {
        self.spec(kind).rotatable
    }

    /// All kinds in palette order
    pub fn kinds(&self) -> &'static [ItemKind] {
        ItemKind::all()
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_spec(kind: ItemKind) -> KindSpec {
    match kind {
        ItemKind::Box => KindSpec {
            kind,
            label: "Box",
            default_size: Size::new(160.0, 100.0),
            rotatable: false,
            factory: || ItemProps::Box {
                fill: None,
                stroke: DEFAULT_STROKE_COLOR.to_string(),
                corner_radius: 6.0,
                text: String::new(),
            },
        },
        ItemKind::Arrow => KindSpec {
            kind,
            label: "Arrow",
            default_size: Size::new(120.0, 20.0),
            rotatable: true,
            factory: || ItemProps::Arrow {
                head: ArrowHead::Arrow,
                thickness: DEFAULT_ARROW_THICKNESS,
                dashed: false,
                color: DEFAULT_STROKE_COLOR.to_string(),
            },
        },
        ItemKind::Code => KindSpec {
            kind,
            label: "Code",
            default_size: Size::new(320.0, 180.0),
            rotatable: false,
            factory: || ItemProps::Code {
                language: "rust".to_string(),
                source: String::new(),
                remote_url: None,
            },
        },
        ItemKind::Database => KindSpec {
            kind,
            label: "Database",
            default_size: Size::new(80.0, 96.0),
            rotatable: false,
            factory: || ItemProps::Database {
                engine: "postgres".to_string(),
                name: "db".to_string(),
            },
        },
        ItemKind::Markdown => KindSpec {
            kind,
            label: "Markdown",
            default_size: Size::new(240.0, 120.0),
            rotatable: false,
            factory: || ItemProps::Markdown {
                text: String::new(),
                font_size: DEFAULT_FONT_SIZE,
            },
        },
        ItemKind::FolderTree => KindSpec {
            kind,
            label: "Folder Tree",
            default_size: Size::new(220.0, 260.0),
            rotatable: false,
            factory: || ItemProps::FolderTree {
                root: "/".to_string(),
                entries: Vec::new(),
                collapsed: false,
            },
        },
    }
}
