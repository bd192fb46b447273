//! Notes board editor core.
//!
//! A headless scene-graph editor: an ordered list of typed items on a
//! pannable, zoomable canvas, edited through pointer gestures and keyboard
//! shortcuts, with snapshot undo/redo and persistence to a key-value store.
//! Drawing is delegated to an [`render::ItemRenderer`] supplied by the host.

pub mod constants;
pub mod editor;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod perf;
pub mod persistence;
pub mod registry;
pub mod render;
pub mod scene;
pub mod selection;
pub mod services;
pub mod settings;
pub mod shortcuts;
pub mod spatial_index;
pub mod types;

pub use editor::SceneEditor;
pub use error::{StoreError, StoreResult};
pub use history::HistoryLog;
pub use persistence::{FileStore, KeyValueStore, MemoryStore, PersistenceGateway};
pub use scene::Scene;
pub use selection::SelectionManager;
pub use settings::EditorSettings;
pub use types::{ArrowHead, Item, ItemId, ItemKind, ItemProps, Point, Rect, Size};
