//! Scene persistence.
//!
//! The committed scene is stored under `items` and the history (oldest
//! first, current last) under `items-history`, both as JSON. Saving is
//! fire-and-forget: failures are logged and never reach the caller.
//!
//! With a non-zero debounce, a commit arriving within the window of the last
//! write only marks the document dirty; [`PersistenceGateway::poll`] writes
//! it once the window has passed and [`PersistenceGateway::flush`] writes it
//! unconditionally.
//!
//! Loading never fails either. A document that cannot be parsed is copied
//! aside to `<key>.corrupt` (or the next free `<key>.corrupt.N`) and replaced
//! by an empty board, so the next save does not silently destroy the only
//! copy of the user's data.

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::constants::{CORRUPT_SUFFIX, HISTORY_KEY, ITEMS_KEY, MAX_CORRUPT_BACKUPS};
use crate::error::StoreResult;
use crate::history::HistoryLog;
use crate::scene::Scene;
use crate::types::Item;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// Scene and history restored at startup.
#[derive(Debug)]
pub struct LoadedDocument {
    pub scene: Scene,
    pub history: HistoryLog,
}

/// Owns the store and knows the on-disk layout.
pub struct PersistenceGateway {
    store: Box<dyn KeyValueStore>,
    debounce: Duration,
    last_write: Option<Instant>,
    dirty: bool,
}

impl std::fmt::Debug for PersistenceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceGateway")
            .field("debounce", &self.debounce)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl PersistenceGateway {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            debounce: Duration::ZERO,
            last_write: None,
            dirty: false,
        }
    }

    /// Space writes at least `ms` apart. Zero writes on every save.
    pub fn set_debounce_ms(&mut self, ms: u64) {
        self.debounce = Duration::from_millis(ms);
    }

    /// A save was deferred and has not been written yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Gateway over an in-memory store that nothing else reads.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Write the scene and history, or defer the write while inside the
    /// debounce window. Errors are logged, not returned.
    pub fn save(&mut self, scene: &Scene, history: &HistoryLog) {
        if self.window_open() {
            trace!("save deferred");
            self.dirty = true;
            return;
        }
        self.write(scene, history);
    }

    /// Write a deferred save once the debounce window has passed.
    /// Returns true if it wrote.
    pub fn poll(&mut self, scene: &Scene, history: &HistoryLog) -> bool {
        if !self.dirty || self.window_open() {
            return false;
        }
        self.write(scene, history);
        true
    }

    /// Write a deferred save now. Returns true if it wrote.
    pub fn flush(&mut self, scene: &Scene, history: &HistoryLog) -> bool {
        if !self.dirty {
            return false;
        }
        self.write(scene, history);
        true
    }

    fn window_open(&self) -> bool {
        self.last_write
            .is_some_and(|at| !self.debounce.is_zero() && at.elapsed() < self.debounce)
    }

    fn write(&mut self, scene: &Scene, history: &HistoryLog) {
        crate::profile_scope!("persistence_save");
        self.dirty = false;
        self.last_write = Some(Instant::now());
        if let Err(e) = self.try_save(scene, history) {
            warn!("Failed to save board: {}", e);
        }
    }

    pub fn try_save(&self, scene: &Scene, history: &HistoryLog) -> StoreResult<()> {
        let items = serde_json::to_vec(scene)?;
        self.store.set(ITEMS_KEY, &items)?;
        let entries = serde_json::to_vec(history.entries_through_cursor())?;
        self.store.set(HISTORY_KEY, &entries)?;
        debug!("saved {} items, {} history entries", scene.len(), history.cursor() + 1);
        Ok(())
    }

    /// Restore the last saved document, or an empty one.
    pub fn load(&self, history_cap: usize) -> LoadedDocument {
        let scene = self.load_scene();
        let history = self.load_history(&scene, history_cap);
        info!("loaded board with {} items", scene.len());
        LoadedDocument { scene, history }
    }

    fn load_scene(&self) -> Scene {
        let Some(raw) = self.read(ITEMS_KEY) else {
            return Scene::new();
        };
        match serde_json::from_slice::<Vec<Item>>(&raw) {
            Ok(items) => Scene::from_items(items),
            Err(e) => {
                warn!("Stored items are unreadable, starting empty: {}", e);
                self.preserve_corrupt(ITEMS_KEY, &raw);
                Scene::new()
            }
        }
    }

    fn load_history(&self, scene: &Scene, cap: usize) -> HistoryLog {
        let Some(raw) = self.read(HISTORY_KEY) else {
            return HistoryLog::new(scene.clone(), cap);
        };
        let entries = match serde_json::from_slice::<Vec<Vec<Item>>>(&raw) {
            Ok(entries) => entries.into_iter().map(Scene::from_items).collect::<Vec<_>>(),
            Err(e) => {
                warn!("Stored history is unreadable, resetting it: {}", e);
                self.preserve_corrupt(HISTORY_KEY, &raw);
                return HistoryLog::new(scene.clone(), cap);
            }
        };
        if entries.last() != Some(scene) {
            debug!("stored history does not end at the stored scene, resetting it");
            return HistoryLog::new(scene.clone(), cap);
        }
        HistoryLog::from_entries(entries, cap)
    }

    fn read(&self, key: &str) -> Option<Vec<u8>> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {:?}: {}", key, e);
                None
            }
        }
    }

    /// Copy `raw` to the first free backup key. Earlier backups are never
    /// overwritten, and bytes already preserved are not copied again.
    fn preserve_corrupt(&self, key: &str, raw: &[u8]) {
        for n in 0..=MAX_CORRUPT_BACKUPS {
            let backup = match n {
                0 => format!("{key}{CORRUPT_SUFFIX}"),
                n => format!("{key}{CORRUPT_SUFFIX}.{n}"),
            };
            match self.store.get(&backup) {
                Ok(Some(existing)) if existing == raw => {
                    debug!("Unreadable {:?} already preserved as {:?}", key, backup);
                    return;
                }
                Ok(Some(_)) => continue,
                Ok(None) => {}
                Err(e) => {
                    warn!("Failed to check backup {:?}: {}", backup, e);
                    return;
                }
            }
            match self.store.set(&backup, raw) {
                Ok(()) => warn!("Unreadable {:?} preserved as {:?}", key, backup),
                Err(e) => warn!("Failed to preserve unreadable {:?}: {}", key, e),
            }
            return;
        }
        warn!("No free backup slot for unreadable {:?}, not preserved", key);
    }
}
