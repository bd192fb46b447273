//! Snapshot history for undo/redo.
//!
//! Each entry is a full copy of the scene. The cursor points at the entry
//! matching the live scene; recording after an undo prunes the redo branch.

use crate::constants::MAX_HISTORY_STATES;
use crate::scene::Scene;

#[derive(Clone, Debug)]
pub struct HistoryLog {
    entries: Vec<Scene>,
    cursor: usize,
    cap: usize,
}

impl HistoryLog {
    /// Start a log whose only entry is `initial`.
    pub fn new(initial: Scene, cap: usize) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            cap: cap.max(1),
        }
    }

    /// Rebuild a log from persisted entries; the last entry becomes current.
    /// Returns a log holding a single empty scene when `entries` is empty.
    pub fn from_entries(mut entries: Vec<Scene>, cap: usize) -> Self {
        let cap = cap.max(1);
        if entries.is_empty() {
            return Self::new(Scene::new(), cap);
        }
        if entries.len() > cap {
            let excess = entries.len() - cap;
            entries.drain(..excess);
        }
        let cursor = entries.len() - 1;
        Self { entries, cursor, cap }
    }

    /// Record a committed scene.
    ///
    /// Returns `false` without touching the log when `scene` equals the entry
    /// at the cursor, so a gesture that ends where it started leaves no trace.
    pub fn record(&mut self, scene: Scene) -> bool {
        if self.entries[self.cursor] == scene {
            return false;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push(scene);
        self.cursor += 1;

        if self.entries.len() > self.cap {
            self.entries.remove(0);
            self.cursor -= 1;
        }

        tracing::debug!(
            "history: recorded entry {} of {}",
            self.cursor + 1,
            self.entries.len()
        );
        true
    }

    /// Step back one entry and return it, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&Scene> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry and return it, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&Scene> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn current(&self) -> &Scene {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Entries up to and including the cursor, oldest first.
    pub fn entries_through_cursor(&self) -> &[Scene] {
        &self.entries[..=self.cursor]
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(Scene::new(), MAX_HISTORY_STATES)
    }
}
