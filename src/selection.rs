//! Selection model - the set of selected item ids.
//!
//! The set is always a subset of the ids in the current scene: the editor
//! calls [`SelectionManager::reconcile`] after every scene change.

use crate::scene::Scene;
use crate::spatial_index::SpatialIndex;
use crate::types::{ItemId, Rect};
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionManager {
    selected: HashSet<ItemId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on an item. Additive clicks toggle membership;
    /// plain clicks replace the selection with just this item.
    pub fn click(&mut self, id: ItemId, additive: bool) {
        if additive {
            self.toggle(id);
        } else {
            self.selected.clear();
            self.selected.insert(id);
        }
    }

    pub fn toggle(&mut self, id: ItemId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Replace the selection with every item whose rectangle intersects `rect`.
    pub fn marquee_select(&mut self, rect: Rect, scene: &Scene) {
        let index = SpatialIndex::from_scene(scene);
        self.marquee_select_with_base(rect, &index, scene, &HashSet::new());
    }

    /// Like [`marquee_select`](Self::marquee_select), but queries an index
    /// already built for `scene` and keeps `base` selected as well
    /// (shift-marquee).
    pub fn marquee_select_with_base(
        &mut self,
        rect: Rect,
        index: &SpatialIndex,
        scene: &Scene,
        base: &HashSet<ItemId>,
    ) {
        self.selected = index
            .query_rect(rect)
            .into_iter()
            .chain(base.iter().copied())
            .collect();
        self.reconcile(scene);
    }

    pub fn select_all(&mut self, scene: &Scene) {
        self.selected = scene.ids().collect();
    }

    /// Replace the selection with exactly `ids`.
    pub fn set(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        self.selected = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Recompute the selection against `scene`, dropping ids it no longer holds.
    pub fn reconcile(&mut self, scene: &Scene) {
        self.selected.retain(|id| scene.contains(*id));
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    pub fn ids(&self) -> &HashSet<ItemId> {
        &self.selected
    }

    /// Selected ids in paint order
    pub fn ordered_ids(&self, scene: &Scene) -> Vec<ItemId> {
        scene.ids().filter(|id| self.selected.contains(id)).collect()
    }

    /// The only selected id, if exactly one item is selected.
    pub fn single(&self) -> Option<ItemId> {
        if self.selected.len() == 1 {
            self.selected.iter().next().copied()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
