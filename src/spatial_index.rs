//! R-tree over item rectangles.
//!
//! Rebuilt from the committed scene after every commit, undo and redo, and
//! queried by pointer hit testing and marquee selection. The draft scene of
//! an open gesture is never indexed.

use crate::scene::Scene;
use crate::types::{ItemId, Point, Rect};
use rstar::{AABB, RTree, RTreeObject};

#[derive(Debug, Clone, Copy)]
struct IndexedItem {
    id: ItemId,
    rect: Rect,
}

impl RTreeObject for IndexedItem {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        envelope_of(self.rect)
    }
}

fn envelope_of(rect: Rect) -> AABB<[f32; 2]> {
    AABB::from_corners([rect.min.x, rect.min.y], [rect.max.x, rect.max.y])
}

#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<IndexedItem>,
}

impl SpatialIndex {
    pub fn from_scene(scene: &Scene) -> Self {
        let mut index = Self::default();
        index.rebuild(scene);
        index
    }

    pub fn rebuild(&mut self, scene: &Scene) {
        let items = scene
            .items()
            .iter()
            .map(|item| IndexedItem {
                id: item.id,
                rect: item.rect(),
            })
            .collect();
        self.tree = RTree::bulk_load(items);
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items whose rectangle contains `point`, in no particular order.
    pub fn query_point(&self, point: Point) -> Vec<ItemId> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([point.x, point.y]))
            .filter(|entry| entry.rect.contains(point))
            .map(|entry| entry.id)
            .collect()
    }

    /// Items whose rectangle touches `rect`; a shared edge counts.
    pub fn query_rect(&self, rect: Rect) -> Vec<ItemId> {
        self.tree
            .locate_in_envelope_intersecting(&envelope_of(rect))
            .map(|entry| entry.id)
            .collect()
    }

    /// Topmost item under `point`, resolving overlaps by scene paint order.
    pub fn topmost_at(&self, point: Point, scene: &Scene) -> Option<ItemId> {
        self.query_point(point)
            .into_iter()
            .filter_map(|id| scene.index_of(id).map(|z| (z, id)))
            .max_by_key(|(z, _)| *z)
            .map(|(_, id)| id)
    }
}
