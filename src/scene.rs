//! Scene store - the ordered item collection and its pure mutations.
//!
//! Every mutation takes `&self` and returns a complete new `Scene`; nothing
//! is updated in place. Operations addressing an id that is not in the scene
//! return an unchanged copy instead of failing, so callers never have to
//! handle errors from the dispatch layer.

use crate::constants::MIN_ITEM_SIZE;
use crate::registry::ItemRegistry;
use crate::types::{Item, ItemId, ItemKind, ItemProps, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Ordered sequence of items. Order is paint order: later items draw on top.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    items: Vec<Item>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from items, dropping any whose id repeats an earlier one.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut seen = std::collections::HashSet::with_capacity(items.len());
        let items = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id);
                if !fresh {
                    tracing::warn!("dropping item with duplicate id {}", item.id);
                }
                fresh
            })
            .collect();
        Self { items }
    }

    // ==================== Queries ====================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Paint-order index of an item
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(|item| item.id)
    }

    /// Topmost item whose rectangle contains `point`.
    pub fn item_at(&self, point: Point) -> Option<&Item> {
        self.items.iter().rev().find(|item| item.rect().contains(point))
    }

    // ==================== Mutations ====================

    /// Append an item of `kind` with the registry's default size and props.
    pub fn add_item(&self, registry: &ItemRegistry, kind: ItemKind, position: Point) -> (Scene, ItemId) {
        let spec = registry.spec(kind);
        self.add_item_with(spec.default_props(), position, spec.default_size)
    }

    /// Append an item with explicit props and size (floored).
    pub fn add_item_with(&self, props: ItemProps, position: Point, size: Size) -> (Scene, ItemId) {
        let item = Item::new(position, size.floored(MIN_ITEM_SIZE), props);
        let id = item.id;
        let mut next = self.clone();
        next.items.push(item);
        (next, id)
    }

    pub fn update_position(&self, id: ItemId, position: Point) -> Scene {
        self.map_item(id, |item| item.position = position)
    }

    /// Set an item's size, never below the minimum on either axis.
    pub fn update_size(&self, id: ItemId, size: Size) -> Scene {
        self.map_item(id, |item| item.size = size.floored(MIN_ITEM_SIZE))
    }

    pub fn update_label(&self, id: ItemId, label: Option<String>) -> Scene {
        self.map_item(id, |item| item.label = label)
    }

    pub fn update_comment(&self, id: ItemId, comment: Option<String>, label: Option<String>) -> Scene {
        self.map_item(id, |item| {
            item.comment = comment;
            item.comment_label = label;
        })
    }

    /// Replace an item's props. Props of a different kind are ignored: an
    /// item's kind is fixed at creation.
    pub fn update_props(&self, id: ItemId, props: ItemProps) -> Scene {
        match self.get(id) {
            Some(item) if item.kind() != props.kind() => {
                tracing::warn!(
                    "ignoring {:?} props for {:?} item {}",
                    props.kind(),
                    item.kind(),
                    id
                );
                self.clone()
            }
            _ => self.map_item(id, |item| item.props = props),
        }
    }

    /// Set rotation in degrees, normalized into [0, 360).
    pub fn update_rotation(&self, id: ItemId, degrees: f32) -> Scene {
        let normalized = degrees.rem_euclid(360.0);
        self.map_item(id, |item| {
            item.rotation = (normalized != 0.0).then_some(normalized);
        })
    }

    pub fn delete_item(&self, id: ItemId) -> Scene {
        self.delete_items(&[id])
    }

    /// Remove every listed item in one step.
    pub fn delete_items(&self, ids: &[ItemId]) -> Scene {
        Scene {
            items: self
                .items
                .iter()
                .filter(|item| !ids.contains(&item.id))
                .cloned()
                .collect(),
        }
    }

    /// Copy an existing item under a fresh id, shifted by `offset` and clamped
    /// into `bounds`. Returns `None` for the id when the source does not exist.
    pub fn duplicate_item(&self, id: ItemId, offset: Point, bounds: Rect) -> (Scene, Option<ItemId>) {
        match self.get(id) {
            Some(source) => {
                let source = source.clone();
                let (next, new_id) = self.insert_copy(&source, offset, bounds);
                (next, Some(new_id))
            }
            None => (self.clone(), None),
        }
    }

    /// Append a copy of `item` (which need not be in this scene) under a fresh id.
    pub fn insert_copy(&self, item: &Item, offset: Point, bounds: Rect) -> (Scene, ItemId) {
        let mut copy = item.clone();
        copy.id = ItemId::new();
        copy.position = clamp_into(copy.position + offset, copy.size, bounds);
        let id = copy.id;
        let mut next = self.clone();
        next.items.push(copy);
        (next, id)
    }

    /// Move each listed item to its start position plus `delta`.
    pub fn translate_items(&self, starts: &[(ItemId, Point)], delta: Point) -> Scene {
        let mut next = self.clone();
        for item in &mut next.items {
            if let Some((_, start)) = starts.iter().find(|(id, _)| *id == item.id) {
                item.position = *start + delta;
            }
        }
        next
    }

    fn map_item(&self, id: ItemId, f: impl FnOnce(&mut Item)) -> Scene {
        let mut next = self.clone();
        match next.items.iter_mut().find(|item| item.id == id) {
            Some(item) => f(item),
            None => tracing::trace!("mutation on missing item {} ignored", id),
        }
        next
    }
}

/// Keep an item's top-left inside `bounds`, preferring the item fully visible.
fn clamp_into(position: Point, size: Size, bounds: Rect) -> Point {
    let max_x = (bounds.max.x - size.width).max(bounds.min.x);
    let max_y = (bounds.max.y - size.height).max(bounds.min.y);
    // max/min rather than clamp: a NaN bound must not panic.
    Point::new(
        position.x.max(bounds.min.x).min(max_x),
        position.y.max(bounds.min.y).min(max_y),
    )
}
