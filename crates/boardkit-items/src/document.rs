//! Document arena.
//!
//! A [`Document`] owns every item and footprint on one sheet. Parent
//! relationships are index handles into the arena rather than
//! references, so undo/redo snapshot swaps can never dangle.
//!
//! Footprint children carry two copies of their geometry: the local
//! copy in footprint-relative coordinates and the world copy used for
//! rendering and hit testing. The world copy is recomputed whenever the
//! footprint transform changes, and the local copy whenever the world
//! geometry is edited directly.

use boardkit_core::{Angle, BoundingBox, Point, Vector};
use serde::{Deserialize, Serialize};

use crate::item::{Item, Transform};

/// Handle to an item in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(u32);

/// Handle to a footprint in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FootprintId(u32);

/// A placed footprint: the parent context for board items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub position: Point,
    pub orientation: Angle,
    /// Whether the footprint sits on the back of the board.
    pub flipped: bool,
    pub reference: String,
}

impl Footprint {
    pub fn new(position: Point, reference: impl Into<String>) -> Self {
        Self {
            position,
            orientation: Angle::ZERO,
            flipped: false,
            reference: reference.into(),
        }
    }

    /// World geometry of a child from its local geometry.
    fn local_to_world(&self, local: &Item) -> Item {
        let mut item = local.clone();
        if self.flipped {
            item.flip(Point::ORIGIN, true);
        }
        item.rotate(Point::ORIGIN, self.orientation);
        item.translate(self.position);
        item
    }

    /// Local geometry of a child from its world geometry.
    fn world_to_local(&self, world: &Item) -> Item {
        let mut item = world.clone();
        item.translate(-self.position);
        item.rotate(Point::ORIGIN, -self.orientation);
        if self.flipped {
            item.flip(Point::ORIGIN, true);
        }
        item
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemEntry {
    item: Item,
    parent: Option<FootprintId>,
    /// Footprint-relative geometry; `None` for free items.
    local: Option<Item>,
}

/// One sheet's worth of items and footprints.
///
/// `Clone` yields a fully independent snapshot: no mutable state is
/// shared between a document and its clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    name: String,
    footprints: Vec<Option<Footprint>>,
    items: Vec<Option<ItemEntry>>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            footprints: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add a free item in world coordinates.
    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = ItemId(self.items.len() as u32);
        self.items.push(Some(ItemEntry {
            item,
            parent: None,
            local: None,
        }));
        id
    }

    pub fn add_footprint(&mut self, footprint: Footprint) -> FootprintId {
        let id = FootprintId(self.footprints.len() as u32);
        self.footprints.push(Some(footprint));
        id
    }

    /// Add an item owned by `parent`, given in footprint-local
    /// coordinates. The world copy is computed immediately. Returns
    /// `None` if `parent` was removed.
    pub fn add_footprint_item(&mut self, parent: FootprintId, local: Item) -> Option<ItemId> {
        let footprint = self.footprints.get(parent.0 as usize)?.as_ref()?;
        let world = footprint.local_to_world(&local);
        let id = ItemId(self.items.len() as u32);
        self.items.push(Some(ItemEntry {
            item: world,
            parent: Some(parent),
            local: Some(local),
        }));
        Some(id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items
            .get(id.0 as usize)
            .and_then(|e| e.as_ref())
            .map(|e| &e.item)
    }

    pub fn footprint(&self, id: FootprintId) -> Option<&Footprint> {
        self.footprints.get(id.0 as usize).and_then(|f| f.as_ref())
    }

    /// Live items in insertion order, world coordinates.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().flatten().map(|e| &e.item)
    }

    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_some())
            .map(|(i, _)| ItemId(i as u32))
    }

    pub fn item_count(&self) -> usize {
        self.items.iter().flatten().count()
    }

    /// Remove an item from the document. Its handle becomes invalid.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        self.items
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .map(|e| e.item)
    }

    /// Edit an item's world geometry. For footprint children the local
    /// copy is recomputed afterwards so both stay consistent.
    pub fn update_item(&mut self, id: ItemId, edit: impl FnOnce(&mut Item)) {
        let Some(Some(entry)) = self.items.get_mut(id.0 as usize) else {
            return;
        };
        edit(&mut entry.item);
        if let Some(parent) = entry.parent {
            if let Some(footprint) = self.footprints[parent.0 as usize].as_ref() {
                entry.local = Some(footprint.world_to_local(&entry.item));
            }
        }
    }

    /// Recompute world geometry for every child of `id` from its local
    /// copy and the footprint's current transform.
    fn refresh_children(&mut self, id: FootprintId) {
        let Some(footprint) = self.footprints[id.0 as usize].clone() else {
            return;
        };
        for entry in self.items.iter_mut().flatten() {
            if entry.parent == Some(id) {
                if let Some(local) = &entry.local {
                    entry.item = footprint.local_to_world(local);
                }
            }
        }
    }

    pub fn translate_footprint(&mut self, id: FootprintId, v: Vector) {
        if let Some(Some(footprint)) = self.footprints.get_mut(id.0 as usize) {
            footprint.position += v;
            self.refresh_children(id);
        }
    }

    pub fn rotate_footprint(&mut self, id: FootprintId, center: Point, angle: Angle) {
        if let Some(Some(footprint)) = self.footprints.get_mut(id.0 as usize) {
            footprint.position = boardkit_core::rotate_point(footprint.position, center, angle);
            footprint.orientation = footprint.orientation + angle;
            self.refresh_children(id);
        }
    }

    /// Flip a footprint to the other side of the board. Children are
    /// re-derived from their local geometry, which remaps their layers
    /// via the paired-layer table.
    pub fn flip_footprint(&mut self, id: FootprintId, center: Point, left_right: bool) {
        if let Some(Some(footprint)) = self.footprints.get_mut(id.0 as usize) {
            // Children store the flip as a vertical-axis mirror (see
            // `local_to_world`), so an up-down flip folds the extra
            // half turn into the orientation.
            if left_right {
                footprint.position =
                    boardkit_core::geometry::mirror_point_x(footprint.position, center.x);
                footprint.orientation = (-footprint.orientation).normalized();
            } else {
                footprint.position =
                    boardkit_core::geometry::mirror_point_y(footprint.position, center.y);
                footprint.orientation = (Angle::DEG_180 - footprint.orientation).normalized();
            }
            footprint.flipped = !footprint.flipped;
            self.refresh_children(id);
        }
    }

    /// Bounding box of all live items, `None` for an empty document.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.items()
            .map(|i| i.bounding_box())
            .reduce(|a, b| a.merge(&b))
    }

    /// Item handles whose geometry hits `pos`, in insertion order.
    pub fn items_at(&self, pos: Point, tolerance: i32) -> Vec<ItemId> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, e)| {
                e.as_ref()
                    .filter(|e| e.item.hit_test(pos, tolerance))
                    .map(|_| ItemId(i as u32))
            })
            .collect()
    }

    /// Deep value copy for undo/redo. Shares nothing with `self`.
    pub fn snapshot(&self) -> Document {
        self.clone()
    }
}
