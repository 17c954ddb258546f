use crate::assets::ModelResolver;
use crate::item::{ItemId, ItemTransform, ModelRef, PlacedItem, TypeTag};
use crate::scene::FurnitureDescriptor;
use bevy_ecs::prelude::{Entity, Mut, World};
use glam::Vec3;
use std::collections::HashMap;
use std::slice;

/// Ordered store of placed furniture.
///
/// Items live as entities in a `bevy_ecs` world carrying `ItemId`, `TypeTag`, `ModelRef` and
/// `ItemTransform`. Insertion order is display order.
pub struct SceneRegistry {
    world: World,
    order: Vec<Entity>,
    index: HashMap<ItemId, Entity>,
    next_id: u64,
    id_space_exhausted: bool,
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self { world: World::new(), order: Vec::new(), index: HashMap::new(), next_id: 1, id_space_exhausted: false }
    }

    /// Replaces the registry contents with one item per descriptor.
    ///
    /// Positions are copied verbatim, even when they lie outside the room. A descriptor whose id
    /// was already loaded is skipped.
    pub fn load_from_descriptors<R>(&mut self, descriptors: &[FurnitureDescriptor], resolver: &R) -> usize
    where
        R: ModelResolver + ?Sized,
    {
        self.clear();
        for desc in descriptors {
            if self.index.contains_key(&desc.id) {
                tracing::warn!(
                    target: "registry",
                    "duplicate furniture id {} ('{}') in scene descriptors, keeping the first",
                    desc.id,
                    desc.type_tag
                );
                continue;
            }
            let model = resolver.resolve(&desc.type_tag);
            self.spawn(desc.id, &desc.type_tag, model, ItemTransform::from_translation(desc.position()));
        }
        tracing::debug!(target: "registry", "loaded {} of {} descriptors", self.len(), descriptors.len());
        self.len()
    }

    /// Adds a catalog pick at the room origin and returns its freshly issued id.
    pub fn insert_default<R>(&mut self, type_tag: &str, resolver: &R) -> ItemId
    where
        R: ModelResolver + ?Sized,
    {
        let id = self.issue_id();
        let model = resolver.resolve(type_tag);
        self.spawn(id, type_tag, model, ItemTransform::default());
        id
    }

    /// Snapshots of every item in registry order. Clone the iterator to walk it again.
    pub fn all(&self) -> Items<'_> {
        Items { registry: self, cursor: self.order.iter() }
    }

    pub fn get(&self, id: ItemId) -> Option<PlacedItem> {
        self.index.get(&id).and_then(|entity| self.snapshot(*entity))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn position(&self, id: ItemId) -> Option<Vec3> {
        self.transform(id).map(|transform| transform.translation)
    }

    pub fn transform(&self, id: ItemId) -> Option<ItemTransform> {
        let entity = *self.index.get(&id)?;
        self.world.get::<ItemTransform>(entity).copied()
    }

    /// Overwrites the live transform, as a gizmo does while dragging.
    pub fn set_transform(&mut self, id: ItemId, transform: ItemTransform) -> bool {
        match self.transform_mut(id) {
            Some(mut live) => {
                *live = transform;
                true
            }
            None => false,
        }
    }

    pub(crate) fn transform_mut(&mut self, id: ItemId) -> Option<Mut<'_, ItemTransform>> {
        let entity = *self.index.get(&id)?;
        self.world.get_mut::<ItemTransform>(entity)
    }

    fn spawn(&mut self, id: ItemId, type_tag: &str, model: ModelRef, transform: ItemTransform) {
        let entity = self.world.spawn((id, TypeTag(type_tag.to_string()), model, transform)).id();
        self.order.push(entity);
        self.index.insert(id, entity);
        match id.get().checked_add(1) {
            Some(after) => self.next_id = self.next_id.max(after),
            None => self.id_space_exhausted = true,
        }
    }

    /// Issues ids above every id seen so far. Once `u64::MAX` has been used, falls back to the
    /// lowest id not currently in the registry.
    fn issue_id(&mut self) -> ItemId {
        if self.id_space_exhausted {
            let mut candidate = 0;
            while self.index.contains_key(&ItemId(candidate)) {
                candidate += 1;
            }
            return ItemId(candidate);
        }
        // `u64::MAX` is never in the index here, so the scan stops before overflowing.
        let mut candidate = self.next_id;
        while self.index.contains_key(&ItemId(candidate)) {
            candidate += 1;
        }
        match candidate.checked_add(1) {
            Some(after) => self.next_id = after,
            None => self.id_space_exhausted = true,
        }
        ItemId(candidate)
    }

    fn clear(&mut self) {
        for entity in self.order.drain(..) {
            self.world.despawn(entity);
        }
        self.index.clear();
    }

    fn snapshot(&self, entity: Entity) -> Option<PlacedItem> {
        let id = *self.world.get::<ItemId>(entity)?;
        let type_tag = self.world.get::<TypeTag>(entity)?.0.clone();
        let model = self.world.get::<ModelRef>(entity)?.clone();
        let transform = *self.world.get::<ItemTransform>(entity)?;
        Some(PlacedItem { id, type_tag, model, transform })
    }
}

/// Lazy walk over registry snapshots.
#[derive(Clone)]
pub struct Items<'a> {
    registry: &'a SceneRegistry,
    cursor: slice::Iter<'a, Entity>,
}

impl Iterator for Items<'_> {
    type Item = PlacedItem;

    fn next(&mut self) -> Option<Self::Item> {
        for entity in self.cursor.by_ref() {
            if let Some(item) = self.registry.snapshot(*entity) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cursor.len()))
    }
}
