use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a placed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Component)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Handle produced by the asset loader for a furniture type. Opaque to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Component)]
pub struct ModelRef(String);

impl ModelRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct TypeTag(pub String);

/// Live transform of a placed item. Only `translation` is ever bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct ItemTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self { translation: Vec3::ZERO, rotation: Quat::IDENTITY, scale: Vec3::ONE }
    }
}

impl ItemTransform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::default() }
    }
}

/// Snapshot of one furniture instance, as handed to the render surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub id: ItemId,
    pub type_tag: String,
    pub model: ModelRef,
    pub transform: ItemTransform,
}

impl PlacedItem {
    pub fn position(&self) -> Vec3 {
        self.transform.translation
    }
}
