//! Scene-load payload produced by the room-inference backend.
//!
//! Only `furniture[].id`, `type` and `position` feed the registry. The remaining fields are
//! carried so a full inference response deserializes without loss.

use crate::bounds::SpatialBounds;
use crate::item::ItemId;
use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3Data {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for Vec3Data {
    fn from(value: Vec3) -> Self {
        Self { x: value.x, y: value.y, z: value.z }
    }
}

impl From<Vec3Data> for Vec3 {
    fn from(value: Vec3Data) -> Self {
        Vec3::new(value.x, value.y, value.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeData {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

/// One furniture record in a scene-load payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureDescriptor {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub position: Vec3Data,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3Data>,
}

impl FurnitureDescriptor {
    pub fn new(id: impl Into<ItemId>, type_tag: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            type_tag: type_tag.into(),
            position: position.into(),
            confidence: None,
            size: None,
            rotation: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceData {
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub texture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomData {
    pub dimensions: SizeData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walls: Option<SurfaceData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<SurfaceData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<SurfaceData>,
}

/// Inference output for one room photo. Every section is optional; a freshly created project
/// loads with no scene at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RoomScene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomData>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub furniture: Vec<FurnitureDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<FurnitureDescriptor>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<FurnitureDescriptor>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RoomScene {
    /// Parses a payload that may itself be JSON `null`.
    pub fn from_json_str(contents: &str) -> Result<Option<Self>> {
        let scene: Option<Self> =
            serde_json::from_str(contents).context("Failed to parse room scene JSON")?;
        Ok(scene)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::from_json_str(&contents).with_context(|| format!("Invalid scene file {}", path.display()))
    }

    /// Descriptors whose position lies outside `bounds`. Loading never clamps these; they stay
    /// put until the user next drags them.
    pub fn out_of_bounds<'a>(
        &'a self,
        bounds: &'a SpatialBounds,
    ) -> impl Iterator<Item = &'a FurnitureDescriptor> + 'a {
        self.furniture.iter().filter(move |desc| !bounds.contains(desc.position()))
    }
}
