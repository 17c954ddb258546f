use crate::assets::DEFAULT_MODEL_PATH_TEMPLATE;
use crate::bounds::{AxisRange, SpatialBounds, DEFAULT_ROOM_X, DEFAULT_ROOM_Y, DEFAULT_ROOM_Z};
use crate::input::BindingsConfig;
use crate::orbit::OrbitLimits;
use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct RoomConfig {
    #[serde(default = "RoomConfig::default_x")]
    pub x: AxisRange,
    #[serde(default = "RoomConfig::default_y")]
    pub y: AxisRange,
    #[serde(default = "RoomConfig::default_z")]
    pub z: AxisRange,
}

impl RoomConfig {
    const fn default_x() -> AxisRange {
        DEFAULT_ROOM_X
    }

    const fn default_y() -> AxisRange {
        DEFAULT_ROOM_Y
    }

    const fn default_z() -> AxisRange {
        DEFAULT_ROOM_Z
    }

    pub fn bounds(&self) -> Result<SpatialBounds> {
        SpatialBounds::new(self.x, self.y, self.z).context("Invalid room bounds")
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self { x: Self::default_x(), y: Self::default_y(), z: Self::default_z() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrbitConfig {
    #[serde(default = "OrbitConfig::default_min_polar_degrees")]
    pub min_polar_degrees: f32,
    #[serde(default = "OrbitConfig::default_max_polar_degrees")]
    pub max_polar_degrees: f32,
    #[serde(default = "OrbitConfig::default_min_distance")]
    pub min_distance: f32,
    #[serde(default = "OrbitConfig::default_max_distance")]
    pub max_distance: f32,
    #[serde(default = "OrbitConfig::default_position")]
    pub position: [f32; 3],
    #[serde(default)]
    pub target: [f32; 3],
}

impl OrbitConfig {
    const fn default_min_polar_degrees() -> f32 {
        45.0
    }

    fn default_max_polar_degrees() -> f32 {
        180.0 / 2.2
    }

    const fn default_min_distance() -> f32 {
        5.0
    }

    const fn default_max_distance() -> f32 {
        25.0
    }

    const fn default_position() -> [f32; 3] {
        [12.0, 12.0, 12.0]
    }

    pub fn limits(&self) -> Result<OrbitLimits> {
        if self.min_polar_degrees > self.max_polar_degrees {
            bail!(
                "orbit polar range is inverted: {} > {} degrees",
                self.min_polar_degrees,
                self.max_polar_degrees
            );
        }
        if self.min_distance <= 0.0 || self.min_distance > self.max_distance {
            bail!("orbit distance range [{}, {}] is invalid", self.min_distance, self.max_distance);
        }
        Ok(OrbitLimits {
            min_polar: self.min_polar_degrees.to_radians(),
            max_polar: self.max_polar_degrees.to_radians(),
            min_distance: self.min_distance,
            max_distance: self.max_distance,
        })
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn target(&self) -> Vec3 {
        Vec3::from_array(self.target)
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_polar_degrees: Self::default_min_polar_degrees(),
            max_polar_degrees: Self::default_max_polar_degrees(),
            min_distance: Self::default_min_distance(),
            max_distance: Self::default_max_distance(),
            position: Self::default_position(),
            target: [0.0; 3],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "AssetConfig::default_model_path_template")]
    pub model_path_template: String,
}

impl AssetConfig {
    fn default_model_path_template() -> String {
        DEFAULT_MODEL_PATH_TEMPLATE.to_string()
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self { model_path_template: Self::default_model_path_template() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EditorConfig {
    #[serde(default)]
    pub room: RoomConfig,
    #[serde(default)]
    pub orbit: OrbitConfig,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub input: BindingsConfig,
}

impl EditorConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg: EditorConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        cfg.validate().with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(target: "config", "Config load error: {err:#}. Falling back to defaults.");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.room.bounds()?;
        self.orbit.limits()?;
        Ok(())
    }
}
