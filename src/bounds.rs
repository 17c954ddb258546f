use anyhow::{bail, Result};
use bitflags::bitflags;
use glam::Vec3;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Axes touched by a clamp.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Axes: u8 {
        const X = 0b001;
        const Y = 0b010;
        const Z = 0b100;
    }
}

impl Axes {
    pub fn label(self) -> String {
        let mut out = String::new();
        for (axis, name) in [(Axes::X, 'x'), (Axes::Y, 'y'), (Axes::Z, 'z')] {
            if self.contains(axis) {
                out.push(name);
            }
        }
        out
    }
}

/// Closed interval `[min, max]` for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    pub const fn new_unchecked(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn new(min: f32, max: f32) -> Result<Self> {
        let range = Self { min, max };
        range.validate("axis")?;
        Ok(range)
    }

    pub(crate) fn validate(&self, axis: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            bail!("{axis} range [{}, {}] must be finite", self.min, self.max);
        }
        if self.min > self.max {
            bail!("{axis} range is inverted: min {} > max {}", self.min, self.max);
        }
        Ok(())
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns the clipped value, or `None` when `value` already lies inside the range.
    fn clip(&self, value: f32) -> Option<f32> {
        if value < self.min {
            Some(self.min)
        } else if value > self.max {
            Some(self.max)
        } else {
            None
        }
    }
}

/// Axis-aligned room volume furniture positions must stay inside.
///
/// Y is placement height above the floor; X and Z span the floor plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialBounds {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

pub const DEFAULT_ROOM_X: AxisRange = AxisRange::new_unchecked(-9.0, 9.0);
pub const DEFAULT_ROOM_Y: AxisRange = AxisRange::new_unchecked(0.1, 2.0);
pub const DEFAULT_ROOM_Z: AxisRange = AxisRange::new_unchecked(-9.0, 9.0);

impl Default for SpatialBounds {
    fn default() -> Self {
        Self { x: DEFAULT_ROOM_X, y: DEFAULT_ROOM_Y, z: DEFAULT_ROOM_Z }
    }
}

impl SpatialBounds {
    pub fn new(x: AxisRange, y: AxisRange, z: AxisRange) -> Result<Self> {
        let bounds = Self { x, y, z };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<()> {
        self.x.validate("x")?;
        self.y.validate("y")?;
        self.z.validate("z")?;
        Ok(())
    }

    pub fn contains(&self, position: Vec3) -> bool {
        self.x.contains(position.x) && self.y.contains(position.y) && self.z.contains(position.z)
    }

    pub fn clamp(&self, position: Vec3) -> Vec3 {
        let mut clamped = position;
        self.clamp_in_place(&mut clamped);
        clamped
    }

    /// Clips each component into its range, writing only the components that were outside.
    pub fn clamp_in_place(&self, position: &mut Vec3) -> Axes {
        let mut touched = Axes::empty();
        if let Some(x) = self.x.clip(position.x) {
            position.x = x;
            touched |= Axes::X;
        }
        if let Some(y) = self.y.clip(position.y) {
            position.y = y;
            touched |= Axes::Y;
        }
        if let Some(z) = self.z.clip(position.z) {
            position.z = z;
            touched |= Axes::Z;
        }
        touched
    }

    pub fn min(&self) -> Vec3 {
        Vec3::new(self.x.min, self.y.min, self.z.min)
    }

    pub fn max(&self) -> Vec3 {
        Vec3::new(self.x.max, self.y.max, self.z.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_match_room_limits() {
        let bounds = SpatialBounds::default();
        assert_eq!(bounds.min(), Vec3::new(-9.0, 0.1, -9.0));
        assert_eq!(bounds.max(), Vec3::new(9.0, 2.0, 9.0));
    }

    #[test]
    fn clamp_is_component_wise_not_radial() {
        let bounds = SpatialBounds::default();
        let clamped = bounds.clamp(Vec3::new(20.0, 1.0, 20.0));
        assert_eq!(clamped, Vec3::new(9.0, 1.0, 9.0));
    }

    #[test]
    fn clamp_in_place_reports_touched_axes() {
        let bounds = SpatialBounds::default();
        let mut position = Vec3::new(-12.0, 0.0, 3.25);
        let touched = bounds.clamp_in_place(&mut position);
        assert_eq!(touched, Axes::X | Axes::Y);
        assert_eq!(position, Vec3::new(-9.0, 0.1, 3.25));
        assert_eq!(touched.label(), "xy");
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = AxisRange::new(2.0, 1.0).expect_err("inverted range");
        assert!(err.to_string().contains("inverted"));
        let bad_y = AxisRange::new_unchecked(3.0, 0.5);
        assert!(SpatialBounds::new(DEFAULT_ROOM_X, bad_y, DEFAULT_ROOM_Z).is_err());
    }

    #[test]
    fn degenerate_range_pins_axis() {
        let flat = AxisRange::new(0.5, 0.5).expect("min == max is allowed");
        let bounds = SpatialBounds::new(DEFAULT_ROOM_X, flat, DEFAULT_ROOM_Z).expect("bounds");
        assert_eq!(bounds.clamp(Vec3::new(0.0, 7.0, 0.0)).y, 0.5);
        assert_eq!(bounds.clamp(Vec3::new(0.0, -7.0, 0.0)).y, 0.5);
    }
}
