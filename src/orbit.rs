use glam::{Vec2, Vec3};

/// Camera-orbit input the router suspends while a gizmo gesture is in progress.
pub trait OrbitControl {
    fn set_enabled(&mut self, enabled: bool);
    fn is_enabled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Angle from the vertical axis, in radians.
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_polar: std::f32::consts::FRAC_PI_4,
            max_polar: std::f32::consts::PI / 2.2,
            min_distance: 5.0,
            max_distance: 25.0,
        }
    }
}

/// Orbit-style viewer storing yaw/polar angles around a target.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw_radians: f32,
    pub polar_radians: f32,
    limits: OrbitLimits,
    enabled: bool,
}

impl OrbitCamera {
    pub fn new(target: Vec3, radius: f32, limits: OrbitLimits) -> Self {
        let mut camera = Self {
            target,
            radius,
            yaw_radians: 0.0,
            polar_radians: limits.max_polar,
            limits,
            enabled: true,
        };
        camera.apply_limits();
        camera
    }

    /// Places the camera at `position` looking at `target`, then applies `limits`.
    pub fn looking_from(position: Vec3, target: Vec3, limits: OrbitLimits) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let mut camera = Self::new(target, radius, limits);
        if radius > f32::EPSILON {
            camera.yaw_radians = offset.x.atan2(offset.z);
            camera.polar_radians = (offset.y / radius).clamp(-1.0, 1.0).acos();
            camera.apply_limits();
        }
        camera
    }

    pub fn limits(&self) -> OrbitLimits {
        self.limits
    }

    pub fn eye_position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar_radians.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw_radians.sin_cos();
        self.target + Vec3::new(sin_polar * sin_yaw, cos_polar, sin_polar * cos_yaw) * self.radius
    }

    pub fn orbit(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        self.yaw_radians += delta.x;
        self.polar_radians += delta.y;
        self.apply_limits();
    }

    pub fn zoom(&mut self, factor: f32) {
        if !self.enabled {
            return;
        }
        self.radius *= factor;
        self.apply_limits();
    }

    fn apply_limits(&mut self) {
        self.polar_radians = self.polar_radians.clamp(self.limits.min_polar, self.limits.max_polar);
        self.radius = self.radius.clamp(self.limits.min_distance, self.limits.max_distance);
    }
}

impl OrbitControl for OrbitCamera {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_start_position_is_within_limits() {
        let start = Vec3::new(12.0, 12.0, 12.0);
        let camera = OrbitCamera::looking_from(start, Vec3::ZERO, OrbitLimits::default());
        assert!(camera.eye_position().distance(start) < 1e-3);
    }

    #[test]
    fn polar_and_distance_are_clamped() {
        let mut camera = OrbitCamera::looking_from(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO, OrbitLimits::default());
        camera.orbit(Vec2::new(0.0, -3.0));
        assert!((camera.polar_radians - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        camera.zoom(100.0);
        assert_eq!(camera.radius, 25.0);
        camera.zoom(0.0);
        assert_eq!(camera.radius, 5.0);
    }

    #[test]
    fn disabled_camera_ignores_input() {
        let mut camera = OrbitCamera::looking_from(Vec3::new(12.0, 12.0, 12.0), Vec3::ZERO, OrbitLimits::default());
        let before = camera.eye_position();
        camera.set_enabled(false);
        camera.orbit(Vec2::new(1.0, 0.2));
        camera.zoom(0.5);
        assert_eq!(camera.eye_position(), before);
        camera.set_enabled(true);
        camera.orbit(Vec2::new(1.0, 0.0));
        assert_ne!(camera.eye_position(), before);
    }
}
