use crate::bounds::{Axes, SpatialBounds};
use crate::item::ItemId;
use crate::registry::SceneRegistry;
use crate::selection::{SelectionController, TransformMode};
use glam::Vec3;

/// Result of a clamp that actually moved the active item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampOutcome {
    pub item: ItemId,
    pub axes: Axes,
    pub position: Vec3,
}

/// Keeps the active item's position inside the room while it is being translated.
///
/// Rotate and scale gestures are left alone, even if they shift the stored position.
#[derive(Debug, Clone, Default)]
pub struct TransformConstraintEngine {
    bounds: SpatialBounds,
}

impl TransformConstraintEngine {
    pub fn new(bounds: SpatialBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &SpatialBounds {
        &self.bounds
    }

    /// Runs once per transform-change notification from the active gizmo.
    pub fn on_transform_change(
        &self,
        selection: &SelectionController,
        registry: &mut SceneRegistry,
    ) -> Option<ClampOutcome> {
        let (item, mode) = selection.active()?;
        if mode != TransformMode::Translate {
            return None;
        }
        let mut transform = registry.transform_mut(item)?;
        let mut position = transform.translation;
        let axes = self.bounds.clamp_in_place(&mut position);
        if axes.is_empty() {
            return None;
        }
        transform.translation = position;
        tracing::debug!(
            target: "constraint",
            "clamped item {item} on {} to ({:.3}, {:.3}, {:.3})",
            axes.label(),
            position.x,
            position.y,
            position.z
        );
        Some(ClampOutcome { item, axes, position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ModelPathTemplate;
    use crate::item::ItemTransform;

    #[test]
    fn idle_selection_never_clamps() {
        let resolver = ModelPathTemplate::default();
        let mut registry = SceneRegistry::new();
        let id = registry.insert_default("chair", &resolver);
        registry.set_transform(id, ItemTransform::from_translation(Vec3::new(30.0, 5.0, -30.0)));
        let engine = TransformConstraintEngine::default();
        let selection = SelectionController::new();
        assert!(engine.on_transform_change(&selection, &mut registry).is_none());
        assert_eq!(registry.position(id), Some(Vec3::new(30.0, 5.0, -30.0)));
    }

    #[test]
    fn scale_mode_leaves_position_untouched() {
        let resolver = ModelPathTemplate::default();
        let mut registry = SceneRegistry::new();
        let id = registry.insert_default("chair", &resolver);
        let mut selection = SelectionController::new();
        selection.select(id, &registry);
        selection.set_mode(TransformMode::Scale);
        let moved = ItemTransform {
            translation: Vec3::new(0.0, -4.0, 0.0),
            scale: Vec3::splat(40.0),
            ..Default::default()
        };
        registry.set_transform(id, moved);
        let engine = TransformConstraintEngine::default();
        assert!(engine.on_transform_change(&selection, &mut registry).is_none());
        assert_eq!(registry.transform(id), Some(moved));
    }

    #[test]
    fn translate_mode_clamps_only_offending_axes() {
        let resolver = ModelPathTemplate::default();
        let mut registry = SceneRegistry::new();
        let id = registry.insert_default("chair", &resolver);
        let mut selection = SelectionController::new();
        selection.select(id, &registry);
        registry.set_transform(id, ItemTransform::from_translation(Vec3::new(1.234_567, 3.0, -0.5)));
        let engine = TransformConstraintEngine::default();
        let outcome = engine.on_transform_change(&selection, &mut registry).expect("y clamped");
        assert_eq!(outcome.axes, Axes::Y);
        let position = registry.position(id).expect("position");
        assert_eq!(position.x.to_bits(), 1.234_567_f32.to_bits());
        assert_eq!(position.y, 2.0);
        assert_eq!(position.z, -0.5);
    }
}
