use crate::assets::ModelResolver;
use crate::constraint::TransformConstraintEngine;
use crate::events::{EditorEvent, EventBus};
use crate::input::{EditorAction, InputKey, KeyBindings};
use crate::item::{ItemId, ItemTransform};
use crate::orbit::OrbitControl;
use crate::registry::SceneRegistry;
use crate::selection::{SelectionChange, SelectionController, TransformMode};

/// Discrete interaction events delivered by the UI layer, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorInput {
    /// Pointer click that hit an item's surface.
    ItemClicked { item: ItemId },
    /// Pointer click that hit nothing selectable.
    BackgroundClicked,
    GizmoPointerDown,
    GizmoPointerUp,
    /// The gizmo moved the active item; carries the raw, unclamped transform.
    GizmoChanged { transform: ItemTransform },
    KeyDown { key: InputKey },
    /// A furniture type was picked from the catalog.
    CatalogSelected { type_tag: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Everything the router mutates while handling one event.
pub struct RouterTargets<'a, O: OrbitControl + ?Sized> {
    pub registry: &'a mut SceneRegistry,
    pub selection: &'a mut SelectionController,
    pub engine: &'a TransformConstraintEngine,
    pub orbit: &'a mut O,
    pub resolver: &'a dyn ModelResolver,
    pub events: &'a mut EventBus,
}

/// Maps pointer, keyboard, gizmo and catalog events onto the selection, registry and orbit
/// control.
///
/// The keyboard listener is only attached while an item is active; keys arriving otherwise are
/// dropped before binding lookup.
#[derive(Debug, Clone, Default)]
pub struct InteractionInputRouter {
    bindings: KeyBindings,
    key_listener_attached: bool,
    gesture_active: bool,
}

impl InteractionInputRouter {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings, key_listener_attached: false, gesture_active: false }
    }

    pub fn key_listener_attached(&self) -> bool {
        self.key_listener_attached
    }

    pub fn gesture_active(&self) -> bool {
        self.gesture_active
    }

    pub fn route<O>(&mut self, input: EditorInput, targets: &mut RouterTargets<'_, O>) -> Propagation
    where
        O: OrbitControl + ?Sized,
    {
        match input {
            EditorInput::ItemClicked { item } => {
                if let Some(change) = targets.selection.select(item, targets.registry) {
                    self.on_selection_change(change, targets);
                }
                Propagation::Stop
            }
            EditorInput::BackgroundClicked => Propagation::Continue,
            EditorInput::GizmoPointerDown => {
                if targets.selection.is_active() && !self.gesture_active {
                    self.gesture_active = true;
                    set_orbit(targets, false);
                }
                Propagation::Stop
            }
            EditorInput::GizmoPointerUp => {
                self.end_gesture(targets);
                Propagation::Stop
            }
            EditorInput::GizmoChanged { transform } => {
                self.apply_gizmo_change(transform, targets);
                Propagation::Continue
            }
            EditorInput::KeyDown { key } => {
                self.handle_key(&key, targets);
                Propagation::Continue
            }
            EditorInput::CatalogSelected { type_tag } => {
                let item = targets.registry.insert_default(&type_tag, targets.resolver);
                tracing::debug!(target: "router", "catalog inserted '{type_tag}' as item {item}");
                targets.events.push(EditorEvent::ItemInserted { item, type_tag });
                Propagation::Continue
            }
        }
    }

    /// Keeps listener and gesture state in step with a selection transition.
    pub(crate) fn on_selection_change<O>(&mut self, change: SelectionChange, targets: &mut RouterTargets<'_, O>)
    where
        O: OrbitControl + ?Sized,
    {
        match change {
            SelectionChange::Attached { .. } => self.key_listener_attached = true,
            SelectionChange::Switched { .. } => {
                self.end_gesture(targets);
                self.key_listener_attached = true;
            }
            SelectionChange::ModeChanged { .. } => {}
            SelectionChange::Detached { .. } => {
                self.end_gesture(targets);
                self.key_listener_attached = false;
            }
        }
        targets.events.extend(EditorEvent::from_selection(change));
    }

    fn handle_key<O>(&mut self, key: &InputKey, targets: &mut RouterTargets<'_, O>)
    where
        O: OrbitControl + ?Sized,
    {
        if !self.key_listener_attached {
            return;
        }
        let actions: Vec<_> = self.bindings.actions_for_key(key).collect();
        for action in actions {
            let change = match action {
                EditorAction::ModeTranslate => targets.selection.set_mode(TransformMode::Translate),
                EditorAction::ModeRotate => targets.selection.set_mode(TransformMode::Rotate),
                EditorAction::ModeScale => targets.selection.set_mode(TransformMode::Scale),
                EditorAction::Deselect => targets.selection.escape(),
            };
            if let Some(change) = change {
                self.on_selection_change(change, targets);
            }
        }
    }

    fn apply_gizmo_change<O>(&mut self, transform: ItemTransform, targets: &mut RouterTargets<'_, O>)
    where
        O: OrbitControl + ?Sized,
    {
        let Some(item) = targets.selection.active_item() else {
            return;
        };
        if !targets.registry.set_transform(item, transform) {
            return;
        }
        if let Some(outcome) = targets.engine.on_transform_change(targets.selection, targets.registry) {
            targets.events.push(EditorEvent::PositionClamped {
                item: outcome.item,
                axes: outcome.axes,
                position: outcome.position,
            });
        }
    }

    fn end_gesture<O>(&mut self, targets: &mut RouterTargets<'_, O>)
    where
        O: OrbitControl + ?Sized,
    {
        if self.gesture_active {
            self.gesture_active = false;
            set_orbit(targets, true);
        }
    }
}

fn set_orbit<O>(targets: &mut RouterTargets<'_, O>, enabled: bool)
where
    O: OrbitControl + ?Sized,
{
    if targets.orbit.is_enabled() != enabled {
        targets.orbit.set_enabled(enabled);
        targets.events.push(EditorEvent::OrbitToggled { enabled });
    }
}
