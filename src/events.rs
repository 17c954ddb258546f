use crate::bounds::Axes;
use crate::item::ItemId;
use crate::selection::{SelectionChange, TransformMode};
use glam::Vec3;
use std::fmt;

/// Notifications for the render surface, drained once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    SceneLoaded { items: usize },
    ItemInserted { item: ItemId, type_tag: String },
    GizmoAttached { item: ItemId, mode: TransformMode },
    GizmoModeChanged { item: ItemId, mode: TransformMode },
    GizmoDetached { item: ItemId },
    PositionClamped { item: ItemId, axes: Axes, position: Vec3 },
    OrbitToggled { enabled: bool },
}

impl EditorEvent {
    /// Gizmo events implied by a selection transition. A switch detaches the old gizmo before
    /// attaching the new one.
    pub fn from_selection(change: SelectionChange) -> Vec<EditorEvent> {
        match change {
            SelectionChange::Attached { item, mode } => vec![EditorEvent::GizmoAttached { item, mode }],
            SelectionChange::Switched { from, to, mode } => vec![
                EditorEvent::GizmoDetached { item: from },
                EditorEvent::GizmoAttached { item: to, mode },
            ],
            SelectionChange::ModeChanged { item, mode } => vec![EditorEvent::GizmoModeChanged { item, mode }],
            SelectionChange::Detached { item } => vec![EditorEvent::GizmoDetached { item }],
        }
    }
}

impl fmt::Display for EditorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorEvent::SceneLoaded { items } => write!(f, "SceneLoaded items={items}"),
            EditorEvent::ItemInserted { item, type_tag } => {
                write!(f, "ItemInserted item={item} type={type_tag}")
            }
            EditorEvent::GizmoAttached { item, mode } => write!(f, "GizmoAttached item={item} mode={mode}"),
            EditorEvent::GizmoModeChanged { item, mode } => {
                write!(f, "GizmoModeChanged item={item} mode={mode}")
            }
            EditorEvent::GizmoDetached { item } => write!(f, "GizmoDetached item={item}"),
            EditorEvent::PositionClamped { item, axes, position } => write!(
                f,
                "PositionClamped item={item} axes={} position=({:.3}, {:.3}, {:.3})",
                axes.label(),
                position.x,
                position.y,
                position.z
            ),
            EditorEvent::OrbitToggled { enabled } => write!(f, "OrbitToggled enabled={enabled}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<EditorEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: EditorEvent) {
        tracing::trace!(target: "events", "{event}");
        self.events.push(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = EditorEvent>) {
        for event in events {
            self.push(event);
        }
    }

    pub fn drain(&mut self) -> Vec<EditorEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
