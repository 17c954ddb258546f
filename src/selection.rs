use crate::item::ItemId;
use crate::registry::SceneRegistry;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl TransformMode {
    pub fn label(self) -> &'static str {
        match self {
            TransformMode::Translate => "translate",
            TransformMode::Rotate => "rotate",
            TransformMode::Scale => "scale",
        }
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Active { item: ItemId, mode: TransformMode },
}

/// What a transition means for the gizmo bound to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Attached { item: ItemId, mode: TransformMode },
    Switched { from: ItemId, to: ItemId, mode: TransformMode },
    ModeChanged { item: ItemId, mode: TransformMode },
    Detached { item: ItemId },
}

/// Tracks the single active item and its transform mode.
///
/// The selection refers to items by id only; the registry owns them.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn active(&self) -> Option<(ItemId, TransformMode)> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Active { item, mode } => Some((item, mode)),
        }
    }

    pub fn active_item(&self) -> Option<ItemId> {
        self.active().map(|(item, _)| item)
    }

    pub fn mode(&self) -> Option<TransformMode> {
        self.active().map(|(_, mode)| mode)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SelectionState::Active { .. })
    }

    /// Activates `item` in translate mode. Ids the registry does not know are ignored, and
    /// reselecting the active item already in translate mode reports no change.
    pub fn select(&mut self, item: ItemId, registry: &SceneRegistry) -> Option<SelectionChange> {
        if !registry.contains(item) {
            tracing::debug!(target: "selection", "ignoring selection of unknown item {item}");
            return None;
        }
        let mode = TransformMode::Translate;
        let change = match self.state {
            SelectionState::Idle => SelectionChange::Attached { item, mode },
            SelectionState::Active { item: current, mode: current_mode } if current == item => {
                if current_mode == mode {
                    return None;
                }
                SelectionChange::ModeChanged { item, mode }
            }
            SelectionState::Active { item: current, .. } => {
                SelectionChange::Switched { from: current, to: item, mode }
            }
        };
        self.state = SelectionState::Active { item, mode };
        Some(change)
    }

    pub fn set_mode(&mut self, mode: TransformMode) -> Option<SelectionChange> {
        match &mut self.state {
            SelectionState::Idle => None,
            SelectionState::Active { item, mode: current } => {
                if *current == mode {
                    return None;
                }
                *current = mode;
                Some(SelectionChange::ModeChanged { item: *item, mode })
            }
        }
    }

    pub fn escape(&mut self) -> Option<SelectionChange> {
        match std::mem::take(&mut self.state) {
            SelectionState::Idle => None,
            SelectionState::Active { item, .. } => Some(SelectionChange::Detached { item }),
        }
    }

    /// Drops a selection whose item no longer exists in `registry`.
    pub fn reconcile(&mut self, registry: &SceneRegistry) -> Option<SelectionChange> {
        match self.state {
            SelectionState::Active { item, .. } if !registry.contains(item) => self.escape(),
            _ => None,
        }
    }
}
