use crate::assets::{ModelPathTemplate, ModelResolver};
use crate::config::EditorConfig;
use crate::constraint::TransformConstraintEngine;
use crate::events::{EditorEvent, EventBus};
use crate::input::KeyBindings;
use crate::item::ItemId;
use crate::orbit::{OrbitCamera, OrbitControl};
use crate::registry::SceneRegistry;
use crate::router::{EditorInput, InteractionInputRouter, Propagation, RouterTargets};
use crate::scene::{FurnitureDescriptor, RoomScene};
use crate::selection::{SelectionController, TransformMode};
use anyhow::Result;

/// One open room editor: the placed furniture, the selection, and the interaction plumbing
/// around them.
///
/// Every handler takes `&mut self` and runs to completion, so events are applied strictly in the
/// order they are dispatched.
pub struct EditorSession<O: OrbitControl = OrbitCamera> {
    registry: SceneRegistry,
    selection: SelectionController,
    engine: TransformConstraintEngine,
    router: InteractionInputRouter,
    orbit: O,
    resolver: Box<dyn ModelResolver>,
    events: EventBus,
}

impl EditorSession<OrbitCamera> {
    pub fn new() -> Self {
        let orbit = OrbitCamera::looking_from(
            glam::Vec3::new(12.0, 12.0, 12.0),
            glam::Vec3::ZERO,
            Default::default(),
        );
        Self::with_parts(
            TransformConstraintEngine::default(),
            KeyBindings::default(),
            orbit,
            Box::new(ModelPathTemplate::default()),
        )
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self> {
        let bounds = config.room.bounds()?;
        let limits = config.orbit.limits()?;
        let orbit = OrbitCamera::looking_from(config.orbit.position(), config.orbit.target(), limits);
        let bindings = KeyBindings::from_config(&config.input, "editor config");
        let resolver = ModelPathTemplate::new(config.assets.model_path_template.clone());
        Ok(Self::with_parts(TransformConstraintEngine::new(bounds), bindings, orbit, Box::new(resolver)))
    }
}

impl Default for EditorSession<OrbitCamera> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OrbitControl> EditorSession<O> {
    pub fn with_parts(
        engine: TransformConstraintEngine,
        bindings: KeyBindings,
        orbit: O,
        resolver: Box<dyn ModelResolver>,
    ) -> Self {
        Self {
            registry: SceneRegistry::new(),
            selection: SelectionController::new(),
            engine,
            router: InteractionInputRouter::new(bindings),
            orbit,
            resolver,
            events: EventBus::default(),
        }
    }

    /// Loads the furniture of an inference result. `None` (a fresh project) empties the room.
    pub fn load_scene(&mut self, scene: Option<&RoomScene>) -> usize {
        let descriptors = scene.map(|scene| scene.furniture.as_slice()).unwrap_or_default();
        self.load_descriptors(descriptors)
    }

    pub fn load_descriptors(&mut self, descriptors: &[FurnitureDescriptor]) -> usize {
        let items = self.registry.load_from_descriptors(descriptors, self.resolver.as_ref());
        tracing::info!(target: "session", "scene loaded with {items} items");
        self.events.push(EditorEvent::SceneLoaded { items });
        if let Some(change) = self.selection.reconcile(&self.registry) {
            let mut targets = RouterTargets {
                registry: &mut self.registry,
                selection: &mut self.selection,
                engine: &self.engine,
                orbit: &mut self.orbit,
                resolver: self.resolver.as_ref(),
                events: &mut self.events,
            };
            self.router.on_selection_change(change, &mut targets);
        }
        items
    }

    pub fn dispatch(&mut self, input: EditorInput) -> Propagation {
        let mut targets = RouterTargets {
            registry: &mut self.registry,
            selection: &mut self.selection,
            engine: &self.engine,
            orbit: &mut self.orbit,
            resolver: self.resolver.as_ref(),
            events: &mut self.events,
        };
        self.router.route(input, &mut targets)
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn active(&self) -> Option<(ItemId, TransformMode)> {
        self.selection.active()
    }

    pub fn router(&self) -> &InteractionInputRouter {
        &self.router
    }

    pub fn engine(&self) -> &TransformConstraintEngine {
        &self.engine
    }

    pub fn orbit(&self) -> &O {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut O {
        &mut self.orbit
    }

    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        self.events.drain()
    }
}
