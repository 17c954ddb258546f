//! Interaction core of a browser-style room editor.
//!
//! An [`EditorSession`] owns the placed furniture, the single active selection with its gizmo
//! mode, the room-bounds clamp and the orbit camera toggle. Pointer, gizmo and key events go in
//! through [`EditorSession::dispatch`]; [`events::EditorEvent`]s come out for the render surface.

pub mod assets;
pub mod bounds;
pub mod cli;
pub mod config;
pub mod constraint;
pub mod events;
pub mod input;
pub mod item;
pub mod orbit;
pub mod registry;
pub mod router;
pub mod scene;
pub mod selection;
pub mod session;

pub use bounds::{Axes, AxisRange, SpatialBounds};
pub use item::{ItemId, ItemTransform, ModelRef, PlacedItem};
pub use router::{EditorInput, Propagation};
pub use selection::{SelectionState, TransformMode};
pub use session::EditorSession;
