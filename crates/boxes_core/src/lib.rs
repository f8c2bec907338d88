//! Boxes Core
//!
//! Contains the falling-box simulation, independent of any window system:
//! - Entities and the factory that issues them
//! - Per-entity simulation step and death test
//! - Lifecycle manager (spawn, mark dead, remove)
//! - Frame loop orchestration against a `Canvas`

pub mod canvas;
pub mod entity;
pub mod factory;
pub mod frame;
pub mod input;
pub mod lifecycle;
pub mod settings;
pub mod simulation;
pub mod time;

pub use canvas::Canvas;
pub use entity::{Color, Entity, EntityId, Rect};
pub use factory::EntityFactory;
pub use frame::{FrameLoop, FrameOutcome};
pub use input::InputEvent;
pub use lifecycle::LifecycleManager;
pub use settings::Settings;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
