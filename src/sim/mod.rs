//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Randomness only through `RandomRange`
//! - Stable iteration order (by pair index)
//! - Collaborators (store, scheduler, renderer) passed in, never owned

pub mod body;
pub mod collision;
pub mod layout;
pub mod obstacle;
pub mod rng;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{CollisionResult, Rect, check};
pub use layout::{IntRange, Placement, place};
pub use obstacle::{FieldConfig, Obstacle, ObstacleField, ObstaclePair, ObstacleRole};
pub use rng::{GameRng, RandomRange, ScriptedRng};
pub use state::{RunEvent, RunPhase, RunState};
pub use tick::{TickInput, tick};
