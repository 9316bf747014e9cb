//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no wall-clock time
//! - Seeded RNG only
//! - Data flows one way per tick: physics, landings, camera, recycling, score
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod generator;
pub mod physics;
pub mod recycler;
pub mod score;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use camera::CameraPolicy;
pub use collision::{resolve_jump, resolve_landing};
pub use generator::generate_platform;
pub use physics::integrate;
pub use recycler::recycle;
pub use score::{AltitudeBand, Score};
pub use state::{InputState, Platform, Player, PlayerPose, WorldState};
pub use tick::{RenderSnapshot, TickInput, tick};
