//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Input only through queued commands
//! - No rendering or platform dependencies

pub mod collision;
pub mod command;
pub mod driver;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check_collisions, sprite_hits_obstacle, sprite_out_of_bounds};
pub use command::{Command, CommandQueue, apply_command};
pub use driver::{FrameDriver, FrameReport};
pub use snapshot::{ObstacleView, Snapshot, SpritePose};
pub use spawn::maybe_spawn;
pub use state::{GamePhase, Obstacle, SessionState, Sprite};
pub use tick::{TickEvent, physics_step, tick};
