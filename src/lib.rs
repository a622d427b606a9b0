//! Flappy Gate - A single-screen gate-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, session state)
//! - `renderer`: Scene building and WebGPU rendering pipeline
//! - `platform`: Browser/native input translation
//! - `settings`: Construction-time game configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the per-tick constants below assume 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame the driver will try to catch up on (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Sprite defaults
    pub const SPRITE_X: f32 = 50.0;
    pub const SPRITE_WIDTH: f32 = 30.0;
    pub const SPRITE_HEIGHT: f32 = 30.0;

    /// Downward acceleration added to velocity every tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Velocity written by an impulse (negative = up)
    pub const IMPULSE: f32 = -15.0;

    /// Mean ticks between obstacle spawns
    pub const SPAWN_RATE: f32 = 90.0;
    /// Obstacle width (pixels)
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Distance from top boundary to bottom boundary.
    /// Same value as the horizontal pipe spacing of the classic tuning; kept as-is.
    pub const GATE_OFFSET: f32 = 300.0;
    /// Leftward obstacle movement per tick (pixels)
    pub const SCROLL_SPEED: f32 = 3.0;
    /// Smallest possible top boundary of a spawned obstacle
    pub const MIN_TOP_BOUNDARY: f32 = 50.0;
}
