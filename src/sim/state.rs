//! Session state and core simulation types
//!
//! `SessionState` is the single owner of everything the simulation mutates.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Sprite collided; only rendering and restart remain active
    GameOver,
}

/// The player-controlled sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Top-left corner. `pos.x` never changes during a session.
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub vel: f32,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(settings.sprite_x, settings.sprite_start_y()),
            vel: 0.0,
            width: settings.sprite_width,
            height: settings.sprite_height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}

/// A gate pair: blocking regions above `top` and below `bottom`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// End of the upper blocking segment
    pub top: f32,
    /// Start of the lower blocking segment
    pub bottom: f32,
    pub width: f32,
}

impl Obstacle {
    /// Trailing edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Fully past the left boundary of the play field
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Complete session state (deterministic for a given seed and command stream)
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Tuning this session was built with
    pub settings: Settings,
    pub sprite: Sprite,
    /// Active obstacles in creation order (left to right on screen)
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl SessionState {
    /// Create a new session with the given settings and seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            seed,
            sprite: Sprite::new(&settings),
            obstacles: Vec::new(),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            settings,
        }
    }

    /// Restore the start-of-session values. The RNG stream keeps advancing.
    pub fn reset(&mut self) {
        self.sprite = Sprite::new(&self.settings);
        self.obstacles.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Set the terminal flag. There is no way back except `reset`.
    pub fn end(&mut self) {
        if self.phase != GamePhase::GameOver {
            log::info!("Game over after {} ticks, score {}", self.time_ticks, self.score);
            self.phase = GamePhase::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = SessionState::new(Settings::default(), 7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.sprite.pos, Vec2::new(50.0, 300.0));
        assert_eq!(state.sprite.vel, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = SessionState::new(Settings::default(), 7);
        state.sprite.pos.y = 12.0;
        state.sprite.vel = 9.0;
        state.obstacles.push(Obstacle {
            x: 100.0,
            top: 60.0,
            bottom: 360.0,
            width: 60.0,
        });
        state.score = 4;
        state.end();

        state.reset();
        assert_eq!(state.sprite.pos.y, 300.0);
        assert_eq!(state.sprite.vel, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over());

        // Idempotent
        let before = state.sprite;
        state.reset();
        assert_eq!(state.sprite, before);
    }

    #[test]
    fn test_obstacle_offscreen_uses_trailing_edge() {
        let mut o = Obstacle {
            x: -59.0,
            top: 50.0,
            bottom: 350.0,
            width: 60.0,
        };
        assert!(!o.is_offscreen());
        o.x = -60.5;
        assert!(o.is_offscreen());
    }
}
