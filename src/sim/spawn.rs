//! Obstacle spawning
//!
//! One independent Bernoulli trial per tick, so inter-arrival times are
//! geometric rather than fixed.

use rand::Rng;

use super::state::{Obstacle, SessionState};
use crate::consts::MIN_TOP_BOUNDARY;
use crate::settings::Settings;

/// Build an obstacle at the right edge of the field from a uniform sample `u` in [0, 1)
pub fn obstacle_from_sample(settings: &Settings, u: f32) -> Obstacle {
    let top = (u * (settings.field_height / 2.0)).floor() + MIN_TOP_BOUNDARY;
    Obstacle {
        x: settings.field_width,
        top,
        bottom: top + settings.gate_offset,
        width: settings.obstacle_width,
    }
}

/// Roll the spawn chance for this tick and append an obstacle on success
pub fn maybe_spawn(state: &mut SessionState) -> Option<Obstacle> {
    let roll: f64 = state.rng.random();
    if roll >= state.settings.spawn_probability {
        return None;
    }

    let u: f32 = state.rng.random();
    let obstacle = obstacle_from_sample(&state.settings, u);
    log::debug!(
        "Spawned obstacle at tick {} (top {}, bottom {})",
        state.time_ticks,
        obstacle.top,
        obstacle.bottom
    );
    state.obstacles.push(obstacle);
    Some(obstacle)
}
