//! Collision detection
//!
//! Everything here is a pure function of the sprite, the obstacles and the
//! play field. Setting the terminal flag is left to the caller.

use glam::Vec2;

use super::state::{Obstacle, Sprite};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_sprite(sprite: &Sprite) -> Self {
        Self {
            min: sprite.pos,
            max: sprite.pos + Vec2::new(sprite.width, sprite.height),
        }
    }

    /// Strict overlap on the x axis (touching edges do not count)
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        left < self.max.x && self.min.x < right
    }
}

/// Sprite overlaps the obstacle horizontally and is not fully inside its gap
pub fn sprite_hits_obstacle(sprite: &Sprite, obstacle: &Obstacle) -> bool {
    let bounds = Aabb::from_sprite(sprite);
    bounds.overlaps_x(obstacle.x, obstacle.right())
        && (bounds.min.y < obstacle.top || bounds.max.y > obstacle.bottom)
}

/// Sprite touches the floor or the ceiling
pub fn sprite_out_of_bounds(sprite: &Sprite, field_height: f32) -> bool {
    sprite.bottom() >= field_height || sprite.pos.y <= 0.0
}

/// Index of the first obstacle (in sequence order) the sprite collides with
pub fn first_obstacle_hit(sprite: &Sprite, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| sprite_hits_obstacle(sprite, o))
}

/// Any collision at all: obstacles or field bounds
pub fn check_collisions(sprite: &Sprite, obstacles: &[Obstacle], field_height: f32) -> bool {
    first_obstacle_hit(sprite, obstacles).is_some() || sprite_out_of_bounds(sprite, field_height)
}
