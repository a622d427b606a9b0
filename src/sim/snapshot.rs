//! Read-only view of a session for renderers and hosts

use serde::Serialize;

use super::state::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpritePose {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
    pub width: f32,
}

/// Everything a renderer may look at, detached from the live state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub field_width: f32,
    pub field_height: f32,
    pub sprite: SpritePose,
    /// In creation order
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub is_game_over: bool,
}

impl SessionState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field_width: self.settings.field_width,
            field_height: self.settings.field_height,
            sprite: SpritePose {
                x: self.sprite.pos.x,
                y: self.sprite.pos.y,
                width: self.sprite.width,
                height: self.sprite.height,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    top: o.top,
                    bottom: o.bottom,
                    width: o.width,
                })
                .collect(),
            score: self.score,
            is_game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::settings::Settings;
    use crate::sim::state::{Obstacle, SessionState};

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = SessionState::new(Settings::default(), 5);
        state.obstacles.push(Obstacle {
            x: 120.0,
            top: 80.0,
            bottom: 380.0,
            width: 60.0,
        });
        state.score = 2;

        let snap = state.snapshot();
        assert_eq!(snap.sprite.x, 50.0);
        assert_eq!(snap.sprite.y, 300.0);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].bottom, 380.0);
        assert_eq!(snap.score, 2);
        assert!(!snap.is_game_over);

        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"is_game_over\":false"));
    }
}
