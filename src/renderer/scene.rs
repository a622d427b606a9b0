//! Scene building
//!
//! Turns a `Snapshot` into an ordered (back to front) list of draw items.
//! No GPU or DOM types here, so the projection is testable headless.

use super::vertex::colors;
use crate::sim::Snapshot;

/// Filled axis-aligned rectangle in play-field pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: [f32; 4],
}

/// Which overlay element a text item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Score,
    GameOver,
    RestartPrompt,
}

/// Text anchored at its baseline-left point
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub role: TextRole,
    pub content: String,
    pub x: f32,
    pub y: f32,
    /// Font size in pixels
    pub size: f32,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    Rect(Rect),
    Text(Text),
}

/// A fully projected frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub items: Vec<DrawItem>,
}

impl Scene {
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Rect(r) => Some(r),
            DrawItem::Text(_) => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Text(t) => Some(t),
            DrawItem::Rect(_) => None,
        })
    }
}

/// Project a snapshot: background, sprite, obstacles, score, then the
/// game-over message and restart prompt while the session is over.
pub fn build_scene(snapshot: &Snapshot) -> Scene {
    let (w, h) = (snapshot.field_width, snapshot.field_height);
    let mut items = Vec::with_capacity(3 + snapshot.obstacles.len() * 2);

    items.push(DrawItem::Rect(Rect {
        x: 0.0,
        y: 0.0,
        w,
        h,
        color: colors::BACKGROUND,
    }));

    let sprite = &snapshot.sprite;
    items.push(DrawItem::Rect(Rect {
        x: sprite.x,
        y: sprite.y,
        w: sprite.width,
        h: sprite.height,
        color: colors::SPRITE,
    }));

    for obstacle in &snapshot.obstacles {
        // Top segment
        items.push(DrawItem::Rect(Rect {
            x: obstacle.x,
            y: 0.0,
            w: obstacle.width,
            h: obstacle.top,
            color: colors::OBSTACLE,
        }));
        // Bottom segment
        items.push(DrawItem::Rect(Rect {
            x: obstacle.x,
            y: obstacle.bottom,
            w: obstacle.width,
            h: h - obstacle.bottom,
            color: colors::OBSTACLE,
        }));
    }

    items.push(DrawItem::Text(Text {
        role: TextRole::Score,
        content: format!("Score: {}", snapshot.score),
        x: 10.0,
        y: 30.0,
        size: 30.0,
        color: colors::TEXT,
    }));

    if snapshot.is_game_over {
        items.push(DrawItem::Text(Text {
            role: TextRole::GameOver,
            content: "Game Over".to_string(),
            x: w / 4.0,
            y: h / 2.0,
            size: 40.0,
            color: colors::TEXT,
        }));
        items.push(DrawItem::Text(Text {
            role: TextRole::RestartPrompt,
            content: "Tap to Restart".to_string(),
            x: w / 3.5,
            y: h / 1.5,
            size: 20.0,
            color: colors::TEXT,
        }));
    }

    Scene {
        width: w,
        height: h,
        items,
    }
}
