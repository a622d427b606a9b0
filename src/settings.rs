//! Game configuration
//!
//! All tuning values are fixed for the lifetime of a session and handed to
//! `SessionState::new`. Defaults reproduce the classic tuning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Construction-time game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Added to the sprite's velocity every tick
    pub gravity: f32,
    /// Velocity written by an impulse command
    pub impulse: f32,

    // === Obstacles ===
    /// Independent chance per tick of appending a new obstacle
    pub spawn_probability: f64,
    /// Width of every obstacle
    pub obstacle_width: f32,
    /// bottom boundary = top boundary + gate_offset
    pub gate_offset: f32,
    /// Leftward movement per tick
    pub scroll_speed: f32,

    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Sprite ===
    pub sprite_x: f32,
    pub sprite_width: f32,
    pub sprite_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            impulse: IMPULSE,

            spawn_probability: 1.0 / SPAWN_RATE as f64,
            obstacle_width: OBSTACLE_WIDTH,
            gate_offset: GATE_OFFSET,
            scroll_speed: SCROLL_SPEED,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            sprite_x: SPRITE_X,
            sprite_width: SPRITE_WIDTH,
            sprite_height: SPRITE_HEIGHT,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields take defaults) and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the values describe a playable field
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be finite and greater than zero",
                })
            }
        }

        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("obstacle_width", self.obstacle_width)?;
        positive("sprite_width", self.sprite_width)?;
        positive("sprite_height", self.sprite_height)?;

        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(SettingsError::Invalid {
                field: "spawn_probability",
                reason: "must be within [0, 1]",
            });
        }
        if !self.scroll_speed.is_finite() || self.scroll_speed < 0.0 {
            return Err(SettingsError::Invalid {
                field: "scroll_speed",
                reason: "must be finite and not negative",
            });
        }
        if !self.gravity.is_finite() || !self.impulse.is_finite() || !self.gate_offset.is_finite()
        {
            return Err(SettingsError::Invalid {
                field: "gravity/impulse/gate_offset",
                reason: "must be finite",
            });
        }
        Ok(())
    }

    /// Vertical start position of the sprite
    pub fn sprite_start_y(&self) -> f32 {
        self.field_height / 2.0
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_gate_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
