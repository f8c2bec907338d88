//! Compiled-in configuration
//!
//! Physics and lifecycle parameters are fixed constants. `Settings` groups
//! the presentation values the runtime needs to open the window.

use crate::entity::Color;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Speed of a freshly spawned entity, in pixels per 10 ms.
pub const INITIAL_SPEED: f64 = 1.5;

/// Microseconds per speed unit (speed is expressed per 10 ms).
pub const SPEED_UNIT_MICROS: f64 = 10_000.0;

/// Divisor applied to `speed * life` for the per-step acceleration.
pub const ACCELERATION_DIVISOR: f64 = 10.0;

/// Side length range for spawned boxes, in pixels.
pub const SPAWN_SIZE_RANGE: Range<i32> = 20..70;

/// First identifier handed out by the entity factory.
pub const FIRST_ENTITY_ID: u64 = 1;

/// Drawing area width, in pixels.
pub const CANVAS_WIDTH: u32 = 1910;

/// Drawing area height, in pixels. Also the floor for falling boxes.
pub const CANVAS_HEIGHT: u32 = 820;

/// Program settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub window: WindowSettings,
    pub background: Color,
    pub first_entity_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Settings {
    /// Floor height in canvas pixels.
    pub fn floor(&self) -> i32 {
        self.window.height as i32
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings {
                title: "Boxes".to_string(),
                width: CANVAS_WIDTH,
                height: CANVAS_HEIGHT,
            },
            background: Color::BACKGROUND,
            first_entity_id: FIRST_ENTITY_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.window.width, 1910);
        assert_eq!(settings.window.height, 820);
        assert_eq!(settings.floor(), 820);
        assert_eq!(settings.background, Color::new(102, 113, 132, 200));
        assert_eq!(settings.first_entity_id, 1);
    }
}
