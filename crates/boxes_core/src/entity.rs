//! Falling box entity
//!
//! An entity is a plain value owned by the `LifecycleManager`. Its motion
//! state is only changed by `simulation::step`.

use crate::settings::INITIAL_SPEED;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Entity identifier, unique for the lifetime of a process run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pixel rectangle, `(x, y)` is the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` centered on `(cx, cy)`.
    pub const fn centered(cx: i32, cy: i32, size: i32) -> Self {
        Self::new(cx - size / 2, cy - size / 2, size, size)
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BACKGROUND: Color = Color::new(102, 113, 132, 200);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// One falling box.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub(crate) id: EntityId,
    /// Logical position and size; `y` grows while falling.
    pub(crate) bounds: Rect,
    /// Last rectangle published by a simulation step, used for drawing.
    pub(crate) rect: Rect,
    pub(crate) speed: f64,
    pub(crate) created_at: Instant,
    pub(crate) last_update: Instant,
    /// Fractional pixels carried between frames.
    pub(crate) sub_pixel: f64,
    pub(crate) color: Color,
}

impl Entity {
    /// Build an entity at rest. Use `EntityFactory::create` to get a fresh id.
    pub fn new(id: EntityId, bounds: Rect, color: Color, now: Instant) -> Self {
        Self {
            id,
            bounds,
            rect: Rect::default(),
            speed: INITIAL_SPEED,
            created_at: now,
            last_update: now,
            sub_pixel: 0.0,
            color,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Rectangle as of the last simulation step. Zero-sized until the first step.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn sub_pixel(&self) -> f64 {
        self.sub_pixel
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn last_update(&self) -> Instant {
        self.last_update
    }
}
