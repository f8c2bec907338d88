//! Per-entity simulation step and death test
//!
//! Motion is integrated against wall-clock time rather than frame count,
//! so the fall rate does not depend on the frame rate:
//!
//! ```text
//! life       = seconds since creation
//! frame_time = microseconds since the previous step
//! sub_pixel += speed * frame_time / 10_000
//! if sub_pixel >= 1 { y += 1; sub_pixel = 0 }
//! speed     += speed * life / 10
//! if y + h >= floor { speed = 0 }
//! ```
//!
//! Crossing the one-pixel threshold moves the box by exactly one pixel and
//! drops any remainder above 1.0.

use crate::entity::Entity;
use crate::settings::{ACCELERATION_DIVISOR, SPEED_UNIT_MICROS};
use std::time::{Duration, Instant};

/// Age at which an entity is removed.
pub const MAX_LIFETIME: Duration = Duration::from_millis(50_000);

/// Advance `entity` to `now`. `floor` is the drawing area height in pixels.
pub fn step(entity: &mut Entity, now: Instant, floor: i32) {
    let life = now.saturating_duration_since(entity.created_at).as_secs_f64();
    let frame_time = now.saturating_duration_since(entity.last_update).as_micros() as f64;

    entity.sub_pixel += entity.speed * frame_time / SPEED_UNIT_MICROS;
    if entity.sub_pixel >= 1.0 {
        entity.bounds.y += 1;
        entity.sub_pixel = 0.0;
    }

    // Clamp keeps speed finite; an infinite speed times a zero frame time is NaN.
    entity.speed = (entity.speed + entity.speed * life / ACCELERATION_DIVISOR).min(f64::MAX);

    if entity.bounds.bottom() >= floor {
        if entity.speed > 0.0 {
            tracing::trace!(id = %entity.id, y = entity.bounds.y, "entity reached the floor");
        }
        entity.speed = 0.0;
    }

    entity.rect = entity.bounds;
    entity.last_update = now;
}

/// True once the entity has lived for at least [`MAX_LIFETIME`].
pub fn is_dead(entity: &Entity, now: Instant) -> bool {
    now.saturating_duration_since(entity.created_at) >= MAX_LIFETIME
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Color, EntityId, Rect};
    use crate::settings::INITIAL_SPEED;

    const FLOOR: i32 = 820;

    fn entity_at(y: i32, h: i32, now: Instant) -> Entity {
        Entity::new(EntityId::new(1), Rect::new(100, y, h, h), Color::BACKGROUND, now)
    }

    #[test]
    fn test_step_moves_one_pixel_when_threshold_crossed() {
        let t0 = Instant::now();
        let mut entity = entity_at(0, 30, t0);

        // 1.5 * 10_000us / 10_000 = 1.5 px -> one pixel, remainder dropped
        step(&mut entity, t0 + Duration::from_millis(10), FLOOR);

        assert_eq!(entity.bounds().y, 1);
        assert_eq!(entity.sub_pixel(), 0.0);
        assert_eq!(entity.rect(), Rect::new(100, 1, 30, 30));
        assert_eq!(entity.last_update(), t0 + Duration::from_millis(10));
    }

    #[test]
    fn test_step_accumulates_sub_pixel_motion() {
        let t0 = Instant::now();
        let mut entity = entity_at(0, 30, t0);

        // 1.5 * 2_000us / 10_000 = 0.3 px: not enough to move yet
        step(&mut entity, t0 + Duration::from_millis(2), FLOOR);
        assert_eq!(entity.bounds().y, 0);
        assert!((entity.sub_pixel() - 0.3).abs() < 1e-9);

        // Speed grew a little, so a few more short frames cross the threshold
        let mut now = t0 + Duration::from_millis(2);
        while entity.bounds().y == 0 {
            now += Duration::from_millis(2);
            step(&mut entity, now, FLOOR);
        }
        assert_eq!(entity.bounds().y, 1);
        assert_eq!(entity.sub_pixel(), 0.0);
    }

    #[test]
    fn test_speed_grows_with_lifetime() {
        let t0 = Instant::now();
        let mut entity = entity_at(0, 30, t0);

        step(&mut entity, t0 + Duration::from_secs(1), FLOOR);

        // 1.5 + 1.5 * 1.0 / 10
        assert!((entity.speed() - INITIAL_SPEED * 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_zero_frame_time_keeps_position() {
        let t0 = Instant::now();
        let mut entity = entity_at(0, 30, t0);

        step(&mut entity, t0, FLOOR);

        assert_eq!(entity.bounds().y, 0);
        assert_eq!(entity.speed(), INITIAL_SPEED);
    }

    #[test]
    fn test_entity_falls_to_floor_and_stays() {
        let t0 = Instant::now();
        let mut entity = entity_at(0, 30, t0);
        let mut now = t0;
        let mut landed = false;

        for _ in 0..100_000 {
            now += Duration::from_millis(10);
            step(&mut entity, now, FLOOR);

            assert!(entity.speed() >= 0.0, "speed went negative: {}", entity.speed());
            if landed {
                assert_eq!(entity.speed(), 0.0);
            }
            if entity.bounds().bottom() >= FLOOR {
                landed = true;
                assert_eq!(entity.speed(), 0.0);
            }
        }

        assert!(landed);
        assert_eq!(entity.bounds().bottom(), FLOOR);
    }

    #[test]
    fn test_speed_stays_finite_under_long_compounding() {
        let t0 = Instant::now();
        let mut entity = entity_at(0, 10, t0);
        let mut now = t0 + Duration::from_secs(40);

        // First step covers 40 s at once and moves a single pixel
        step(&mut entity, now, 1_000_000);
        assert_eq!(entity.bounds().y, 1);

        // Same instant repeatedly: large life, zero frame time
        for _ in 0..10_000 {
            step(&mut entity, now, 1_000_000);
        }
        assert_eq!(entity.bounds().y, 1);
        assert!(entity.speed().is_finite());
        assert!(entity.speed() > 0.0);

        now += Duration::from_micros(1);
        step(&mut entity, now, 1_000_000);
        assert!(!entity.speed().is_nan());
        assert_eq!(entity.bounds().y, 2);
    }

    #[test]
    fn test_is_dead_boundary() {
        let t0 = Instant::now();
        let entity = entity_at(0, 30, t0);

        assert!(!is_dead(&entity, t0));
        assert!(!is_dead(&entity, t0 + Duration::from_millis(49_999)));
        assert!(is_dead(&entity, t0 + Duration::from_millis(50_000)));
        assert!(is_dead(&entity, t0 + Duration::from_millis(50_001)));
    }
}
