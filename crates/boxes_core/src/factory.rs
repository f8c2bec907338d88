//! Entity factory
//!
//! Issues identifiers from an owned counter and gives each new box a
//! random color.

use crate::entity::{Color, Entity, EntityId, Rect};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Instant;

pub struct EntityFactory {
    next_id: u64,
    rng: StdRng,
}

impl EntityFactory {
    /// `first_id` is the identifier given to the first entity created.
    pub fn new(first_id: u64, rng: StdRng) -> Self {
        Self {
            next_id: first_id,
            rng,
        }
    }

    /// Identifier the next call to `create` will assign.
    pub fn peek_id(&self) -> EntityId {
        EntityId::new(self.next_id)
    }

    pub fn create(&mut self, bounds: Rect, now: Instant) -> Entity {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;

        Entity::new(id, bounds, self.random_color(), now)
    }

    fn random_color(&mut self) -> Color {
        Color::from_array(self.rng.gen::<[u8; 4]>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::INITIAL_SPEED;
    use rand::SeedableRng;

    fn factory(first_id: u64) -> EntityFactory {
        EntityFactory::new(first_id, StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut factory = factory(1);
        let now = Instant::now();

        let ids: Vec<u64> = (0..100)
            .map(|_| factory.create(Rect::new(0, 0, 20, 20), now).id().raw())
            .collect();

        assert_eq!(ids[0], 1);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(factory.peek_id().raw(), 101);
    }

    #[test]
    fn test_create_initial_state() {
        let mut factory = factory(42);
        let now = Instant::now();
        let bounds = Rect::new(10, 20, 30, 30);

        let entity = factory.create(bounds, now);

        assert_eq!(entity.id().raw(), 42);
        assert_eq!(entity.bounds(), bounds);
        assert_eq!(entity.speed(), INITIAL_SPEED);
        assert_eq!(entity.sub_pixel(), 0.0);
        assert_eq!(entity.created_at(), now);
        assert_eq!(entity.last_update(), now);
    }

    #[test]
    fn test_colors_vary_between_entities() {
        let mut factory = factory(1);
        let now = Instant::now();

        let colors: Vec<Color> = (0..16)
            .map(|_| factory.create(Rect::new(0, 0, 20, 20), now).color())
            .collect();

        assert!(colors.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
