//! Lifecycle manager
//!
//! Owns the live entities in spawn order. Dead entities are marked by id
//! during `step_all` and removed in a separate pass, so removal never
//! depends on positions that shift while the collection shrinks.

use crate::canvas::Canvas;
use crate::entity::{Entity, EntityId};
use crate::simulation;
use std::collections::HashSet;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct LifecycleManager {
    entities: Vec<Entity>,
    marked: HashSet<EntityId>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, entity: Entity) {
        tracing::debug!(id = %entity.id(), rect = ?entity.bounds(), "spawned entity");
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    pub fn is_marked(&self, id: EntityId) -> bool {
        self.marked.contains(&id)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Mark an entity for removal by the next `remove_marked`.
    pub fn mark_dead(&mut self, id: EntityId) {
        self.marked.insert(id);
    }

    /// Update and draw every entity that is still alive at `now`.
    ///
    /// Entities that have outlived their lifetime are marked instead; they
    /// are neither stepped nor drawn, and stay in the collection until
    /// `remove_marked` runs.
    pub fn step_all(&mut self, now: Instant, floor: i32, canvas: &mut impl Canvas) {
        for entity in &mut self.entities {
            if self.marked.contains(&entity.id) {
                continue;
            }
            if simulation::is_dead(entity, now) {
                self.marked.insert(entity.id);
                continue;
            }

            simulation::step(entity, now, floor);
            canvas.fill_rect(entity.rect(), entity.color());
        }
    }

    /// Drop every marked entity and clear the marks. Returns how many were removed.
    pub fn remove_marked(&mut self) -> usize {
        if self.marked.is_empty() {
            return 0;
        }

        let before = self.entities.len();
        let marked = &self.marked;
        self.entities.retain(|entity| !marked.contains(&entity.id));
        self.marked.clear();

        let removed = before - self.entities.len();
        tracing::debug!(removed, remaining = self.entities.len(), "removed dead entities");
        removed
    }
}
