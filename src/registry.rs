//! Owner of all live entities and the per-tick driver.
//!
//! Entities are stored by [`EntityId`] and visited in ascending id order, so
//! a tick is deterministic. The registry is the single writer of the
//! collision-checked flag and the only place entities are dropped.
use hashbrown::HashMap;
use log::{debug, trace};
use serde::Serialize;

use crate::collision::CollisionResult;
use crate::error::InvalidArgument;
use crate::viewport::Viewport;
use crate::Body;

/// Stable handle to an entity owned by a [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Raw handle value.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

/// Capabilities every entity kind provides to the registry.
///
/// Implementors are usually an enum over the game's entity kinds, each
/// variant embedding a [`Body`].
pub trait Behaviour {
    /// Kinematic state of the entity.
    fn body(&self) -> &Body;

    /// Mutable kinematic state of the entity.
    fn body_mut(&mut self) -> &mut Body;

    /// Steers, damps and integrates the entity for one tick.
    ///
    /// # Errors
    /// Propagates steering precondition failures.
    fn update(&mut self) -> Result<(), InvalidArgument>;

    /// Reacts to overlapping `other`. `hit` is measured from this entity.
    fn handle_collision(&mut self, other: &Self, hit: &CollisionResult);

    /// Releases anything the entity holds before it is dropped.
    fn on_done(&mut self) {}
}

/// Arena of live entities addressed by [`EntityId`].
#[derive(Debug)]
pub struct Registry<E> {
    entities: HashMap<EntityId, E>,
    next_id: u64,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            entities: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<E: Behaviour> Registry<E> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `entity` and returns its handle.
    pub fn spawn(&mut self, entity: E) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        debug!("spawned {} as entity {}", entity.body().tag(), id.0);
        self.entities.insert(id, entity);
        id
    }

    /// Entity behind `id`, if still live.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.entities.get(&id)
    }

    /// Mutable entity behind `id`, if still live.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut E> {
        self.entities.get_mut(&id)
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether no entity is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Live handles in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.entities.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Live entities in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &E)> + '_ {
        self.ids()
            .into_iter()
            .filter_map(move |id| self.entities.get(&id).map(|e| (id, e)))
    }

    /// Live entities whose render box overlaps `viewport`.
    pub fn visible<'a>(
        &'a self,
        viewport: &'a Viewport,
    ) -> impl Iterator<Item = (EntityId, &'a E)> + 'a {
        self.iter()
            .filter(move |(_, e)| e.body().is_on_screen(viewport))
    }

    /// Clears every collision-checked flag ahead of a new tick.
    pub fn begin_tick(&mut self) {
        for entity in self.entities.values_mut() {
            entity.body_mut().set_collision_checked(false);
        }
    }

    /// Runs [`Behaviour::update`] on every entity in id order.
    ///
    /// # Errors
    /// Stops at and returns the first entity's failure.
    pub fn update_all(&mut self) -> Result<(), InvalidArgument> {
        for id in self.ids() {
            if let Some(entity) = self.entities.get_mut(&id) {
                entity.update()?;
            }
        }
        Ok(())
    }

    /// Tests every unordered pair once and notifies both sides of overlaps.
    ///
    /// Each entity is marked collision-checked after its pairs are done, and
    /// later entities skip it. Entities already marked done take no part.
    /// Returns the number of overlapping pairs.
    pub fn resolve_collisions(&mut self, margin: f64) -> usize {
        let ids = self.ids();
        let mut hits = 0;

        for (index, &a_id) in ids.iter().enumerate() {
            for &b_id in ids.iter().skip(index + 1) {
                let Some([a, b]) = self.entities.get_many_mut([&a_id, &b_id]) else {
                    continue;
                };
                if a.body().is_done() || b.body().is_done() || b.body().is_collision_checked() {
                    continue;
                }

                let hit = a.body().test_collision(b.body(), margin);
                if !hit.colliding {
                    continue;
                }

                trace!(
                    "collision between {} {} and {} {}",
                    a.body().tag(),
                    a_id.0,
                    b.body().tag(),
                    b_id.0
                );
                a.handle_collision(b, &hit);
                b.handle_collision(a, &hit.mirrored());
                hits += 1;
            }

            if let Some(a) = self.entities.get_mut(&a_id) {
                a.body_mut().set_collision_checked(true);
            }
        }
        hits
    }

    /// Drops every entity marked done, calling [`Behaviour::on_done`] first.
    ///
    /// Returns the evicted handles in ascending order.
    pub fn sweep_done(&mut self) -> Vec<EntityId> {
        let done: Vec<EntityId> = self
            .ids()
            .into_iter()
            .filter(|id| self.entities.get(id).is_some_and(|e| e.body().is_done()))
            .collect();

        for id in &done {
            if let Some(mut entity) = self.entities.remove(id) {
                entity.on_done();
                debug!("evicted {} entity {}", entity.body().tag(), id.0);
            }
        }
        done
    }

    /// Runs one full tick: flag reset, updates, collisions and eviction.
    ///
    /// Returns the handles evicted this tick.
    ///
    /// # Errors
    /// Propagates the first [`Behaviour::update`] failure; collisions and
    /// eviction are skipped for that tick.
    pub fn tick(&mut self) -> Result<Vec<EntityId>, InvalidArgument> {
        self.begin_tick();
        self.update_all()?;
        self.resolve_collisions(0.0);
        Ok(self.sweep_done())
    }
}
