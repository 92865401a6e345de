//! Simulated world of wandering entities

use entity_overlay::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

const NAMES: [&str; 8] = ["Steve", "Alex", "Zombie", "Skeleton", "Cod", "Sheep", "Bat", "Diamond"];

/// Entity that drifts with a fixed velocity every tick
#[derive(Debug, Clone)]
pub struct DemoEntity {
    id: EntityId,
    traits: EntityTraits,
    name: String,
    position: DVec3,
    previous: DVec3,
    velocity: DVec3,
    health: Option<Health>,
    sneaking: Option<bool>,
}

impl DemoEntity {
    fn random(id: u64, center: DVec3, spread: f64, rng: &mut impl Rng) -> Self {
        let traits = *[
            EntityTraits::PLAYER,
            EntityTraits::HOSTILE,
            EntityTraits::HOSTILE | EntityTraits::FISH,
            EntityTraits::FISH,
            EntityTraits::PASSIVE,
            EntityTraits::ITEM,
            EntityTraits::AMBIENT,
            EntityTraits::empty(),
        ]
        .choose(rng)
        .unwrap_or(&EntityTraits::empty());

        let name = NAMES.choose(rng).copied().unwrap_or("Entity");
        let position = center
            + DVec3::new(
                rng.gen_range(-spread..spread),
                rng.gen_range(-4.0..4.0),
                rng.gen_range(-spread..spread),
            );
        let velocity = DVec3::new(rng.gen_range(-0.3..0.3), 0.0, rng.gen_range(-0.3..0.3));

        let living = !traits.contains(EntityTraits::ITEM) && !traits.is_empty();
        let health = living.then(|| {
            let max = if traits.contains(EntityTraits::PLAYER) { 20.0 } else { rng.gen_range(4.0..40.0_f32) };
            Health::new(rng.gen_range(0.5..=max), max)
        });
        let sneaking = traits.contains(EntityTraits::PLAYER).then(|| rng.gen_bool(0.3));

        Self {
            id: EntityId(id),
            traits,
            name: format!("{name} #{id}"),
            position,
            previous: position,
            velocity,
            health,
            sneaking,
        }
    }

    fn tick(&mut self) {
        self.previous = self.position;
        self.position += self.velocity;
    }
}

impl OverlayEntity for DemoEntity {
    fn id(&self) -> EntityId {
        self.id
    }

    fn traits(&self) -> EntityTraits {
        self.traits
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> DVec3 {
        self.position
    }

    fn previous_position(&self) -> DVec3 {
        self.previous
    }

    fn bounding_box(&self) -> AABB {
        if self.traits.contains(EntityTraits::ITEM) {
            AABB::from_feet(self.position, 0.25, 0.25)
        } else {
            AABB::from_feet(self.position, 0.6, 1.8)
        }
    }

    fn health(&self) -> Option<Health> {
        self.health
    }

    fn is_sneaking(&self) -> Option<bool> {
        self.sneaking
    }
}

/// Entities scattered around a viewer
#[derive(Debug, Clone)]
pub struct DemoWorld {
    viewer: DVec3,
    entities: Vec<DemoEntity>,
}

impl DemoWorld {
    /// Scatter `count` random entities within `spread` blocks of `viewer`
    pub fn scatter(viewer: DVec3, count: usize, spread: f64, rng: &mut impl Rng) -> Self {
        let entities = (1..=count as u64)
            .map(|id| DemoEntity::random(id, viewer, spread, rng))
            .collect();
        Self { viewer, entities }
    }

    /// Advance every entity by one simulation step
    pub fn tick(&mut self) {
        for entity in &mut self.entities {
            entity.tick();
        }
    }

    /// Entities whose names start with "Alex" are befriended
    pub fn friends(&self) -> FriendRegistry {
        let mut friends = FriendRegistry::new();
        for entity in self.entities.iter().filter(|e| e.traits.contains(EntityTraits::PLAYER)) {
            if entity.name.starts_with("Alex") {
                friends.add(entity.id, &entity.name);
            }
        }
        friends
    }
}

impl EntityQuery for DemoWorld {
    type Entity = DemoEntity;

    fn search(&self, range: f64, filter: &dyn Fn(&DemoEntity) -> bool) -> Vec<&DemoEntity> {
        self.entities
            .iter()
            .filter(|&entity| (entity.position - self.viewer).norm() <= range && filter(entity))
            .collect()
    }
}
