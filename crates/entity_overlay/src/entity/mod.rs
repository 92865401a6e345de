//! Entity model consumed by the overlay
//!
//! Entities are described by the host through [`EntityTraits`]. The overlay
//! resolves those traits into exactly one [`EntityKind`] using a fixed
//! priority order, so every later lookup is an exhaustive `match` on a closed
//! enum.

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

use crate::foundation::math::DVec3;

/// Stable identity of an entity, used for friend lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

bitflags! {
    /// What an entity *is*, as reported by the host
    ///
    /// An entity may carry several traits (a hostile creature that also
    /// swims, say); [`EntityKind::resolve`] picks the one that wins.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct EntityTraits: u8 {
        /// A player character
        const PLAYER = 1 << 0;
        /// A monster that attacks on sight
        const HOSTILE = 1 << 1;
        /// A fish or other water creature
        const FISH = 1 << 2;
        /// A passive animal
        const PASSIVE = 1 << 3;
        /// A dropped item lying in the world
        const ITEM = 1 << 4;
        /// An ambient creature such as a bat
        const AMBIENT = 1 << 5;
    }
}

/// Overlay category of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A player on the friend list
    FriendPlayer,
    /// Any other player
    Player,
    /// Hostile mob
    Hostile,
    /// Fish or water creature
    Fish,
    /// Passive animal
    Passive,
    /// Dropped item
    Item,
    /// Ambient creature
    Ambient,
    /// Anything else
    Other,
}

impl EntityKind {
    /// All kinds, in resolution priority order
    pub const ALL: [Self; 8] = [
        Self::FriendPlayer,
        Self::Player,
        Self::Hostile,
        Self::Fish,
        Self::Passive,
        Self::Item,
        Self::Ambient,
        Self::Other,
    ];

    /// Resolve host traits into a single kind
    ///
    /// Priority: friend player, player, hostile, fish, passive, item, ambient,
    /// other. The friend flag only matters for players.
    pub fn resolve(traits: EntityTraits, is_friend: bool) -> Self {
        if traits.contains(EntityTraits::PLAYER) {
            if is_friend {
                Self::FriendPlayer
            } else {
                Self::Player
            }
        } else if traits.contains(EntityTraits::HOSTILE) {
            Self::Hostile
        } else if traits.contains(EntityTraits::FISH) {
            Self::Fish
        } else if traits.contains(EntityTraits::PASSIVE) {
            Self::Passive
        } else if traits.contains(EntityTraits::ITEM) {
            Self::Item
        } else if traits.contains(EntityTraits::AMBIENT) {
            Self::Ambient
        } else {
            Self::Other
        }
    }

    /// Whether this kind is a player of either relationship
    pub const fn is_player(self) -> bool {
        matches!(self, Self::FriendPlayer | Self::Player)
    }
}

/// Spawn category a host may attach to render-time entity state
///
/// Used when only a lightweight render snapshot is available rather than the
/// entity itself; see [`crate::classify::NativeLabelSubject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnGroup {
    /// Hostile monsters
    Monster,
    /// Land animals
    Creature,
    /// Ambient creatures
    Ambient,
    /// Axolotls
    Axolotls,
    /// Underground water creatures
    UndergroundWaterCreature,
    /// Water creatures
    WaterCreature,
    /// Ambient water creatures (fish schools)
    WaterAmbient,
    /// Everything else
    Misc,
}

impl SpawnGroup {
    /// Overlay kind corresponding to this spawn group
    pub const fn kind(self) -> EntityKind {
        match self {
            Self::Monster => EntityKind::Hostile,
            Self::Creature | Self::Axolotls => EntityKind::Passive,
            Self::Ambient => EntityKind::Ambient,
            Self::WaterCreature | Self::WaterAmbient | Self::UndergroundWaterCreature => EntityKind::Fish,
            Self::Misc => EntityKind::Other,
        }
    }
}

/// Current and maximum health of a living entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    /// Current health points
    pub current: f32,
    /// Maximum health points
    pub max: f32,
}

impl Health {
    /// Create a health value
    pub const fn new(current: f32, max: f32) -> Self {
        Self { current, max }
    }

    /// Health as a fraction of maximum, clamped to `[0, 1]`
    ///
    /// A non-positive or non-finite maximum cannot be divided by; such
    /// entities report full health while alive and zero otherwise.
    pub fn fraction(&self) -> f32 {
        if !(self.max.is_finite() && self.max > 0.0) {
            return if self.current > 0.0 { 1.0 } else { 0.0 };
        }

        let fraction = self.current / self.max;
        if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        }
    }
}

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: DVec3,
    /// Maximum corner of the bounding box
    pub max: DVec3,
}

impl AABB {
    /// Create a new AABB from min and max points
    pub const fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Box of the given width and height standing on `feet`
    ///
    /// Matches how living entities are usually sized: centered horizontally,
    /// growing upward from the feet position.
    pub fn from_feet(feet: DVec3, width: f64, height: f64) -> Self {
        let half = width * 0.5;
        Self {
            min: DVec3::new(feet.x - half, feet.y, feet.z - half),
            max: DVec3::new(feet.x + half, feet.y + height, feet.z + half),
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Move the box by `offset`
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_friend_player_wins_over_player() {
        assert_eq!(EntityKind::resolve(EntityTraits::PLAYER, true), EntityKind::FriendPlayer);
        assert_eq!(EntityKind::resolve(EntityTraits::PLAYER, false), EntityKind::Player);
    }

    #[test]
    fn test_friend_flag_ignored_for_non_players() {
        assert_eq!(EntityKind::resolve(EntityTraits::HOSTILE, true), EntityKind::Hostile);
        assert_eq!(EntityKind::resolve(EntityTraits::empty(), true), EntityKind::Other);
    }

    #[test]
    fn test_resolution_priority() {
        let cases = [
            (EntityTraits::HOSTILE | EntityTraits::FISH, EntityKind::Hostile),
            (EntityTraits::FISH | EntityTraits::PASSIVE, EntityKind::Fish),
            (EntityTraits::PASSIVE | EntityTraits::ITEM, EntityKind::Passive),
            (EntityTraits::ITEM | EntityTraits::AMBIENT, EntityKind::Item),
            (EntityTraits::AMBIENT, EntityKind::Ambient),
            (EntityTraits::all(), EntityKind::Player),
        ];

        for (traits, expected) in cases {
            assert_eq!(EntityKind::resolve(traits, false), expected, "traits {traits:?}");
        }
    }

    #[test]
    fn test_spawn_group_mapping() {
        assert_eq!(SpawnGroup::Monster.kind(), EntityKind::Hostile);
        assert_eq!(SpawnGroup::Axolotls.kind(), EntityKind::Passive);
        assert_eq!(SpawnGroup::UndergroundWaterCreature.kind(), EntityKind::Fish);
        assert_eq!(SpawnGroup::Misc.kind(), EntityKind::Other);
    }

    #[test]
    fn test_health_fraction_is_clamped() {
        assert_eq!(Health::new(10.0, 20.0).fraction(), 0.5);
        assert_eq!(Health::new(40.0, 20.0).fraction(), 1.0);
        assert_eq!(Health::new(-3.0, 20.0).fraction(), 0.0);
    }

    #[test]
    fn test_health_fraction_with_degenerate_max() {
        assert_eq!(Health::new(5.0, 0.0).fraction(), 1.0);
        assert_eq!(Health::new(0.0, 0.0).fraction(), 0.0);
        assert_eq!(Health::new(5.0, f32::NAN).fraction(), 1.0);
        assert_eq!(Health::new(f32::NAN, 20.0).fraction(), 0.0);
    }

    #[test]
    fn test_aabb_from_feet() {
        let aabb = AABB::from_feet(DVec3::new(10.0, 64.0, -5.0), 0.6, 1.8);
        assert_relative_eq!(aabb.min, DVec3::new(9.7, 64.0, -5.3), epsilon = 1e-9);
        assert_relative_eq!(aabb.max, DVec3::new(10.3, 65.8, -4.7), epsilon = 1e-9);
    }
}
