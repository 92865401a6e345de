//! Render-time subjects for native name tag suppression

use crate::entity::{EntityKind, SpawnGroup};
use crate::host::FriendList;

/// What the host knows about an entity while drawing its built-in name tag
///
/// Name tags are drawn from lightweight render snapshots, not from the
/// entity, so kind resolution works from whatever the snapshot carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeLabelSubject<'a> {
    /// A player, identified by display name only
    Player {
        /// Player display name
        name: &'a str,
    },
    /// A dropped item
    Item,
    /// Any other entity with an optional spawn group
    Mob {
        /// Spawn group of the entity type, if known
        spawn_group: Option<SpawnGroup>,
    },
}

impl NativeLabelSubject<'_> {
    /// Overlay kind of this subject
    pub fn kind(&self, friends: &dyn FriendList) -> EntityKind {
        match self {
            Self::Player { name } if friends.is_friend_name(name) => EntityKind::FriendPlayer,
            Self::Player { .. } => EntityKind::Player,
            Self::Item => EntityKind::Item,
            Self::Mob { spawn_group } => spawn_group.map_or(EntityKind::Other, SpawnGroup::kind),
        }
    }
}
