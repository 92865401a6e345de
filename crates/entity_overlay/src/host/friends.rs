//! In-memory friend list

use std::collections::HashSet;

use serde::{Serialize, Deserialize};

use super::FriendList;
use crate::config::Config;
use crate::entity::EntityId;

/// Friend list backed by identity and name sets
///
/// Names are compared case-insensitively. Implements [`Config`] so a host can
/// persist it next to the overlay settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendRegistry {
    ids: HashSet<EntityId>,
    names: HashSet<String>,
}

impl FriendRegistry {
    /// Create an empty friend list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a friend by identity and display name
    pub fn add(&mut self, id: EntityId, name: &str) {
        self.ids.insert(id);
        self.names.insert(name.to_lowercase());
        log::debug!("Added friend {name} ({id:?})");
    }

    /// Remove a friend; returns whether anything was removed
    pub fn remove(&mut self, id: EntityId, name: &str) -> bool {
        let by_id = self.ids.remove(&id);
        let by_name = self.names.remove(&name.to_lowercase());
        by_id || by_name
    }

    /// Number of friends known by identity
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.names.is_empty()
    }
}

impl FriendList for FriendRegistry {
    fn is_friend(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    fn is_friend_name(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }
}

impl Config for FriendRegistry {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut friends = FriendRegistry::new();
        assert!(friends.is_empty());

        friends.add(EntityId(7), "Steve");
        assert!(friends.is_friend(EntityId(7)));
        assert!(friends.is_friend_name("steve"));
        assert!(friends.is_friend_name("STEVE"));
        assert!(!friends.is_friend(EntityId(8)));
        assert_eq!(friends.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut friends = FriendRegistry::new();
        friends.add(EntityId(7), "Steve");

        assert!(friends.remove(EntityId(7), "Steve"));
        assert!(!friends.remove(EntityId(7), "Steve"));
        assert!(friends.is_empty());
    }
}
