//! # Host Interfaces
//!
//! The overlay never owns the world, the font or the draw list it paints into.
//! Everything it needs from the embedding application comes through the
//! traits in this module:
//!
//! - [`OverlayEntity`]: read-only view of one entity
//! - [`EntityQuery`]: spatial search for candidate entities
//! - [`FriendList`]: friend-relationship lookup
//! - [`TextMetrics`]: text measurement in the active font
//! - [`DrawSurface`]: immediate-mode drawing primitives
//!
//! Optional capabilities (health, sneaking) are trait methods returning
//! `Option`, with defaults for entities that lack them.
//!
//! Simple in-memory implementations are provided for tests and headless
//! tools: [`FriendRegistry`], [`MonospaceMetrics`] and [`DrawCommandBuffer`].

mod friends;
mod metrics;
mod recording;

pub use friends::FriendRegistry;
pub use metrics::MonospaceMetrics;
pub use recording::{DrawCommand, DrawCommandBuffer};

use crate::entity::{EntityId, EntityTraits, Health, AABB};
use crate::foundation::math::{DVec3, Point2};
use crate::render::Color;

/// Read-only view of one entity for the current frame
pub trait OverlayEntity {
    /// Stable identity
    fn id(&self) -> EntityId;

    /// What the entity is
    fn traits(&self) -> EntityTraits;

    /// Name shown in the label
    fn display_name(&self) -> &str;

    /// Current world position (feet)
    fn position(&self) -> DVec3;

    /// World position at the previous simulation step
    ///
    /// An axis that is exactly `0.0` is treated as "not yet initialized" and
    /// disables interpolation on that axis.
    fn previous_position(&self) -> DVec3;

    /// Current world-space bounding box
    fn bounding_box(&self) -> AABB;

    /// Health, for entities that have it
    fn health(&self) -> Option<Health> {
        None
    }

    /// Sneaking state, for entities that can sneak
    fn is_sneaking(&self) -> Option<bool> {
        None
    }

    /// Whether this entity is the local player, who is never drawn
    fn is_local_player(&self) -> bool {
        false
    }
}

/// Spatial search collaborator
pub trait EntityQuery {
    /// Entity type produced by the search
    type Entity: OverlayEntity;

    /// All entities within `range` of the viewer that satisfy `filter`
    fn search(&self, range: f64, filter: &dyn Fn(&Self::Entity) -> bool) -> Vec<&Self::Entity>;
}

/// Friend-relationship lookup
pub trait FriendList {
    /// Whether the entity with this identity is a friend
    fn is_friend(&self, id: EntityId) -> bool;

    /// Whether the player with this display name is a friend
    ///
    /// Used where only a render snapshot, not the entity, is available.
    fn is_friend_name(&self, name: &str) -> bool;
}

/// Measured size of a string in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl TextSize {
    /// Create a text size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Text measurement in the currently active font
pub trait TextMetrics {
    /// Size of `text` when drawn
    fn measure(&self, text: &str) -> TextSize;
}

/// Immediate-mode drawing primitives
pub trait DrawSurface {
    /// Filled rectangle from `min` to `max`
    fn fill_rect(&mut self, min: Point2, max: Point2, color: Color);

    /// Rectangle outline from `min` to `max`
    fn stroke_rect(&mut self, min: Point2, max: Point2, color: Color, thickness: f32);

    /// Text with its top-left corner at `position`
    fn text(&mut self, position: Point2, color: Color, text: &str);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn fill_rect(&mut self, min: Point2, max: Point2, color: Color) {
        (**self).fill_rect(min, max, color);
    }

    fn stroke_rect(&mut self, min: Point2, max: Point2, color: Color, thickness: f32) {
        (**self).stroke_rect(min, max, color, thickness);
    }

    fn text(&mut self, position: Point2, color: Color, text: &str) {
        (**self).text(position, color, text);
    }
}
