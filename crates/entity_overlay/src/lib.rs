//! # Entity Overlay
//!
//! Screen-space overlay for 3D worlds: projects entities onto the screen and
//! draws classification-colored boxes, name labels and health indicators over
//! them, farthest first.
//!
//! ## Features
//!
//! - **Projection**: world points and bounding boxes to screen pixels
//! - **Classification**: per-kind colors, labels and toggles
//! - **Draw Lists**: painter-ordered per-frame descriptors
//! - **Configuration**: TOML and RON settings files
//!
//! ## Quick Start
//!
//! ```rust
//! use entity_overlay::prelude::*;
//!
//! struct Zombie;
//!
//! impl OverlayEntity for Zombie {
//!     fn id(&self) -> EntityId { EntityId(1) }
//!     fn traits(&self) -> EntityTraits { EntityTraits::HOSTILE }
//!     fn display_name(&self) -> &str { "Zombie" }
//!     fn position(&self) -> DVec3 { DVec3::new(0.0, 64.0, -20.0) }
//!     fn previous_position(&self) -> DVec3 { self.position() }
//!     fn bounding_box(&self) -> AABB { AABB::from_feet(self.position(), 0.6, 1.95) }
//! }
//!
//! struct World(Vec<Zombie>);
//!
//! impl EntityQuery for World {
//!     type Entity = Zombie;
//!
//!     fn search(&self, _range: f64, filter: &dyn Fn(&Zombie) -> bool) -> Vec<&Zombie> {
//!         self.0.iter().filter(|&zombie| filter(zombie)).collect()
//!     }
//! }
//!
//! let camera = Camera::perspective(DVec3::new(0.0, 65.0, 0.0), 70.0, 16.0 / 9.0, 0.05, 512.0);
//! let ctx = camera.frame_context(Viewport::new(1600.0, 900.0), 1.0);
//!
//! let overlay = EntityOverlay::default();
//! let mut surface = DrawCommandBuffer::new();
//! let (list, stats) = overlay.on_frame_begin(
//!     &ctx,
//!     &World(vec![Zombie]),
//!     &FriendRegistry::new(),
//!     &MonospaceMetrics::default(),
//!     &mut surface,
//! );
//!
//! assert_eq!(list.len(), 1);
//! assert_eq!(stats.drawn, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod entity;
pub mod settings;
pub mod render;
pub mod host;
pub mod classify;
pub mod overlay;

#[cfg(test)]
mod tests;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::foundation::math::{DVec3, Mat4, Mat4Ext, Point2, Vec2, Vec3, Vec4};
    pub use crate::config::{Config, ConfigError};
    pub use crate::entity::{AABB, EntityId, EntityKind, EntityTraits, Health, SpawnGroup};
    pub use crate::settings::{ColorMode, DisplayMode, HealthBarSettings, OverlaySettings, PerKind};
    pub use crate::render::{Camera, Color, FrameContext, ScreenRect, Viewport};
    pub use crate::host::{
        DrawCommand, DrawCommandBuffer, DrawSurface, EntityQuery, FriendList, FriendRegistry,
        MonospaceMetrics, OverlayEntity, TextMetrics, TextSize,
    };
    pub use crate::classify::{Classification, Classifier, NativeLabelSubject};
    pub use crate::overlay::{DrawDescriptor, EntityOverlay, FrameDrawList, FrameStats};
}
