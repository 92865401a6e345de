//! # Entity Overlay
//!
//! Host-facing entry point. The host calls [`EntityOverlay::on_frame_begin`]
//! once per rendered frame with the frame's camera state and its
//! collaborators; the overlay gathers candidate entities, builds a
//! [`FrameDrawList`] and paints it onto the supplied surface.
//!
//! ## Frame Pipeline
//!
//! 1. Sanitize the current settings
//! 2. Query entities in range, filtered by kind toggles
//! 3. Build a [`DrawDescriptor`] per entity that projects onto the screen
//! 4. Sort farthest first and emit
//!
//! Settings may be changed between frames through
//! [`EntityOverlay::settings_mut`] or [`EntityOverlay::replace_settings`].

pub mod descriptor;
pub mod draw_list;

pub use descriptor::{DescriptorBuilder, DrawDescriptor, HealthBarGeometry, HealthLabel};
pub use draw_list::{FrameDrawList, LABEL_GAP};

use crate::classify::{Classifier, NativeLabelSubject};
use crate::host::{DrawSurface, EntityQuery, FriendList, TextMetrics};
use crate::render::FrameContext;
use crate::settings::OverlaySettings;

/// Counters for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Entities returned by the spatial query
    pub candidates: usize,
    /// Entities drawn
    pub drawn: usize,
    /// Candidates that did not project onto the screen
    pub skipped: usize,
}

/// Overlay state owned by the host
#[derive(Debug, Clone)]
pub struct EntityOverlay {
    settings: OverlaySettings,
    enabled: bool,
}

impl Default for EntityOverlay {
    fn default() -> Self {
        Self::new(OverlaySettings::default())
    }
}

impl EntityOverlay {
    /// Create an enabled overlay with the given settings
    pub fn new(settings: OverlaySettings) -> Self {
        if let Err(e) = settings.validate() {
            log::warn!("Overlay settings will be clamped: {}", e);
        }
        Self {
            settings,
            enabled: true,
        }
    }

    /// Current settings, as configured
    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    /// Mutable settings, for changes between frames
    pub fn settings_mut(&mut self) -> &mut OverlaySettings {
        &mut self.settings
    }

    /// Swap in new settings, returning the previous ones
    pub fn replace_settings(&mut self, settings: OverlaySettings) -> OverlaySettings {
        if let Err(e) = settings.validate() {
            log::warn!("Overlay settings will be clamped: {}", e);
        }
        std::mem::replace(&mut self.settings, settings)
    }

    /// Enable or disable the overlay
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::info!("Entity overlay {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }

    /// Check if the overlay is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Build this frame's draw list and paint it onto `surface`
    ///
    /// Returns an empty list without touching the surface or the query when
    /// the overlay is disabled.
    pub fn on_frame_begin<Q, S>(
        &self,
        ctx: &FrameContext,
        query: &Q,
        friends: &dyn FriendList,
        metrics: &dyn TextMetrics,
        surface: &mut S,
    ) -> (FrameDrawList, FrameStats)
    where
        Q: EntityQuery + ?Sized,
        S: DrawSurface + ?Sized,
    {
        if !self.enabled {
            return (FrameDrawList::default(), FrameStats::default());
        }

        let settings = self.settings.sanitized();
        let list = FrameDrawList::build(&settings, ctx, query, friends, metrics);
        list.emit(surface, settings.border_thickness);

        let stats = FrameStats {
            candidates: list.candidates(),
            drawn: list.len(),
            skipped: list.candidates().saturating_sub(list.len()),
        };
        log::trace!(
            "Overlay frame: {} candidates, {} drawn, {} skipped",
            stats.candidates,
            stats.drawn,
            stats.skipped
        );

        (list, stats)
    }

    /// Whether the host should hide its own name tag for `subject`
    ///
    /// Always false while the overlay is disabled.
    pub fn suppresses_native_label(&self, subject: &NativeLabelSubject<'_>, friends: &dyn FriendList) -> bool {
        self.enabled && Classifier::new(&self.settings).suppresses_native_label(subject, friends)
    }
}
