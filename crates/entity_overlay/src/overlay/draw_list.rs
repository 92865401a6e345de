//! Back-to-front frame draw list

use crate::classify::Classifier;
use crate::foundation::math::Point2;
use crate::host::{DrawSurface, EntityQuery, FriendList, OverlayEntity, TextMetrics};
use crate::render::{Color, FrameContext};
use crate::settings::OverlaySettings;
use super::descriptor::{DescriptorBuilder, DrawDescriptor};

/// Vertical gap, in pixels, between a label and the top of its box
pub const LABEL_GAP: f32 = 10.0;

/// Descriptors for one frame, farthest first
///
/// Built fresh every frame and owned by that frame; nothing carries over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameDrawList {
    descriptors: Vec<DrawDescriptor>,
    candidates: usize,
}

impl FrameDrawList {
    /// Collect and order descriptors for every visible candidate entity
    ///
    /// Candidates come from `query.search` with a predicate that rejects
    /// disabled kinds and the local player. Entities that do not project
    /// onto the screen are skipped.
    pub fn build<Q: EntityQuery + ?Sized>(
        settings: &OverlaySettings,
        ctx: &FrameContext,
        query: &Q,
        friends: &dyn FriendList,
        metrics: &dyn TextMetrics,
    ) -> Self {
        let classifier = Classifier::new(settings);
        let filter = |entity: &Q::Entity| {
            !entity.is_local_player() && classifier.is_enabled(Classifier::kind_of(entity, friends))
        };
        let candidates = query.search(settings.range, &filter);

        let builder = DescriptorBuilder::new(settings, ctx, metrics);
        let descriptors = candidates
            .iter()
            .filter_map(|entity| builder.build(*entity, Classifier::kind_of(*entity, friends)))
            .collect();

        let mut list = Self {
            descriptors,
            candidates: candidates.len(),
        };
        list.sort();
        list
    }

    /// Wrap already-built descriptors, ordering them farthest first
    pub fn from_descriptors(descriptors: Vec<DrawDescriptor>) -> Self {
        let candidates = descriptors.len();
        let mut list = Self { descriptors, candidates };
        list.sort();
        list
    }

    /// Painter's order: descending distance, stable for equal distances
    fn sort(&mut self) {
        self.descriptors.sort_by(|a, b| b.distance.total_cmp(&a.distance));
    }

    /// Paint every descriptor onto `surface`, in list order
    ///
    /// Per descriptor: box outline, then the label background, name and
    /// health text if labelled, then the health bar if present.
    pub fn emit<S: DrawSurface + ?Sized>(&self, surface: &mut S, border_thickness: f32) {
        for descriptor in &self.descriptors {
            emit_descriptor(descriptor, surface, border_thickness);
        }
    }

    /// Descriptors, farthest first
    pub fn iter(&self) -> std::slice::Iter<'_, DrawDescriptor> {
        self.descriptors.iter()
    }

    /// Descriptors, farthest first
    pub fn descriptors(&self) -> &[DrawDescriptor] {
        &self.descriptors
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether nothing will be drawn
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Number of entities the spatial query returned
    pub fn candidates(&self) -> usize {
        self.candidates
    }
}

impl<'a> IntoIterator for &'a FrameDrawList {
    type Item = &'a DrawDescriptor;
    type IntoIter = std::slice::Iter<'a, DrawDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn emit_descriptor<S: DrawSurface + ?Sized>(descriptor: &DrawDescriptor, surface: &mut S, border_thickness: f32) {
    let bounds = descriptor.bounds();
    surface.stroke_rect(bounds.min, bounds.max, descriptor.border_color, border_thickness);

    if let Some(label) = &descriptor.label {
        let text = descriptor.text_size;
        let text_y = (bounds.min.y - text.height - LABEL_GAP).max(0.0);
        let origin = Point2::new(bounds.min.x, text_y);

        surface.fill_rect(
            origin,
            Point2::new(
                bounds.min.x + text.width + descriptor.health_width(),
                text_y + text.height,
            ),
            Color::LABEL_BACKGROUND,
        );
        surface.text(origin, descriptor.label_color, label);

        if let Some(health) = &descriptor.health_label {
            surface.text(Point2::new(bounds.min.x + text.width, text_y), health.color, &health.text);
        }
    }

    if let Some(bar) = &descriptor.health_bar {
        surface.fill_rect(bar.background.min, bar.background.max, Color::LABEL_BACKGROUND);
        surface.fill_rect(bar.fill.min, bar.fill.max, bar.color);
    }
}
