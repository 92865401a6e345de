//! Per-entity draw descriptors
//!
//! A [`DrawDescriptor`] is everything needed to paint one entity: where its
//! box goes, how big it is, what color it is and what text sits above it.
//! Descriptors are immutable once built and carry no references back to the
//! entity they describe.

use crate::classify::Classifier;
use crate::entity::{EntityId, EntityKind, Health};
use crate::foundation::math::{DVec3, Point2, Vec2, utils};
use crate::host::{OverlayEntity, TextMetrics, TextSize};
use crate::render::{Color, FrameContext, ScreenRect};
use crate::settings::{DisplayMode, OverlaySettings};

/// Basic-mode box side, in pixels, at a scaled distance of 1
pub const BASIC_BOX_SIZE: f64 = 100.0;

/// Smallest distance used as a basic-mode divisor
pub const MIN_SCALE_DISTANCE: f64 = 0.001;

/// Smallest box side, in pixels, on either axis
pub const MIN_BOX_SIDE: f32 = 1.0;

/// Health value text shown after the name label
#[derive(Debug, Clone, PartialEq)]
pub struct HealthLabel {
    /// Formatted health, with a leading space
    pub text: String,
    /// Text color
    pub color: Color,
    /// Measured text width in pixels
    pub width: f32,
}

/// Health bar drawn along the left edge of a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthBarGeometry {
    /// Full-height background
    pub background: ScreenRect,
    /// Filled portion, anchored to the bottom of the background
    pub fill: ScreenRect,
    /// Fill color
    pub color: Color,
}

/// Everything needed to draw one entity this frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawDescriptor {
    /// Entity this descriptor was built from
    pub id: EntityId,
    /// Resolved kind
    pub kind: EntityKind,
    /// Box center in screen pixels
    pub center: Point2,
    /// Box size in screen pixels, at least [`MIN_BOX_SIDE`] on each axis
    pub size: Vec2,
    /// Box outline color
    pub border_color: Color,
    /// Name label, if labels are shown for this kind
    pub label: Option<String>,
    /// Name label color
    pub label_color: Color,
    /// Distance from the viewer
    pub distance: f64,
    /// Health fraction in `[0, 1]`, 1 for entities without health
    pub health_fraction: f32,
    /// Health text, for entities with health
    pub health_label: Option<HealthLabel>,
    /// Health bar, when enabled and the entity has health
    pub health_bar: Option<HealthBarGeometry>,
    /// Measured size of the name label, zero when unlabelled
    pub text_size: TextSize,
}

impl DrawDescriptor {
    /// Box rectangle
    pub fn bounds(&self) -> ScreenRect {
        ScreenRect::from_center_size(self.center, self.size.x, self.size.y)
    }

    /// Whether a name label is drawn
    pub fn is_labelled(&self) -> bool {
        self.label.is_some()
    }

    /// Width of the health text, zero without health
    pub fn health_width(&self) -> f32 {
        self.health_label.as_ref().map_or(0.0, |health| health.width)
    }
}

/// Builds [`DrawDescriptor`]s for one frame
///
/// Reads settings as given; the frame aggregator hands it sanitized settings.
pub struct DescriptorBuilder<'a> {
    settings: &'a OverlaySettings,
    classifier: Classifier<'a>,
    ctx: &'a FrameContext,
    metrics: &'a dyn TextMetrics,
}

impl<'a> DescriptorBuilder<'a> {
    /// Create a builder for the frame described by `ctx`
    pub fn new(settings: &'a OverlaySettings, ctx: &'a FrameContext, metrics: &'a dyn TextMetrics) -> Self {
        Self {
            settings,
            classifier: Classifier::new(settings),
            ctx,
            metrics,
        }
    }

    /// Build the descriptor for `entity`, or `None` if it is not on screen
    pub fn build<E: OverlayEntity + ?Sized>(&self, entity: &E, kind: EntityKind) -> Option<DrawDescriptor> {
        let classification = self.classifier.classify(kind);
        let distance = self.ctx.distance_to(entity.position());

        let (center, size) = match self.settings.mode {
            DisplayMode::Basic => self.basic_placement(entity, distance)?,
            DisplayMode::Hitbox => self.hitbox_placement(entity)?,
        };

        let label = classification.show_label.then(|| entity.display_name().to_owned());
        let text_size = label.as_deref().map_or_else(TextSize::default, |text| self.metrics.measure(text));
        let label_color = if entity.is_sneaking() == Some(true) { Color::RED } else { Color::WHITE };

        let health = entity.health();
        let health_fraction = health.map_or(1.0, |health| health.fraction());
        let health_label = health.map(|health| self.health_label(health));
        let health_bar = match health {
            Some(_) if self.settings.health_bar.enabled => Some(self.health_bar(center, size, health_fraction)),
            _ => None,
        };

        Some(DrawDescriptor {
            id: entity.id(),
            kind,
            center,
            size,
            border_color: classification.color,
            label,
            label_color,
            distance,
            health_fraction,
            health_label,
            health_bar,
            text_size,
        })
    }

    /// Fixed-size box at the projected feet position, shrinking with distance
    fn basic_placement<E: OverlayEntity + ?Sized>(&self, entity: &E, distance: f64) -> Option<(Point2, Vec2)> {
        let center = self.ctx.world_to_screen(entity.position())?;
        let side = basic_side(
            distance,
            self.settings.scale_minimum,
            self.settings.scale_maximum,
            self.settings.scale,
        );
        Some((center, Vec2::new(side, side)))
    }

    /// Projected interpolated bounding box plus padding
    fn hitbox_placement<E: OverlayEntity + ?Sized>(&self, entity: &E) -> Option<(Point2, Vec2)> {
        let offset = interpolation_offset(entity.previous_position(), entity.position(), self.ctx.interpolation());
        let rect = self.ctx.box_to_screen(&entity.bounding_box().translated(offset))?;

        let padding = self.settings.padding;
        let size = Vec2::new(
            floor_side(rect.width() + padding),
            floor_side(rect.height() + padding),
        );
        Some((rect.center(), size))
    }

    fn health_label(&self, health: Health) -> HealthLabel {
        let text = format!(" {:.1}", health.current);
        let width = self.metrics.measure(&text).width;
        HealthLabel {
            text,
            color: Color::health_gradient(health.fraction()),
            width,
        }
    }

    fn health_bar(&self, center: Point2, size: Vec2, fraction: f32) -> HealthBarGeometry {
        let style = &self.settings.health_bar;
        let bounds = ScreenRect::from_center_size(center, size.x, size.y);

        let right = bounds.min.x - style.gap;
        let background = ScreenRect::new(
            Point2::new(right - style.width, bounds.min.y),
            Point2::new(right, bounds.max.y),
        );
        let fill_top = bounds.max.y - size.y * fraction;
        let fill = ScreenRect::new(
            Point2::new(background.min.x, fill_top),
            background.max,
        );

        HealthBarGeometry {
            background,
            fill,
            color: Color::health_gradient(fraction),
        }
    }
}

/// Basic-mode box side for an entity `distance` away
///
/// `BASIC_BOX_SIZE / (clamp(distance, min, max) / scale)`, floored at
/// [`MIN_BOX_SIDE`].
pub fn basic_side(distance: f64, scale_minimum: f64, scale_maximum: f64, scale: f64) -> f32 {
    let scaled = utils::clamp(distance, scale_minimum, scale_maximum).max(MIN_SCALE_DISTANCE) / scale;
    floor_side((BASIC_BOX_SIZE / scaled) as f32)
}

/// World offset that moves a box from its current to its interpolated position
///
/// An axis whose previous coordinate is exactly `0.0` has no usable history
/// and is left where it is.
pub fn interpolation_offset(previous: DVec3, current: DVec3, t: f64) -> DVec3 {
    previous.zip_map(&current, |prev, cur| {
        if prev == 0.0 {
            0.0
        } else {
            utils::lerp(prev, cur, t) - cur
        }
    })
}

fn floor_side(side: f32) -> f32 {
    if side.is_finite() && side >= MIN_BOX_SIDE {
        side
    } else {
        MIN_BOX_SIDE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityTraits, AABB};
    use crate::host::MonospaceMetrics;
    use crate::tests::fixtures::{TestEntity, camera_context};
    use approx::assert_relative_eq;

    fn basic_settings() -> OverlaySettings {
        OverlaySettings {
            mode: DisplayMode::Basic,
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_side_at_distance_fifty() {
        assert_relative_eq!(basic_side(50.0, 5.0, 100.0, 15.0), 30.0, epsilon = 1e-4);
    }

    #[test]
    fn test_basic_mode_descriptor() {
        let settings = basic_settings();
        let ctx = camera_context();
        let metrics = MonospaceMetrics::default();
        let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

        let zombie = TestEntity::new(1, EntityTraits::HOSTILE, DVec3::new(0.0, 0.0, -50.0)).with_name("Zombie");
        let descriptor = builder.build(&zombie, EntityKind::Hostile).expect("zombie is on screen");

        assert_relative_eq!(descriptor.size.x, 30.0, epsilon = 1e-4);
        assert_relative_eq!(descriptor.size.y, 30.0, epsilon = 1e-4);
        assert_relative_eq!(descriptor.center.x, 800.0, epsilon = 1e-3);
        assert_relative_eq!(descriptor.center.y, 450.0, epsilon = 1e-3);
        assert_relative_eq!(descriptor.distance, 50.0);
        assert_eq!(descriptor.border_color, settings.colors.hostile);
        assert_eq!(descriptor.label.as_deref(), Some("Zombie"));
        assert_eq!(descriptor.text_size, TextSize::new(42.0, 13.0));
    }

    #[test]
    fn test_basic_mode_skips_entities_behind() {
        let settings = basic_settings();
        let ctx = camera_context();
        let metrics = MonospaceMetrics::default();
        let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

        let behind = TestEntity::new(1, EntityTraits::PASSIVE, DVec3::new(0.0, 0.0, 20.0));
        assert!(builder.build(&behind, EntityKind::Passive).is_none());
    }

    #[test]
    fn test_basic_mode_without_viewer_uses_fallback_distance() {
        let settings = basic_settings();
        let mut ctx = camera_context();
        ctx.viewer_position = None;
        let metrics = MonospaceMetrics::default();
        let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

        let cow = TestEntity::new(1, EntityTraits::PASSIVE, DVec3::new(0.0, 0.0, -10.0));
        let descriptor = builder.build(&cow, EntityKind::Passive).expect("cow is on screen");

        assert_eq!(descriptor.distance, crate::render::FALLBACK_DISTANCE);
        assert_relative_eq!(descriptor.size.x, 15.0, epsilon = 1e-4);
    }

    #[test]
    fn test_tiny_box_is_floored() {
        let settings = OverlaySettings {
            scale: 0.001,
            ..basic_settings()
        };
        assert_eq!(basic_side(100.0, settings.scale_minimum, settings.scale_maximum, settings.scale), MIN_BOX_SIDE);
        assert_eq!(basic_side(0.0, 0.0, 0.0, 1.0), 100_000.0);
        assert_eq!(floor_side(f32::NAN), MIN_BOX_SIDE);
        assert_eq!(floor_side(f32::INFINITY), MIN_BOX_SIDE);
    }

    #[test]
    fn test_hitbox_mode_pads_projected_box() {
        let settings = OverlaySettings::default();
        let ctx = camera_context();
        let metrics = MonospaceMetrics::default();
        let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

        let skeleton = TestEntity::new(1, EntityTraits::HOSTILE, DVec3::new(1.0, -1.0, -12.0));
        let rect = ctx.box_to_screen(&skeleton.bounding_box()).expect("box is on screen");
        let descriptor = builder.build(&skeleton, EntityKind::Hostile).expect("skeleton is on screen");

        assert_relative_eq!(descriptor.center.x, rect.center().x, epsilon = 1e-3);
        assert_relative_eq!(descriptor.center.y, rect.center().y, epsilon = 1e-3);
        assert_relative_eq!(descriptor.size.x, rect.width() + settings.padding, epsilon = 1e-3);
        assert_relative_eq!(descriptor.size.y, rect.height() + settings.padding, epsilon = 1e-3);
    }

    #[test]
    fn test_interpolation_offset_skips_zero_axes() {
        let offset = interpolation_offset(DVec3::new(0.0, 64.0, -24.0), DVec3::new(2.0, 66.0, -20.0), 0.5);
        assert_eq!(offset, DVec3::new(0.0, -1.0, -2.0));

        let settled = interpolation_offset(DVec3::new(3.0, 3.0, 3.0), DVec3::new(4.0, 4.0, 4.0), 1.0);
        assert_eq!(settled, DVec3::zeros());
    }

    #[test]
    fn test_hitbox_mode_uses_interpolated_box() {
        let settings = OverlaySettings::default();
        let ctx = camera_context().with_tick_delta(0.5);
        let metrics = MonospaceMetrics::default();
        let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

        let runner = TestEntity::new(1, EntityTraits::PLAYER, DVec3::new(2.0, -1.0, -20.0))
            .with_previous(DVec3::new(0.0, -1.0, -24.0));
        let expected = ctx
            .box_to_screen(&runner.bounding_box().translated(DVec3::new(0.0, 0.0, -2.0)))
            .expect("box is on screen");
        let descriptor = builder.build(&runner, EntityKind::Player).expect("runner is on screen");

        assert_relative_eq!(descriptor.center.x, expected.center().x, epsilon = 1e-3);
        assert_relative_eq!(descriptor.center.y, expected.center().y, epsilon = 1e-3);
    }

    #[test]
    fn test_hitbox_mode_box_partly_behind_still_drawn() {
        let settings = OverlaySettings::default();
        let ctx = camera_context();
        let metrics = MonospaceMetrics::default();
        let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

        let mut wide = TestEntity::new(1, EntityTraits::empty(), DVec3::new(0.0, -1.0, 0.0));
        wide.bounds = AABB::new(DVec3::new(-1.0, -1.0, -3.0), DVec3::new(1.0, 1.0, 3.0));
        let descriptor = builder.build(&wide, EntityKind::Other).expect("front half is visible");

        assert!(descriptor.size.x.is_finite() && descriptor.size.x >= MIN_BOX_SIDE);
        assert!(descriptor.size.y.is_finite() && descriptor.size.y >= MIN_BOX_SIDE);
    }

    #[test]
    fn test_health_label_and_color() {
        let settings = OverlaySettings::default();
        let ctx = camera_context();
        let metrics = MonospaceMetrics::default();
        let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

        let hurt = TestEntity::new(1, EntityTraits::HOSTILE, DVec3::new(0.0, -1.0, -10.0))
            .with_health(Health::new(10.0, 20.0));
        let descriptor = builder.build(&hurt, EntityKind::Hostile).expect("on screen");

        assert_relative_eq!(descriptor.health_fraction, 0.5);
        let health = descriptor.health_label.expect("has health");
        assert_eq!(health.text, " 10.0");
        assert_eq!(health.color, Color::health_gradient(0.5));
        assert_eq!(health.width, 35.0);
        assert!(descriptor.health_bar.is_none());

        let item = TestEntity::new(2, EntityTraits::ITEM, DVec3::new(0.0, -1.0, -10.0));
        let descriptor = builder.build(&item, EntityKind::Item).expect("on screen");
        assert_eq!(descriptor.health_fraction, 1.0);
        assert!(descriptor.health_label.is_none());
    }

    #[test]
    fn test_overhealed_fraction_is_clamped() {
        let settings = OverlaySettings::default();
        let ctx = camera_context();
        let metrics = MonospaceMetrics::default();
        let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

        let absorbed = TestEntity::new(1, EntityTraits::PLAYER, DVec3::new(0.0, -1.0, -10.0))
            .with_health(Health::new(24.0, 20.0));
        let descriptor = builder.build(&absorbed, EntityKind::Player).expect("on screen");
        assert_eq!(descriptor.health_fraction, 1.0);
        assert_eq!(descriptor.health_label.map(|h| h.color), Some(Color::GREEN));
    }

    #[test]
    fn test_sneaking_turns_label_red() {
        let settings = OverlaySettings::default();
        let ctx = camera_context();
        let metrics = MonospaceMetrics::default();
        let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

        let sneaky = TestEntity::new(1, EntityTraits::PLAYER, DVec3::new(0.0, -1.0, -10.0)).sneaking(true);
        let upright = TestEntity::new(2, EntityTraits::PLAYER, DVec3::new(0.0, -1.0, -10.0)).sneaking(false);

        assert_eq!(builder.build(&sneaky, EntityKind::Player).map(|d| d.label_color), Some(Color::RED));
        assert_eq!(builder.build(&upright, EntityKind::Player).map(|d| d.label_color), Some(Color::WHITE));
    }

    #[test]
    fn test_hidden_label_in_both_modes() {
        for mode in [DisplayMode::Basic, DisplayMode::Hitbox] {
            let mut settings = OverlaySettings { mode, ..Default::default() };
            settings.show_labels.passive = false;
            let ctx = camera_context();
            let metrics = MonospaceMetrics::default();
            let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

            let sheep = TestEntity::new(1, EntityTraits::PASSIVE, DVec3::new(0.0, -1.0, -10.0));
            let descriptor = builder.build(&sheep, EntityKind::Passive).expect("on screen");
            assert!(!descriptor.is_labelled());
            assert_eq!(descriptor.text_size, TextSize::default());
        }
    }

    #[test]
    fn test_health_bar_geometry() {
        let mut settings = basic_settings();
        settings.health_bar.enabled = true;
        let ctx = camera_context();
        let metrics = MonospaceMetrics::default();
        let builder = DescriptorBuilder::new(&settings, &ctx, &metrics);

        let wolf = TestEntity::new(1, EntityTraits::PASSIVE, DVec3::new(0.0, 0.0, -50.0))
            .with_health(Health::new(2.0, 8.0));
        let descriptor = builder.build(&wolf, EntityKind::Passive).expect("on screen");
        let bar = descriptor.health_bar.expect("bar enabled");
        let bounds = descriptor.bounds();

        assert_relative_eq!(bar.background.max.x, bounds.min.x - 2.0, epsilon = 1e-4);
        assert_relative_eq!(bar.background.width(), 2.0, epsilon = 1e-4);
        assert_relative_eq!(bar.background.height(), bounds.height(), epsilon = 1e-4);
        assert_relative_eq!(bar.fill.max.y, bounds.max.y, epsilon = 1e-4);
        assert_relative_eq!(bar.fill.height(), bounds.height() * 0.25, epsilon = 1e-3);
        assert_eq!(bar.color, Color::health_gradient(0.25));
    }
}
