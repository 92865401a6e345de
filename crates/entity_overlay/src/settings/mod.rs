//! # Overlay Settings
//!
//! All user-tunable values of the overlay: search range, display and color
//! modes, per-kind colors and toggles, box scaling and styling.
//!
//! Settings may be edited by an external layer between frames, so nothing in
//! here is trusted as-is. Each frame works from [`OverlaySettings::sanitized`],
//! which clamps every value into a range the geometry can safely use.
//! [`OverlaySettings::validate`] reports the same problems as errors for
//! settings UIs that want to reject bad input up front.

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};
use crate::entity::EntityKind;
use crate::render::Color;

/// Upper bound of the entity search range
pub const MAX_RANGE: f64 = 512.0;

/// Smallest accepted scale divisor
pub const MIN_SCALE: f64 = 0.001;

/// Border thickness limits in pixels
pub const BORDER_THICKNESS_RANGE: (f32, f32) = (1.0, 8.0);

/// How boxes are positioned and sized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Square box centered on the projected entity position, sized by distance
    Basic,
    /// Box fitted around the projected bounding volume of the entity
    #[default]
    Hitbox,
}

/// How box colors are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    /// One color for every entity
    Static,
    /// A configured color per entity kind
    #[default]
    Normal,
}

/// One value per [`EntityKind`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerKind<T> {
    /// Players on the friend list
    pub friend: T,
    /// Other players
    pub player: T,
    /// Hostile mobs
    pub hostile: T,
    /// Passive animals
    pub passive: T,
    /// Fish and water creatures
    pub fish: T,
    /// Dropped items
    pub item: T,
    /// Ambient creatures
    pub ambient: T,
    /// Everything else
    pub other: T,
}

impl<T> PerKind<T> {
    /// Value for `kind`
    pub const fn get(&self, kind: EntityKind) -> &T {
        match kind {
            EntityKind::FriendPlayer => &self.friend,
            EntityKind::Player => &self.player,
            EntityKind::Hostile => &self.hostile,
            EntityKind::Passive => &self.passive,
            EntityKind::Fish => &self.fish,
            EntityKind::Item => &self.item,
            EntityKind::Ambient => &self.ambient,
            EntityKind::Other => &self.other,
        }
    }

    /// Mutable value for `kind`
    pub fn get_mut(&mut self, kind: EntityKind) -> &mut T {
        match kind {
            EntityKind::FriendPlayer => &mut self.friend,
            EntityKind::Player => &mut self.player,
            EntityKind::Hostile => &mut self.hostile,
            EntityKind::Passive => &mut self.passive,
            EntityKind::Fish => &mut self.fish,
            EntityKind::Item => &mut self.item,
            EntityKind::Ambient => &mut self.ambient,
            EntityKind::Other => &mut self.other,
        }
    }
}

impl<T: Clone> PerKind<T> {
    /// The same value for every kind
    pub fn splat(value: T) -> Self {
        Self {
            friend: value.clone(),
            player: value.clone(),
            hostile: value.clone(),
            passive: value.clone(),
            fish: value.clone(),
            item: value.clone(),
            ambient: value.clone(),
            other: value,
        }
    }
}

impl Default for PerKind<bool> {
    fn default() -> Self {
        Self::splat(true)
    }
}

impl Default for PerKind<Color> {
    fn default() -> Self {
        Self {
            friend: Color::rgb(0, 255, 255),
            player: Color::rgb(255, 0, 0),
            hostile: Color::rgb(255, 100, 0),
            passive: Color::rgb(0, 255, 0),
            fish: Color::rgb(187, 0, 255),
            item: Color::rgb(255, 183, 0),
            ambient: Color::rgb(255, 255, 255),
            other: Color::rgb(0, 255, 166),
        }
    }
}

/// Optional health bar drawn along the left edge of each box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthBarSettings {
    /// Whether the bar is drawn at all
    pub enabled: bool,
    /// Bar width in pixels
    pub width: f32,
    /// Gap between the bar and the box edge in pixels
    pub gap: f32,
}

impl Default for HealthBarSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            width: 2.0,
            gap: 2.0,
        }
    }
}

/// Complete overlay configuration
///
/// Plain values come before the nested per-kind tables so the TOML form
/// reads top-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Maximum distance at which entities are considered
    pub range: f64,
    /// Box placement mode
    pub mode: DisplayMode,
    /// Box coloring mode
    pub color_mode: ColorMode,
    /// Color used for every entity in [`ColorMode::Static`]
    pub static_color: Color,
    /// Lower bound of the distance used for basic-mode sizing
    pub scale_minimum: f64,
    /// Basic-mode scale factor
    pub scale: f64,
    /// Upper bound of the distance used for basic-mode sizing
    pub scale_maximum: f64,
    /// Extra pixels added to hitbox-mode boxes on each axis
    pub padding: f32,
    /// Box outline thickness in pixels
    pub border_thickness: f32,
    /// Per-kind colors used in [`ColorMode::Normal`]
    pub colors: PerKind<Color>,
    /// Which kinds are drawn at all
    pub enabled_kinds: PerKind<bool>,
    /// Which kinds get a name label
    pub show_labels: PerKind<bool>,
    /// Health bar styling
    pub health_bar: HealthBarSettings,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            range: 255.0,
            mode: DisplayMode::default(),
            color_mode: ColorMode::default(),
            static_color: Color::rgb(255, 255, 0),
            scale_minimum: 5.0,
            scale: 15.0,
            scale_maximum: 100.0,
            padding: 10.0,
            border_thickness: 1.0,
            colors: PerKind::default(),
            enabled_kinds: PerKind::default(),
            show_labels: PerKind::default(),
            health_bar: HealthBarSettings::default(),
        }
    }
}

impl Config for OverlaySettings {}

fn finite_or_f64(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

fn finite_or_f32(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

impl OverlaySettings {
    /// Copy of these settings with every value clamped into its usable range
    ///
    /// - non-finite numbers fall back to their defaults
    /// - `range` is kept within `[0, MAX_RANGE]`
    /// - `scale_minimum` is at least 0 and `scale_maximum` at least `scale_minimum`
    /// - `scale` is at least [`MIN_SCALE`]
    /// - `padding` and health bar sizes are at least 0
    /// - `border_thickness` is kept within [`BORDER_THICKNESS_RANGE`]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let (min_border, max_border) = BORDER_THICKNESS_RANGE;

        let scale_minimum = finite_or_f64(self.scale_minimum, defaults.scale_minimum).max(0.0);
        let scale_maximum = finite_or_f64(self.scale_maximum, defaults.scale_maximum).max(scale_minimum);

        Self {
            range: finite_or_f64(self.range, defaults.range).clamp(0.0, MAX_RANGE),
            scale_minimum,
            scale_maximum,
            scale: finite_or_f64(self.scale, defaults.scale).max(MIN_SCALE),
            padding: finite_or_f32(self.padding, defaults.padding).max(0.0),
            border_thickness: finite_or_f32(self.border_thickness, defaults.border_thickness)
                .clamp(min_border, max_border),
            health_bar: HealthBarSettings {
                enabled: self.health_bar.enabled,
                width: finite_or_f32(self.health_bar.width, defaults.health_bar.width).max(0.0),
                gap: finite_or_f32(self.health_bar.gap, defaults.health_bar.gap).max(0.0),
            },
            ..self.clone()
        }
    }

    /// Check every value against its accepted range
    ///
    /// Returns the first offending setting. Frames never need this: they use
    /// [`Self::sanitized`], which repairs the same problems silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason: reason.into() })
        }

        if !(0.0..=MAX_RANGE).contains(&self.range) {
            return invalid("range", format!("{} is outside 0..={MAX_RANGE}", self.range));
        }
        if !(self.scale_minimum.is_finite() && self.scale_minimum >= 0.0) {
            return invalid("scale_minimum", format!("{} must be a non-negative number", self.scale_minimum));
        }
        if !(self.scale_maximum.is_finite() && self.scale_maximum >= self.scale_minimum) {
            return invalid(
                "scale_maximum",
                format!("{} must not be below scale_minimum ({})", self.scale_maximum, self.scale_minimum),
            );
        }
        if !(self.scale.is_finite() && self.scale >= MIN_SCALE) {
            return invalid("scale", format!("{} must be at least {MIN_SCALE}", self.scale));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return invalid("padding", format!("{} must be a non-negative number", self.padding));
        }
        let (min_border, max_border) = BORDER_THICKNESS_RANGE;
        if !(min_border..=max_border).contains(&self.border_thickness) {
            return invalid(
                "border_thickness",
                format!("{} is outside {min_border}..={max_border}", self.border_thickness),
            );
        }
        if !(self.health_bar.width.is_finite() && self.health_bar.width >= 0.0) {
            return invalid("health_bar.width", "must be a non-negative number");
        }
        if !(self.health_bar.gap.is_finite() && self.health_bar.gap >= 0.0) {
            return invalid("health_bar.gap", "must be a non-negative number");
        }

        Ok(())
    }
}
