//! # Entity Classification
//!
//! Maps an [`EntityKind`] to the visual policy of the overlay: box color,
//! whether a name label is shown, and whether the kind is drawn at all.
//!
//! Every lookup is a pure read of the current [`OverlaySettings`]. Calling the
//! classifier repeatedly with the same inputs and unchanged settings always
//! yields the same answer.

mod native_label;

pub use native_label::NativeLabelSubject;

use crate::entity::EntityKind;
use crate::host::{FriendList, OverlayEntity};
use crate::render::Color;
use crate::settings::{ColorMode, OverlaySettings};

/// Visual policy for one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Box outline color
    pub color: Color,
    /// Whether the name label is drawn
    pub show_label: bool,
}

/// Settings-backed classification lookups
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    settings: &'a OverlaySettings,
}

impl<'a> Classifier<'a> {
    /// Create a classifier reading from `settings`
    pub const fn new(settings: &'a OverlaySettings) -> Self {
        Self { settings }
    }

    /// Resolve an entity's kind, consulting the friend list for players
    pub fn kind_of<E: OverlayEntity + ?Sized>(entity: &E, friends: &dyn FriendList) -> EntityKind {
        EntityKind::resolve(entity.traits(), friends.is_friend(entity.id()))
    }

    /// Box color for `kind`
    ///
    /// In [`ColorMode::Static`] every kind shares the static color.
    pub const fn color(&self, kind: EntityKind) -> Color {
        match self.settings.color_mode {
            ColorMode::Static => self.settings.static_color,
            ColorMode::Normal => *self.settings.colors.get(kind),
        }
    }

    /// Whether entities of `kind` get a name label
    pub const fn should_show_label(&self, kind: EntityKind) -> bool {
        *self.settings.show_labels.get(kind)
    }

    /// Whether entities of `kind` are drawn at all
    pub const fn is_enabled(&self, kind: EntityKind) -> bool {
        *self.settings.enabled_kinds.get(kind)
    }

    /// Full visual policy for `kind`
    pub const fn classify(&self, kind: EntityKind) -> Classification {
        Classification {
            color: self.color(kind),
            show_label: self.should_show_label(kind),
        }
    }

    /// Whether the overlay draws its own label for `subject`
    ///
    /// Hosts use this to hide their built-in name tag so the entity is not
    /// labelled twice.
    pub fn suppresses_native_label(&self, subject: &NativeLabelSubject<'_>, friends: &dyn FriendList) -> bool {
        self.should_show_label(subject.kind(friends))
    }
}
