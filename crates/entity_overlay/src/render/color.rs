//! RGBA colors for overlay draw calls

use serde::{Serialize, Deserialize};
use crate::foundation::math::{Vec4, utils};

/// 8-bit-per-channel RGBA color
///
/// Serialized as a `[r, g, b, a]` array so settings files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Half-transparent black, used behind label text
    pub const LABEL_BACKGROUND: Self = Self::rgba(0, 0, 0, 128);

    /// Create a color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create a color from normalized channels
    ///
    /// Each channel is clamped to `[0, 1]` (NaN counts as 0) and rounded to
    /// the nearest 8-bit value.
    pub fn from_normalized(r: f32, g: f32, b: f32, a: f32) -> Self {
        fn channel(value: f32) -> u8 {
            (utils::saturate(value) * 255.0).round() as u8
        }

        Self::rgba(channel(r), channel(g), channel(b), channel(a))
    }

    /// Normalized `[r, g, b, a]` channels in `[0, 1]`
    pub fn to_normalized(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }

    /// Normalized channels as a vector, for float-based draw APIs
    pub fn to_vec4(self) -> Vec4 {
        Vec4::from(self.to_normalized())
    }

    /// Health indicator color
    ///
    /// Interpolates from red at `fraction = 0` to green at `fraction = 1`
    /// via `(1 - fraction, fraction, 0)`.
    pub fn health_gradient(fraction: f32) -> Self {
        let fraction = utils::saturate(fraction);
        Self::from_normalized(1.0 - fraction, fraction, 0.0, 1.0)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}
