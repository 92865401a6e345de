//! Screen-space rendering support: colors, projection and per-frame camera state

pub mod camera;
pub mod color;
pub mod frame;
pub mod projection;

pub use camera::Camera;
pub use color::Color;
pub use frame::{FrameContext, FALLBACK_DISTANCE};
pub use projection::{CameraRelativeBox, ScreenRect, Viewport};
