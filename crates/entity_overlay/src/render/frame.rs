//! Per-frame projection context

use crate::entity::AABB;
use crate::foundation::math::{DVec3, Mat4, Point2, Vec3};
use super::projection::{self, CameraRelativeBox, ScreenRect, Viewport};

/// Distance assumed for every entity when the viewer is unavailable
pub const FALLBACK_DISTANCE: f64 = 100.0;

/// Everything the overlay needs to know about the camera for one frame
///
/// Created fresh by the host each frame and read-only for its duration.
/// The view matrix is applied to camera-relative coordinates: the camera
/// position is subtracted in double precision first, which keeps projection
/// stable far away from the world origin.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameContext {
    /// Camera position in world space
    pub camera_position: DVec3,
    /// Position of the entity the camera is attached to, if any
    pub viewer_position: Option<DVec3>,
    /// View matrix (camera-relative world space to view space)
    pub view: Mat4,
    /// Projection matrix (view space to clip space)
    pub projection: Mat4,
    /// Progress between the previous and current simulation step, in `[0, 1]`
    pub tick_delta: f32,
    /// Viewport size in pixels
    pub viewport: Viewport,
}

impl FrameContext {
    /// Create a context with no viewer and `tick_delta = 1`
    pub fn new(camera_position: DVec3, view: Mat4, projection: Mat4, viewport: Viewport) -> Self {
        Self {
            camera_position,
            viewer_position: None,
            view,
            projection,
            tick_delta: 1.0,
            viewport,
        }
    }

    /// Set the viewer position used for distances
    pub fn with_viewer(mut self, viewer_position: DVec3) -> Self {
        self.viewer_position = Some(viewer_position);
        self
    }

    /// Set the interpolation factor
    pub fn with_tick_delta(mut self, tick_delta: f32) -> Self {
        self.tick_delta = tick_delta;
        self
    }

    /// Interpolation factor clamped to `[0, 1]`; NaN counts as 1
    pub fn interpolation(&self) -> f64 {
        if self.tick_delta.is_nan() {
            1.0
        } else {
            f64::from(self.tick_delta.clamp(0.0, 1.0))
        }
    }

    /// World position relative to the camera, narrowed to single precision
    pub fn relative(&self, world: DVec3) -> Vec3 {
        (world - self.camera_position).map(|v| v as f32)
    }

    /// Distance from the viewer to `world`
    ///
    /// Falls back to [`FALLBACK_DISTANCE`] when there is no viewer.
    pub fn distance_to(&self, world: DVec3) -> f64 {
        self.viewer_position
            .map_or(FALLBACK_DISTANCE, |viewer| (world - viewer).norm())
    }

    /// Project a world-space point onto the screen
    pub fn world_to_screen(&self, world: DVec3) -> Option<Point2> {
        projection::project_point(&self.relative(world), &self.view, &self.projection, self.viewport)
    }

    /// Project a world-space box onto the screen
    pub fn box_to_screen(&self, bounds: &AABB) -> Option<ScreenRect> {
        let relative = CameraRelativeBox::new(self.relative(bounds.min), self.relative(bounds.max));
        projection::project_box(&relative, &self.view, &self.projection, self.viewport)
    }
}
