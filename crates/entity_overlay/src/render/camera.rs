//! # Overlay Camera
//!
//! Convenience camera for hosts that do not already hand out view and
//! projection matrices. Produces a [`FrameContext`] per frame.
//!
//! The view matrix is built for camera-relative coordinates: the eye is
//! always at the origin, and the world position lives on the context in
//! double precision.

use crate::foundation::math::{DVec3, Mat4, Mat4Ext, Vec3, utils};
use super::frame::FrameContext;
use super::projection::Viewport;

/// Perspective camera with a world-space position and look-at target
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: DVec3,

    /// Point the camera is looking at in world space
    pub target: DVec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera looking down -Z
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: DVec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: position + DVec3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Move the camera, keeping its viewing direction
    pub fn set_position(&mut self, position: DVec3) {
        let offset = self.target - self.position;
        self.position = position;
        self.target = position + offset;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Point the camera at `target` with a custom up vector
    pub fn look_at(&mut self, target: DVec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Update the aspect ratio after a viewport resize
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::debug!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Unit viewing direction
    ///
    /// Falls back to -Z when the target coincides with the position.
    pub fn forward(&self) -> Vec3 {
        let direction = (self.target - self.position).map(|v| v as f32);
        direction.try_normalize(f32::EPSILON).unwrap_or_else(|| Vec3::new(0.0, 0.0, -1.0))
    }

    /// View matrix for camera-relative coordinates
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(Vec3::zeros(), self.forward(), self.up)
    }

    /// Perspective projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Frame context for this camera, with the viewer at the camera position
    pub fn frame_context(&self, viewport: Viewport, tick_delta: f32) -> FrameContext {
        FrameContext::new(self.position, self.view_matrix(), self.projection_matrix(), viewport)
            .with_viewer(self.position)
            .with_tick_delta(tick_delta)
    }
}
