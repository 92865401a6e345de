//! World-to-screen projection
//!
//! Two projectors share the same clip-space transform but differ in what they
//! reject:
//!
//! - [`project_point`] rejects anything behind the camera *and* anything whose
//!   normalized device coordinates fall outside `[-1, 1]` on any axis.
//! - [`project_box`] rejects individual corners only when they are behind the
//!   camera. Corners that land outside the frustum laterally still contribute,
//!   so a box straddling the screen edge yields a rectangle that may extend
//!   past the viewport.
//!
//! Inputs are camera-relative: the camera position has already been
//! subtracted from the world coordinates.

use crate::foundation::math::{Mat4, Point2, Vec3, Vec4};

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given pixel size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the viewport in pixels
    pub fn center(&self) -> Point2 {
        Point2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Map normalized device coordinates to pixels
    ///
    /// Screen Y grows downward while NDC Y grows upward, so Y is flipped.
    pub fn ndc_to_screen(&self, ndc_x: f32, ndc_y: f32) -> Point2 {
        Point2::new(
            (ndc_x + 1.0) * 0.5 * self.width,
            (1.0 - (ndc_y + 1.0) * 0.5) * self.height,
        )
    }
}

/// Axis-aligned rectangle in screen space (pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner
    pub min: Point2,
    /// Bottom-right corner
    pub max: Point2,
}

impl ScreenRect {
    /// Create a rectangle from its corners
    pub const fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from a center point and a size
    pub fn from_center_size(center: Point2, width: f32, height: f32) -> Self {
        let half_width = width * 0.5;
        let half_height = height * 0.5;
        Self {
            min: Point2::new(center.x - half_width, center.y - half_height),
            max: Point2::new(center.x + half_width, center.y + half_height),
        }
    }

    /// Horizontal extent
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Vertical extent
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point
    pub fn center(&self) -> Point2 {
        Point2::new(
            self.min.x + self.width() * 0.5,
            self.min.y + self.height() * 0.5,
        )
    }

    /// Grow the rectangle to include `point`
    fn include(&mut self, point: Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}

/// Axis-aligned box with the camera position already subtracted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRelativeBox {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl CameraRelativeBox {
    /// Create a box from its corners
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The eight corners of the box
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

/// Transform a camera-relative point to clip space
pub fn to_clip(relative: &Vec3, view: &Mat4, projection: &Mat4) -> Vec4 {
    projection * (view * relative.push(1.0))
}

/// Project a camera-relative point onto the screen
///
/// Returns `None` when the point is on or behind the camera plane (`w <= 0`)
/// or when any normalized device coordinate falls outside `[-1, 1]`.
pub fn project_point(
    relative: &Vec3,
    view: &Mat4,
    projection: &Mat4,
    viewport: Viewport,
) -> Option<Point2> {
    let clip = to_clip(relative, view, projection);

    // Also guards the perspective divide against zero and negative w
    if clip.w <= 0.0 {
        return None;
    }

    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    let ndc_z = clip.z / clip.w;

    let visible = |v: f32| (-1.0..=1.0).contains(&v);
    if !(visible(ndc_x) && visible(ndc_y) && visible(ndc_z)) {
        return None;
    }

    Some(viewport.ndc_to_screen(ndc_x, ndc_y))
}

/// Project a camera-relative box onto the screen
///
/// Corners behind the camera are skipped; every other corner contributes to
/// the running min/max, even when it lies outside the viewport. Returns `None`
/// only when all eight corners are behind the camera.
pub fn project_box(
    bounds: &CameraRelativeBox,
    view: &Mat4,
    projection: &Mat4,
    viewport: Viewport,
) -> Option<ScreenRect> {
    let mut rect: Option<ScreenRect> = None;

    for corner in bounds.corners() {
        let clip = to_clip(&corner, view, projection);
        if clip.w <= 0.0 {
            continue;
        }

        let screen = viewport.ndc_to_screen(clip.x / clip.w, clip.y / clip.w);
        match rect.as_mut() {
            Some(rect) => rect.include(screen),
            None => rect = Some(ScreenRect::new(screen, screen)),
        }
    }

    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Mat4Ext, utils};
    use approx::assert_relative_eq;

    const VIEWPORT: Viewport = Viewport::new(1920.0, 1080.0);

    /// Camera at the origin looking down -Z
    fn camera() -> (Mat4, Mat4) {
        let view = Mat4::look_at(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, 0.0));
        let projection = Mat4::perspective(utils::deg_to_rad(70.0), 1920.0 / 1080.0, 0.05, 500.0);
        (view, projection)
    }

    #[test]
    fn test_point_in_front_projects_to_center() {
        let (view, projection) = camera();
        let screen = project_point(&Vec3::new(0.0, 0.0, -3.0), &view, &projection, VIEWPORT)
            .expect("point straight ahead should be visible");

        assert_relative_eq!(screen.x, 960.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 540.0, epsilon = 1e-3);
    }

    #[test]
    fn test_point_behind_camera_is_absent() {
        let (view, projection) = camera();
        assert!(project_point(&Vec3::new(0.0, 0.0, 3.0), &view, &projection, VIEWPORT).is_none());
        assert!(project_point(&Vec3::new(1.0, -2.0, 0.0), &view, &projection, VIEWPORT).is_none());
    }

    #[test]
    fn test_zero_w_is_rejected_without_dividing() {
        // Identity matrices leave w = 1; force w = 0 through a degenerate projection
        let view = Mat4::identity();
        let mut projection = Mat4::identity();
        projection[(3, 3)] = 0.0;

        assert!(project_point(&Vec3::new(0.0, 0.0, 0.0), &view, &projection, VIEWPORT).is_none());
    }

    #[test]
    fn test_point_outside_frustum_is_absent() {
        let (view, projection) = camera();
        // Far off to the side
        assert!(project_point(&Vec3::new(100.0, 0.0, -1.0), &view, &projection, VIEWPORT).is_none());
        // Beyond the far plane
        assert!(project_point(&Vec3::new(0.0, 0.0, -1000.0), &view, &projection, VIEWPORT).is_none());
    }

    #[test]
    fn test_visible_points_land_inside_viewport() {
        let (view, projection) = camera();
        for x in -4..=4 {
            for y in -3..=3 {
                for z in [2.0_f32, 10.0, 50.0] {
                    let point = Vec3::new(x as f32 * 0.4, y as f32 * 0.3, -z);
                    if let Some(screen) = project_point(&point, &view, &projection, VIEWPORT) {
                        assert!((0.0..=VIEWPORT.width).contains(&screen.x));
                        assert!((0.0..=VIEWPORT.height).contains(&screen.y));
                    }
                }
            }
        }
    }

    #[test]
    fn test_screen_y_grows_downward() {
        let (view, projection) = camera();
        let above = project_point(&Vec3::new(0.0, 1.0, -5.0), &view, &projection, VIEWPORT).unwrap();
        let below = project_point(&Vec3::new(0.0, -1.0, -5.0), &view, &projection, VIEWPORT).unwrap();
        assert!(above.y < below.y);
    }

    #[test]
    fn test_box_in_front_has_ordered_bounds() {
        let (view, projection) = camera();
        let bounds = CameraRelativeBox::new(Vec3::new(-0.3, -0.9, -6.3), Vec3::new(0.3, 0.9, -5.7));
        let rect = project_box(&bounds, &view, &projection, VIEWPORT).expect("box ahead is visible");

        assert!(rect.min.x <= rect.max.x);
        assert!(rect.min.y <= rect.max.y);
        assert_relative_eq!(rect.center().x, 960.0, epsilon = 1e-2);
        assert_relative_eq!(rect.center().y, 540.0, epsilon = 1e-2);
    }

    #[test]
    fn test_box_fully_behind_camera_is_absent() {
        let (view, projection) = camera();
        let bounds = CameraRelativeBox::new(Vec3::new(-1.0, -1.0, 2.0), Vec3::new(1.0, 1.0, 4.0));
        assert!(project_box(&bounds, &view, &projection, VIEWPORT).is_none());
    }

    #[test]
    fn test_box_straddling_camera_uses_only_front_corners() {
        let (view, projection) = camera();
        let bounds = CameraRelativeBox::new(Vec3::new(-1.0, -1.0, -4.0), Vec3::new(1.0, 1.0, 4.0));
        let rect = project_box(&bounds, &view, &projection, VIEWPORT).expect("front half is visible");

        // Only the z = -4 face is in front of the camera
        let mut expected: Option<ScreenRect> = None;
        for corner in bounds.corners().iter().filter(|c| c.z < 0.0) {
            let clip = to_clip(corner, &view, &projection);
            let screen = VIEWPORT.ndc_to_screen(clip.x / clip.w, clip.y / clip.w);
            match expected.as_mut() {
                Some(r) => r.include(screen),
                None => expected = Some(ScreenRect::new(screen, screen)),
            }
        }
        let expected = expected.unwrap();

        assert_relative_eq!(rect.min.x, expected.min.x, epsilon = 1e-3);
        assert_relative_eq!(rect.min.y, expected.min.y, epsilon = 1e-3);
        assert_relative_eq!(rect.max.x, expected.max.x, epsilon = 1e-3);
        assert_relative_eq!(rect.max.y, expected.max.y, epsilon = 1e-3);
    }

    #[test]
    fn test_box_may_extend_past_viewport() {
        let (view, projection) = camera();
        // Wide box close to the camera: lateral corners are far outside the frustum
        let bounds = CameraRelativeBox::new(Vec3::new(-20.0, -0.5, -2.0), Vec3::new(20.0, 0.5, -1.0));
        let rect = project_box(&bounds, &view, &projection, VIEWPORT).unwrap();

        assert!(rect.min.x < 0.0);
        assert!(rect.max.x > VIEWPORT.width);
    }

    #[test]
    fn test_rect_from_center_size() {
        let rect = ScreenRect::from_center_size(Point2::new(100.0, 50.0), 30.0, 10.0);
        assert_eq!(rect.min, Point2::new(85.0, 45.0));
        assert_eq!(rect.max, Point2::new(115.0, 55.0));
        assert_eq!(rect.width(), 30.0);
        assert_eq!(rect.height(), 10.0);
    }
}
