use glam::{Mat4, Vec3};

/// Projection matrices for the two passes.
///
/// The mesh pass uses a perspective projection over the screen size; the
/// sprite pass maps screen units straight to clip space with the origin at
/// the center of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(screen_width: f32, screen_height: f32, fov_y: f32, near: f32, far: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            fov_y,
            near,
            far,
        }
    }

    /// Perspective projection for 3D meshes.
    pub fn perspective(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.screen_width / self.screen_height, self.near, self.far)
    }

    /// Orthographic view-projection for sprites: one unit per pixel, origin
    /// at the window center, Y-up.
    pub fn sprite_view_proj(&self) -> Mat4 {
        Mat4::from_scale(Vec3::new(2.0 / self.screen_width, 2.0 / self.screen_height, 1.0))
    }
}

/// Look-at view matrix with the given up axis.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, up)
}

/// World-space camera position encoded in a view matrix.
pub fn camera_position(view: &Mat4) -> Vec3 {
    view.inverse().w_axis.truncate()
}
