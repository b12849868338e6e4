// core/transform.rs
//
// Local transform with a lazily rebuilt world matrix.
// Setters only mark the cache stale; `recompute` rebuilds it on demand.

use glam::{Mat4, Quat, Vec3};

/// Position, rotation and scale of an actor plus its cached world matrix.
#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    world: Mat4,
    dirty: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            world: Mat4::IDENTITY,
            dirty: true,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.dirty = true;
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.dirty = true;
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.dirty = true;
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.set_scale(Vec3::splat(scale));
    }

    /// Unit vector the actor faces. Forward is +X in local space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Concatenate an incremental rotation of `angle` radians about +Z.
    pub fn rotate_about_up(&mut self, angle: f32) {
        let inc = Quat::from_axis_angle(Vec3::Z, angle);
        self.set_rotation((inc * self.rotation).normalize());
    }

    /// Move along the current forward vector.
    pub fn translate_forward(&mut self, distance: f32) {
        let pos = self.position + self.forward() * distance;
        self.set_position(pos);
    }

    /// Whether the cached world matrix is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuild the world matrix if stale. Returns true when a rebuild happened.
    ///
    /// Scale is applied first, then rotation, then translation (`T * R * S`
    /// for glam's column vectors).
    pub fn recompute(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.world = Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position);
        self.dirty = false;
        true
    }

    /// Cached world matrix. May be stale until `recompute` runs.
    pub fn world(&self) -> &Mat4 {
        &self.world
    }
}
