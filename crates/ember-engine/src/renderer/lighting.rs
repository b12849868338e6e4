//! Scene lighting for Phong-lit mesh shaders.
//!
//! A single directional light plus an ambient term. Pushed to every lit
//! shader group once per frame before its meshes draw.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::renderer::traits::{GraphicsBackend, Uniform};

/// Directional light.
///
/// Layout matches the `DirectionalLight` uniform block (3 x vec3, 36 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, diffuse_color: Vec3, specular_color: Vec3) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            diffuse_color,
            specular_color,
        }
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(
            Vec3::new(0.0, -0.707, -0.707),
            Vec3::new(0.78, 0.88, 1.0),
            Vec3::new(0.8, 0.8, 0.8),
        )
    }
}

/// Ambient plus directional light for the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: Vec3,
    pub directional: DirectionalLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.2),
            directional: DirectionalLight::default(),
        }
    }
}

impl Lighting {
    /// Set the ambient light color.
    pub fn set_ambient(&mut self, ambient: Vec3) {
        self.ambient = ambient;
    }

    /// Push light uniforms to the active shader.
    pub fn apply(&self, backend: &mut dyn GraphicsBackend, camera_pos: Vec3) {
        backend.set_uniform("uCameraPos", Uniform::Vec3(camera_pos));
        backend.set_uniform("uAmbientLight", Uniform::Vec3(self.ambient));
        backend.set_uniform("uDirLight.mDirection", Uniform::Vec3(self.directional.direction));
        backend.set_uniform("uDirLight.mDiffuseColor", Uniform::Vec3(self.directional.diffuse_color));
        backend.set_uniform("uDirLight.mSpecColor", Uniform::Vec3(self.directional.specular_color));
    }
}
