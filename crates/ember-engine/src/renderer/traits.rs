//! Graphics backend contract.
//!
//! The engine never talks to a graphics API directly. Window/context
//! creation, buffer upload and shader compilation live behind this trait,
//! and every call is assumed to be synchronous and ordered.

use glam::{Mat4, Vec3};

use crate::error::Result;

/// Handle to a linked shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderId(pub u32);

/// Handle to an uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Handle to a vertex array (vertex + index buffers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayId(pub u32);

/// Uniform value pushed to the active shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Mat4(Mat4),
    Vec3(Vec3),
    Float(f32),
    Int(i32),
}

/// Primitive topology for indexed draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Primitive {
    #[default]
    Triangles,
    Lines,
}

/// Blend state for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Blending disabled (opaque geometry).
    #[default]
    Disabled,
    /// Standard alpha blending (src-alpha, one-minus-src-alpha).
    Alpha,
}

/// Backend for a native graphics API.
///
/// # Example Implementation
///
/// ```ignore
/// struct GlBackend {
///     window: sdl2::video::Window,
///     // ...
/// }
///
/// impl GraphicsBackend for GlBackend {
///     fn backend(&self) -> &'static str { "opengl" }
///
///     fn activate(&mut self, shader: ShaderId) {
///         unsafe { gl::UseProgram(shader.0) }
///     }
///     // ...
/// }
/// ```
pub trait GraphicsBackend {
    /// Backend identifier (e.g., "opengl", "vulkan", "headless")
    fn backend(&self) -> &'static str;

    /// Compile and link a vertex/fragment pair.
    fn load_shader(&mut self, vert_path: &str, frag_path: &str) -> Result<ShaderId>;

    fn unload_shader(&mut self, shader: ShaderId);

    /// Upload interleaved vertex bytes (`stride` bytes per vertex) and indices.
    fn create_vertex_array(&mut self, vertices: &[u8], stride: usize, indices: &[u32]) -> Result<VertexArrayId>;

    fn destroy_vertex_array(&mut self, vertex_array: VertexArrayId);

    fn clear(&mut self, color: [f32; 4]);

    fn set_depth_test(&mut self, enabled: bool);

    fn set_blend(&mut self, mode: BlendMode);

    fn activate(&mut self, shader: ShaderId);

    /// Set a uniform on the active shader.
    fn set_uniform(&mut self, name: &str, value: Uniform);

    fn bind_texture(&mut self, texture: TextureId);

    fn bind_vertex_array(&mut self, vertex_array: VertexArrayId);

    fn draw_indexed(&mut self, primitive: Primitive, index_count: u32) -> Result<()>;

    /// Swap buffers.
    fn present(&mut self);
}

/// Everything a drawable needs to issue its calls.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn GraphicsBackend,
    /// Owner's world transform.
    pub world: &'a Mat4,
}

/// Capability implemented by sprite and mesh components.
pub trait Drawable {
    /// Issue backend calls for one instance. Components holding no resource
    /// draw nothing and return `Ok`.
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_opaque_triangles() {
        assert_eq!(BlendMode::default(), BlendMode::Disabled);
        assert_eq!(Primitive::default(), Primitive::Triangles);
    }

    #[test]
    fn uniform_equality() {
        assert_eq!(Uniform::Float(1.5), Uniform::Float(1.5));
        assert_ne!(Uniform::Int(1), Uniform::Float(1.0));
    }
}
