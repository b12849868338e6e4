use std::rc::Rc;

use crate::assets::types::Mesh;
use crate::core::component::Component;
use crate::error::Result;
use crate::renderer::draw_lists::DrawSlot;
use crate::renderer::traits::{DrawContext, Drawable, Primitive, Uniform};

/// Shader group used when no mesh is supplied.
pub const DEFAULT_MESH_SHADER: &str = "Phong";

/// Draws a loaded mesh in the mesh pass.
///
/// The shader group is taken from the mesh when the component is built and
/// stays fixed afterwards; `set_mesh` does not move the component to another
/// group.
#[derive(Debug, Clone)]
pub struct MeshComponent {
    mesh: Option<Rc<Mesh>>,
    texture_index: usize,
    shader: String,
}

impl MeshComponent {
    pub fn new(mesh: Option<Rc<Mesh>>) -> Self {
        let shader = mesh
            .as_ref()
            .map(|m| m.shader_name.clone())
            .unwrap_or_else(|| DEFAULT_MESH_SHADER.to_owned());
        Self {
            mesh,
            texture_index: 0,
            shader,
        }
    }

    /// Draw with an explicit shader group instead of the mesh's own.
    pub fn with_shader(mut self, shader: impl Into<String>) -> Self {
        self.shader = shader.into();
        self
    }

    pub fn with_texture_index(mut self, index: usize) -> Self {
        self.texture_index = index;
        self
    }

    pub fn set_mesh(&mut self, mesh: Rc<Mesh>) {
        self.mesh = Some(mesh);
    }

    pub fn set_texture_index(&mut self, index: usize) {
        self.texture_index = index;
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_deref()
    }

    pub fn shader(&self) -> &str {
        &self.shader
    }
}

impl Drawable for MeshComponent {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<()> {
        let Some(mesh) = self.mesh.as_deref() else {
            return Ok(());
        };
        ctx.backend.set_uniform("uWorldTransform", Uniform::Mat4(*ctx.world));
        ctx.backend.set_uniform("uSpecPower", Uniform::Float(mesh.spec_power));
        if let Some(texture) = mesh.texture(self.texture_index) {
            ctx.backend.bind_texture(texture.id);
        }
        ctx.backend.bind_vertex_array(mesh.vertex_array);
        ctx.backend.draw_indexed(Primitive::Triangles, mesh.index_count)
    }
}

impl Component for MeshComponent {
    fn draw_slot(&self) -> Option<DrawSlot> {
        Some(DrawSlot::Mesh {
            shader: self.shader.clone(),
        })
    }

    fn as_drawable(&self) -> Option<&dyn Drawable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::types::Texture;
    use crate::renderer::recording::{BackendCall, RecordingBackend};
    use crate::renderer::traits::{TextureId, VertexArrayId};
    use glam::Mat4;

    fn cube() -> Rc<Mesh> {
        Rc::new(Mesh {
            shader_name: "BasicMesh".to_owned(),
            radius: 1.0,
            spec_power: 100.0,
            textures: vec![Some(Texture {
                id: TextureId(2),
                width: 8,
                height: 8,
            })],
            vertex_array: VertexArrayId(5),
            index_count: 36,
        })
    }

    #[test]
    fn group_comes_from_mesh() {
        assert_eq!(MeshComponent::new(Some(cube())).shader(), "BasicMesh");
        assert_eq!(MeshComponent::new(None).shader(), DEFAULT_MESH_SHADER);
        let overridden = MeshComponent::new(Some(cube())).with_shader("Phong");
        assert_eq!(overridden.draw_slot(), Some(DrawSlot::Mesh { shader: "Phong".to_owned() }));
    }

    #[test]
    fn draw_pushes_world_and_spec_power() {
        let mesh = MeshComponent::new(Some(cube()));
        let world = Mat4::from_scale(glam::Vec3::splat(50.0));
        let mut backend = RecordingBackend::new();
        let mut ctx = DrawContext {
            backend: &mut backend,
            world: &world,
        };
        mesh.draw(&mut ctx).unwrap();
        assert_eq!(
            backend.calls(),
            &[
                BackendCall::SetUniform {
                    name: "uWorldTransform".to_owned(),
                    value: Uniform::Mat4(world),
                },
                BackendCall::SetUniform {
                    name: "uSpecPower".to_owned(),
                    value: Uniform::Float(100.0),
                },
                BackendCall::BindTexture(TextureId(2)),
                BackendCall::BindVertexArray(VertexArrayId(5)),
                BackendCall::DrawIndexed {
                    primitive: Primitive::Triangles,
                    index_count: 36,
                },
            ]
        );
    }

    #[test]
    fn out_of_range_texture_skips_bind() {
        let mesh = MeshComponent::new(Some(cube())).with_texture_index(3);
        let world = Mat4::IDENTITY;
        let mut backend = RecordingBackend::new();
        let mut ctx = DrawContext {
            backend: &mut backend,
            world: &world,
        };
        mesh.draw(&mut ctx).unwrap();
        assert!(!backend.calls().iter().any(|c| matches!(c, BackendCall::BindTexture(_))));
        assert_eq!(backend.draw_count(), 1);
    }

    #[test]
    fn empty_mesh_component_draws_nothing() {
        let mesh = MeshComponent::new(None);
        let world = Mat4::IDENTITY;
        let mut backend = RecordingBackend::new();
        let mut ctx = DrawContext {
            backend: &mut backend,
            world: &world,
        };
        mesh.draw(&mut ctx).unwrap();
        assert!(backend.calls().is_empty());
    }
}
