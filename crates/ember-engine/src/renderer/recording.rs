//! Headless backend that records every call.
//!
//! Used by the demo host when no window is available and by tests to assert
//! on submission order.

use std::collections::HashSet;

use crate::error::{EngineError, Result};
use crate::renderer::traits::{
    BlendMode, GraphicsBackend, Primitive, ShaderId, TextureId, Uniform, VertexArrayId,
};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    LoadShader { vert: String, frag: String, id: ShaderId },
    UnloadShader(ShaderId),
    CreateVertexArray { id: VertexArrayId, vertex_bytes: usize, index_count: usize },
    DestroyVertexArray(VertexArrayId),
    Clear([f32; 4]),
    DepthTest(bool),
    Blend(BlendMode),
    Activate(ShaderId),
    SetUniform { name: String, value: Uniform },
    BindTexture(TextureId),
    BindVertexArray(VertexArrayId),
    DrawIndexed { primitive: Primitive, index_count: u32 },
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
    next_id: u32,
    failing_shaders: HashSet<String>,
    failing_textures: HashSet<TextureId>,
    bound_texture: Option<TextureId>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `load_shader` fail for this vertex shader path.
    pub fn fail_shader(mut self, vert_path: impl Into<String>) -> Self {
        self.failing_shaders.insert(vert_path.into());
        self
    }

    /// Make draws fail while this texture is bound.
    pub fn fail_draws_with(mut self, texture: TextureId) -> Self {
        self.failing_textures.insert(texture);
        self
    }

    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Forget recorded calls, keeping configuration.
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn draw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, BackendCall::DrawIndexed { .. }))
            .count()
    }

    /// Textures bound immediately before each draw, in order.
    pub fn drawn_textures(&self) -> Vec<TextureId> {
        let mut bound = None;
        let mut out = Vec::new();
        for call in &self.calls {
            match call {
                BackendCall::BindTexture(t) => bound = Some(*t),
                BackendCall::DrawIndexed { .. } => {
                    if let Some(t) = bound {
                        out.push(t);
                    }
                }
                _ => {}
            }
        }
        out
    }

    fn next(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

impl GraphicsBackend for RecordingBackend {
    fn backend(&self) -> &'static str {
        "headless"
    }

    fn load_shader(&mut self, vert_path: &str, frag_path: &str) -> Result<ShaderId> {
        if self.failing_shaders.contains(vert_path) {
            return Err(EngineError::Shader(format!("failed to compile {vert_path}")));
        }
        let id = ShaderId(self.next());
        self.calls.push(BackendCall::LoadShader {
            vert: vert_path.to_owned(),
            frag: frag_path.to_owned(),
            id,
        });
        Ok(id)
    }

    fn unload_shader(&mut self, shader: ShaderId) {
        self.calls.push(BackendCall::UnloadShader(shader));
    }

    fn create_vertex_array(&mut self, vertices: &[u8], _stride: usize, indices: &[u32]) -> Result<VertexArrayId> {
        let id = VertexArrayId(self.next());
        self.calls.push(BackendCall::CreateVertexArray {
            id,
            vertex_bytes: vertices.len(),
            index_count: indices.len(),
        });
        Ok(id)
    }

    fn destroy_vertex_array(&mut self, vertex_array: VertexArrayId) {
        self.calls.push(BackendCall::DestroyVertexArray(vertex_array));
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.calls.push(BackendCall::Clear(color));
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.calls.push(BackendCall::DepthTest(enabled));
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.calls.push(BackendCall::Blend(mode));
    }

    fn activate(&mut self, shader: ShaderId) {
        self.calls.push(BackendCall::Activate(shader));
    }

    fn set_uniform(&mut self, name: &str, value: Uniform) {
        self.calls.push(BackendCall::SetUniform {
            name: name.to_owned(),
            value,
        });
    }

    fn bind_texture(&mut self, texture: TextureId) {
        self.bound_texture = Some(texture);
        self.calls.push(BackendCall::BindTexture(texture));
    }

    fn bind_vertex_array(&mut self, vertex_array: VertexArrayId) {
        self.calls.push(BackendCall::BindVertexArray(vertex_array));
    }

    fn draw_indexed(&mut self, primitive: Primitive, index_count: u32) -> Result<()> {
        if let Some(t) = self.bound_texture {
            if self.failing_textures.contains(&t) {
                return Err(EngineError::Backend(format!("draw failed with texture {}", t.0)));
            }
        }
        self.calls.push(BackendCall::DrawIndexed { primitive, index_count });
        Ok(())
    }

    fn present(&mut self) {
        self.calls.push(BackendCall::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut backend = RecordingBackend::new();
        backend.clear([0.0; 4]);
        backend.bind_texture(TextureId(3));
        backend.draw_indexed(Primitive::Triangles, 6).unwrap();
        backend.present();
        assert_eq!(backend.calls().len(), 4);
        assert_eq!(backend.draw_count(), 1);
        assert_eq!(backend.drawn_textures(), vec![TextureId(3)]);
        assert_eq!(backend.calls().last(), Some(&BackendCall::Present));
    }

    #[test]
    fn failing_shader_returns_error() {
        let mut backend = RecordingBackend::new().fail_shader("bad.vert");
        assert!(backend.load_shader("bad.vert", "bad.frag").is_err());
        assert!(backend.load_shader("ok.vert", "ok.frag").is_ok());
    }

    #[test]
    fn failing_texture_fails_draw_without_recording() {
        let mut backend = RecordingBackend::new().fail_draws_with(TextureId(9));
        backend.bind_texture(TextureId(9));
        assert!(backend.draw_indexed(Primitive::Triangles, 6).is_err());
        assert_eq!(backend.draw_count(), 0);
    }
}
