//! Asset handles produced by an [`AssetLoader`].
//!
//! File parsing and GPU upload belong to the loader; the engine only sees the
//! resulting handles and the metadata it needs for drawing.

use crate::error::Result;
use crate::renderer::traits::{TextureId, VertexArrayId};

/// An uploaded texture and its pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Loader output for a mesh, before its textures are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Shader group the mesh asks for.
    pub shader_name: String,
    /// Object-space bounding sphere radius.
    pub radius: f32,
    pub spec_power: f32,
    /// Texture paths, resolved through the cache so they are shared.
    pub texture_paths: Vec<String>,
    pub vertex_array: VertexArrayId,
    pub index_count: u32,
}

/// A loaded mesh with its textures resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub shader_name: String,
    pub radius: f32,
    pub spec_power: f32,
    /// One slot per texture path; `None` where the load failed.
    pub textures: Vec<Option<Texture>>,
    pub vertex_array: VertexArrayId,
    pub index_count: u32,
}

impl Mesh {
    pub fn texture(&self, index: usize) -> Option<&Texture> {
        self.textures.get(index)?.as_ref()
    }
}

/// Reads asset files and uploads them to the graphics backend.
pub trait AssetLoader {
    fn load_texture(&mut self, path: &str) -> Result<Texture>;

    fn load_mesh(&mut self, path: &str) -> Result<MeshData>;

    fn release_texture(&mut self, texture: Texture);

    fn release_mesh(&mut self, mesh: &Mesh);
}
