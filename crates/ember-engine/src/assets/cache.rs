use std::collections::HashMap;
use std::rc::Rc;

use crate::assets::types::{AssetLoader, Mesh, Texture};

/// Path-keyed cache in front of an [`AssetLoader`].
/// Repeat requests return the cached handle; failures are logged and yield
/// `None` so callers can carry on with nothing to draw.
pub struct AssetCache {
    loader: Box<dyn AssetLoader>,
    textures: HashMap<String, Texture>,
    meshes: HashMap<String, Rc<Mesh>>,
}

impl AssetCache {
    pub fn new(loader: impl AssetLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            textures: HashMap::new(),
            meshes: HashMap::new(),
        }
    }

    pub fn texture(&mut self, path: &str) -> Option<Texture> {
        if let Some(texture) = self.textures.get(path) {
            return Some(*texture);
        }
        match self.loader.load_texture(path) {
            Ok(texture) => {
                log::debug!("loaded texture {} ({}x{})", path, texture.width, texture.height);
                self.textures.insert(path.to_owned(), texture);
                Some(texture)
            }
            Err(err) => {
                log::warn!("failed to load texture {}: {}", path, err);
                None
            }
        }
    }

    pub fn mesh(&mut self, path: &str) -> Option<Rc<Mesh>> {
        if let Some(mesh) = self.meshes.get(path) {
            return Some(Rc::clone(mesh));
        }
        let data = match self.loader.load_mesh(path) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("failed to load mesh {}: {}", path, err);
                return None;
            }
        };
        // Missing textures keep their slot so later indices stay put.
        let textures = data
            .texture_paths
            .iter()
            .map(|tex| self.texture(tex))
            .collect();
        let mesh = Rc::new(Mesh {
            shader_name: data.shader_name,
            radius: data.radius,
            spec_power: data.spec_power,
            textures,
            vertex_array: data.vertex_array,
            index_count: data.index_count,
        });
        log::debug!("loaded mesh {} ({} indices)", path, mesh.index_count);
        self.meshes.insert(path.to_owned(), Rc::clone(&mesh));
        Some(mesh)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Release every cached asset through the loader.
    pub fn unload(&mut self) {
        for (_, mesh) in self.meshes.drain() {
            self.loader.release_mesh(&mesh);
        }
        for (_, texture) in self.textures.drain() {
            self.loader.release_texture(texture);
        }
    }
}
