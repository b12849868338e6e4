//! Two-pass draw submission.
//!
//! Pass order is fixed: opaque meshes with depth testing, grouped by shader,
//! then alpha-blended sprites in ascending draw order. A drawable that fails
//! is logged and skipped; the rest of the frame still draws.

use std::collections::HashMap;

use crate::api::game::EngineConfig;
use crate::core::scene::Scene;
use crate::error::{EngineError, Result};
use crate::renderer::camera::{camera_position, Projection};
use crate::renderer::draw_lists::MeshGroup;
use crate::renderer::quad::{Vertex, SPRITE_QUAD_INDICES, SPRITE_QUAD_VERTICES};
use crate::renderer::traits::{
    BlendMode, DrawContext, GraphicsBackend, ShaderId, Uniform, VertexArrayId,
};

/// Counters from one `draw` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub meshes_drawn: u32,
    pub sprites_drawn: u32,
    /// Drawables whose backend calls returned an error.
    pub failures: u32,
    /// Entries skipped because their shader or owner was missing.
    pub skipped: u32,
}

#[derive(Debug, Clone, Copy)]
struct MeshShader {
    id: ShaderId,
    lit: bool,
}

pub struct Renderer {
    projection: Projection,
    clear_color: [f32; 4],
    sprite_shader: Option<ShaderId>,
    sprite_verts: Option<VertexArrayId>,
    mesh_shaders: HashMap<String, MeshShader>,
}

impl Renderer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            projection: config.projection(),
            clear_color: config.clear_color,
            sprite_shader: None,
            sprite_verts: None,
            mesh_shaders: HashMap::new(),
        }
    }

    /// Load shaders and create the sprite quad.
    pub fn initialize(&mut self, backend: &mut dyn GraphicsBackend, config: &EngineConfig) -> Result<()> {
        let sprite = backend.load_shader(&config.sprite_shader.vert, &config.sprite_shader.frag)?;
        self.sprite_shader = Some(sprite);

        for shader in &config.mesh_shaders {
            let id = backend.load_shader(&shader.vert, &shader.frag)?;
            self.mesh_shaders.insert(shader.name.clone(), MeshShader { id, lit: shader.lit });
        }

        let vertices: &[u8] = bytemuck::cast_slice(&SPRITE_QUAD_VERTICES);
        let verts = backend.create_vertex_array(vertices, Vertex::STRIDE_BYTES, &SPRITE_QUAD_INDICES)?;
        self.sprite_verts = Some(verts);

        log::info!(
            "renderer initialized on {} ({} mesh shaders)",
            backend.backend(),
            self.mesh_shaders.len()
        );
        Ok(())
    }

    pub fn shutdown(&mut self, backend: &mut dyn GraphicsBackend) {
        if let Some(verts) = self.sprite_verts.take() {
            backend.destroy_vertex_array(verts);
        }
        if let Some(shader) = self.sprite_shader.take() {
            backend.unload_shader(shader);
        }
        for (_, shader) in self.mesh_shaders.drain() {
            backend.unload_shader(shader.id);
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn has_mesh_shader(&self, name: &str) -> bool {
        self.mesh_shaders.contains_key(name)
    }

    /// Draw one frame and present it.
    pub fn draw(&self, scene: &Scene, backend: &mut dyn GraphicsBackend) -> Result<FrameStats> {
        let (Some(sprite_shader), Some(sprite_verts)) = (self.sprite_shader, self.sprite_verts) else {
            return Err(EngineError::NotInitialized);
        };
        let mut stats = FrameStats::default();

        backend.clear(self.clear_color);

        // Mesh pass
        backend.set_depth_test(true);
        backend.set_blend(BlendMode::Disabled);
        let view_proj = self.projection.perspective() * *scene.view_matrix();
        for group in scene.draw_lists().mesh_groups() {
            self.draw_mesh_group(scene, group, view_proj, backend, &mut stats);
        }

        // Sprite pass
        backend.set_depth_test(false);
        backend.set_blend(BlendMode::Alpha);
        backend.activate(sprite_shader);
        backend.set_uniform("uViewProj", Uniform::Mat4(self.projection.sprite_view_proj()));
        backend.bind_vertex_array(sprite_verts);
        for target in scene.draw_lists().sprites() {
            match scene.drawable(target) {
                Some((world, drawable)) => {
                    let mut ctx = DrawContext { backend: &mut *backend, world };
                    match drawable.draw(&mut ctx) {
                        Ok(()) => stats.sprites_drawn += 1,
                        Err(err) => {
                            log::warn!("sprite {:?} failed to draw: {}", target, err);
                            stats.failures += 1;
                        }
                    }
                }
                None => stats.skipped += 1,
            }
        }

        backend.present();
        Ok(stats)
    }

    fn draw_mesh_group(
        &self,
        scene: &Scene,
        group: &MeshGroup,
        view_proj: glam::Mat4,
        backend: &mut dyn GraphicsBackend,
        stats: &mut FrameStats,
    ) {
        if group.is_empty() {
            return;
        }
        let Some(shader) = self.mesh_shaders.get(group.shader()) else {
            log::debug!("no shader '{}' loaded; skipping {} meshes", group.shader(), group.members().len());
            stats.skipped += group.members().len() as u32;
            return;
        };

        backend.activate(shader.id);
        backend.set_uniform("uViewProj", Uniform::Mat4(view_proj));
        if shader.lit {
            scene
                .lighting()
                .apply(backend, camera_position(scene.view_matrix()));
        }

        for &target in group.members() {
            let Some((world, drawable)) = scene.drawable(target) else {
                stats.skipped += 1;
                continue;
            };
            let mut ctx = DrawContext { backend: &mut *backend, world };
            match drawable.draw(&mut ctx) {
                Ok(()) => stats.meshes_drawn += 1,
                Err(err) => {
                    log::warn!("mesh {:?} failed to draw: {}", target, err);
                    stats.failures += 1;
                }
            }
        }
    }
}
