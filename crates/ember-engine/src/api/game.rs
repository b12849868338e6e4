use serde::{Deserialize, Serialize};

use crate::api::types::KeyCode;
use crate::assets::cache::AssetCache;
use crate::core::scene::Scene;
use crate::error::Result;
use crate::input::keyboard::KeyboardState;
use crate::renderer::camera::Projection;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window title, passed through to the host.
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Target frame period in milliseconds (default: 16).
    pub tick_ms: u64,
    /// Upper bound on a single frame's delta in milliseconds (default: 50).
    pub max_delta_ms: u64,
    pub clear_color: [f32; 4],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub sprite_shader: ShaderSource,
    /// Shader groups available to mesh components, keyed by name.
    pub mesh_shaders: Vec<MeshShaderConfig>,
    /// Key that stops the run loop. `None` leaves quitting to the host.
    pub quit_key: Option<KeyCode>,
}

/// Vertex/fragment path pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderSource {
    pub vert: String,
    pub frag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshShaderConfig {
    /// Group key mesh components refer to.
    pub name: String,
    pub vert: String,
    pub frag: String,
    /// Whether the group receives camera and light uniforms.
    #[serde(default)]
    pub lit: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "ember".to_owned(),
            window_width: 1024,
            window_height: 768,
            tick_ms: 16,
            max_delta_ms: 50,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            fov_degrees: 70.0,
            near: 25.0,
            far: 10000.0,
            sprite_shader: ShaderSource {
                vert: "Shaders/Sprite.vert".to_owned(),
                frag: "Shaders/Sprite.frag".to_owned(),
            },
            mesh_shaders: vec![
                MeshShaderConfig {
                    name: "Phong".to_owned(),
                    vert: "Shaders/Phong.vert".to_owned(),
                    frag: "Shaders/Phong.frag".to_owned(),
                    lit: true,
                },
                MeshShaderConfig {
                    name: "BasicMesh".to_owned(),
                    vert: "Shaders/BasicMesh.vert".to_owned(),
                    frag: "Shaders/BasicMesh.frag".to_owned(),
                    lit: false,
                },
            ],
            quit_key: Some(KeyCode::ESCAPE),
        }
    }
}

impl EngineConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn projection(&self) -> Projection {
        Projection::new(
            self.window_width as f32,
            self.window_height as f32,
            self.fov_degrees.to_radians(),
            self.near,
            self.far,
        )
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
    }

    /// Spawn the initial actors and request assets. Runs after the renderer
    /// has loaded its shaders.
    fn load(&mut self, scene: &mut Scene, assets: &mut AssetCache) -> Result<()>;

    /// Per-frame hook, run after the actors update and before pending
    /// actors are promoted. Spawns and destroys here are deferred.
    fn update(&mut self, _scene: &mut Scene, _keys: &KeyboardState, _dt: f32) {}
}
