//! Window-less host and loader so the demo runs anywhere.
//!
//! The host replays a fixed key script and quits after a set number of
//! frames. The loader hands out handles for a known asset table without
//! touching the filesystem.

use ember_engine::{
    AssetLoader, EngineError, Host, HostSignal, InputEvent, InputQueue, KeyCode, Mesh, MeshData,
    Result, Texture, TextureId, VertexArrayId,
};

pub struct ScriptedHost {
    frame: u32,
    max_frames: u32,
    script: Vec<(u32, InputEvent)>,
}

impl ScriptedHost {
    pub fn new(max_frames: u32) -> Self {
        let down = |key| InputEvent::KeyDown { key };
        let up = |key| InputEvent::KeyUp { key };
        Self {
            frame: 0,
            max_frames,
            script: vec![
                (10, down(KeyCode::W)),
                (70, down(KeyCode::A)),
                (90, up(KeyCode::A)),
                (100, up(KeyCode::W)),
                (110, down(KeyCode::UP)),
                (120, down(KeyCode::LEFT)),
                (150, up(KeyCode::LEFT)),
                (160, up(KeyCode::UP)),
            ],
        }
    }
}

impl Host for ScriptedHost {
    fn pump(&mut self, input: &mut InputQueue) -> HostSignal {
        if self.frame >= self.max_frames {
            return HostSignal::Quit;
        }
        for (_, event) in self.script.iter().filter(|(at, _)| *at == self.frame) {
            log::debug!("frame {}: {:?}", self.frame, event);
            input.push(*event);
        }
        self.frame += 1;
        HostSignal::Continue
    }
}

struct MeshEntry {
    path: &'static str,
    shader: &'static str,
    radius: f32,
    spec_power: f32,
    texture: &'static str,
    index_count: u32,
}

const TEXTURES: &[(&str, u32, u32)] = &[
    ("Assets/Sprites/Ship.png", 64, 64),
    ("Assets/Sprites/Asteroid.png", 72, 72),
    ("Assets/Cube.png", 256, 256),
    ("Assets/Plane.png", 512, 512),
    ("Assets/Sphere.png", 256, 128),
];

const MESHES: &[MeshEntry] = &[
    MeshEntry {
        path: "Assets/Meshes/Cube.gpmesh",
        shader: "Phong",
        radius: 0.866,
        spec_power: 100.0,
        texture: "Assets/Cube.png",
        index_count: 36,
    },
    MeshEntry {
        path: "Assets/Meshes/Plane.gpmesh",
        shader: "Phong",
        radius: 14.14,
        spec_power: 10.0,
        texture: "Assets/Plane.png",
        index_count: 6,
    },
    MeshEntry {
        path: "Assets/Sphere.gpmesh",
        shader: "BasicMesh",
        radius: 1.0,
        spec_power: 50.0,
        texture: "Assets/Sphere.png",
        index_count: 2880,
    },
];

#[derive(Default)]
pub struct HeadlessLoader {
    next_id: u32,
}

impl HeadlessLoader {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

fn not_found(path: &str) -> EngineError {
    EngineError::AssetLoad {
        path: path.to_owned(),
        reason: "not in the headless asset table".to_owned(),
    }
}

impl AssetLoader for HeadlessLoader {
    fn load_texture(&mut self, path: &str) -> Result<Texture> {
        let &(_, width, height) = TEXTURES
            .iter()
            .find(|(p, _, _)| *p == path)
            .ok_or_else(|| not_found(path))?;
        Ok(Texture {
            id: TextureId(self.next()),
            width,
            height,
        })
    }

    fn load_mesh(&mut self, path: &str) -> Result<MeshData> {
        let entry = MESHES
            .iter()
            .find(|m| m.path == path)
            .ok_or_else(|| not_found(path))?;
        Ok(MeshData {
            shader_name: entry.shader.to_owned(),
            radius: entry.radius,
            spec_power: entry.spec_power,
            texture_paths: vec![entry.texture.to_owned()],
            vertex_array: VertexArrayId(1000 + self.next()),
            index_count: entry.index_count,
        })
    }

    fn release_texture(&mut self, texture: Texture) {
        log::debug!("released texture {:?}", texture.id);
    }

    fn release_mesh(&mut self, mesh: &Mesh) {
        log::debug!("released mesh {:?}", mesh.vertex_array);
    }
}
