use std::f32::consts::{PI, TAU};

use ember_engine::*;
use glam::{Quat, Vec3};

use crate::random::Random;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const NUM_ASTEROIDS: usize = 20;

/// Sprite asteroids around a player ship, plus a small lit 3D scene seen
/// through a WASD camera.
pub struct AsteroidsGame {
    rng: Random,
}

impl AsteroidsGame {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Random::new(seed),
        }
    }

    fn spawn_ship(scene: &mut Scene, assets: &mut AssetCache) {
        let texture = assets.texture("Assets/Sprites/Ship.png");
        scene.spawn(
            Actor::new()
                .with_tag("ship")
                .with_component(SpriteComponent::with_draw_order(texture, 150))
                .with_component(
                    InputComponent::new(KeyBindings::wasd(), 150.0, 10.0)
                        .with_wrap(WrapBounds::screen(WIDTH as f32, HEIGHT as f32)),
                ),
        );
    }

    fn spawn_asteroid(&mut self, scene: &mut Scene, assets: &mut AssetCache) {
        let half = Vec3::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0, 0.0);
        let position = self.rng.vector(-half, half);
        let heading = self.rng.float_range(0.0, TAU);
        let speed = self.rng.float_range(50.0, 150.0);
        let texture = assets.texture("Assets/Sprites/Asteroid.png");
        scene.spawn(
            Actor::new()
                .with_tag("asteroid")
                .with_position(position)
                .with_rotation(Quat::from_rotation_z(heading))
                .with_component(SpriteComponent::new(texture))
                .with_component(
                    MoveComponent::new()
                        .with_forward_speed(speed)
                        .with_wrap(WrapBounds::screen(WIDTH as f32, HEIGHT as f32)),
                ),
        );
    }

    fn spawn_cube(&mut self, scene: &mut Scene, assets: &mut AssetCache) {
        let position = Vec3::new(
            self.rng.float_range(0.0, 50.0),
            self.rng.float_range(0.0, 10.0),
            self.rng.float_range(0.0, 10.0),
        );
        let rotation =
            Quat::from_rotation_z(PI + PI / 4.0) * Quat::from_rotation_y(-PI / 2.0);
        scene.spawn(
            Actor::new()
                .with_tag("cube")
                .with_position(position)
                .with_rotation(rotation)
                .with_uniform_scale(50.0)
                .with_component(MeshComponent::new(assets.mesh("Assets/Meshes/Cube.gpmesh"))),
        );
    }

    fn spawn_floor(scene: &mut Scene, assets: &mut AssetCache) {
        let plane = assets.mesh("Assets/Meshes/Plane.gpmesh");
        let start = -1250.0;
        let size = 250.0;
        for i in 0..10 {
            for j in 0..10 {
                let position = Vec3::new(start + i as f32 * size, start + j as f32 * size, -100.0);
                scene.spawn(
                    Actor::new()
                        .with_tag("floor")
                        .with_position(position)
                        .with_uniform_scale(10.0)
                        .with_component(MeshComponent::new(plane.clone())),
                );
            }
        }
    }

    fn spawn_sphere(scene: &mut Scene, assets: &mut AssetCache) {
        scene.spawn(
            Actor::new()
                .with_tag("sphere")
                .with_position(Vec3::new(200.0, -75.0, 0.0))
                .with_uniform_scale(3.0)
                .with_component(MeshComponent::new(assets.mesh("Assets/Sphere.gpmesh")))
                .with_component(InputComponent::new(KeyBindings::arrows(), 100.0, 5.0)),
        );
    }

    fn spawn_camera(scene: &mut Scene) {
        scene.spawn(
            Actor::new()
                .with_tag("camera")
                .with_position(Vec3::new(-300.0, 0.0, 50.0))
                .with_component(MoveComponent::new())
                .with_behavior(CameraRig::new()),
        );
    }
}

impl Game for AsteroidsGame {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            title: "Asteroids".to_owned(),
            window_width: WIDTH,
            window_height: HEIGHT,
            clear_color: [0.86, 0.86, 0.86, 1.0],
            ..EngineConfig::default()
        }
    }

    fn load(&mut self, scene: &mut Scene, assets: &mut AssetCache) -> Result<()> {
        Self::spawn_ship(scene, assets);
        for _ in 0..NUM_ASTEROIDS {
            self.spawn_asteroid(scene, assets);
        }
        self.spawn_cube(scene, assets);
        Self::spawn_floor(scene, assets);
        Self::spawn_sphere(scene, assets);
        Self::spawn_camera(scene);

        let lighting = scene.lighting_mut();
        lighting.set_ambient(Vec3::splat(0.2));
        lighting.directional = DirectionalLight::new(
            Vec3::new(0.0, -0.707, -0.707),
            Vec3::new(0.78, 0.88, 1.0),
            Vec3::new(0.8, 0.8, 0.8),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessLoader;

    #[test]
    fn load_spawns_the_whole_scene() {
        let mut game = AsteroidsGame::new(1);
        let mut scene = Scene::new();
        let mut assets = AssetCache::new(HeadlessLoader::new());
        game.load(&mut scene, &mut assets).unwrap();

        assert_eq!(scene.find_all_by_tag("asteroid").len(), NUM_ASTEROIDS);
        assert_eq!(scene.find_all_by_tag("floor").len(), 100);
        assert!(scene.find_by_tag("camera").is_some());
        // Ship plus asteroids in the sprite pass.
        assert_eq!(scene.draw_lists().sprite_count(), NUM_ASTEROIDS + 1);
        // Cube, floor tiles and the sphere.
        assert_eq!(scene.draw_lists().mesh_count(), 102);
        assert_eq!(assets.mesh_count(), 3);
    }

    #[test]
    fn asteroids_start_on_screen() {
        let mut game = AsteroidsGame::new(99);
        let mut scene = Scene::new();
        let mut assets = AssetCache::new(HeadlessLoader::new());
        game.load(&mut scene, &mut assets).unwrap();
        for id in scene.find_all_by_tag("asteroid") {
            let p = scene.get(id).unwrap().position();
            assert!(p.x.abs() <= 400.0 && p.y.abs() <= 300.0);
        }
    }
}
