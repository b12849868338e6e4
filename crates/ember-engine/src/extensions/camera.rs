// extensions/camera.rs
//
// First-person camera rig. The owning actor needs a MoveComponent; the rig
// drives its speeds from the keyboard and publishes a look-at view matrix
// from the actor's transform after every update.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::api::types::ActorId;
use crate::components::input::KeyBindings;
use crate::components::motion::MoveComponent;
use crate::core::actor::ActorBehavior;
use crate::core::scene::Scene;
use crate::input::keyboard::KeyboardState;
use crate::renderer::camera::look_at;

/// Distance along forward to the look-at target.
pub const LOOK_DISTANCE: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct CameraRig {
    pub bindings: KeyBindings,
    pub forward_speed: f32,
    pub angular_speed: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::wasd(),
            forward_speed: 300.0,
            angular_speed: TAU,
        }
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActorBehavior for CameraRig {
    fn update_actor(&mut self, id: ActorId, scene: &mut Scene, _dt: f32) {
        let Some(actor) = scene.get(id) else { return };
        let eye = actor.position();
        let target = eye + actor.forward() * LOOK_DISTANCE;
        scene.set_view_matrix(look_at(eye, target, Vec3::Z));
    }

    fn process_actor_input(&mut self, id: ActorId, scene: &mut Scene, keys: &KeyboardState) {
        let mut forward = 0.0;
        if keys.is_down(self.bindings.forward) {
            forward += self.forward_speed;
        }
        if keys.is_down(self.bindings.back) {
            forward -= self.forward_speed;
        }

        // Turning left is negative about +Z for the rig.
        let mut angular = 0.0;
        if keys.is_down(self.bindings.clockwise) {
            angular -= self.angular_speed;
        }
        if keys.is_down(self.bindings.counter_clockwise) {
            angular += self.angular_speed;
        }

        match scene.component_mut::<MoveComponent>(id) {
            Some(motion) => {
                motion.forward_speed = forward;
                motion.angular_speed = angular;
            }
            None => log::debug!("camera {:?} has no MoveComponent", id),
        }
    }
}
