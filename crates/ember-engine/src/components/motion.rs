//! Forward/angular motion.
//!
//! Rotation is about +Z (up) and translation follows the owner's forward
//! vector (+X rotated by the current orientation).

use glam::Vec3;

use crate::core::component::{Component, ComponentContext};

/// Update order for motion so it runs before drawables read the transform.
pub const MOTION_UPDATE_ORDER: i32 = 10;

/// Speeds with a magnitude below this are treated as zero.
pub const EPSILON: f32 = 0.001;

pub fn near_zero(value: f32) -> bool {
    value.abs() <= EPSILON
}

/// Axis-aligned bounds; a coordinate that leaves one side re-enters from the
/// opposite side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl WrapBounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Bounds covering a screen centered on the origin, unbounded in Z.
    pub fn screen(width: f32, height: f32) -> Self {
        Self {
            min: Vec3::new(-width / 2.0, -height / 2.0, f32::NEG_INFINITY),
            max: Vec3::new(width / 2.0, height / 2.0, f32::INFINITY),
        }
    }

    pub fn wrap(&self, position: Vec3) -> Vec3 {
        let axis = |v: f32, lo: f32, hi: f32| {
            if v > hi {
                lo
            } else if v < lo {
                hi
            } else {
                v
            }
        };
        Vec3::new(
            axis(position.x, self.min.x, self.max.x),
            axis(position.y, self.min.y, self.max.y),
            axis(position.z, self.min.z, self.max.z),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoveComponent {
    /// Units per second along forward.
    pub forward_speed: f32,
    /// Radians per second about +Z.
    pub angular_speed: f32,
    pub wrap: Option<WrapBounds>,
}

impl MoveComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forward_speed(mut self, speed: f32) -> Self {
        self.forward_speed = speed;
        self
    }

    pub fn with_angular_speed(mut self, speed: f32) -> Self {
        self.angular_speed = speed;
        self
    }

    pub fn with_wrap(mut self, bounds: WrapBounds) -> Self {
        self.wrap = Some(bounds);
        self
    }

    /// Advance the owner's transform by one step.
    pub fn apply(&self, ctx: &mut ComponentContext<'_>, dt: f32) {
        if !near_zero(self.angular_speed) {
            ctx.transform.rotate_about_up(self.angular_speed * dt);
        }
        if !near_zero(self.forward_speed) {
            ctx.transform.translate_forward(self.forward_speed * dt);
            if let Some(bounds) = &self.wrap {
                let wrapped = bounds.wrap(ctx.transform.position());
                if wrapped != ctx.transform.position() {
                    ctx.transform.set_position(wrapped);
                }
            }
        }
    }
}

impl Component for MoveComponent {
    fn update_order(&self) -> i32 {
        MOTION_UPDATE_ORDER
    }

    fn update(&mut self, ctx: &mut ComponentContext<'_>, dt: f32) {
        self.apply(ctx, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ActorId;
    use crate::core::actor::ActorState;
    use crate::core::transform::Transform;
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    fn step(motion: &mut MoveComponent, transform: &mut Transform, dt: f32) {
        let mut state = ActorState::Active;
        let mut ctx = ComponentContext {
            owner: ActorId::default(),
            transform,
            state: &mut state,
        };
        motion.update(&mut ctx, dt);
    }

    #[test]
    fn forward_motion_moves_along_x() {
        let mut transform = Transform::new();
        let mut motion = MoveComponent::new().with_forward_speed(100.0);
        step(&mut motion, &mut transform, 1.0);
        assert!(transform.position().abs_diff_eq(Vec3::new(100.0, 0.0, 0.0), 1e-4));
        assert_eq!(transform.rotation(), Quat::IDENTITY);
    }

    #[test]
    fn angular_motion_turns_about_z() {
        let mut transform = Transform::new();
        let mut motion = MoveComponent::new().with_angular_speed(FRAC_PI_2);
        step(&mut motion, &mut transform, 1.0);
        assert!(transform.forward().abs_diff_eq(Vec3::Y, 1e-5));
        assert_eq!(transform.position(), Vec3::ZERO);
    }

    #[test]
    fn tiny_speeds_leave_transform_clean() {
        let mut transform = Transform::new();
        transform.recompute();
        let mut motion = MoveComponent::new()
            .with_forward_speed(0.0005)
            .with_angular_speed(-0.0009);
        step(&mut motion, &mut transform, 1.0);
        assert!(!transform.is_dirty());
    }

    #[test]
    fn wrap_reflects_to_opposite_bound() {
        let bounds = WrapBounds::screen(200.0, 100.0);
        assert_eq!(bounds.wrap(Vec3::new(101.0, 0.0, 3.0)), Vec3::new(-100.0, 0.0, 3.0));
        assert_eq!(bounds.wrap(Vec3::new(0.0, -51.0, 0.0)), Vec3::new(0.0, 50.0, 0.0));
        assert_eq!(bounds.wrap(Vec3::new(10.0, 10.0, 0.0)), Vec3::new(10.0, 10.0, 0.0));
    }

    #[test]
    fn moving_past_bound_wraps() {
        let mut transform = Transform::new();
        transform.set_position(Vec3::new(95.0, 0.0, 0.0));
        let mut motion = MoveComponent::new()
            .with_forward_speed(10.0)
            .with_wrap(WrapBounds::screen(200.0, 100.0));
        step(&mut motion, &mut transform, 1.0);
        assert_eq!(transform.position().x, -100.0);
    }
}
