use crate::api::types::KeyCode;
use crate::components::motion::{MoveComponent, WrapBounds, MOTION_UPDATE_ORDER};
use crate::core::component::{Component, ComponentContext};
use crate::input::keyboard::KeyboardState;

/// Keys that drive an [`InputComponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub clockwise: KeyCode,
    pub counter_clockwise: KeyCode,
}

impl KeyBindings {
    pub fn wasd() -> Self {
        Self {
            forward: KeyCode::W,
            back: KeyCode::S,
            clockwise: KeyCode::A,
            counter_clockwise: KeyCode::D,
        }
    }

    pub fn arrows() -> Self {
        Self {
            forward: KeyCode::UP,
            back: KeyCode::DOWN,
            clockwise: KeyCode::RIGHT,
            counter_clockwise: KeyCode::LEFT,
        }
    }
}

/// Motion whose speeds are set from held keys each frame.
#[derive(Debug, Clone)]
pub struct InputComponent {
    motion: MoveComponent,
    pub bindings: KeyBindings,
    pub max_forward_speed: f32,
    pub max_angular_speed: f32,
}

impl InputComponent {
    pub fn new(bindings: KeyBindings, max_forward_speed: f32, max_angular_speed: f32) -> Self {
        Self {
            motion: MoveComponent::new(),
            bindings,
            max_forward_speed,
            max_angular_speed,
        }
    }

    pub fn with_wrap(mut self, bounds: WrapBounds) -> Self {
        self.motion.wrap = Some(bounds);
        self
    }

    pub fn motion(&self) -> &MoveComponent {
        &self.motion
    }
}

impl Component for InputComponent {
    fn update_order(&self) -> i32 {
        MOTION_UPDATE_ORDER
    }

    fn update(&mut self, ctx: &mut ComponentContext<'_>, dt: f32) {
        self.motion.apply(ctx, dt);
    }

    fn process_input(&mut self, keys: &KeyboardState) {
        let mut forward = 0.0;
        if keys.is_down(self.bindings.forward) {
            forward += self.max_forward_speed;
        }
        if keys.is_down(self.bindings.back) {
            forward -= self.max_forward_speed;
        }

        let mut angular = 0.0;
        if keys.is_down(self.bindings.clockwise) {
            angular += self.max_angular_speed;
        }
        if keys.is_down(self.bindings.counter_clockwise) {
            angular -= self.max_angular_speed;
        }

        self.motion.forward_speed = forward;
        self.motion.angular_speed = angular;
    }
}
