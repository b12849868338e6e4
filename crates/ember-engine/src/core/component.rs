//! Component contract.
//!
//! A component is a unit of behavior owned by exactly one actor. Every hook
//! defaults to a no-op so each concrete component implements only the
//! capabilities it needs. Drawing is exposed through `draw_slot` and
//! `as_drawable`, which the scene consults when a component is attached.

use std::any::Any;

use glam::Mat4;

use crate::api::types::{ActorId, ComponentId};
use crate::core::actor::ActorState;
use crate::core::transform::Transform;
use crate::input::keyboard::KeyboardState;
use crate::renderer::draw_lists::DrawSlot;
use crate::renderer::traits::Drawable;

/// Default update order for components. Lower runs earlier.
pub const DEFAULT_UPDATE_ORDER: i32 = 100;

/// Upcast helper so components can be looked up by concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Owner state a component may touch during `update`.
pub struct ComponentContext<'a> {
    pub owner: ActorId,
    pub transform: &'a mut Transform,
    pub state: &'a mut ActorState,
}

pub trait Component: AsAny {
    /// Read once when the component is attached; fixes its slot in the owner.
    fn update_order(&self) -> i32 {
        DEFAULT_UPDATE_ORDER
    }

    fn update(&mut self, _ctx: &mut ComponentContext<'_>, _dt: f32) {}

    fn process_input(&mut self, _keys: &KeyboardState) {}

    /// Called every time the owner computes its world transform, dirty or not.
    fn on_update_world_transform(&mut self, _world: &Mat4) {}

    /// Draw list this component joins when attached. `None` for non-drawables.
    fn draw_slot(&self) -> Option<DrawSlot> {
        None
    }

    fn as_drawable(&self) -> Option<&dyn Drawable> {
        None
    }
}

/// A component together with the bookkeeping its owner needs.
pub(crate) struct ComponentSlot {
    pub id: ComponentId,
    pub update_order: i32,
    pub draw_slot: Option<DrawSlot>,
    pub component: Box<dyn Component>,
}

impl ComponentSlot {
    pub fn new(id: ComponentId, component: Box<dyn Component>) -> Self {
        Self {
            id,
            update_order: component.update_order(),
            draw_slot: component.draw_slot(),
            component,
        }
    }
}
