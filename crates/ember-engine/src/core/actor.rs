use glam::{Mat4, Quat, Vec3};

use crate::api::types::{ActorId, ComponentId};
use crate::core::component::{Component, ComponentContext, ComponentSlot};
use crate::core::scene::Scene;
use crate::core::transform::Transform;
use crate::input::keyboard::KeyboardState;

/// Lifecycle state of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorState {
    #[default]
    Active,
    /// Kept alive but skipped by update and input.
    Paused,
    /// Reaped by the scene at the end of the frame.
    Dead,
}

/// Actor-specific logic that runs after the actor's components.
///
/// Hooks get the whole scene so they can spawn, kill or reach into other
/// actors; spawns made here land in the pending set.
pub trait ActorBehavior {
    fn update_actor(&mut self, _id: ActorId, _scene: &mut Scene, _dt: f32) {}

    fn process_actor_input(&mut self, _id: ActorId, _scene: &mut Scene, _keys: &KeyboardState) {}
}

/// An entity in the scene: a transform plus an ordered set of components.
pub struct Actor {
    id: ActorId,
    /// String tag for finding actors by name.
    pub tag: String,
    state: ActorState,
    transform: Transform,
    components: Vec<ComponentSlot>,
    /// Components given to the builder, attached when the actor is spawned.
    staged: Vec<Box<dyn Component>>,
    behavior: Option<Box<dyn ActorBehavior>>,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor {
    pub fn new() -> Self {
        Self {
            id: ActorId::default(),
            tag: String::new(),
            state: ActorState::Active,
            transform: Transform::new(),
            components: Vec::new(),
            staged: Vec::new(),
            behavior: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.set_position(position);
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.transform.set_rotation(rotation);
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.transform.set_scale(scale);
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.transform.set_uniform_scale(scale);
        self
    }

    pub fn with_component(mut self, component: impl Component) -> Self {
        self.staged.push(Box::new(component));
        self
    }

    pub fn with_behavior(mut self, behavior: impl ActorBehavior + 'static) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    // -- Accessors --

    /// Handle assigned by the scene. Null until spawned.
    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn state(&self) -> ActorState {
        self.state
    }

    pub fn set_state(&mut self, state: ActorState) {
        self.state = state;
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.transform.set_position(position);
    }

    pub fn rotation(&self) -> Quat {
        self.transform.rotation()
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.transform.set_rotation(rotation);
    }

    pub fn scale(&self) -> Vec3 {
        self.transform.scale()
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.set_scale(scale);
    }

    pub fn forward(&self) -> Vec3 {
        self.transform.forward()
    }

    pub fn world_transform(&self) -> &Mat4 {
        self.transform.world()
    }

    /// Number of attached components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Attached component ids in update order.
    pub fn component_ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.components.iter().map(|slot| slot.id)
    }

    /// Update orders of the attached components, in iteration order.
    pub fn update_orders(&self) -> impl Iterator<Item = i32> + '_ {
        self.components.iter().map(|slot| slot.update_order)
    }

    /// First component of type `T`, if any.
    pub fn component<T: Component>(&self) -> Option<&T> {
        self.components
            .iter()
            .find_map(|slot| slot.component.as_ref().as_any().downcast_ref::<T>())
    }

    /// First component of type `T`, mutably.
    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|slot| slot.component.as_mut().as_any_mut().downcast_mut::<T>())
    }

    pub fn component_by_id(&self, id: ComponentId) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| slot.component.as_ref())
    }

    // -- Frame hooks --

    /// Rebuild the world matrix if dirty, then notify every component.
    pub fn compute_world_transform(&mut self) {
        self.transform.recompute();
        let world = *self.transform.world();
        for slot in &mut self.components {
            slot.component.on_update_world_transform(&world);
        }
    }

    pub(crate) fn update_components(&mut self, dt: f32) {
        let Actor { id, state, transform, components, .. } = self;
        let mut ctx = ComponentContext {
            owner: *id,
            transform,
            state,
        };
        for slot in components.iter_mut() {
            slot.component.update(&mut ctx, dt);
        }
    }

    pub(crate) fn process_component_input(&mut self, keys: &KeyboardState) {
        for slot in &mut self.components {
            slot.component.process_input(keys);
        }
    }

    // -- Scene plumbing --

    pub(crate) fn set_id(&mut self, id: ActorId) {
        self.id = id;
    }

    pub(crate) fn take_staged(&mut self) -> Vec<Box<dyn Component>> {
        std::mem::take(&mut self.staged)
    }

    pub(crate) fn take_behavior(&mut self) -> Option<Box<dyn ActorBehavior>> {
        self.behavior.take()
    }

    pub(crate) fn restore_behavior(&mut self, behavior: Box<dyn ActorBehavior>) {
        if self.behavior.is_none() {
            self.behavior = Some(behavior);
        }
    }

    /// Insert before the first component with a strictly greater update order,
    /// so equal orders keep insertion order.
    pub(crate) fn insert_component(&mut self, slot: ComponentSlot) {
        let order = slot.update_order;
        let index = self
            .components
            .iter()
            .position(|existing| order < existing.update_order)
            .unwrap_or(self.components.len());
        self.components.insert(index, slot);
    }

    pub(crate) fn remove_component(&mut self, id: ComponentId) -> Option<ComponentSlot> {
        let index = self.components.iter().position(|slot| slot.id == id)?;
        Some(self.components.remove(index))
    }

    pub(crate) fn drain_components(&mut self) -> Vec<ComponentSlot> {
        std::mem::take(&mut self.components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        order: i32,
        label: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Component for Probe {
        fn update_order(&self) -> i32 {
            self.order
        }

        fn update(&mut self, _ctx: &mut ComponentContext<'_>, _dt: f32) {
            self.log.borrow_mut().push(format!("update {}", self.label));
        }

        fn on_update_world_transform(&mut self, _world: &Mat4) {
            self.log.borrow_mut().push(format!("world {}", self.label));
        }
    }

    fn attach(actor: &mut Actor, ids: &mut SlotMap<ComponentId, ()>, probe: Probe) -> ComponentId {
        let id = ids.insert(());
        actor.insert_component(ComponentSlot::new(id, Box::new(probe)));
        id
    }

    #[test]
    fn components_sorted_stably_by_update_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ids = SlotMap::with_key();
        let mut actor = Actor::new();
        let labels = [(50, "a"), (10, "b"), (50, "c"), (-5, "d"), (10, "e")];
        for (order, label) in labels {
            attach(&mut actor, &mut ids, Probe { order, label, log: log.clone() });
        }

        let orders: Vec<i32> = actor.update_orders().collect();
        assert_eq!(orders, vec![-5, 10, 10, 50, 50]);

        actor.update_components(0.016);
        let seen = log.borrow().clone();
        assert_eq!(seen, vec!["update d", "update b", "update e", "update a", "update c"]);
    }

    #[test]
    fn compute_world_transform_always_notifies() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ids = SlotMap::with_key();
        let mut actor = Actor::new();
        attach(&mut actor, &mut ids, Probe { order: 1, label: "p", log: log.clone() });

        actor.compute_world_transform();
        actor.compute_world_transform();
        assert_eq!(log.borrow().len(), 2);
        assert!(!actor.transform().is_dirty());
    }

    #[test]
    fn remove_missing_component_is_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ids = SlotMap::with_key();
        let mut actor = Actor::new();
        let id = attach(&mut actor, &mut ids, Probe { order: 1, label: "p", log });

        assert!(actor.remove_component(id).is_some());
        assert!(actor.remove_component(id).is_none());
        assert_eq!(actor.component_count(), 0);
    }

    #[test]
    fn typed_lookup_finds_concrete_component() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ids = SlotMap::with_key();
        let mut actor = Actor::new();
        attach(&mut actor, &mut ids, Probe { order: 3, label: "typed", log });

        assert_eq!(actor.component::<Probe>().map(|p| p.label), Some("typed"));
        actor.component_mut::<Probe>().unwrap().order = 7;
        assert_eq!(actor.component::<Probe>().unwrap().order, 7);
    }
}
