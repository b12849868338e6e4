use glam::Mat4;
use slotmap::SlotMap;

use crate::api::types::{ActorId, ComponentId, ComponentRef};
use crate::core::actor::{Actor, ActorState};
use crate::core::component::{Component, ComponentSlot};
use crate::input::keyboard::KeyboardState;
use crate::renderer::draw_lists::DrawLists;
use crate::renderer::lighting::Lighting;
use crate::renderer::traits::Drawable;

/// Where the scene is inside the current frame.
///
/// Anything other than `Idle` means the active set is being iterated, so
/// spawns are routed to the pending set and destroys are deferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramePhase {
    #[default]
    Idle,
    CollectingInput,
    Updating,
    Reconciling,
    Rendering,
}

/// Actor registry. Owns every live actor and the draw lists their
/// components join.
///
/// Actors live in a generational slot map; `active` and `pending` hold
/// handles only. A live actor is in exactly one of the two.
pub struct Scene {
    actors: SlotMap<ActorId, Actor>,
    component_owners: SlotMap<ComponentId, ActorId>,
    active: Vec<ActorId>,
    pending: Vec<ActorId>,
    phase: FramePhase,
    draw_lists: DrawLists,
    view: Mat4,
    lighting: Lighting,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a scene with a specific actor capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            actors: SlotMap::with_capacity_and_key(capacity),
            component_owners: SlotMap::with_key(),
            active: Vec::with_capacity(capacity),
            pending: Vec::new(),
            phase: FramePhase::Idle,
            draw_lists: DrawLists::new(),
            view: Mat4::IDENTITY,
            lighting: Lighting::default(),
        }
    }

    // -- Actor lifecycle --

    /// Register an actor and attach the components given to its builder.
    ///
    /// While the active set is being iterated the actor goes to the pending
    /// set and is promoted at the end of the frame.
    pub fn spawn(&mut self, mut actor: Actor) -> ActorId {
        let staged = actor.take_staged();
        let id = self.actors.insert_with_key(|id| {
            actor.set_id(id);
            actor
        });

        if self.is_iterating() {
            self.pending.push(id);
        } else {
            self.active.push(id);
        }

        for component in staged {
            self.attach(id, component);
        }
        log::debug!("spawned actor {:?} (phase {:?})", id, self.phase);
        id
    }

    /// Destroy an actor and all of its components.
    ///
    /// During input collection or update the actor is only marked dead; the
    /// reconcile pass reaps it. Returns false for unknown or stale handles.
    pub fn destroy(&mut self, id: ActorId) -> bool {
        if self.is_iterating() {
            return match self.actors.get_mut(id) {
                Some(actor) => {
                    actor.set_state(ActorState::Dead);
                    true
                }
                None => false,
            };
        }
        self.destroy_now(id)
    }

    fn destroy_now(&mut self, id: ActorId) -> bool {
        let Some(mut actor) = self.actors.remove(id) else {
            return false;
        };

        if let Some(idx) = self.pending.iter().position(|&p| p == id) {
            self.pending.swap_remove(idx);
        }
        if let Some(idx) = self.active.iter().position(|&a| a == id) {
            self.active.swap_remove(idx);
        }

        for slot in actor.drain_components() {
            self.forget(id, &slot);
        }
        log::debug!("destroyed actor {:?}", id);
        true
    }

    /// Destroy every actor. Used at shutdown.
    pub fn clear(&mut self) {
        let ids: Vec<ActorId> = self.actors.keys().collect();
        for id in ids {
            self.destroy_now(id);
        }
        self.active.clear();
        self.pending.clear();
    }

    // -- Components --

    /// Attach a component to an actor. Drawables join the draw lists here.
    ///
    /// Returns `None` if the actor handle is stale.
    pub fn add_component(&mut self, actor: ActorId, component: impl Component) -> Option<ComponentId> {
        if !self.actors.contains_key(actor) {
            return None;
        }
        Some(self.attach(actor, Box::new(component)))
    }

    fn attach(&mut self, actor: ActorId, component: Box<dyn Component>) -> ComponentId {
        let id = self.component_owners.insert(actor);
        let slot = ComponentSlot::new(id, component);
        if let Some(draw) = &slot.draw_slot {
            self.draw_lists.insert(ComponentRef::new(actor, id), draw);
        }
        if let Some(owner) = self.actors.get_mut(actor) {
            owner.insert_component(slot);
        }
        id
    }

    /// Detach and drop one component. Removing a component that is not
    /// attached is a no-op and returns false.
    pub fn remove_component(&mut self, actor: ActorId, component: ComponentId) -> bool {
        let Some(owner) = self.actors.get_mut(actor) else {
            return false;
        };
        match owner.remove_component(component) {
            Some(slot) => {
                self.forget(actor, &slot);
                true
            }
            None => false,
        }
    }

    fn forget(&mut self, actor: ActorId, slot: &ComponentSlot) {
        if let Some(draw) = &slot.draw_slot {
            self.draw_lists.remove(ComponentRef::new(actor, slot.id), draw);
        }
        self.component_owners.remove(slot.id);
    }

    /// Owner of a component, if the component is still attached.
    pub fn component_owner(&self, component: ComponentId) -> Option<ActorId> {
        self.component_owners.get(component).copied()
    }

    /// First component of type `T` on an actor.
    pub fn component<T: Component>(&self, actor: ActorId) -> Option<&T> {
        self.actors.get(actor)?.component::<T>()
    }

    /// First component of type `T` on an actor (mutable).
    pub fn component_mut<T: Component>(&mut self, actor: ActorId) -> Option<&mut T> {
        self.actors.get_mut(actor)?.component_mut::<T>()
    }

    /// Resolve a draw-list entry to its owner's world matrix and drawable.
    pub(crate) fn drawable(&self, target: ComponentRef) -> Option<(&Mat4, &dyn Drawable)> {
        let actor = self.actors.get(target.actor)?;
        let drawable = actor.component_by_id(target.component)?.as_drawable()?;
        Some((actor.world_transform(), drawable))
    }

    // -- Frame cycle --

    /// Forward the input snapshot to every active actor.
    pub fn process_input(&mut self, keys: &KeyboardState) {
        self.phase = FramePhase::CollectingInput;
        let mut i = 0;
        while i < self.active.len() {
            let id = self.active[i];
            self.process_actor_input(id, keys);
            i += 1;
        }
        self.phase = FramePhase::Idle;
    }

    fn process_actor_input(&mut self, id: ActorId, keys: &KeyboardState) {
        let Some(actor) = self.actors.get_mut(id) else { return };
        if actor.state() != ActorState::Active {
            return;
        }
        actor.process_component_input(keys);

        if let Some(mut behavior) = actor.take_behavior() {
            behavior.process_actor_input(id, self, keys);
            if let Some(actor) = self.actors.get_mut(id) {
                actor.restore_behavior(behavior);
            }
        }
    }

    /// Advance every active actor by `dt`, then promote pending actors and
    /// reap dead ones.
    pub fn update(&mut self, dt: f32) {
        self.update_with(dt, |_| {});
    }

    /// Like [`Scene::update`], but runs `hook` after the actors and before
    /// reconcile. Spawns and destroys from the hook are deferred the same way
    /// as those made by behaviors.
    pub fn update_with(&mut self, dt: f32, hook: impl FnOnce(&mut Scene)) {
        self.phase = FramePhase::Updating;
        let mut i = 0;
        while i < self.active.len() {
            let id = self.active[i];
            self.update_actor(id, dt);
            i += 1;
        }
        hook(self);

        self.phase = FramePhase::Reconciling;
        self.reconcile();
        self.phase = FramePhase::Idle;
    }

    fn update_actor(&mut self, id: ActorId, dt: f32) {
        let Some(actor) = self.actors.get_mut(id) else { return };
        if actor.state() != ActorState::Active {
            return;
        }

        actor.compute_world_transform();
        actor.update_components(dt);

        if let Some(mut behavior) = actor.take_behavior() {
            behavior.update_actor(id, self, dt);
            if let Some(actor) = self.actors.get_mut(id) {
                actor.restore_behavior(behavior);
            }
        }

        // Absorb transform changes made by components or the behavior.
        if let Some(actor) = self.actors.get_mut(id) {
            actor.compute_world_transform();
        }
    }

    fn reconcile(&mut self) {
        for id in std::mem::take(&mut self.pending) {
            if let Some(actor) = self.actors.get_mut(id) {
                actor.compute_world_transform();
                self.active.push(id);
            }
        }

        let dead: Vec<ActorId> = self
            .active
            .iter()
            .copied()
            .filter(|&id| {
                self.actors
                    .get(id)
                    .is_some_and(|a| a.state() == ActorState::Dead)
            })
            .collect();
        for id in dead {
            self.destroy_now(id);
        }
    }

    /// Run a read-only render pass over the scene.
    pub fn render<R>(&mut self, f: impl FnOnce(&Scene) -> R) -> R {
        self.phase = FramePhase::Rendering;
        let out = f(self);
        self.phase = FramePhase::Idle;
        out
    }

    fn is_iterating(&self) -> bool {
        matches!(self.phase, FramePhase::CollectingInput | FramePhase::Updating)
    }

    // -- Queries --

    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(id)
    }

    /// Handles in active iteration order.
    pub fn active(&self) -> &[ActorId] {
        &self.active
    }

    /// Handles spawned during the current frame, not yet promoted.
    pub fn pending(&self) -> &[ActorId] {
        &self.pending
    }

    /// Iterate over all live actors.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors.iter()
    }

    /// Find the first actor with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<ActorId> {
        self.actors.iter().find(|(_, a)| a.tag == tag).map(|(id, _)| id)
    }

    /// Find all actors with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<ActorId> {
        self.actors
            .iter()
            .filter(|(_, a)| a.tag == tag)
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of live actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    // -- Render state --

    pub fn draw_lists(&self) -> &DrawLists {
        &self.draw_lists
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    pub fn set_view_matrix(&mut self, view: Mat4) {
        self.view = view;
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn lighting_mut(&mut self) -> &mut Lighting {
        &mut self.lighting
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
