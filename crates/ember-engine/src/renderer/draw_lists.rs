//! Ordered draw lists.
//!
//! Sprites are kept sorted ascending by draw order with stable insertion;
//! meshes are grouped by shader, groups in first-registration order and
//! members in insertion order. Entries are component handles, never
//! references.

use crate::api::types::ComponentRef;

/// Which list a drawable component joins, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawSlot {
    /// Alpha-blended 2D pass, ascending by draw order.
    Sprite { draw_order: i32 },
    /// Depth-tested 3D pass, grouped by shader name.
    Mesh { shader: String },
}

#[derive(Debug, Clone, Copy)]
struct SpriteEntry {
    target: ComponentRef,
    draw_order: i32,
}

/// Mesh components sharing one shader.
#[derive(Debug, Clone)]
pub struct MeshGroup {
    shader: String,
    members: Vec<ComponentRef>,
}

impl MeshGroup {
    pub fn shader(&self) -> &str {
        &self.shader
    }

    pub fn members(&self) -> &[ComponentRef] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct DrawLists {
    sprites: Vec<SpriteEntry>,
    mesh_groups: Vec<MeshGroup>,
}

impl DrawLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, target: ComponentRef, slot: &DrawSlot) {
        match slot {
            DrawSlot::Sprite { draw_order } => self.add_sprite(target, *draw_order),
            DrawSlot::Mesh { shader } => self.add_mesh(target, shader),
        }
    }

    pub fn remove(&mut self, target: ComponentRef, slot: &DrawSlot) -> bool {
        match slot {
            DrawSlot::Sprite { .. } => self.remove_sprite(target),
            DrawSlot::Mesh { shader } => self.remove_mesh(target, shader),
        }
    }

    /// Insert before the first sprite with a strictly greater draw order.
    pub fn add_sprite(&mut self, target: ComponentRef, draw_order: i32) {
        let index = self
            .sprites
            .iter()
            .position(|entry| draw_order < entry.draw_order)
            .unwrap_or(self.sprites.len());
        self.sprites.insert(index, SpriteEntry { target, draw_order });
    }

    /// Returns false if the sprite was not registered.
    pub fn remove_sprite(&mut self, target: ComponentRef) -> bool {
        match self.sprites.iter().position(|entry| entry.target == target) {
            Some(index) => {
                self.sprites.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn add_mesh(&mut self, target: ComponentRef, shader: &str) {
        match self.mesh_groups.iter_mut().find(|g| g.shader == shader) {
            Some(group) => group.members.push(target),
            None => self.mesh_groups.push(MeshGroup {
                shader: shader.to_owned(),
                members: vec![target],
            }),
        }
    }

    /// Returns false if the mesh was not registered under `shader`.
    pub fn remove_mesh(&mut self, target: ComponentRef, shader: &str) -> bool {
        let Some(group) = self.mesh_groups.iter_mut().find(|g| g.shader == shader) else {
            return false;
        };
        match group.members.iter().position(|&m| m == target) {
            Some(index) => {
                group.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sprites in submission order.
    pub fn sprites(&self) -> impl Iterator<Item = ComponentRef> + '_ {
        self.sprites.iter().map(|entry| entry.target)
    }

    /// Draw orders in submission order.
    pub fn sprite_orders(&self) -> impl Iterator<Item = i32> + '_ {
        self.sprites.iter().map(|entry| entry.draw_order)
    }

    pub fn mesh_groups(&self) -> &[MeshGroup] {
        &self.mesh_groups
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    pub fn mesh_count(&self) -> usize {
        self.mesh_groups.iter().map(|g| g.members.len()).sum()
    }

    pub fn contains(&self, target: ComponentRef) -> bool {
        self.sprites.iter().any(|entry| entry.target == target)
            || self.mesh_groups.iter().any(|g| g.members.contains(&target))
    }
}
