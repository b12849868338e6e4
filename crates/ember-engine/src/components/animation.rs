//! Flip-book sprite animation.
//!
//! Cycles the texture of an embedded sprite through a named sequence at a
//! fixed frame rate.

use std::collections::HashMap;

use crate::assets::types::Texture;
use crate::components::sprite::{SpriteComponent, DEFAULT_DRAW_ORDER};
use crate::core::component::{Component, ComponentContext};
use crate::error::Result;
use crate::renderer::draw_lists::DrawSlot;
use crate::renderer::traits::{DrawContext, Drawable};

#[derive(Debug, Clone)]
pub struct AnimatedSpriteComponent {
    sprite: SpriteComponent,
    animations: HashMap<String, Vec<Texture>>,
    current: String,
    /// Fractional frame index into the current sequence.
    frame: f32,
    /// Frames per second.
    pub fps: f32,
}

impl AnimatedSpriteComponent {
    pub fn new(fps: f32) -> Self {
        Self::with_draw_order(fps, DEFAULT_DRAW_ORDER)
    }

    pub fn with_draw_order(fps: f32, draw_order: i32) -> Self {
        Self {
            sprite: SpriteComponent::with_draw_order(None, draw_order),
            animations: HashMap::new(),
            current: String::new(),
            frame: 0.0,
            fps,
        }
    }

    /// Replace every animation. `initial` becomes current and its first frame
    /// is shown immediately.
    pub fn initialize(&mut self, animations: HashMap<String, Vec<Texture>>, initial: &str) {
        self.animations = animations;
        self.current.clear();
        self.set_animation(initial);
    }

    /// Switch to a named animation, restarting it. Returns false and keeps
    /// the current one if the name is unknown.
    pub fn set_animation(&mut self, name: &str) -> bool {
        let Some(frames) = self.animations.get(name) else {
            log::warn!("unknown animation '{}'", name);
            return false;
        };
        self.current = name.to_owned();
        self.frame = 0.0;
        if let Some(first) = frames.first() {
            self.sprite.set_texture(*first);
        }
        true
    }

    pub fn current_animation(&self) -> &str {
        &self.current
    }

    pub fn current_frame(&self) -> usize {
        self.frame as usize
    }

    pub fn sprite(&self) -> &SpriteComponent {
        &self.sprite
    }

    fn advance(&mut self, dt: f32) {
        let Some(frames) = self.animations.get(&self.current) else {
            return;
        };
        if frames.is_empty() {
            return;
        }
        let len = frames.len() as f32;
        self.frame = (self.frame + self.fps * dt).rem_euclid(len);
        if let Some(texture) = frames.get(self.frame as usize) {
            self.sprite.set_texture(*texture);
        }
    }
}

impl Drawable for AnimatedSpriteComponent {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<()> {
        self.sprite.draw(ctx)
    }
}

impl Component for AnimatedSpriteComponent {
    fn update(&mut self, _ctx: &mut ComponentContext<'_>, dt: f32) {
        self.advance(dt);
    }

    fn draw_slot(&self) -> Option<DrawSlot> {
        self.sprite.draw_slot()
    }

    fn as_drawable(&self) -> Option<&dyn Drawable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::traits::TextureId;

    fn frames(ids: &[u32]) -> Vec<Texture> {
        ids.iter()
            .map(|&id| Texture {
                id: TextureId(id),
                width: 16,
                height: 16,
            })
            .collect()
    }

    fn animated() -> AnimatedSpriteComponent {
        let mut anim = AnimatedSpriteComponent::new(10.0);
        let mut map = HashMap::new();
        map.insert("walk".to_owned(), frames(&[1, 2, 3, 4]));
        map.insert("jump".to_owned(), frames(&[10, 11]));
        anim.initialize(map, "walk");
        anim
    }

    #[test]
    fn initialize_shows_first_frame() {
        let anim = animated();
        assert_eq!(anim.current_animation(), "walk");
        assert_eq!(anim.sprite().texture().map(|t| t.id), Some(TextureId(1)));
    }

    #[test]
    fn advances_and_wraps() {
        let mut anim = animated();
        anim.advance(0.25);
        assert_eq!(anim.current_frame(), 2);
        assert_eq!(anim.sprite().texture().map(|t| t.id), Some(TextureId(3)));
        anim.advance(0.2);
        // 4.5 frames wraps to 0.5
        assert_eq!(anim.current_frame(), 0);
        assert_eq!(anim.sprite().texture().map(|t| t.id), Some(TextureId(1)));
    }

    #[test]
    fn unknown_animation_keeps_current() {
        let mut anim = animated();
        assert!(!anim.set_animation("swim"));
        assert_eq!(anim.current_animation(), "walk");
        assert!(anim.set_animation("jump"));
        assert_eq!(anim.sprite().texture().map(|t| t.id), Some(TextureId(10)));
    }

    #[test]
    fn joins_sprite_list() {
        let anim = AnimatedSpriteComponent::with_draw_order(8.0, 150);
        assert_eq!(anim.draw_slot(), Some(DrawSlot::Sprite { draw_order: 150 }));
    }
}
