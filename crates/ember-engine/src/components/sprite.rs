use glam::{Mat4, Vec3};

use crate::assets::types::Texture;
use crate::core::component::Component;
use crate::error::Result;
use crate::renderer::draw_lists::DrawSlot;
use crate::renderer::quad::SPRITE_QUAD_INDICES;
use crate::renderer::traits::{DrawContext, Drawable, Primitive, Uniform};

/// Default draw order for sprites. Lower draws first (further back).
pub const DEFAULT_DRAW_ORDER: i32 = 100;

/// Textured quad drawn in the sprite pass.
///
/// The quad is sized to the texture in pixels and placed by the owner's
/// world transform.
#[derive(Debug, Clone)]
pub struct SpriteComponent {
    draw_order: i32,
    texture: Option<Texture>,
    width: u32,
    height: u32,
}

impl SpriteComponent {
    pub fn new(texture: Option<Texture>) -> Self {
        Self::with_draw_order(texture, DEFAULT_DRAW_ORDER)
    }

    pub fn with_draw_order(texture: Option<Texture>, draw_order: i32) -> Self {
        let mut sprite = Self {
            draw_order,
            texture: None,
            width: 0,
            height: 0,
        };
        if let Some(texture) = texture {
            sprite.set_texture(texture);
        }
        sprite
    }

    /// Swap the texture and take on its size.
    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
        self.width = texture.width;
        self.height = texture.height;
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    pub fn draw_order(&self) -> i32 {
        self.draw_order
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Owner's world transform with the quad scaled to texture size first.
    pub fn sprite_world(&self, world: &Mat4) -> Mat4 {
        *world * Mat4::from_scale(Vec3::new(self.width as f32, self.height as f32, 1.0))
    }
}

impl Drawable for SpriteComponent {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<()> {
        let Some(texture) = self.texture else {
            return Ok(());
        };
        ctx.backend
            .set_uniform("uWorldTransform", Uniform::Mat4(self.sprite_world(ctx.world)));
        ctx.backend.bind_texture(texture.id);
        ctx.backend
            .draw_indexed(Primitive::Triangles, SPRITE_QUAD_INDICES.len() as u32)
    }
}

impl Component for SpriteComponent {
    fn draw_slot(&self) -> Option<DrawSlot> {
        Some(DrawSlot::Sprite {
            draw_order: self.draw_order,
        })
    }

    fn as_drawable(&self) -> Option<&dyn Drawable> {
        Some(self)
    }
}
