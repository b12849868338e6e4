pub mod animation;
pub mod input;
pub mod mesh;
pub mod motion;
pub mod sprite;

pub use animation::AnimatedSpriteComponent;
pub use input::{InputComponent, KeyBindings};
pub use mesh::MeshComponent;
pub use motion::{MoveComponent, WrapBounds};
pub use sprite::SpriteComponent;
