pub mod keyboard;
pub mod queue;

pub use keyboard::KeyboardState;
pub use queue::{InputEvent, InputQueue};
