pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod extensions;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::game::{EngineConfig, Game, MeshShaderConfig, ShaderSource};
pub use api::host::{Host, HostSignal};
pub use api::runner::GameRunner;
pub use api::types::{ActorId, ComponentId, ComponentRef, KeyCode};
pub use assets::{AssetCache, AssetLoader, Mesh, MeshData, Texture};
pub use components::{
    AnimatedSpriteComponent, InputComponent, KeyBindings, MeshComponent, MoveComponent,
    SpriteComponent, WrapBounds,
};
pub use crate::core::actor::{Actor, ActorBehavior, ActorState};
pub use crate::core::component::{Component, ComponentContext, DEFAULT_UPDATE_ORDER};
pub use crate::core::scene::{FramePhase, Scene};
pub use crate::core::time::FramePacer;
pub use crate::core::transform::Transform;
pub use error::{EngineError, Result};
pub use extensions::CameraRig;
pub use input::{InputEvent, InputQueue, KeyboardState};
pub use renderer::camera::Projection;
pub use renderer::lighting::{DirectionalLight, Lighting};
pub use renderer::recording::{BackendCall, RecordingBackend};
pub use renderer::{
    BlendMode, DrawContext, Drawable, FrameStats, GraphicsBackend, Primitive, Renderer, ShaderId,
    TextureId, Uniform, VertexArrayId,
};
