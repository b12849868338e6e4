pub mod camera;
pub mod draw_lists;
pub mod lighting;
pub mod quad;
pub mod recording;
pub mod submission;
pub mod traits;

// Re-export key types for convenient access
pub use draw_lists::{DrawLists, DrawSlot, MeshGroup};
pub use submission::{FrameStats, Renderer};
pub use traits::{
    BlendMode, DrawContext, Drawable, GraphicsBackend, Primitive, ShaderId, TextureId, Uniform,
    VertexArrayId,
};
