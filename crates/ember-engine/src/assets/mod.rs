pub mod cache;
pub mod types;

pub use cache::AssetCache;
pub use types::{AssetLoader, Mesh, MeshData, Texture};
