pub mod actor;
pub mod component;
pub mod scene;
pub mod time;
pub mod transform;
