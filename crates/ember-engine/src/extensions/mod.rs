// extensions/mod.rs
//
// Optional actor behaviors built on the core Actor/Scene API.
// Games opt in by attaching them with `Actor::with_behavior`.

pub mod camera;

pub use camera::CameraRig;
