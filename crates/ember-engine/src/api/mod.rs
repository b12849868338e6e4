pub mod game;
pub mod host;
pub mod runner;
pub mod types;
