//! Error types for ember-engine

use thiserror::Error;

/// The main error type for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Shader error: {0}")]
    Shader(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Asset load failed for {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Missing sprite shader; renderer not initialized")]
    NotInitialized,
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
