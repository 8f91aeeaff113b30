//! Errors raised while loading or validating a scene description.

use thiserror::Error;

/// Errors that can occur while building a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Object {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Invalid shape at object {index}: {reason}")]
    InvalidShape { index: usize, reason: String },

    #[error("Invalid material '{name}': {reason}")]
    InvalidMaterial { name: String, reason: String },
}

pub type SceneResult<T> = Result<T, SceneError>;
