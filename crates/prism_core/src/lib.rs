//! Prism Core - Scene description types for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene data types**: `Material`, `PointLight`, `SceneOptions`
//! - **Scene files**: JSON scene description parsing and validation
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! // Load a scene description
//! let description = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     description.objects.len(),
//!     description.lights.len());
//! ```

pub mod description;
pub mod error;
pub mod light;
pub mod loader;
pub mod material;
pub mod options;

// Re-export commonly used types
pub use description::{ObjectDescription, SceneDescription, Shape};
pub use error::{SceneError, SceneResult};
pub use light::PointLight;
pub use loader::{load_scene, load_scene_from_str};
pub use material::{Color, Material, MaterialKind};
pub use options::SceneOptions;
