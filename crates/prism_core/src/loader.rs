//! Scene file loading.
//!
//! Scene files are JSON documents matching [`SceneDescription`]. Loading
//! always validates, so a returned description can be rendered as-is.

use std::fs;
use std::path::Path;

use crate::description::SceneDescription;
use crate::error::SceneResult;

/// Load and validate a scene description from a JSON file.
///
/// The scene name defaults to the file stem when the file does not set one.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::debug!("Reading scene file {}", path.display());

    let text = fs::read_to_string(path)?;
    let mut description = load_scene_from_str(&text)?;

    if description.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            description.name = stem.to_string_lossy().into_owned();
        }
    }

    Ok(description)
}

/// Parse and validate a scene description from a JSON string.
pub fn load_scene_from_str(text: &str) -> SceneResult<SceneDescription> {
    let description: SceneDescription = serde_json::from_str(text)?;
    description.validate()?;

    log::info!(
        "Loaded scene '{}': {} materials, {} objects, {} lights",
        description.name,
        description.materials.len(),
        description.objects.len(),
        description.lights.len()
    );

    Ok(description)
}
