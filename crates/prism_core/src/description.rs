//! Declarative scene description.
//!
//! A description is plain data: image size, options, named materials,
//! shapes bound to those materials, and point lights. The renderer turns
//! it into a `Scene` once it has been validated.

use std::collections::BTreeMap;

use prism_math::{Interval, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::light::PointLight;
use crate::material::Material;
use crate::options::SceneOptions;

/// Default output width in pixels.
pub const DEFAULT_WIDTH: u32 = 640;

/// Default output height in pixels.
pub const DEFAULT_HEIGHT: u32 = 480;

/// Geometry of a single scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    /// Infinite plane through `point`. Rays hit it from either side; the
    /// reported normal is always `normal`.
    Plane { point: Vec3, normal: Vec3 },
    Triangle { vertices: [Vec3; 3] },
}

impl Shape {
    fn validate(&self, index: usize) -> SceneResult<()> {
        let invalid = |reason: &str| SceneError::InvalidShape {
            index,
            reason: reason.to_string(),
        };

        match *self {
            Shape::Sphere { center, radius } => {
                if !center.is_finite() {
                    return Err(invalid("sphere center is not finite"));
                }
                if !Interval::POSITIVE.surrounds(radius) {
                    return Err(invalid("sphere radius must be positive"));
                }
            }
            Shape::Plane { point, normal } => {
                if !point.is_finite() {
                    return Err(invalid("plane point is not finite"));
                }
                if normal.try_normalize().is_none() {
                    return Err(invalid("plane normal must be non-zero"));
                }
            }
            Shape::Triangle { vertices } => {
                if !vertices.iter().all(|v| v.is_finite()) {
                    return Err(invalid("triangle vertex is not finite"));
                }
            }
        }
        Ok(())
    }
}

/// A shape bound to a named material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescription {
    #[serde(flatten)]
    pub shape: Shape,

    /// Name of an entry in `SceneDescription::materials`
    pub material: String,
}

/// A complete scene, as read from a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (usually from the filename)
    #[serde(default)]
    pub name: String,

    /// Output width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Output height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default)]
    pub options: SceneOptions,

    /// Materials by name
    #[serde(default)]
    pub materials: BTreeMap<String, Material>,

    #[serde(default)]
    pub objects: Vec<ObjectDescription>,

    #[serde(default)]
    pub lights: Vec<PointLight>,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            options: SceneOptions::default(),
            materials: BTreeMap::new(),
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }
}

impl SceneDescription {
    /// Create an empty scene description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a named material.
    pub fn add_material(&mut self, name: impl Into<String>, material: Material) {
        self.materials.insert(name.into(), material);
    }

    /// Add a shape bound to a named material.
    pub fn add_object(&mut self, shape: Shape, material: impl Into<String>) {
        self.objects.push(ObjectDescription {
            shape,
            material: material.into(),
        });
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Look up the material bound to an object.
    pub fn material_for(&self, index: usize) -> SceneResult<&Material> {
        let object = self.objects.get(index).ok_or_else(|| SceneError::InvalidShape {
            index,
            reason: "no such object".to_string(),
        })?;
        self.materials
            .get(&object.material)
            .ok_or_else(|| SceneError::UnknownMaterial {
                index,
                name: object.material.clone(),
            })
    }

    /// Check every part of the description is renderable.
    pub fn validate(&self) -> SceneResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidOption(format!(
                "image size {}x{} must be non-zero",
                self.width, self.height
            )));
        }

        self.options.validate()?;

        for (name, material) in &self.materials {
            material.validate(name)?;
        }

        for (index, object) in self.objects.iter().enumerate() {
            object.shape.validate(index)?;
            self.material_for(index)?;
        }

        for light in &self.lights {
            if !light.position.is_finite() || !light.color.is_finite() {
                return Err(SceneError::InvalidOption(format!(
                    "light {:?} is not finite",
                    light
                )));
            }
        }

        Ok(())
    }
}
