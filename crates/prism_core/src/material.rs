//! Surface materials.
//!
//! A material is a base color plus one of a closed set of surface
//! behaviors. The renderer dispatches on [`MaterialKind`] when shading.

use prism_math::{Interval, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Color type alias (RGB, unbounded until written to an image)
pub type Color = Vec3;

/// Default tightness of the glossy lobe.
pub const DEFAULT_GLOSSY_EXPONENT: f32 = 50.0;

/// Default weight of each glossy sample.
pub const DEFAULT_GLOSSY_REFLECTIVITY: f32 = 0.5;

/// How a surface interacts with light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MaterialKind {
    /// Lambertian surface lit directly by point lights.
    Diffuse,

    /// Perfect mirror.
    Reflective,

    /// Transparent solid with the given index of refraction.
    Refractive { index: f32 },

    /// Rough mirror, sampled around the mirror direction.
    ///
    /// Larger exponents concentrate samples near the mirror direction.
    Glossy {
        #[serde(default = "default_glossy_exponent")]
        exponent: f32,
        #[serde(default = "default_glossy_reflectivity")]
        reflectivity: f32,
    },
}

fn default_glossy_exponent() -> f32 {
    DEFAULT_GLOSSY_EXPONENT
}

fn default_glossy_reflectivity() -> f32 {
    DEFAULT_GLOSSY_REFLECTIVITY
}

/// A surface material: base color and behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color (RGB)
    pub color: Color,

    /// Surface behavior
    #[serde(flatten)]
    pub kind: MaterialKind,
}

impl Material {
    /// Create a diffuse material.
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            kind: MaterialKind::Diffuse,
        }
    }

    /// Create a mirror material.
    pub fn reflective(color: Color) -> Self {
        Self {
            color,
            kind: MaterialKind::Reflective,
        }
    }

    /// Create a transparent material.
    ///
    /// - `index`: Index of refraction (1.0 = vacuum, 1.5 = glass, 2.4 = diamond)
    pub fn refractive(color: Color, index: f32) -> Self {
        Self {
            color,
            kind: MaterialKind::Refractive { index },
        }
    }

    /// Create a glossy material.
    pub fn glossy(color: Color, exponent: f32, reflectivity: f32) -> Self {
        Self {
            color,
            kind: MaterialKind::Glossy {
                exponent,
                reflectivity,
            },
        }
    }

    /// Check the material parameters are usable for shading.
    pub fn validate(&self, name: &str) -> SceneResult<()> {
        let invalid = |reason: String| SceneError::InvalidMaterial {
            name: name.to_string(),
            reason,
        };

        if !self.color.is_finite() {
            return Err(invalid(format!("color {:?} is not finite", self.color)));
        }

        match self.kind {
            MaterialKind::Diffuse | MaterialKind::Reflective => Ok(()),
            MaterialKind::Refractive { index } => {
                if Interval::POSITIVE.surrounds(index) {
                    Ok(())
                } else {
                    Err(invalid(format!("refractive index {index} must be positive")))
                }
            }
            MaterialKind::Glossy {
                exponent,
                reflectivity,
            } => {
                if !Interval::POSITIVE.surrounds(exponent) {
                    Err(invalid(format!("glossy exponent {exponent} must be positive")))
                } else if !Interval::UNIT.contains(reflectivity) {
                    Err(invalid(format!("glossy reflectivity {reflectivity} must be within [0, 1]")))
                } else {
                    Ok(())
                }
            }
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5)) // Grey default
    }
}
