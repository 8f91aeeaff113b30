use prism_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::material::Color;

/// A point light source with no distance falloff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,

    /// Emitted color, doubling as intensity
    #[serde(default = "default_light_color")]
    pub color: Color,
}

fn default_light_color() -> Color {
    Color::ONE
}

impl PointLight {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }

    /// A white light of unit intensity.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, Color::ONE)
    }
}
