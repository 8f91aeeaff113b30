//! Per-render camera and sampling options.

use prism_math::{AxisAngle, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Camera placement and anti-aliasing settings for a render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    /// Camera origin in world space
    pub camera_position: Vec3,

    /// Axis the camera is rotated about (normalized on use)
    pub camera_axis: Vec3,

    /// Camera rotation about `camera_axis`, in degrees
    pub camera_angle: f32,

    /// Sub-samples per pixel along each axis (total = multiplier squared)
    pub aa_multiplier: u32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            camera_position: Vec3::ZERO,
            camera_axis: Vec3::Y,
            camera_angle: 0.0,
            aa_multiplier: 1,
        }
    }
}

impl SceneOptions {
    /// Set the camera position.
    pub fn with_camera_position(mut self, position: Vec3) -> Self {
        self.camera_position = position;
        self
    }

    /// Set the camera rotation.
    pub fn with_camera_rotation(mut self, axis: Vec3, degrees: f32) -> Self {
        self.camera_axis = axis;
        self.camera_angle = degrees;
        self
    }

    /// Set the anti-aliasing multiplier.
    pub fn with_aa_multiplier(mut self, multiplier: u32) -> Self {
        self.aa_multiplier = multiplier;
        self
    }

    /// The camera rotation as an axis-angle pair.
    pub fn camera_rotation(&self) -> AxisAngle {
        AxisAngle::from_degrees(self.camera_axis, self.camera_angle)
    }

    /// Check the options describe a usable camera.
    pub fn validate(&self) -> SceneResult<()> {
        if self.aa_multiplier == 0 {
            return Err(SceneError::InvalidOption(
                "aa_multiplier must be at least 1".to_string(),
            ));
        }
        if !self.camera_position.is_finite() {
            return Err(SceneError::InvalidOption(format!(
                "camera_position {:?} is not finite",
                self.camera_position
            )));
        }
        if !self.camera_angle.is_finite() {
            return Err(SceneError::InvalidOption(format!(
                "camera_angle {} is not finite",
                self.camera_angle
            )));
        }
        if self.camera_angle != 0.0 && self.camera_axis.try_normalize().is_none() {
            return Err(SceneError::InvalidOption(
                "camera_axis must be non-zero when camera_angle is set".to_string(),
            ));
        }
        Ok(())
    }
}
