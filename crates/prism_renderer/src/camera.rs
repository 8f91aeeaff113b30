//! Camera for primary ray generation.

use std::f32::consts::FRAC_PI_6;

use prism_core::SceneOptions;
use prism_math::{AxisAngle, Ray, Vec2, Vec3};

/// Pinhole camera with a fixed 60 degree horizontal field of view.
///
/// Unrotated, the camera looks down +Z with +Y up. Pixel (0, 0) is the top
/// left corner of the image.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    position: Vec3,
    rotation: AxisAngle,
    /// Distance from the eye to the view plane, in pixels
    plane_distance: f32,
}

impl Camera {
    /// Create a camera for an image of the given size, placed and rotated
    /// according to `options`.
    pub fn new(image_width: u32, image_height: u32, options: &SceneOptions) -> Self {
        Self {
            image_width,
            image_height,
            position: options.camera_position,
            rotation: options.camera_rotation(),
            plane_distance: image_width as f32 / (2.0 * FRAC_PI_6.tan()),
        }
    }

    /// Get the ray through pixel (x, y) at a sub-pixel offset.
    ///
    /// `offset` is measured from the pixel's top left corner, in pixels;
    /// (0.5, 0.5) is the pixel center.
    pub fn primary_ray(&self, x: u32, y: u32, offset: Vec2) -> Option<Ray> {
        let half_width = self.image_width as f32 / 2.0;
        let half_height = self.image_height as f32 / 2.0;

        let view = Vec3::new(
            x as f32 + offset.x - half_width,
            half_height - (y as f32 + offset.y),
            self.plane_distance,
        );

        Ray::new(self.position, self.rotation.rotate(view))
    }
}
