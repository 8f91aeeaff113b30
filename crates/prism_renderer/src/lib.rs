//! Prism Renderer - recursive Whitted-style ray tracing
//!
//! Casts one or more primary rays per pixel and shades each hit by
//! dispatching on its material:
//! - Diffuse: Lambert term over the lights that reach the point
//! - Reflective: a perfect mirror bounce
//! - Refractive: reflection and transmission blended by Schlick's Fresnel
//! - Glossy: Monte Carlo sampled reflection around the mirror direction
//!
//! Recursion is bounded by an explicit depth, and the random source used by
//! glossy sampling is passed in explicitly so renders are reproducible.

mod camera;
mod entity;
mod hittable;
mod optics;
mod plane;
mod renderer;
mod sampling;
mod scene;
mod shading;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use entity::{Entity, EntityId};
pub use hittable::{Hittable, RayHit, HIT_RANGE, T_EPSILON};
pub use optics::{fresnel_reflectance, offset_origin, reflect, refract, SURFACE_OFFSET};
pub use plane::Plane;
pub use renderer::{
    color_to_rgb, render, render_pixel, render_with_rng, ImageBuffer, ImageSink, RenderConfig,
};
pub use sampling::{gen_f32, sample_cosine_power};
pub use scene::{Scene, SceneHit};
pub use shading::{shade, trace};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export the math and material types the renderer API is written in
pub use prism_core::{Color, Material, MaterialKind, PointLight, SceneOptions};
pub use prism_math::{Interval, Ray, Vec2, Vec3};
