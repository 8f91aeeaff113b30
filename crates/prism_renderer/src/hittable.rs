//! Hittable trait and RayHit for ray-object intersection.

use prism_core::Material;
use prism_math::{Interval, Ray, Vec3};

/// Smallest accepted hit time.
///
/// Hits closer than this to the ray origin are treated as the ray leaving
/// the surface it started on.
pub const T_EPSILON: f32 = 1e-4;

/// Range of hit times a primitive may report.
pub const HIT_RANGE: Interval = Interval::new(T_EPSILON, f32::INFINITY);

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct RayHit<'a> {
    /// Point of intersection
    pub position: Vec3,
    /// Surface normal at the intersection (not necessarily unit length)
    pub normal: Vec3,
    /// Direction of the ray that produced the hit
    pub incident: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> RayHit<'a> {
    pub fn new(ray: &Ray, t: f32, normal: Vec3, material: &'a Material) -> Self {
        Self {
            position: ray.at(t),
            normal,
            incident: ray.direction(),
            material,
        }
    }

    /// Unit normal flipped to face the incoming ray.
    pub fn facing_normal(&self) -> Vec3 {
        let normal = self.normal.normalize_or_zero();
        if normal.dot(self.incident) > 0.0 {
            -normal
        } else {
            normal
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object at a time inside [`HIT_RANGE`].
    ///
    /// Returns the nearest such hit.
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>>;
}
