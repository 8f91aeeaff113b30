//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::hittable::{Hittable, RayHit, HIT_RANGE};
use prism_core::Material;
use prism_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Take the root whose terms add, then recover the other one from
        // the product of roots, so neither subtracts nearly equal values.
        let sqrtd = discriminant.sqrt();
        let q = if b < 0.0 {
            -0.5 * (b - sqrtd)
        } else {
            -0.5 * (b + sqrtd)
        };
        if q == 0.0 {
            return None;
        }

        let (r0, r1) = (q / a, c / q);
        let (near, far) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };

        // Find the nearest root in the acceptable range
        let t = if HIT_RANGE.surrounds(near) {
            near
        } else if HIT_RANGE.surrounds(far) {
            far
        } else {
            return None;
        };

        let normal = (ray.at(t) - self.center).normalize_or_zero();
        Some(RayHit::new(ray, t, normal, &self.material))
    }
}
