//! Infinite plane primitive.

use std::sync::Arc;

use crate::hittable::{Hittable, RayHit, HIT_RANGE};
use prism_core::Material;
use prism_math::{Ray, Vec3};

/// Rays whose direction is this close to perpendicular with the plane
/// normal are treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane through `point`.
///
/// The plane reports hits from both sides, but its normal is always the
/// configured one.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Vec3,
    /// Unit normal (zero for a degenerate plane, which is never hit)
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            material,
        }
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = self.normal.dot(self.point - ray.origin()) / denom;
        if !HIT_RANGE.surrounds(t) {
            return None;
        }

        Some(RayHit::new(ray, t, self.normal, &self.material))
    }
}
