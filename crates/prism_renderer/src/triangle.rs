//! Triangle primitive for ray tracing.
//!
//! Intersects the triangle's supporting plane, then keeps the hit only if it
//! lies on the inner side of all three edges.

use std::sync::Arc;

use crate::hittable::{Hittable, RayHit, HIT_RANGE};
use prism_core::Material;
use prism_math::{Ray, Vec3};

/// Relative threshold on `normal . direction` below which a ray is treated
/// as parallel to the triangle.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Face normal, (v1 - v0) x (v2 - v0); zero for a degenerate triangle
    normal: Vec3,
    /// Material
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The winding order decides which way the normal faces.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<Material>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0);
        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    /// Centroid of the three vertices.
    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Edge test: is `p` on the inner side of the edge from `a` to `b`?
    #[inline]
    fn inside_edge(&self, a: Vec3, b: Vec3, p: Vec3) -> bool {
        (b - a).cross(p - a).dot(self.normal) >= 0.0
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let denom = self.normal.dot(ray.direction());

        // Ray is parallel to triangle (or the triangle has no area)
        if denom.abs() <= PARALLEL_EPSILON * self.normal.length() {
            return None;
        }

        let t = self.normal.dot(self.v0 - ray.origin()) / denom;
        if !HIT_RANGE.surrounds(t) {
            return None;
        }

        let p = ray.at(t);
        if !(self.inside_edge(self.v0, self.v1, p)
            && self.inside_edge(self.v1, self.v2, p)
            && self.inside_edge(self.v2, self.v0, p))
        {
            return None;
        }

        Some(RayHit::new(ray, t, self.normal, &self.material))
    }
}
