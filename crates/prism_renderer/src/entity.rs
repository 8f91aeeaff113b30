//! Scene entities: the closed set of renderable primitives.

use std::sync::Arc;

use crate::hittable::{Hittable, RayHit};
use crate::{Plane, Sphere, Triangle};
use prism_core::{Material, Shape};
use prism_math::Ray;

/// Handle to an entity inside a [`Scene`](crate::Scene).
///
/// Two entities are the same entity only if their handles are equal;
/// identical geometry at the same position is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub(crate) usize);

/// A renderable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Entity {
    /// Build an entity from its description.
    pub fn from_shape(shape: &Shape, material: Arc<Material>) -> Self {
        match *shape {
            Shape::Sphere { center, radius } => Entity::Sphere(Sphere::new(center, radius, material)),
            Shape::Plane { point, normal } => Entity::Plane(Plane::new(point, normal, material)),
            Shape::Triangle { vertices: [v0, v1, v2] } => {
                Entity::Triangle(Triangle::new(v0, v1, v2, material))
            }
        }
    }

    /// Short name of the primitive type, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Entity::Sphere(_) => "sphere",
            Entity::Plane(_) => "plane",
            Entity::Triangle(_) => "triangle",
        }
    }
}

impl Hittable for Entity {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        match self {
            Entity::Sphere(sphere) => sphere.intersect(ray),
            Entity::Plane(plane) => plane.intersect(ray),
            Entity::Triangle(triangle) => triangle.intersect(ray),
        }
    }
}

impl From<Sphere> for Entity {
    fn from(sphere: Sphere) -> Self {
        Entity::Sphere(sphere)
    }
}

impl From<Plane> for Entity {
    fn from(plane: Plane) -> Self {
        Entity::Plane(plane)
    }
}

impl From<Triangle> for Entity {
    fn from(triangle: Triangle) -> Self {
        Entity::Triangle(triangle)
    }
}
