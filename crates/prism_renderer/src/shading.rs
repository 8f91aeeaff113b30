//! Recursive shading.
//!
//! `shade` computes the color at a hit by dispatching on the material,
//! tracing reflected, refracted or glossy rays back through [`trace`] with
//! one less level of recursion. Every recursive call decrements `depth`,
//! and `depth == 0` returns the base color, so mutually facing mirrors stop.

use crate::hittable::RayHit;
use crate::optics::{fresnel_reflectance, offset_origin, reflect, refract};
use crate::sampling::sample_cosine_power;
use crate::{EntityId, RenderConfig, Scene};
use prism_core::{Color, MaterialKind};
use prism_math::{Ray, Vec3};
use rand::RngCore;

/// Index of refraction outside every solid.
const AMBIENT_INDEX: f32 = 1.0;

/// Compute the color seen along a ray.
///
/// `inside` is true while the ray travels through a refractive solid.
/// Rays that hit nothing are black.
pub fn trace(
    scene: &Scene,
    ray: &Ray,
    inside: bool,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    match scene.nearest_hit(ray) {
        Some(nearest) => shade(scene, nearest.entity, &nearest.hit, inside, depth, config, rng),
        None => Color::ZERO,
    }
}

/// Compute the color at a hit on `entity`.
pub fn shade(
    scene: &Scene,
    entity: EntityId,
    hit: &RayHit,
    inside: bool,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let material = hit.material;
    if depth == 0 {
        return material.color;
    }

    // A point no light reaches gets nothing, whatever the material
    if !scene.is_lit_by_any(entity, hit) {
        return Color::ZERO;
    }

    match material.kind {
        MaterialKind::Diffuse => shade_diffuse(scene, entity, hit),
        MaterialKind::Reflective => shade_reflective(scene, hit, inside, depth, config, rng),
        MaterialKind::Refractive { index } => {
            shade_refractive(scene, hit, index, inside, depth, config, rng)
        }
        MaterialKind::Glossy {
            exponent,
            reflectivity,
        } => {
            let sampled = shade_glossy(scene, hit, exponent, inside, depth, config, rng);
            material.color + sampled * reflectivity
        }
    }
}

/// Lambertian term summed over the lights that reach the point.
fn shade_diffuse(scene: &Scene, entity: EntityId, hit: &RayHit) -> Color {
    let normal = hit.normal.normalize_or_zero();

    scene
        .lights()
        .iter()
        .filter(|light| scene.is_lit(entity, hit, light))
        .fold(Color::ZERO, |total, light| {
            let to_light = (light.position - hit.position).normalize_or_zero();
            let cosine = normal.dot(to_light).max(0.0);
            total + (hit.material.color * light.color * cosine).max(Color::ZERO)
        })
}

fn shade_reflective(
    scene: &Scene,
    hit: &RayHit,
    inside: bool,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let normal = hit.facing_normal();
    let direction = reflect(hit.incident, normal);
    trace_from(scene, hit.position, normal, direction, inside, depth - 1, config, rng)
}

fn shade_refractive(
    scene: &Scene,
    hit: &RayHit,
    index: f32,
    inside: bool,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let (n1, n2) = if inside {
        (index, AMBIENT_INDEX)
    } else {
        (AMBIENT_INDEX, index)
    };
    let normal = hit.facing_normal();
    let cos_i = -normal.dot(hit.incident);

    let reflected_dir = reflect(hit.incident, normal);
    let reflected = trace_from(scene, hit.position, normal, reflected_dir, inside, depth - 1, config, rng);

    match refract(hit.incident, normal, n1 / n2) {
        // Total internal reflection
        None => reflected,
        Some(transmitted_dir) => {
            let reflectance = fresnel_reflectance(n1, n2, cos_i);
            let transmitted = trace_from(
                scene,
                hit.position,
                normal,
                transmitted_dir,
                !inside,
                depth - 1,
                config,
                rng,
            );
            reflected * reflectance + transmitted * (1.0 - reflectance)
        }
    }
}

/// Average of `config.glossy_samples` rays drawn around the mirror direction.
fn shade_glossy(
    scene: &Scene,
    hit: &RayHit,
    exponent: f32,
    inside: bool,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = config.glossy_samples.max(1);
    let normal = hit.facing_normal();
    let mirror = reflect(hit.incident, normal);

    let mut total = Color::ZERO;
    for _ in 0..samples {
        let mut direction = sample_cosine_power(mirror, exponent, rng);
        // Fold samples that dip under the surface back above it
        if direction.dot(normal) < 0.0 {
            direction = reflect(direction, normal);
        }
        total += trace_from(scene, hit.position, normal, direction, inside, depth - 1, config, rng);
    }

    total / samples as f32
}

/// Trace a secondary ray leaving a surface.
#[allow(clippy::too_many_arguments)]
fn trace_from(
    scene: &Scene,
    position: Vec3,
    normal: Vec3,
    direction: Vec3,
    inside: bool,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    match Ray::new(offset_origin(position, normal, direction), direction) {
        Some(ray) => trace(scene, &ray, inside, depth, config, rng),
        None => Color::ZERO,
    }
}
