//! Reflection, refraction and Fresnel helpers.
//!
//! All directions are unit vectors; normals face the side the incident ray
//! arrives from.

use prism_math::Vec3;

/// Distance secondary ray origins are pushed off the surface.
pub const SURFACE_OFFSET: f32 = 1e-3;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface.
///
/// `ratio` is the index of the medium being left over the index of the
/// medium being entered. Returns `None` on total internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, ratio: f32) -> Option<Vec3> {
    let cos_i = -normal.dot(incident);
    let sin2_t = ratio * ratio * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return None;
    }
    let cos_t = (1.0 - sin2_t).sqrt();
    Some(ratio * incident + (ratio * cos_i - cos_t) * normal)
}

/// Schlick's approximation of the Fresnel reflectance.
///
/// `n1` is the index on the incident side, `n2` the index on the far side
/// and `cos_i` the cosine of the incidence angle. Leaving a denser medium
/// uses the transmitted angle, and is total reflection past the critical
/// angle.
pub fn fresnel_reflectance(n1: f32, n2: f32, cos_i: f32) -> f32 {
    let r0 = ((n1 - n2) / (n1 + n2)).powi(2);

    let cos_x = if n1 > n2 {
        let ratio = n1 / n2;
        let sin2_t = ratio * ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            return 1.0;
        }
        (1.0 - sin2_t).sqrt()
    } else {
        cos_i
    };

    r0 + (1.0 - r0) * (1.0 - cos_x).powi(5)
}

/// Move a hit point off the surface, onto the side `direction` leaves by.
#[inline]
pub fn offset_origin(position: Vec3, normal: Vec3, direction: Vec3) -> Vec3 {
    if direction.dot(normal) >= 0.0 {
        position + normal * SURFACE_OFFSET
    } else {
        position - normal * SURFACE_OFFSET
    }
}
