//! Random sampling for glossy reflection.

use std::f32::consts::PI;

use prism_math::Vec3;
use rand::{Rng, RngCore};

/// Generate a random f32 in [0.0, 1.0).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

/// Sample a direction around `axis` from a cosine-power lobe.
///
/// The polar angle is `acos(u^(1/exponent))` and the azimuth is uniform, so
/// larger exponents keep samples closer to `axis`. `axis` must be unit length.
pub fn sample_cosine_power(axis: Vec3, exponent: f32, rng: &mut dyn RngCore) -> Vec3 {
    let cos_theta = gen_f32(rng).powf(1.0 / exponent);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = 2.0 * PI * gen_f32(rng);

    let (tangent, bitangent) = axis.any_orthonormal_pair();
    (tangent * (sin_theta * phi.cos()) + bitangent * (sin_theta * phi.sin()) + axis * cos_theta)
        .normalize_or_zero()
}
