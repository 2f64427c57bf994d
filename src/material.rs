//! Material system for ray tracing.
//!
//! Implements three material types: Lambertian (diffuse), Metal (specular),
//! and Dielectric (transparent).

use glam::Vec3A;
use rand::Rng;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;
use crate::vec::Color;

/// Outcome of a successful scatter: the surviving ray and its attenuation.
#[derive(Debug, Clone, Copy)]
pub struct ScatterEvent {
    /// Color filter applied to whatever radiance the scattered ray gathers
    pub attenuation: Color,
    /// The scattered ray, originating at the hit point
    pub ray: Ray,
}

/// Surface materials.
///
/// A `Copy` sum type so hit records carry their material by value; each
/// variant's scatter logic is pure apart from the passed-in RNG.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface color/reflectance.
        albedo: Color,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Color,
        /// Surface roughness in [0, 1] (0.0 = mirror); clamped at
        /// construction, see [`Material::metal`].
        fuzz: f32,
    },

    /// Dielectric (transparent) material with refraction.
    Dielectric {
        /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
        refraction_index: f32,
    },
}

impl Material {
    /// Diffuse material with the given albedo.
    pub fn lambertian(albedo: Color) -> Self {
        Self::Lambertian { albedo }
    }

    /// Metal with the given albedo and roughness; `fuzz` is clamped to
    /// [0, 1] here, once, rather than on every scatter.
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Self::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Transparent material with the given refractive index.
    pub fn dielectric(refraction_index: f32) -> Self {
        Self::Dielectric { refraction_index }
    }

    /// Compute ray scattering for this material.
    ///
    /// Returns the scattered ray and attenuation, or `None` if the ray is
    /// absorbed.
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        ray: &Ray,
        rec: &HitRecord,
        rng: &mut R,
    ) -> Option<ScatterEvent> {
        match *self {
            Material::Lambertian { albedo } => {
                // Uniform unit vector flipped into the normal's hemisphere.
                let direction = random::unit_vector_in_hemisphere(rng, rec.normal);
                Some(ScatterEvent {
                    attenuation: albedo,
                    ray: Ray::new(rec.point, direction),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let jittered = reflect(ray.direction, rec.normal)
                    + fuzz * random::unit_vector(rng);
                // A strong jitter can push the direction below the surface;
                // such rays are absorbed (self-occluding rough metal).
                if jittered.dot(rec.normal) > 0.0 {
                    Some(ScatterEvent {
                        attenuation: albedo,
                        ray: Ray::new(rec.point, jittered),
                    })
                } else {
                    None
                }
            }
            Material::Dielectric { refraction_index } => {
                let refraction_ratio = if rec.front_face {
                    1.0 / refraction_index
                } else {
                    refraction_index
                };

                let cos_theta = (-ray.direction).dot(rec.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                let cannot_refract = refraction_ratio * sin_theta > 1.0;
                let direction = if cannot_refract
                    || reflectance(cos_theta, refraction_ratio) > rng.random::<f32>()
                {
                    reflect(ray.direction, rec.normal)
                } else {
                    refract(ray.direction, rec.normal, refraction_ratio)
                };

                // Glass doesn't attenuate light.
                Some(ScatterEvent {
                    attenuation: Color::WHITE,
                    ray: Ray::new(rec.point, direction),
                })
            }
        }
    }
}

/// Reflect a vector off a surface using the law of reflection.
fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through an interface using Snell's law.
fn refract(uv: Vec3A, n: Vec3A, etai_over_etat: f32) -> Vec3A {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Fresnel reflectance via Schlick's approximation.
fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
