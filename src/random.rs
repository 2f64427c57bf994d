//! Sampling helpers for Monte Carlo rendering.
//!
//! Every helper draws from an explicitly passed generator so render workers
//! can own independent seeded streams; there is no process-global source.

use glam::Vec3A;
use rand::Rng;
use std::f32::consts::PI;

use crate::vec::Color;

/// Random f32 in [min, max).
pub fn range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.random::<f32>()
}

/// Uniform random unit vector on the unit sphere.
pub fn unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3A {
    // Uniform longitude plus uniform cos(latitude) covers the sphere evenly.
    let theta = 2.0 * PI * rng.random::<f32>();
    let cos_phi = 2.0 * rng.random::<f32>() - 1.0;
    let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
    Vec3A::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

/// Uniform random unit vector in the hemisphere around `normal`.
pub fn unit_vector_in_hemisphere<R: Rng + ?Sized>(rng: &mut R, normal: Vec3A) -> Vec3A {
    let v = unit_vector(rng);
    if v.dot(normal) < 0.0 {
        -v
    } else {
        v
    }
}

/// Random point inside the unit disk (z = 0), rejection sampled.
pub fn in_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> Vec3A {
    loop {
        let p = Vec3A::new(range(rng, -1.0, 1.0), range(rng, -1.0, 1.0), 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random color with components in [0, 1).
pub fn color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::new(rng.random(), rng.random(), rng.random())
}

/// Random color with components in [min, max).
pub fn color_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> Color {
    Color::new(
        range(rng, min, max),
        range(rng, min, max),
        range(rng, min, max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn unit_vectors_have_unit_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for _ in 0..256 {
            let v = unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn hemisphere_vectors_face_the_normal() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let normal = Vec3A::new(0.0, 1.0, 0.0);
        for _ in 0..256 {
            assert!(unit_vector_in_hemisphere(&mut rng, normal).dot(normal) >= 0.0);
        }
    }

    #[test]
    fn disk_samples_stay_inside_the_disk() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..256 {
            let p = in_unit_disk(&mut rng);
            assert!(p.length_squared() < 1.0);
            assert_eq!(p.z, 0.0);
        }
    }
}
