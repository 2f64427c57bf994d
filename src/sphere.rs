//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection using the half-b form of the quadratic
//! formula.

use crate::error::Error;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec::Point3;

/// Sphere primitive defined by center, signed radius, and material.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A negative radius is legal: the intersection geometry is unchanged but
    /// the outward normal flips, which is how a negative-radius sphere nested
    /// inside a positive one renders as a hollow glass shell. A zero or
    /// non-finite radius has no surface and is rejected.
    pub fn new(center: Point3, radius: f32, material: Material) -> Result<Self, Error> {
        if radius == 0.0 || !radius.is_finite() {
            return Err(Error::InvalidSphere { radius });
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord> {
        let oc = self.center - ray.origin;

        // Half-b quadratic: a = |D|^2, h = D.(C-O), c = |C-O|^2 - r^2
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant <= 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Prefer the nearer root, fall back to the farther one.
        let mut root = (h - sqrtd) / a;
        if !t_range.surrounds(root) {
            root = (h + sqrtd) / a;
            if !t_range.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        // Dividing by the signed radius flips the normal for hollow shells.
        let outward_normal = (point - self.center) / self.radius;
        Some(HitRecord::new(ray, root, point, outward_normal, self.material))
    }
}
