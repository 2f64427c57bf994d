//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! storing intersection data.

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec::Point3;

/// Ray-object intersection information.
///
/// Produced by a geometry's intersection test and consumed immediately by the
/// integrator and the material's scatter call; never retained past one bounce.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Ray parameter at the intersection point
    pub t: f32,
    /// World position of the intersection
    pub point: Point3,
    /// Unit surface normal, oriented against the incident ray
    pub normal: Vec3A,
    /// True if the ray hit the outward-facing side of the surface
    pub front_face: bool,
    /// Material of the surface at the hit point
    pub material: Material,
}

impl HitRecord {
    /// Build a record from an outward-facing surface normal.
    ///
    /// The stored normal always opposes the incident ray; `front_face`
    /// records which side was hit.
    pub fn new(ray: &Ray, t: f32, point: Point3, outward_normal: Vec3A, material: Material) -> Self {
        let front_face = ray.direction.dot(outward_normal) <= 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            t,
            point,
            normal,
            front_face,
            material,
        }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Implementations must be thread-safe (`Send + Sync`): the scene is shared
/// read-only by every render worker without locking.
pub trait Hittable: Send + Sync {
    /// Nearest intersection of `ray` strictly inside `t_range`, if any.
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene.
///
/// Aggregates by linear scan; the nearest hit wins, so the result does not
/// depend on insertion order.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut range = t_range;

        // Shrinking the upper bound as hits are found keeps only the
        // globally nearest intersection.
        for object in &self.objects {
            if let Some(rec) = object.hit(ray, range) {
                range = range.with_max(rec.t);
                closest = Some(rec);
            }
        }

        closest
    }
}
