//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a
//! semi-infinite line in 3D space used for intersection testing.

use glam::Vec3A;

use crate::vec::Point3;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or a surface point for
    /// scattered rays.
    pub origin: Point3,

    /// Unit direction of the ray.
    ///
    /// Normalized at construction, so every `t` is a Euclidean distance
    /// along the ray. A zero-length input direction yields NaN components;
    /// callers guarantee non-degenerate input.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray; `direction` is normalized here.
    pub fn new(origin: Point3, direction: Vec3A) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Compute the point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalized_at_construction() {
        let r = Ray::new(Point3::ZERO, Vec3A::new(0.0, 0.0, -5.0));
        assert!((r.direction.length() - 1.0).abs() < 1e-6);
        assert_eq!(r.direction, Vec3A::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn at_walks_euclidean_distance() {
        let r = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3A::new(0.0, 0.0, -2.0));
        assert_eq!(r.at(3.0), Point3::new(1.0, 0.0, -3.0));
    }
}
