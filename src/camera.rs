//! Camera for primary ray generation.

use glam::Vec3A;
use rand::Rng;

use crate::error::Error;
use crate::random;
use crate::ray::Ray;
use crate::vec::Point3;

/// User-facing camera parameters.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Camera position in world space.
    pub position: Point3,
    /// Look-at target.
    pub aim: Point3,
    /// Approximate up direction; must not be parallel to `aim - position`.
    pub vup: Vec3A,
    /// Vertical field of view in degrees.
    pub vfov: f32,
    /// Viewport width over height.
    pub aspect_ratio: f32,
    /// Lens aperture diameter; zero disables depth of field.
    pub aperture: f32,
    /// Distance from `position` to the plane of perfect focus.
    pub focus_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Point3::ZERO,
            aim: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3A::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.0,
            focus_distance: 1.0,
        }
    }
}

/// Maps normalized image-plane coordinates to world-space rays.
///
/// Holds the derived orthonormal basis and a precomputed viewport rectangle
/// on the focal plane; immutable once built, so it is shared freely between
/// render workers.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Point3,
    u: Vec3A,
    v: Vec3A,
    /// Offset from `position` to the viewport's lower-left corner.
    lower_left: Vec3A,
    horizontal: Vec3A,
    vertical: Vec3A,
    lens_radius: f32,
}

impl Camera {
    /// Derive the camera basis and viewport from `config`.
    ///
    /// Fails with [`Error::DegenerateCamera`] when the basis cannot be
    /// built: `aim` coincides with `position`, or `vup` is parallel to the
    /// view direction.
    pub fn new(config: &CameraConfig) -> Result<Self, Error> {
        let view = config.aim - config.position;
        if view.length_squared() < 1e-12 {
            return Err(Error::DegenerateCamera);
        }
        let w = view.normalize();

        let right = w.cross(config.vup);
        if right.length_squared() < 1e-12 {
            return Err(Error::DegenerateCamera);
        }
        let u = right.normalize();
        let v = u.cross(w);

        let height = 2.0 * config.focus_distance * (config.vfov.to_radians() / 2.0).tan();
        let width = height * config.aspect_ratio;
        let horizontal = width * u;
        let vertical = height * v;
        // Stored relative to the position so `get_ray` works purely in
        // offsets.
        let lower_left = config.focus_distance * w - 0.5 * horizontal - 0.5 * vertical;

        Ok(Self {
            position: config.position,
            u,
            v,
            lower_left,
            horizontal,
            vertical,
            lens_radius: config.aperture / 2.0,
        })
    }

    /// Ray through normalized viewport coordinates `s`, `t` in [0, 1].
    ///
    /// With a non-zero aperture the origin is jittered on the lens disk and
    /// the target compensated, so all rays through a pixel converge at the
    /// same focal-plane point.
    pub fn get_ray<R: Rng + ?Sized>(&self, s: f32, t: f32, rng: &mut R) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random::in_unit_disk(rng);
            rd.x * self.u + rd.y * self.v
        } else {
            Vec3A::ZERO
        };
        let direction = self.lower_left + s * self.horizontal + t * self.vertical - offset;
        Ray::new(self.position + offset, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn square_config() -> CameraConfig {
        CameraConfig {
            aspect_ratio: 1.0,
            ..CameraConfig::default()
        }
    }

    #[test]
    fn up_vector_parallel_to_view_is_rejected() {
        let config = CameraConfig {
            aim: Point3::new(0.0, 1.0, 0.0),
            vup: Vec3A::Y,
            ..CameraConfig::default()
        };
        assert!(matches!(Camera::new(&config), Err(Error::DegenerateCamera)));
    }

    #[test]
    fn aim_at_position_is_rejected() {
        let config = CameraConfig {
            aim: Point3::ZERO,
            ..CameraConfig::default()
        };
        assert!(matches!(Camera::new(&config), Err(Error::DegenerateCamera)));
    }

    #[test]
    fn centered_ray_points_at_the_aim() {
        let camera = Camera::new(&square_config()).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert!((ray.direction - Vec3A::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert_eq!(ray.origin, Point3::ZERO);
    }

    #[test]
    fn viewport_edge_matches_the_field_of_view() {
        // 90 degree vfov on a square viewport: the right edge midpoint sits
        // 45 degrees off axis.
        let camera = Camera::new(&square_config()).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let ray = camera.get_ray(1.0, 0.5, &mut rng);
        let expected = Vec3A::new(1.0, 0.0, -1.0).normalize();
        assert!((ray.direction - expected).length() < 1e-6);
    }

    #[test]
    fn lens_offset_keeps_the_focal_target_fixed() {
        let config = CameraConfig {
            aspect_ratio: 1.0,
            aperture: 0.5,
            focus_distance: 3.0,
            ..CameraConfig::default()
        };
        let camera = Camera::new(&config).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(11);

        // Every ray through the viewport center must pass through the focal
        // point regardless of where on the lens it starts.
        for _ in 0..32 {
            let ray = camera.get_ray(0.5, 0.5, &mut rng);
            let focal_point = Point3::new(0.0, 0.0, -3.0);
            let to_focal = focal_point - ray.origin;
            let t = to_focal.length();
            assert!((ray.at(t) - focal_point).length() < 1e-4);
        }
    }
}
