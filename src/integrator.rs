//! Radiance along a single ray.

use rand::Rng;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec::Color;

/// Lower intersection bound; keeps scattered rays from re-hitting the
/// surface they just left (shadow acne).
const T_MIN: f32 = 0.01;
/// Upper intersection bound, the scene-extent cutoff.
const T_MAX: f32 = 1000.0;

/// Zenith color of the background gradient.
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Radiance arriving along `ray` from the scene.
///
/// Follows the path through up to `max_depth` scatter events, folding each
/// bounce's attenuation into a running throughput instead of recursing, so
/// stack use stays flat no matter how deep the bounce limit is. Paths that
/// outlive the budget resolve to black, an intentional truncation bias that
/// callers keep negligible by choosing `max_depth` generously.
pub fn ray_color<R: Rng + ?Sized>(
    ray: &Ray,
    world: &dyn Hittable,
    max_depth: u32,
    rng: &mut R,
) -> Color {
    let mut current = *ray;
    let mut throughput = Color::WHITE;

    for _ in 0..=max_depth {
        match world.hit(&current, Interval::new(T_MIN, T_MAX)) {
            Some(rec) => match rec.material.scatter(&current, &rec, rng) {
                Some(event) => {
                    throughput = throughput * event.attenuation;
                    current = event.ray;
                }
                None => return Color::BLACK,
            },
            None => return throughput * sky(&current),
        }
    }

    Color::BLACK
}

/// Background gradient: white at the nadir blending to blue at the zenith.
fn sky(ray: &Ray) -> Color {
    let t = 0.5 * (ray.direction.y + 1.0);
    Color::WHITE.lerp(SKY_BLUE, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::HittableList;
    use crate::material::Material;
    use crate::sphere::Sphere;
    use crate::vec::Point3;
    use glam::Vec3A;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn empty_scene_returns_the_sky_gradient() {
        let world = HittableList::new();
        let mut rng = ChaCha20Rng::seed_from_u64(0);

        let up = Ray::new(Point3::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        assert_eq!(ray_color(&up, &world, 10, &mut rng), SKY_BLUE);

        let down = Ray::new(Point3::ZERO, Vec3A::new(0.0, -1.0, 0.0));
        assert_eq!(ray_color(&down, &world, 10, &mut rng), Color::WHITE);
    }

    #[test]
    fn depth_never_consumed_on_a_miss() {
        // The bounce budget only matters once something is hit, so a miss at
        // depth zero still yields the full sky color.
        let world = HittableList::new();
        let ray = Ray::new(Point3::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(ray_color(&ray, &world, 0, &mut rng), SKY_BLUE);
    }

    #[test]
    fn exhausted_bounce_budget_resolves_black() {
        // Camera sealed inside a diffuse sphere: every segment hits and
        // scatters, so the budget always runs out.
        let mut world = HittableList::new();
        let material = Material::lambertian(Color::new(0.9, 0.9, 0.9));
        world.add(Box::new(
            Sphere::new(Point3::ZERO, 100.0, material).unwrap(),
        ));

        let ray = Ray::new(Point3::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        assert_eq!(ray_color(&ray, &world, 3, &mut rng), Color::BLACK);
    }
}
