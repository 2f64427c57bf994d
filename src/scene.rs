//! Demo scene construction.

use rand::Rng;

use crate::error::Error;
use crate::hittable::HittableList;
use crate::material::Material;
use crate::random;
use crate::sphere::Sphere;
use crate::vec::{Color, Point3};

/// The book-cover scene: a ground sphere, a 22x22 grid of random small
/// spheres, and three large feature spheres.
pub fn book_cover<R: Rng + ?Sized>(rng: &mut R) -> Result<HittableList, Error> {
    let mut world = HittableList::new();

    // Ground sphere
    let ground = Material::lambertian(Color::new(0.5, 0.5, 0.5));
    world.add(Box::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )?));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = rng.random::<f32>();
            let center = Point3::new(
                a as f32 + 0.9 * rng.random::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.random::<f32>(),
            );

            // Keep clear of the large feature spheres.
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                Material::lambertian(random::color(rng) * random::color(rng))
            } else if choose_mat < 0.95 {
                Material::metal(
                    random::color_range(rng, 0.5, 1.0),
                    random::range(rng, 0.0, 0.5),
                )
            } else {
                Material::dielectric(1.5)
            };
            world.add(Box::new(Sphere::new(center, 0.2, material)?));
        }
    }

    // Three large feature spheres
    world.add(Box::new(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        Material::dielectric(1.5),
    )?));
    world.add(Box::new(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Material::lambertian(Color::new(0.4, 0.2, 0.1)),
    )?));
    world.add(Box::new(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Material::metal(Color::new(0.7, 0.6, 0.5), 0.0),
    )?));

    Ok(world)
}

/// Five-sphere scene with a hollow glass shell: a negative-radius inner
/// sphere nested in the left glass sphere flips its normal, turning the pair
/// into a thin shell of glass.
pub fn hollow_glass() -> Result<HittableList, Error> {
    let mut world = HittableList::new();

    let ground = Material::lambertian(Color::new(0.8, 0.8, 0.0));
    let center = Material::lambertian(Color::new(0.1, 0.2, 0.5));
    let glass = Material::dielectric(1.5);
    let metal = Material::metal(Color::new(0.8, 0.6, 0.2), 0.0);

    world.add(Box::new(Sphere::new(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )?));
    world.add(Box::new(Sphere::new(
        Point3::new(0.0, 0.0, -1.0),
        0.5,
        center,
    )?));
    world.add(Box::new(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        0.5,
        glass,
    )?));
    world.add(Box::new(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        -0.45,
        glass,
    )?));
    world.add(Box::new(Sphere::new(
        Point3::new(1.0, 0.0, -1.0),
        0.5,
        metal,
    )?));

    Ok(world)
}
