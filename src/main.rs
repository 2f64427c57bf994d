use clap::Parser;
use glam::Vec3A;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

mod cli;
mod logger;

use cli::{Args, ScenePreset};
use logger::init_logger;
use lumenpath::camera::{Camera, CameraConfig};
use lumenpath::error::Error;
use lumenpath::hittable::HittableList;
use lumenpath::output::{save_image_as_exr, save_image_as_png, send_image_to_tev};
use lumenpath::renderer::Renderer;
use lumenpath::scene;
use lumenpath::vec::Point3;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("Lumenpath - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        "Image resolution: {}x{}, samples per pixel: {}, seed: {}",
        args.width, args.height, args.samples_per_pixel, seed
    );

    let (world, camera) = build_scene(args, seed)?;

    let threads = args.threads.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    });
    let renderer = Renderer {
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        threads,
        seed,
    };
    let film = renderer.render(&camera, &world, args.width, args.height);

    // Send image to TEV if requested
    if args.tev || args.tev_address.is_some() {
        let tev_address = args.tev_address.as_deref().unwrap_or("localhost:14158");
        send_image_to_tev(&film, tev_address);
    }

    // Save image based on file extension
    if args.output.ends_with(".exr") {
        save_image_as_exr(&film, &args.output);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&film, &args.output);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .png and .exr formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }

    Ok(())
}

/// Build the selected demo scene and its matching camera.
fn build_scene(args: &Args, seed: u64) -> Result<(HittableList, Camera), Error> {
    let aspect_ratio = args.width as f32 / args.height as f32;
    match args.scene {
        ScenePreset::Cover => {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let world = scene::book_cover(&mut rng)?;
            let camera = Camera::new(&CameraConfig {
                position: Point3::new(13.0, 2.0, 3.0),
                aim: Point3::ZERO,
                vup: Vec3A::Y,
                vfov: 20.0,
                aspect_ratio,
                aperture: 0.0,
                focus_distance: 10.0,
            })?;
            Ok((world, camera))
        }
        ScenePreset::Glass => {
            let world = scene::hollow_glass()?;
            let camera = Camera::new(&CameraConfig {
                position: Point3::ZERO,
                aim: Point3::new(0.0, 0.0, -1.0),
                vup: Vec3A::Y,
                vfov: 90.0,
                aspect_ratio,
                aperture: 0.0,
                focus_distance: 1.0,
            })?;
            Ok((world, camera))
        }
    }
}
