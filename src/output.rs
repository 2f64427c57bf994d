//! Image output: PNG and EXR files, plus TEV live preview.
//!
//! Everything here consumes a resolved [`Film`]; encoding and I/O sit
//! outside the render core. PNG gets the film's gamma-2 8-bit resolve, EXR
//! and TEV receive the linear values untouched.

use std::net::TcpStream;

use image::{ImageBuffer, Rgb};
use log::{debug, info, warn};
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

use crate::renderer::Film;

/// Save `film` as an 8-bit PNG with gamma-2 correction.
///
/// I/O failures are logged as warnings rather than propagated; a failed save
/// should not abort a render that already finished.
pub fn save_image_as_png(film: &Film, output_path: &str) {
    let image: Option<ImageBuffer<Rgb<u8>, Vec<u8>>> =
        ImageBuffer::from_raw(film.width(), film.height(), film.to_rgb8());
    match image {
        Some(image) => match image.save(output_path) {
            Ok(()) => info!("Image saved as {}", output_path),
            Err(e) => warn!("Failed to save image: {}", e),
        },
        None => warn!("Film dimensions do not match its pixel buffer"),
    }
}

/// Save `film` as a linear 32-bit float EXR, preserving full dynamic range.
pub fn save_image_as_exr(film: &Film, output_path: &str) {
    let result = exr::prelude::write_rgb_file(
        output_path,
        film.width() as usize,
        film.height() as usize,
        |x, y| {
            let c = film.pixel(y as u32, x as u32);
            (c.r(), c.g(), c.b())
        },
    );

    match result {
        Ok(_) => info!("HDR image saved as EXR: {}", output_path),
        Err(e) => warn!("Failed to save EXR image: {}", e),
    }
}

/// Send the linear film to a running TEV instance for preview.
///
/// `tev_address` may omit the port; TEV's default of 14158 is appended.
pub fn send_image_to_tev(film: &Film, tev_address: &str) {
    let tev_address = if tev_address.contains(':') {
        tev_address.to_string()
    } else {
        format!("{}:14158", tev_address)
    };

    debug!("Attempting to connect to TEV at {}", tev_address);
    let stream = match TcpStream::connect(&tev_address) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("Failed to connect to TEV on {}: {}", tev_address, e);
            return;
        }
    };
    if let Err(e) = stream.set_nodelay(true) {
        debug!("Failed to set TCP_NODELAY: {}", e);
    }
    let mut client = TevClient::wrap(stream);

    if let Err(e) = client.send(PacketCreateImage {
        image_name: "lumenpath_output",
        width: film.width(),
        height: film.height(),
        channel_names: &["R", "G", "B"],
        grab_focus: true,
    }) {
        warn!("Failed to create image in TEV: {}", e);
        return;
    }

    // TEV wants planar channels (RRR...GGG...BBB...), the film stores
    // interleaved colors.
    let pixel_count = film.pixels().len();
    let mut data = Vec::with_capacity(pixel_count * 3);
    for color in film.pixels() {
        data.push(color.r());
    }
    for color in film.pixels() {
        data.push(color.g());
    }
    for color in film.pixels() {
        data.push(color.b());
    }

    let offset = pixel_count as u64;
    match client.send(PacketUpdateImage {
        image_name: "lumenpath_output",
        grab_focus: false,
        channel_names: &["R", "G", "B"],
        x: 0,
        y: 0,
        width: film.width(),
        height: film.height(),
        channel_offsets: &[0, offset, 2 * offset],
        channel_strides: &[1, 1, 1],
        data: &data,
    }) {
        Ok(_) => info!("Image sent to TEV at {}", tev_address),
        Err(e) => warn!("Failed to send image data to TEV: {}", e),
    }
}
