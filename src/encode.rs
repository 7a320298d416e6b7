//! PNG32 encoding of rendered canvases.

use crate::{Image, Result};

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Encodes images as 8-bit RGBA PNGs, which keeps the transparent background of the
/// canvas intact.
pub struct PngEncoder;

impl PngEncoder {
    /// Encodes the given image into the given writer.
    ///
    /// # Errors
    /// * An error occured while encoding or writing the image.
    pub fn encode(image: &Image, dest: impl Write) -> Result<()> {
        let mut encoder = png::Encoder::new(dest, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;

        let mut data = Vec::with_capacity(image.len() as usize * 4);
        for pixel in image.data() {
            data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }

        writer.write_image_data(&data)?;
        writer.finish()?;

        Ok(())
    }
}

/// Saves the given image to the given path as a PNG.
///
/// # Errors
/// * An error occured while creating the file or encoding the image.
pub fn save(image: &Image, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;

    PngEncoder::encode(image, BufWriter::new(file))
}
