//! Implements the font loading, text measurement and rasterizing interface.

#![allow(clippy::cast_precision_loss, clippy::too_many_arguments)]

use crate::{
    canvas::{halo_offsets, GlyphMetrics},
    Error::FontError,
    Image, Rgba,
};

use fontdue::FontSettings;
use std::{fs::File, io::Read, path::Path};

/// Represents a single font used to measure and render text.
/// Currently, this supports TrueType and OpenType fonts.
#[allow(clippy::doc_markdown)]
#[derive(Clone)]
pub struct Font {
    inner: fontdue::Font,
    settings: FontSettings,
}

impl Font {
    /// Opens the font from the given path.
    ///
    /// The optimal size is not the fixed size of the font - rather it is the size to optimize
    /// rasterizing the font for.
    ///
    /// Lower sizes will look worse but perform faster, while higher sizes will
    /// look better but perform slower. It is best to set this to the size that will likely be
    /// the most used.
    ///
    /// # Errors
    /// * Failed to load the font.
    pub fn open<P: AsRef<Path>>(path: P, optimal_size: f32) -> crate::Result<Self> {
        Self::from_reader(File::open(path)?, optimal_size)
    }

    /// Loads the font from the given byte slice. Useful for the `include_bytes!` macro.
    ///
    /// # Errors
    /// * Failed to load the font.
    pub fn from_bytes(bytes: &[u8], optimal_size: f32) -> crate::Result<Self> {
        Self::from_collection(bytes, 0, optimal_size)
    }

    /// Loads the font at the given face index out of the given byte slice. The index is
    /// only meaningful for font collections (TTC/OTC files); for standalone fonts it
    /// should be 0.
    ///
    /// # Errors
    /// * Failed to load the font.
    pub fn from_collection(bytes: &[u8], index: u32, optimal_size: f32) -> crate::Result<Self> {
        let settings = FontSettings {
            scale: optimal_size,
            collection_index: index,
        };
        let inner = fontdue::Font::from_bytes(bytes, settings).map_err(FontError)?;

        Ok(Self { inner, settings })
    }

    /// Loads the font from the given byte reader. See [`from_bytes`] if you already have a byte
    /// slice - that is much more performant.
    ///
    /// # Errors
    /// * Failed to load the font.
    pub fn from_reader<R: Read>(mut buffer: R, optimal_size: f32) -> crate::Result<Self> {
        let mut out = Vec::new();
        buffer.read_to_end(&mut out)?;

        Self::from_collection(&out, 0, optimal_size)
    }

    /// Returns a reference to the [`fontdue::Font`] object associated with the font.
    /// It contains technical information about the font.
    #[must_use]
    pub const fn inner(&self) -> &fontdue::Font {
        &self.inner
    }

    /// Returns the optimal size, in pixels, of this font.
    #[must_use]
    pub const fn optimal_size(&self) -> f32 {
        self.settings.scale
    }
}

/// Measures the given text at the given size, returning the ink extent of the run
/// relative to the baseline origin in Y-down coordinates.
///
/// Glyph advances and horizontal kerning are accumulated left to right; the ink box
/// is the union of every non-whitespace glyph's bitmap bounds. Text with no ink at
/// all (empty or whitespace-only) yields zeroed ink and bearings, with only the
/// advance width populated - the sizing floors in [`plan`][crate::canvas::plan]
/// take over from there.
#[must_use]
pub fn measure(font: &Font, text: &str, size: f32) -> GlyphMetrics {
    let mut pen_x = 0.0_f32;
    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    let mut seen_ink = false;
    let mut previous = None;

    for ch in text.chars() {
        if let Some(kern) = previous.and_then(|prev| font.inner().horizontal_kern(prev, ch, size)) {
            pen_x += kern;
        }

        let metrics = font.inner().metrics(ch, size);
        if metrics.width > 0 && metrics.height > 0 && !ch.is_whitespace() {
            // fontdue reports glyph bounds Y-up relative to the baseline; flip to
            // Y-down so the top of the ink is the smallest y.
            let left = pen_x + metrics.xmin as f32;
            let top = -(metrics.ymin as f32 + metrics.height as f32);

            min_x = min_x.min(left);
            max_x = max_x.max(left + metrics.width as f32);
            min_y = min_y.min(top);
            max_y = max_y.max(top + metrics.height as f32);
            seen_ink = true;
        }

        pen_x += metrics.advance_width;
        previous = Some(ch);
    }

    if !seen_ink {
        return GlyphMetrics {
            advance_width: pen_x,
            ..GlyphMetrics::default()
        };
    }

    GlyphMetrics {
        ink_width: max_x - min_x,
        ink_height: max_y - min_y,
        bearing_x: min_x,
        bearing_y: min_y,
        advance_width: pen_x,
    }
}

/// Rasterizes the given text onto the image in a single color, with the start of the
/// baseline placed at `origin`. Coverage values from the rasterizer are alpha-blended
/// into the canvas; pixels falling outside the canvas are clipped.
pub fn draw_run(image: &mut Image, font: &Font, text: &str, size: f32, origin: (f32, f32), fill: Rgba) {
    let (origin_x, origin_y) = origin;
    let mut pen_x = origin_x;
    let mut previous = None;

    for ch in text.chars() {
        if let Some(kern) = previous.and_then(|prev| font.inner().horizontal_kern(prev, ch, size)) {
            pen_x += kern;
        }

        let (metrics, bitmap) = font.inner().rasterize(ch, size);
        if metrics.width == 0 || metrics.height == 0 || ch.is_whitespace() {
            pen_x += metrics.advance_width;
            previous = Some(ch);
            continue;
        }

        let left = (pen_x + metrics.xmin as f32).round() as i32;
        let top = (origin_y - (metrics.ymin as f32 + metrics.height as f32)).round() as i32;

        for (row, y) in bitmap.chunks_exact(metrics.width).zip(top..) {
            for (value, x) in row.iter().zip(left..) {
                let (x, y) = if x < 0 || y < 0 {
                    continue;
                } else {
                    (x as u32, y as u32)
                };

                let value = *value;
                if value == 0 {
                    continue;
                }

                if let Some(pixel) = image.get_pixel(x, y) {
                    *image.pixel_mut(x, y) = pixel.blend(fill, value);
                }
            }
        }

        pen_x += metrics.advance_width;
        previous = Some(ch);
    }
}

/// Rasterizes the given text with an outline halo: the run is first drawn once per
/// offset in the [`halo_offsets`] ring in the outline color, then once more in the
/// fill color on top. A zero thickness skips the halo entirely.
pub fn draw_outlined(
    image: &mut Image,
    font: &Font,
    text: &str,
    size: f32,
    origin: (f32, f32),
    fill: Rgba,
    outline: Rgba,
    thickness: u32,
    directions: u32,
) {
    let (origin_x, origin_y) = origin;

    for (dx, dy) in halo_offsets(thickness, directions) {
        draw_run(
            image,
            font,
            text,
            size,
            (origin_x + dx as f32, origin_y + dy as f32),
            outline,
        );
    }

    draw_run(image, font, text, size, origin, fill);
}
