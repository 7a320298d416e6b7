//! The rendering canvas: a fixed-size RGBA pixel buffer.

use crate::pixel::Rgba;

/// An RGBA image buffer. This is the canvas that text is rasterized onto and that
/// the PNG encoder consumes.
#[derive(Clone)]
pub struct Image {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<Rgba>,
}

impl Image {
    /// Creates a new image of the given dimensions, filled with the given color.
    /// Use [`Rgba::transparent`] for the usual transparent canvas.
    #[must_use]
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            width,
            height,
            data: vec![fill; (width * height) as usize],
        }
    }

    #[inline]
    #[must_use]
    const fn resolve_coordinate(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Returns the width of the image.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions of the image.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the amount of pixels in the image.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.width * self.height
    }

    /// Returns true if the image contains no pixels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the pixel at the given coordinates, or `None` if the
    /// coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(&self.data[self.resolve_coordinate(x, y)])
    }

    /// Returns a reference to the pixel at the given coordinates.
    ///
    /// # Panics
    /// * The coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> &Rgba {
        &self.data[self.resolve_coordinate(x, y)]
    }

    /// Returns a mutable reference to the pixel at the given coordinates.
    ///
    /// # Panics
    /// * The coordinates are out of bounds.
    #[inline]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut Rgba {
        let pos = self.resolve_coordinate(x, y);

        &mut self.data[pos]
    }

    /// Sets the pixel at the given coordinates to the given color.
    ///
    /// # Panics
    /// * The coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba) {
        let pos = self.resolve_coordinate(x, y);

        self.data[pos] = pixel;
    }

    /// Returns a Vec of slices representing the pixels of the image.
    /// Each slice in the Vec is a row.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> Vec<&[Rgba]> {
        self.data.chunks_exact(self.width as usize).collect()
    }

    /// Returns the raw pixel data of the image, in row-major order.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[Rgba] {
        &self.data
    }
}
