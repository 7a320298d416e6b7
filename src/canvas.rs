//! Canvas sizing and glyph placement.
//!
//! Everything in this module is pure arithmetic: given the measured ink extent of a
//! text run, compute how large the output canvas must be and where the baseline
//! drawing origin goes so that the inked region, its outline halo, and the requested
//! padding all fit without clipping.

use std::f32::consts::TAU;

/// Measurements of a text run returned by the font backend, relative to the nominal
/// drawing origin at the start of the baseline, in Y-down pixel coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlyphMetrics {
    /// The width of the tight ink bounding box.
    pub ink_width: f32,
    /// The height of the tight ink bounding box.
    pub ink_height: f32,
    /// Signed horizontal offset from the origin to the left edge of the ink.
    /// Negative for glyphs whose ink starts left of the origin, such as italic
    /// overhang.
    pub bearing_x: f32,
    /// Signed vertical offset from the baseline to the top edge of the ink.
    /// Negative for ink above the baseline, which is the common case.
    pub bearing_y: f32,
    /// The total advance width of the run, including trailing whitespace.
    pub advance_width: f32,
}

/// The input to the sizing computation: a line of text together with the size,
/// outline, and padding it will be rendered with.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderRequest {
    /// The line of text to render.
    pub text: String,
    /// The font size in pixels.
    pub font_size: u32,
    /// The outline thickness in pixels. Zero means no outline.
    pub outline_width: u32,
    /// The padding around the ink on all sides, in pixels.
    pub padding: u32,
    /// The minimum canvas width, as a multiple of the font size. Guards against
    /// degenerate canvases for very short or narrow text.
    pub min_width_factor: f32,
    /// The minimum canvas height, as a multiple of the font size.
    pub min_height_factor: f32,
}

impl RenderRequest {
    /// Creates a new render request with no outline, no padding, and the default
    /// minimum-size factors (1.5x the font size wide, 1.2x tall).
    #[must_use]
    pub fn new(text: impl AsRef<str>, font_size: u32) -> Self {
        Self {
            text: text.as_ref().to_string(),
            font_size,
            outline_width: 0,
            padding: 0,
            min_width_factor: 1.5,
            min_height_factor: 1.2,
        }
    }

    /// Sets the outline thickness of the request.
    #[must_use]
    pub const fn with_outline_width(mut self, outline_width: u32) -> Self {
        self.outline_width = outline_width;
        self
    }

    /// Sets the padding of the request.
    #[must_use]
    pub const fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the minimum canvas width as a multiple of the font size.
    #[must_use]
    pub const fn with_min_width_factor(mut self, factor: f32) -> Self {
        self.min_width_factor = factor;
        self
    }

    /// Sets the minimum canvas height as a multiple of the font size.
    #[must_use]
    pub const fn with_min_height_factor(mut self, factor: f32) -> Self {
        self.min_height_factor = factor;
        self
    }

    /// Computes the canvas plan for this request. See [`plan`].
    #[must_use]
    pub fn plan(&self, metrics: &GlyphMetrics) -> CanvasPlan {
        plan(self, metrics)
    }
}

/// The output of the sizing computation: the pixel dimensions of the canvas and the
/// coordinate at which the baseline drawing origin must be placed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasPlan {
    /// The canvas width in pixels.
    pub width: u32,
    /// The canvas height in pixels.
    pub height: u32,
    /// The x coordinate of the baseline drawing origin.
    pub origin_x: f32,
    /// The y coordinate of the baseline drawing origin.
    pub origin_y: f32,
}

/// Computes the canvas dimensions and baseline origin for the given request and
/// metrics.
///
/// Each side of the canvas reserves `padding + 2 * outline_width` pixels of margin
/// around the ink extent. The doubled outline margin over-allocates on purpose so
/// that stroke joins extending past the nominal outline radius never clip. The
/// absolute bearings guard against ink that starts left of or above the origin.
/// Dimensions are floored at `min_width_factor`/`min_height_factor` times the font
/// size and rounded up to whole pixels.
///
/// This function is total: degenerate metrics (empty text, zero-size ink) simply
/// fall back to the minimum dimensions.
#[must_use]
pub fn plan(request: &RenderRequest, metrics: &GlyphMetrics) -> CanvasPlan {
    let margin = (request.padding + 2 * request.outline_width) as f32;
    let font_size = request.font_size as f32;

    let content_w = metrics.bearing_x.abs() + metrics.ink_width;
    let content_h = metrics.bearing_y.abs() + metrics.ink_height;

    let full_w = (content_w + 2.0 * margin).max(request.min_width_factor * font_size);
    let full_h = (content_h + 2.0 * margin).max(request.min_height_factor * font_size);

    CanvasPlan {
        width: full_w.ceil() as u32,
        height: full_h.ceil() as u32,
        origin_x: margin - metrics.bearing_x,
        // The drawing origin is the baseline, not the top of the glyph box; shift it
        // down by one font size so the ascent region is not clipped.
        origin_y: margin - metrics.bearing_y + font_size,
    }
}

/// Returns a ring of `directions` integer offsets of radius `thickness`, used to
/// fake an outline by compositing angularly shifted copies of the text underneath
/// the fill.
///
/// A zero thickness or zero directions yields an empty ring.
#[must_use]
pub fn halo_offsets(thickness: u32, directions: u32) -> Vec<(i32, i32)> {
    if thickness == 0 || directions == 0 {
        return Vec::new();
    }

    let radius = thickness as f32;
    (0..directions)
        .map(|step| {
            let angle = TAU * step as f32 / directions as f32;
            (
                (radius * angle.cos()).round() as i32,
                (radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}
