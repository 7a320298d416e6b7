pub mod canvas;
pub mod encode;
pub mod error;
pub mod fonts;
pub mod image;
pub mod logging;
pub mod pixel;
pub mod text;

pub use canvas::{CanvasPlan, GlyphMetrics, RenderRequest};
pub use error::{Error, Result};
pub use image::Image;
pub use pixel::{Rgb, Rgba};
pub use text::Font;

pub mod prelude {
    pub use super::canvas::halo_offsets;
    pub use super::fonts::FontDatabase;
    pub use super::{
        CanvasPlan, Error, Font, GlyphMetrics, Image, RenderRequest, Result, Rgb, Rgba,
    };
}
