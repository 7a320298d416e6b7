//! Color types used by the rendering canvas.

use crate::error::{Error::InvalidHexCode, Result};

/// Represents an RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    /// The red component of the color.
    pub r: u8,
    /// The green component of the color.
    pub g: u8,
    /// The blue component of the color.
    pub b: u8,
}

impl Rgb {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a completely black color.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Creates a completely white color.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

/// Represents an RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    /// The red component of the color.
    pub r: u8,
    /// The green component of the color.
    pub g: u8,
    /// The blue component of the color.
    pub b: u8,
    /// The alpha component of the color.
    pub a: u8,
}

impl Rgba {
    /// Creates a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from an RGB color.
    #[must_use]
    pub const fn from_rgb(Rgb { r, g, b }: Rgb) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Creates a completely transparent color.
    #[must_use]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Creates an opaque black color.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Creates an opaque white color.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Parses a color from a hex code in the form `#RRGGBB` or `#RRGGBBAA`.
    /// The leading `#` is optional. Six-digit codes are treated as opaque.
    ///
    /// # Errors
    /// * The hex code is malformed or has an unsupported length.
    pub fn from_hex(hex: impl AsRef<str>) -> Result<Self> {
        let hex = hex.as_ref();
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let err = || InvalidHexCode(hex.to_string());
        match digits.len() {
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;
                Ok(Self::new(
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                    255,
                ))
            }
            8 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;
                Ok(Self::new(
                    (value >> 24) as u8,
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ))
            }
            _ => Err(err()),
        }
    }

    /// Composites `src` over this color, with the source alpha scaled by the given
    /// anti-aliasing coverage value. A coverage of 0 leaves the color untouched and a
    /// coverage of 255 is a plain source-over blend.
    #[must_use]
    pub fn blend(self, src: Self, coverage: u8) -> Self {
        let sa = u32::from(src.a) * u32::from(coverage) / 255;
        if sa == 0 {
            return self;
        }

        let da = u32::from(self.a);
        let out_a = sa + da * (255 - sa) / 255;
        if out_a == 0 {
            return Self::transparent();
        }

        let channel = |s: u8, d: u8| {
            ((u32::from(s) * sa + u32::from(d) * da * (255 - sa) / 255) / out_a) as u8
        };

        Self {
            r: channel(src.r, self.r),
            g: channel(src.g, self.g),
            b: channel(src.b, self.b),
            a: out_a as u8,
        }
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Rgba> for Rgb {
    fn from(Rgba { r, g, b, .. }: Rgba) -> Self {
        Self { r, g, b }
    }
}
