use std::fmt;

use super::{ColorSpace, Hex, Hsl, Hsla, Hsv, Rgb, Rgba};
use crate::components::{Alpha, RgbComponents, RgbaComponents};
use crate::convert;
use crate::error::Result;
use crate::parse;
use crate::parser::ColorParser;
use crate::value::ColorKind;

/// A hex color with an alpha byte, printed as `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hexa {
    rgb: RgbComponents,
    alpha: Alpha,
}

impl Hexa {
    /// Creates a color from channels and an alpha in `0..=1`.
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Result<Self> {
        Ok(Self::from_parts(
            RgbComponents::new(red, green, blue),
            Alpha::new(alpha)?,
        ))
    }

    /// Alpha is stored as the byte it prints as.
    pub(crate) fn from_parts(rgb: RgbComponents, alpha: Alpha) -> Self {
        Self {
            rgb,
            alpha: Alpha::from_hex_byte(alpha.to_hex_byte()),
        }
    }

    /// Red channel.
    pub fn red(&self) -> u8 {
        self.rgb.red
    }

    /// Green channel.
    pub fn green(&self) -> u8 {
        self.rgb.green
    }

    /// Blue channel.
    pub fn blue(&self) -> u8 {
        self.rgb.blue
    }

    /// Alpha in `0..=1`, decoded as `byte / 255`.
    pub fn alpha(&self) -> f64 {
        self.alpha.value()
    }

    /// Returns a copy with a different alpha.
    pub fn with_alpha(self, alpha: f64) -> Result<Self> {
        Ok(Self::from_parts(self.rgb, Alpha::new(alpha)?))
    }

    /// Returns a copy with a different red channel.
    pub fn with_red(self, red: u8) -> Self {
        Self::from_parts(RgbComponents { red, ..self.rgb }, self.alpha)
    }

    /// Returns a copy with a different green channel.
    pub fn with_green(self, green: u8) -> Self {
        Self::from_parts(RgbComponents { green, ..self.rgb }, self.alpha)
    }

    /// Returns a copy with a different blue channel.
    pub fn with_blue(self, blue: u8) -> Self {
        Self::from_parts(RgbComponents { blue, ..self.rgb }, self.alpha)
    }
}

impl fmt::Display for Hexa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}{:02x}",
            self.rgb.to_hex_string(),
            self.alpha.to_hex_byte()
        )
    }
}

impl ColorSpace for Hexa {
    const KIND: ColorKind = ColorKind::Hexa;

    type Components = RgbaComponents;

    fn decode(text: &str, _parser: &ColorParser) -> Option<Self> {
        parse::hexa(text).map(|(rgb, alpha)| Self::from_parts(rgb, alpha))
    }

    fn from_named(hex: Hex, _parser: &ColorParser) -> Self {
        hex.to_hexa()
    }

    fn values(&self) -> RgbaComponents {
        RgbaComponents::from_parts(self.rgb, self.alpha)
    }

    fn to_hex(&self) -> Hex {
        Hex::from(self.rgb)
    }

    fn to_hexa(&self) -> Hexa {
        *self
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(self.rgb)
    }

    fn to_rgba(&self) -> Rgba {
        Rgba::from_parts(self.rgb, self.alpha)
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from(convert::rgb_to_hsl(self.rgb))
    }

    fn to_hsla(&self) -> Hsla {
        Hsla::from_parts(convert::rgb_to_hsl(self.rgb), self.alpha)
    }

    fn to_hsv(&self) -> Hsv {
        Hsv::from(convert::rgb_to_hsv(self.rgb))
    }
}
