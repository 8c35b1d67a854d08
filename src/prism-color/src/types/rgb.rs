use std::fmt;

use super::{ColorSpace, Hex, Hexa, Hsl, Hsla, Hsv, Rgba};
use crate::components::{Alpha, RgbComponents};
use crate::convert;
use crate::parse;
use crate::parser::ColorParser;
use crate::value::ColorKind;

/// An opaque RGB color, printed as `rgb(r,g,b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    rgb: RgbComponents,
}

impl Rgb {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a color from channel values.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            rgb: RgbComponents::new(red, green, blue),
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

    /// Returns a copy with a different red channel.
    pub fn with_red(self, red: u8) -> Self {
        Self::from(RgbComponents { red, ..self.rgb })
    }

    /// Returns a copy with a different green channel.
    pub fn with_green(self, green: u8) -> Self {
        Self::from(RgbComponents { green, ..self.rgb })
    }

    /// Returns a copy with a different blue channel.
    pub fn with_blue(self, blue: u8) -> Self {
        Self::from(RgbComponents { blue, ..self.rgb })
    }

    /// Channels divided by 255.
    pub fn unit_values(&self) -> [f64; 3] {
        self.rgb.unit()
    }
}

impl From<RgbComponents> for Rgb {
    fn from(rgb: RgbComponents) -> Self {
        Self { rgb }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(channels: (u8, u8, u8)) -> Self {
        Self::from(RgbComponents::from(channels))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({},{},{})",
            self.rgb.red, self.rgb.green, self.rgb.blue
        )
    }
}

impl ColorSpace for Rgb {
    const KIND: ColorKind = ColorKind::Rgb;

    type Components = RgbComponents;

    fn decode(text: &str, _parser: &ColorParser) -> Option<Self> {
        parse::rgb(text).map(Self::from)
    }

    fn from_named(hex: Hex, _parser: &ColorParser) -> Self {
        hex.to_rgb()
    }

    fn values(&self) -> RgbComponents {
        self.rgb
    }

    fn to_hex(&self) -> Hex {
        Hex::from(self.rgb)
    }

    fn to_hexa(&self) -> Hexa {
        Hexa::from_parts(self.rgb, Alpha::OPAQUE)
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_rgba(&self) -> Rgba {
        Rgba::from_parts(self.rgb, Alpha::OPAQUE)
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from(convert::rgb_to_hsl(self.rgb))
    }

    fn to_hsla(&self) -> Hsla {
        Hsla::from_parts(convert::rgb_to_hsl(self.rgb), Alpha::OPAQUE)
    }

    fn to_hsv(&self) -> Hsv {
        Hsv::from(convert::rgb_to_hsv(self.rgb))
    }
}
