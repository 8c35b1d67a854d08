use std::fmt;

use super::{ColorSpace, Hexa, Hsl, Hsla, Hsv, Rgb, Rgba};
use crate::components::{Alpha, RgbComponents};
use crate::parse;
use crate::parser::ColorParser;
use crate::value::ColorKind;

/// A six-digit hex color, printed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hex {
    rgb: RgbComponents,
}

impl Hex {
    /// Creates a hex color from channel values.
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

    /// The six lowercase hex digits without `#`.
    pub fn code(&self) -> String {
        self.rgb.to_hex_string()
    }
}

impl From<RgbComponents> for Hex {
    fn from(rgb: RgbComponents) -> Self {
        Self { rgb }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.code())
    }
}

impl ColorSpace for Hex {
    const KIND: ColorKind = ColorKind::Hex;

    type Components = RgbComponents;

    fn decode(text: &str, _parser: &ColorParser) -> Option<Self> {
        parse::hex(text).map(Self::from)
    }

    fn from_named(hex: Hex, _parser: &ColorParser) -> Self {
        hex
    }

    fn values(&self) -> RgbComponents {
        self.rgb
    }

    fn to_hex(&self) -> Hex {
        *self
    }

    fn to_hexa(&self) -> Hexa {
        Hexa::from_parts(self.rgb, Alpha::OPAQUE)
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(self.rgb)
    }

    fn to_rgba(&self) -> Rgba {
        Rgba::from_parts(self.rgb, Alpha::OPAQUE)
    }

    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    fn to_hsla(&self) -> Hsla {
        self.to_rgb().to_hsla()
    }

    fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }
}
