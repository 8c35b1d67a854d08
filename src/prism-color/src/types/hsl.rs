use std::fmt;

use super::{ColorSpace, Hex, Hexa, Hsla, Hsv, Rgb, Rgba};
use crate::components::{Alpha, HslComponents};
use crate::convert;
use crate::error::Result;
use crate::parse;
use crate::parser::ColorParser;
use crate::value::ColorKind;

/// A hue/saturation/lightness color, printed as `hsl(h,s,l)`.
///
/// Components keep full precision; the printed form rounds each to an
/// integer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    hsl: HslComponents,
}

impl Hsl {
    /// Creates a checked color. Hue is in degrees (`0..=360`), saturation and
    /// lightness in percent.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self> {
        HslComponents::new(hue, saturation, lightness).map(Self::from)
    }

    /// Hue in `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hsl.hue
    }

    /// Saturation in percent.
    pub fn saturation(&self) -> f64 {
        self.hsl.saturation
    }

    /// Lightness in percent.
    pub fn lightness(&self) -> f64 {
        self.hsl.lightness
    }

    /// Returns a copy with a different hue.
    pub fn with_hue(self, hue: f64) -> Result<Self> {
        Self::new(hue, self.hsl.saturation, self.hsl.lightness)
    }

    /// Returns a copy with a different saturation.
    pub fn with_saturation(self, saturation: f64) -> Result<Self> {
        Self::new(self.hsl.hue, saturation, self.hsl.lightness)
    }

    /// Returns a copy with a different lightness.
    pub fn with_lightness(self, lightness: f64) -> Result<Self> {
        Self::new(self.hsl.hue, self.hsl.saturation, lightness)
    }
}

impl From<HslComponents> for Hsl {
    fn from(hsl: HslComponents) -> Self {
        Self { hsl }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, s, l] = self.hsl.rounded();
        write!(f, "hsl({h},{s},{l})")
    }
}

impl ColorSpace for Hsl {
    const KIND: ColorKind = ColorKind::Hsl;

    type Components = HslComponents;

    fn decode(text: &str, parser: &ColorParser) -> Option<Self> {
        parse::hsl(text, parser.text_precision()).map(Self::from)
    }

    fn from_named(hex: Hex, _parser: &ColorParser) -> Self {
        hex.to_hsl()
    }

    fn values(&self) -> HslComponents {
        self.hsl
    }

    fn to_hex(&self) -> Hex {
        Hex::from(convert::hsl_to_rgb(self.hsl))
    }

    fn to_hexa(&self) -> Hexa {
        Hexa::from_parts(convert::hsl_to_rgb(self.hsl), Alpha::OPAQUE)
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(convert::hsl_to_rgb(self.hsl))
    }

    fn to_rgba(&self) -> Rgba {
        Rgba::from_parts(convert::hsl_to_rgb(self.hsl), Alpha::OPAQUE)
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }

    fn to_hsla(&self) -> Hsla {
        Hsla::from_parts(self.hsl, Alpha::OPAQUE)
    }

    fn to_hsv(&self) -> Hsv {
        Hsv::from(convert::hsl_to_hsv(self.hsl))
    }

    fn fmt_exact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, s, l] = self.hsl.to_array();
        write!(f, "hsl({h},{s},{l})")
    }
}
