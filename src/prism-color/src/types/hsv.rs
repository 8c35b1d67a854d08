use std::fmt;

use super::{ColorSpace, Hex, Hexa, Hsl, Hsla, Rgb, Rgba};
use crate::components::{Alpha, HsvComponents};
use crate::convert;
use crate::error::Result;
use crate::parse;
use crate::parser::ColorParser;
use crate::value::ColorKind;

/// A hue/saturation/value color, printed as `hsv(h,s,v)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    hsv: HsvComponents,
}

impl Hsv {
    /// Creates a checked color.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Result<Self> {
        HsvComponents::new(hue, saturation, value).map(Self::from)
    }

    /// Hue in `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hsv.hue
    }

    /// Saturation in percent.
    pub fn saturation(&self) -> f64 {
        self.hsv.saturation
    }

    /// Brightness in percent.
    pub fn value(&self) -> f64 {
        self.hsv.value
    }

    /// Returns a copy with a different hue.
    pub fn with_hue(self, hue: f64) -> Result<Self> {
        Self::new(hue, self.hsv.saturation, self.hsv.value)
    }

    /// Returns a copy with a different saturation.
    pub fn with_saturation(self, saturation: f64) -> Result<Self> {
        Self::new(self.hsv.hue, saturation, self.hsv.value)
    }

    /// Returns a copy with a different value.
    pub fn with_value(self, value: f64) -> Result<Self> {
        Self::new(self.hsv.hue, self.hsv.saturation, value)
    }
}

impl From<HsvComponents> for Hsv {
    fn from(hsv: HsvComponents) -> Self {
        Self { hsv }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, s, v] = self.hsv.rounded();
        write!(f, "hsv({h},{s},{v})")
    }
}

impl ColorSpace for Hsv {
    const KIND: ColorKind = ColorKind::Hsv;

    type Components = HsvComponents;

    fn decode(text: &str, parser: &ColorParser) -> Option<Self> {
        parse::hsv(text, parser.text_precision()).map(Self::from)
    }

    fn from_named(hex: Hex, _parser: &ColorParser) -> Self {
        hex.to_hsv()
    }

    fn values(&self) -> HsvComponents {
        self.hsv
    }

    fn to_hex(&self) -> Hex {
        Hex::from(convert::hsv_to_rgb(self.hsv))
    }

    fn to_hexa(&self) -> Hexa {
        Hexa::from_parts(convert::hsv_to_rgb(self.hsv), Alpha::OPAQUE)
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(convert::hsv_to_rgb(self.hsv))
    }

    fn to_rgba(&self) -> Rgba {
        Rgba::from_parts(convert::hsv_to_rgb(self.hsv), Alpha::OPAQUE)
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from(convert::hsv_to_hsl(self.hsv))
    }

    fn to_hsla(&self) -> Hsla {
        Hsla::from_parts(convert::hsv_to_hsl(self.hsv), Alpha::OPAQUE)
    }

    fn to_hsv(&self) -> Hsv {
        *self
    }

    fn fmt_exact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, s, v] = self.hsv.to_array();
        write!(f, "hsv({h},{s},{v})")
    }
}
