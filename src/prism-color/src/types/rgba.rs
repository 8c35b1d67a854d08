use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ColorRepr, ColorSpace, Hex, Hexa, Hsl, Hsla, Hsv, Rgb};
use crate::components::{Alpha, RgbComponents, RgbaComponents};
use crate::convert;
use crate::error::Result;
use crate::parse;
use crate::parser::ColorParser;
use crate::value::ColorKind;

/// A translucent RGB color, printed as `rgba(r,g,b,a)`.
///
/// Every `Rgba` owns the background it is flattened onto when converted to a
/// space without alpha. The background defaults to opaque white and takes no
/// part in alpha-to-alpha conversions.
///
/// Over white it serializes as its text form. Any other background is kept
/// alongside: `{"color": "rgba(255,0,0,0.5)", "background": "rgb(0,0,0)"}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    rgb: RgbComponents,
    alpha: Alpha,
    background: Rgb,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::from_parts(RgbComponents::default(), Alpha::OPAQUE)
    }
}

impl Rgba {
    /// Creates a color from channels and an alpha in `0..=1`, over white.
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Result<Self> {
        Ok(Self::from_parts(
            RgbComponents::new(red, green, blue),
            Alpha::new(alpha)?,
        ))
    }

    pub(crate) fn from_parts(rgb: RgbComponents, alpha: Alpha) -> Self {
        Self {
            rgb,
            alpha,
            background: Rgb::WHITE,
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

    /// Alpha in `0..=1`.
    pub fn alpha(&self) -> f64 {
        self.alpha.value()
    }

    /// The background used when flattening.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Returns a copy flattened onto `background` instead.
    pub fn with_background(self, background: Rgb) -> Self {
        Self { background, ..self }
    }

    /// Returns a copy with a different alpha.
    pub fn with_alpha(self, alpha: f64) -> Result<Self> {
        Ok(Self {
            alpha: Alpha::new(alpha)?,
            ..self
        })
    }

    /// Returns a copy with a different red channel.
    pub fn with_red(self, red: u8) -> Self {
        Self {
            rgb: RgbComponents { red, ..self.rgb },
            ..self
        }
    }

    /// Returns a copy with a different green channel.
    pub fn with_green(self, green: u8) -> Self {
        Self {
            rgb: RgbComponents { green, ..self.rgb },
            ..self
        }
    }

    /// Returns a copy with a different blue channel.
    pub fn with_blue(self, blue: u8) -> Self {
        Self {
            rgb: RgbComponents { blue, ..self.rgb },
            ..self
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.rgb.red, self.rgb.green, self.rgb.blue, self.alpha
        )
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.background == Rgb::WHITE {
            return serializer.collect_str(self);
        }
        let mut state = serializer.serialize_struct("Rgba", 2)?;
        state.serialize_field("color", &self.to_string())?;
        state.serialize_field("background", &self.background)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let parser = ColorParser::exact();
        let rgba = match ColorRepr::deserialize(deserializer)? {
            ColorRepr::Text(text) => parser.parse::<Self>(&text),
            ColorRepr::Layered { color, background } => parser
                .parse::<Self>(&color)
                .map(|rgba| rgba.with_background(background)),
        };
        rgba.map_err(serde::de::Error::custom)
    }
}

impl ColorSpace for Rgba {
    const KIND: ColorKind = ColorKind::Rgba;

    type Components = RgbaComponents;

    fn decode(text: &str, parser: &ColorParser) -> Option<Self> {
        parse::rgba(text, parser.text_precision())
            .map(|(rgb, alpha)| Self::from_parts(rgb, alpha).with_background(parser.background()))
    }

    fn from_named(hex: Hex, parser: &ColorParser) -> Self {
        hex.to_rgba().with_background(parser.background())
    }

    fn values(&self) -> RgbaComponents {
        RgbaComponents::from_parts(self.rgb, self.alpha)
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_hexa(&self) -> Hexa {
        Hexa::from_parts(self.rgb, self.alpha)
    }

    /// Flattens onto the background: `floor((1 - a) * bg + a * c)` per channel.
    fn to_rgb(&self) -> Rgb {
        Rgb::from(convert::composite(
            self.rgb,
            self.alpha,
            self.background.values(),
        ))
    }

    fn to_rgba(&self) -> Rgba {
        *self
    }

    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    fn to_hsla(&self) -> Hsla {
        Hsla::from_parts(convert::rgb_to_hsl(self.rgb), self.alpha)
    }

    fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }
}
