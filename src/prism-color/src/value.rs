//! The closed set of color kinds and a value that can hold any of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::contrast;
use crate::error::{ColorError, Result};
use crate::parser::ColorParser;
use crate::types::{ColorRepr, ColorSpace, Hex, Hexa, Hsl, Hsla, Hsv, Rgb, Rgba};

// ============================================================================
// ColorKind
// ============================================================================

/// Identifies one of the seven color representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    /// `#rrggbb`
    Hex,
    /// `#rrggbbaa`
    Hexa,
    /// `rgb(r,g,b)`
    Rgb,
    /// `rgba(r,g,b,a)`
    Rgba,
    /// `hsl(h,s,l)`
    Hsl,
    /// `hsla(h,s,l,a)`
    Hsla,
    /// `hsv(h,s,v)`
    Hsv,
}

impl ColorKind {
    /// Every kind, in the order the factory tries them.
    pub const ALL: [Self; 7] = [
        Self::Hex,
        Self::Hexa,
        Self::Rgb,
        Self::Rgba,
        Self::Hsl,
        Self::Hsla,
        Self::Hsv,
    ];

    /// Lowercase name, e.g. `"hsla"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Hexa => "hexa",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsv => "hsv",
        }
    }

    /// Returns `true` for kinds that carry an alpha component.
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Hexa | Self::Rgba | Self::Hsla)
    }

    /// Number of numeric components, alpha included.
    pub const fn component_count(self) -> usize {
        if self.has_alpha() { 4 } else { 3 }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::Unrecognized(s.to_string()))
    }
}

// ============================================================================
// ColorValue
// ============================================================================

/// A color of any kind, as produced by the factory functions on
/// [`ColorParser`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    /// A [`Hex`] color.
    Hex(Hex),
    /// A [`Hexa`] color.
    Hexa(Hexa),
    /// An [`Rgb`] color.
    Rgb(Rgb),
    /// An [`Rgba`] color.
    Rgba(Rgba),
    /// An [`Hsl`] color.
    Hsl(Hsl),
    /// An [`Hsla`] color.
    Hsla(Hsla),
    /// An [`Hsv`] color.
    Hsv(Hsv),
}

/// Calls the same `ColorSpace` method on whichever variant is held.
macro_rules! dispatch {
    ($value:expr, $color:ident => $body:expr) => {
        match $value {
            ColorValue::Hex($color) => $body,
            ColorValue::Hexa($color) => $body,
            ColorValue::Rgb($color) => $body,
            ColorValue::Rgba($color) => $body,
            ColorValue::Hsl($color) => $body,
            ColorValue::Hsla($color) => $body,
            ColorValue::Hsv($color) => $body,
        }
    };
}

impl ColorValue {
    /// The kind of the held value.
    pub fn kind(&self) -> ColorKind {
        match self {
            Self::Hex(_) => ColorKind::Hex,
            Self::Hexa(_) => ColorKind::Hexa,
            Self::Rgb(_) => ColorKind::Rgb,
            Self::Rgba(_) => ColorKind::Rgba,
            Self::Hsl(_) => ColorKind::Hsl,
            Self::Hsla(_) => ColorKind::Hsla,
            Self::Hsv(_) => ColorKind::Hsv,
        }
    }

    /// Converts to [`Hex`].
    pub fn to_hex(&self) -> Hex {
        dispatch!(self, c => c.to_hex())
    }

    /// Converts to [`Hexa`].
    pub fn to_hexa(&self) -> Hexa {
        dispatch!(self, c => c.to_hexa())
    }

    /// Converts to [`Rgb`], compositing `Rgba` onto its background.
    pub fn to_rgb(&self) -> Rgb {
        dispatch!(self, c => c.to_rgb())
    }

    /// Converts to [`Rgba`].
    pub fn to_rgba(&self) -> Rgba {
        dispatch!(self, c => c.to_rgba())
    }

    /// Converts to [`Hsl`].
    pub fn to_hsl(&self) -> Hsl {
        dispatch!(self, c => c.to_hsl())
    }

    /// Converts to [`Hsla`].
    pub fn to_hsla(&self) -> Hsla {
        dispatch!(self, c => c.to_hsla())
    }

    /// Converts to [`Hsv`].
    pub fn to_hsv(&self) -> Hsv {
        dispatch!(self, c => c.to_hsv())
    }

    /// Converts to the given kind.
    pub fn convert(&self, kind: ColorKind) -> Self {
        match kind {
            ColorKind::Hex => self.to_hex().into(),
            ColorKind::Hexa => self.to_hexa().into(),
            ColorKind::Rgb => self.to_rgb().into(),
            ColorKind::Rgba => self.to_rgba().into(),
            ColorKind::Hsl => self.to_hsl().into(),
            ColorKind::Hsla => self.to_hsla().into(),
            ColorKind::Hsv => self.to_hsv().into(),
        }
    }

    /// Alpha of the held value; `1.0` for kinds without alpha.
    pub fn alpha(&self) -> f64 {
        match self {
            Self::Hexa(c) => c.alpha(),
            Self::Rgba(c) => c.alpha(),
            Self::Hsla(c) => c.alpha(),
            _ => 1.0,
        }
    }

    /// WCAG relative luminance of the opaque rendering of this color.
    pub fn relative_luminance(&self) -> f64 {
        contrast::relative_luminance(&self.to_rgb())
    }

    /// WCAG contrast ratio against `other`, in `1.0..=21.0`.
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        contrast::contrast_ratio(&self.to_rgb(), &other.to_rgb())
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, c => fmt::Display::fmt(c, f))
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        ColorParser::shared().parse_any(s)
    }
}

/// Serializes the wrapped color the way its own type does.
impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        dispatch!(self, c => c.serialize(serializer))
    }
}

/// Plain text goes through the factory; the `{ color, background }` form is an `Rgba`.
impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        ColorRepr::deserialize(deserializer)?
            .into_value()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod kind_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_names_round_trip() {
            for kind in ColorKind::ALL {
                assert_eq!(kind.to_string().parse::<ColorKind>().unwrap(), kind);
            }
            assert_eq!(" HSLA ".parse::<ColorKind>().unwrap(), ColorKind::Hsla);
            assert!("cmyk".parse::<ColorKind>().is_err());
        }

        #[test]
        fn test_component_count() {
            assert_eq!(ColorKind::Hex.component_count(), 3);
            assert_eq!(ColorKind::Hexa.component_count(), 4);
            assert_eq!(ColorKind::Hsv.component_count(), 3);
            assert!(ColorKind::Rgba.has_alpha());
            assert!(!ColorKind::Hsl.has_alpha());
        }
    }

    mod value_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_kind_and_display() {
            let value = ColorValue::from(Rgb::new(255, 0, 0));
            assert_eq!(value.kind(), ColorKind::Rgb);
            assert_eq!(value.to_string(), "rgb(255,0,0)");
        }

        #[test]
        fn test_convert_to_every_kind() {
            let value = ColorValue::from(Hex::new(255, 0, 0));
            let rendered: Vec<String> = ColorKind::ALL
                .into_iter()
                .map(|kind| value.convert(kind).to_string())
                .collect();
            assert_eq!(
                rendered,
                [
                    "#ff0000",
                    "#ff0000ff",
                    "rgb(255,0,0)",
                    "rgba(255,0,0,1)",
                    "hsl(0,100,50)",
                    "hsla(0,100,50,1)",
                    "hsv(0,100,100)",
                ]
            );
        }

        #[test]
        fn test_convert_preserves_kind() {
            let value = ColorValue::from(Hsv::new(10.0, 20.0, 30.0).unwrap());
            for kind in ColorKind::ALL {
                assert_eq!(value.convert(kind).kind(), kind);
            }
        }

        #[test]
        fn test_alpha() {
            let value: ColorValue = "rgba(0,0,0,0.5)".parse().unwrap();
            assert_eq!(value.alpha(), 0.5);
            assert_eq!(ColorValue::from(Rgb::BLACK).alpha(), 1.0);
        }

        #[test]
        fn test_contrast_helpers() {
            let black = ColorValue::from(Rgb::BLACK);
            let white = ColorValue::from(Hex::new(255, 255, 255));
            assert!((black.contrast_ratio(&white) - 21.0).abs() < 1e-9);
            assert_eq!(black.relative_luminance(), 0.0);
        }
    }

    mod serde_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_serializes_as_string() {
            let value = ColorValue::from(Hsl::new(120.0, 100.0, 25.0).unwrap());
            assert_eq!(serde_json::to_string(&value).unwrap(), "\"hsl(120,100,25)\"");
        }

        #[test]
        fn test_deserializes_through_factory() {
            let value: ColorValue = serde_json::from_str("\"#00ff00\"").unwrap();
            assert_eq!(value.kind(), ColorKind::Hex);

            let value: ColorValue = serde_json::from_str("\"hsv(0,0,0)\"").unwrap();
            assert_eq!(value.kind(), ColorKind::Hsv);

            assert!(serde_json::from_str::<ColorValue>("\"nope\"").is_err());
        }

        #[test]
        fn test_fractional_components_survive() {
            let value = ColorValue::from(Hsv::new(200.5, 33.25, 70.125).unwrap());
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, "\"hsv(200.5,33.25,70.125)\"");
            assert_eq!(serde_json::from_str::<ColorValue>(&json).unwrap(), value);
        }

        #[test]
        fn test_rgba_background_survives() {
            let rgba = Rgba::new(255, 0, 0, 0.5).unwrap().with_background(Rgb::BLACK);
            let value = ColorValue::from(rgba);
            let json = serde_json::to_string(&value).unwrap();
            let back: ColorValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
            assert_eq!(back.to_rgb(), Rgb::new(127, 0, 0));
        }
    }
}
