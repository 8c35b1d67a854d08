//! The seven concrete color value types.
//!
//! Each type validates on construction, stores typed components, and
//! converts to every other type through [`ColorSpace`]. Values are `Copy` and
//! never change after construction; setters return a new value.

mod hex;
mod hexa;
mod hsl;
mod hsla;
mod hsv;
mod rgb;
mod rgba;

pub use hex::Hex;
pub use hexa::Hexa;
pub use hsl::Hsl;
pub use hsla::Hsla;
pub use hsv::Hsv;
pub use rgb::Rgb;
pub use rgba::Rgba;

use std::fmt;

use serde::Deserialize;

use crate::parser::ColorParser;
use crate::value::{ColorKind, ColorValue};

/// Behavior shared by every color value type.
///
/// The set of implementors is closed: exactly the seven types in this module.
pub trait ColorSpace: Copy + PartialEq + fmt::Debug + fmt::Display + Into<ColorValue> {
    /// Which representation this type is.
    const KIND: ColorKind;

    /// Typed component view returned by [`ColorSpace::values`].
    type Components;

    /// Parses already-normalized text (see [`ColorParser`]) with this type's
    /// grammar.
    fn decode(text: &str, parser: &ColorParser) -> Option<Self>;

    /// Builds a value from a palette hit.
    fn from_named(hex: Hex, parser: &ColorParser) -> Self;

    /// Returns the stored components.
    fn values(&self) -> Self::Components;

    /// Converts to [`Hex`].
    fn to_hex(&self) -> Hex;

    /// Converts to [`Hexa`].
    fn to_hexa(&self) -> Hexa;

    /// Converts to [`Rgb`].
    fn to_rgb(&self) -> Rgb;

    /// Converts to [`Rgba`].
    fn to_rgba(&self) -> Rgba;

    /// Converts to [`Hsl`].
    fn to_hsl(&self) -> Hsl;

    /// Converts to [`Hsla`].
    fn to_hsla(&self) -> Hsla;

    /// Converts to [`Hsv`].
    fn to_hsv(&self) -> Hsv;

    /// Writes the text form without rounding any component.
    ///
    /// Parsing the output with full precision gives back an equal value.
    /// Types whose `Display` is already lossless keep this default.
    fn fmt_exact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }

    /// Adapter that formats with [`ColorSpace::fmt_exact`].
    fn display_exact(&self) -> ExactDisplay<'_, Self> {
        ExactDisplay(self)
    }
}

/// Lossless text form of a color, as used by serde.
///
/// ```
/// use prism_color::{ColorSpace, Hsl};
///
/// let hsl = Hsl::new(10.5, 20.25, 30.125).unwrap();
/// assert_eq!(hsl.to_string(), "hsl(11,20,30)");
/// assert_eq!(hsl.display_exact().to_string(), "hsl(10.5,20.25,30.125)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExactDisplay<'a, C>(&'a C);

impl<C: ColorSpace> fmt::Display for ExactDisplay<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_exact(f)
    }
}

/// Serialized shape of a color: plain text, or an `Rgba` with the background
/// it flattens onto.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ColorRepr {
    Text(String),
    Layered { color: String, background: Rgb },
}

impl ColorRepr {
    /// Decodes with full precision, detecting the kind of plain text.
    pub(crate) fn into_value(self) -> crate::error::Result<ColorValue> {
        let parser = ColorParser::exact();
        match self {
            Self::Text(text) => parser.parse_any(&text),
            Self::Layered { color, background } => parser
                .parse::<Rgba>(&color)
                .map(|rgba| rgba.with_background(background).into()),
        }
    }
}

/// `FromStr`, `TryFrom<&str>` and `Into<ColorValue>` for a value type.
macro_rules! impl_text_conversions {
    ($($ty:ident),* $(,)?) => {
        $(
            impl ::std::str::FromStr for $ty {
                type Err = $crate::error::ColorError;

                fn from_str(s: &str) -> $crate::error::Result<Self> {
                    $crate::parser::ColorParser::shared().parse(s)
                }
            }

            impl TryFrom<&str> for $ty {
                type Error = $crate::error::ColorError;

                fn try_from(value: &str) -> $crate::error::Result<Self> {
                    value.parse()
                }
            }

            impl From<$ty> for $crate::value::ColorValue {
                fn from(value: $ty) -> Self {
                    $crate::value::ColorValue::$ty(value)
                }
            }
        )*
    };
}

/// Serde as the lossless text form, read back without precision rounding.
macro_rules! impl_string_serde {
    ($($ty:ident),* $(,)?) => {
        $(
            impl ::serde::Serialize for $ty {
                fn serialize<S: ::serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> ::std::result::Result<S::Ok, S::Error> {
                    serializer.collect_str(&self.display_exact())
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $ty {
                fn deserialize<D: ::serde::Deserializer<'de>>(
                    deserializer: D,
                ) -> ::std::result::Result<Self, D::Error> {
                    let text = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                    $crate::parser::ColorParser::exact()
                        .parse(&text)
                        .map_err(::serde::de::Error::custom)
                }
            }
        )*
    };
}

impl_text_conversions!(Hex, Hexa, Rgb, Rgba, Hsl, Hsla, Hsv);

// Rgba also carries its background and implements serde by hand.
impl_string_serde!(Hex, Hexa, Rgb, Hsl, Hsla, Hsv);
