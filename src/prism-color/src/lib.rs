//! Color value objects for `Prism`.
//!
//! This crate models seven color representations as small immutable values,
//! each validating its input and converting to every other:
//!
//! - [`Hex`] / [`Hexa`]: `#rrggbb` and `#rrggbbaa`
//! - [`Rgb`] / [`Rgba`]: `rgb(r,g,b)` and `rgba(r,g,b,a)`
//! - [`Hsl`] / [`Hsla`]: `hsl(h,s,l)` and `hsla(h,s,l,a)`
//! - [`Hsv`]: `hsv(h,s,v)`
//!
//! Supporting modules:
//!
//! - [`parser`]: [`ColorParser`], the parsing entry point and type factory
//! - [`palette`]: named colors resolved before any grammar is tried
//! - [`convert`]: the conversion math on raw components
//! - [`contrast`]: WCAG luminance and contrast ratio
//! - [`config`]: TOML description of a parser
//!
//! # Examples
//!
//! ## Parsing and converting
//!
//! ```
//! use prism_color::{ColorSpace, Hex, Rgb};
//!
//! let red: Rgb = "rgb(255, 0, 0)".parse().unwrap();
//! assert_eq!(red.to_hex().to_string(), "#ff0000");
//! assert_eq!(red.to_hsl().to_string(), "hsl(0,100,50)");
//!
//! // Names resolve through the default palette
//! let named: Hex = "blue".parse().unwrap();
//! assert_eq!(named.to_string(), "#0087bd");
//! ```
//!
//! ## Flattening alpha
//!
//! ```
//! use prism_color::{ColorSpace, Rgb, Rgba};
//!
//! let overlay = Rgba::new(0, 0, 0, 0.5).unwrap();
//! assert_eq!(overlay.to_rgb(), Rgb::new(127, 127, 127));
//!
//! let on_black = overlay.with_background(Rgb::BLACK);
//! assert_eq!(on_black.to_rgb(), Rgb::BLACK);
//! ```
//!
//! ## Unknown input
//!
//! ```
//! use prism_color::{ColorKind, ColorParser};
//!
//! let parser = ColorParser::new();
//! let value = parser.parse_any("#ff000080").unwrap();
//! assert_eq!(value.kind(), ColorKind::Hexa);
//! assert!(parser.parse_any("zzzzzz").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]

pub mod components;
pub mod config;
pub mod contrast;
pub mod convert;
pub mod error;
pub mod palette;
mod parse;
pub mod parser;
pub mod types;
pub mod value;

pub use components::{
    Alpha, HslComponents, HslaComponents, HsvComponents, RgbComponents, RgbaComponents,
};
pub use config::ColorConfig;
pub use error::{ColorError, Result};
pub use palette::{Palette, PaletteKind};
pub use parser::ColorParser;
pub use types::{ColorSpace, ExactDisplay, Hex, Hexa, Hsl, Hsla, Hsv, Rgb, Rgba};
pub use value::{ColorKind, ColorValue};
