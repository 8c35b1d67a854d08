//! Parsing entry point and type factory.
//!
//! A [`ColorParser`] carries everything that influences how text becomes a
//! color: the palette used to resolve names, the number of decimal places
//! kept when reading numbers, and the background given to new `Rgba` values.
//! There is no global mutable state; [`ColorParser::shared`] is a read-only
//! default used by the `FromStr` impls.

use std::sync::{Arc, LazyLock};

use tracing::{debug, trace};

use crate::components::{MAX_CHANNEL, MAX_PRECISION, check_range, fix_precision};
use crate::error::{ColorError, Result};
use crate::palette::Palette;
use crate::parse;
use crate::types::{ColorSpace, Hex, Hexa, Hsl, Hsla, Hsv, Rgb, Rgba};
use crate::value::{ColorKind, ColorValue};

/// Decimal places kept when reading numbers from text.
pub const DEFAULT_PRECISION: u32 = 6;

static SHARED_PARSER: LazyLock<ColorParser> = LazyLock::new(ColorParser::default);

static EXACT_PARSER: LazyLock<ColorParser> = LazyLock::new(|| ColorParser {
    exact: true,
    ..ColorParser::default()
});

/// Parses text and component arrays into color values.
///
/// # Examples
///
/// ```
/// use prism_color::{ColorKind, ColorParser, Palette, Rgb};
///
/// let parser = ColorParser::new().with_palette(Palette::css());
/// let red: Rgb = parser.parse("red").unwrap();
/// assert_eq!(red, Rgb::new(255, 0, 0));
///
/// let value = parser.parse_any("hsl(120,100,25)").unwrap();
/// assert_eq!(value.kind(), ColorKind::Hsl);
/// ```
#[derive(Debug, Clone)]
pub struct ColorParser {
    palette: Arc<Palette>,
    precision: u32,
    background: Rgb,
    exact: bool,
}

impl Default for ColorParser {
    fn default() -> Self {
        Self {
            palette: Palette::ncs(),
            precision: DEFAULT_PRECISION,
            background: Rgb::WHITE,
            exact: false,
        }
    }
}

impl ColorParser {
    /// Creates a parser with the NCS palette, six decimal places and a white
    /// background.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide default parser.
    pub fn shared() -> &'static Self {
        &SHARED_PARSER
    }

    /// Default parser that reads numbers without rounding. Used to decode the
    /// lossless serialized form.
    pub(crate) fn exact() -> &'static Self {
        &EXACT_PARSER
    }

    /// Uses `palette` for name resolution.
    pub fn with_palette(mut self, palette: impl Into<Arc<Palette>>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Sets the decimal places kept when reading numbers (capped at 15).
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    /// Sets the background given to parsed `Rgba` values.
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// The palette used for name resolution.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Decimal places kept when reading numbers.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Background given to parsed `Rgba` values.
    pub fn background(&self) -> Rgb {
        self.background
    }

    pub(crate) fn text_precision(&self) -> Option<u32> {
        (!self.exact).then_some(self.precision)
    }

    /// Parses `input` as a `T`.
    ///
    /// A palette name resolves to its hex code, which is then converted to
    /// `T`. Anything else must match `T`'s grammar.
    pub fn parse<T: ColorSpace>(&self, input: &str) -> Result<T> {
        if let Some(code) = self.palette.lookup(input) {
            if let Some(rgb) = parse::decode_hex6(code) {
                trace!(
                    name = input.trim(),
                    code,
                    palette = self.palette.name(),
                    "resolved named color"
                );
                return Ok(T::from_named(Hex::from(rgb), self));
            }
        }

        let text = parse::prepare(input);
        T::decode(&text, self).ok_or_else(|| {
            trace!(kind = %T::KIND, input, "input rejected");
            ColorError::invalid(T::KIND, input)
        })
    }

    /// Parses `input` as the given kind.
    pub fn parse_as(&self, input: &str, kind: ColorKind) -> Result<ColorValue> {
        match kind {
            ColorKind::Hex => self.parse::<Hex>(input).map(ColorValue::from),
            ColorKind::Hexa => self.parse::<Hexa>(input).map(ColorValue::from),
            ColorKind::Rgb => self.parse::<Rgb>(input).map(ColorValue::from),
            ColorKind::Rgba => self.parse::<Rgba>(input).map(ColorValue::from),
            ColorKind::Hsl => self.parse::<Hsl>(input).map(ColorValue::from),
            ColorKind::Hsla => self.parse::<Hsla>(input).map(ColorValue::from),
            ColorKind::Hsv => self.parse::<Hsv>(input).map(ColorValue::from),
        }
    }

    /// Tries every kind in [`ColorKind::ALL`] order and returns the first
    /// that accepts `input`.
    pub fn parse_any(&self, input: &str) -> Result<ColorValue> {
        for kind in ColorKind::ALL {
            if let Ok(value) = self.parse_as(input, kind) {
                return Ok(value);
            }
        }
        debug!(input, "no color kind accepts input");
        Err(ColorError::Unrecognized(input.to_string()))
    }

    /// Builds a color of `kind` from raw numbers.
    ///
    /// RGB-family kinds take channels in `0..=255` (rounded to integers),
    /// HSL/HSV kinds take hue in degrees and percentages. Kinds with alpha
    /// accept the alpha as an optional last component, defaulting to `1`.
    pub fn from_components(&self, kind: ColorKind, components: &[f64]) -> Result<ColorValue> {
        let expected = kind.component_count();
        let optional_alpha = kind.has_alpha() && components.len() == expected - 1;
        if components.len() != expected && !optional_alpha {
            return Err(ColorError::ComponentCount {
                kind,
                expected,
                actual: components.len(),
            });
        }

        let values: Vec<f64> = components
            .iter()
            .map(|v| fix_precision(*v, self.precision))
            .collect();
        let alpha = values.get(3).copied().unwrap_or(1.0);

        let value = match kind {
            ColorKind::Hex => {
                let [r, g, b] = channels(&values)?;
                Hex::new(r, g, b).into()
            }
            ColorKind::Hexa => {
                let [r, g, b] = channels(&values)?;
                Hexa::new(r, g, b, alpha)?.into()
            }
            ColorKind::Rgb => {
                let [r, g, b] = channels(&values)?;
                Rgb::new(r, g, b).into()
            }
            ColorKind::Rgba => {
                let [r, g, b] = channels(&values)?;
                Rgba::new(r, g, b, alpha)?
                    .with_background(self.background)
                    .into()
            }
            ColorKind::Hsl => Hsl::new(values[0], values[1], values[2])?.into(),
            ColorKind::Hsla => Hsla::new(values[0], values[1], values[2], alpha)?.into(),
            ColorKind::Hsv => Hsv::new(values[0], values[1], values[2])?.into(),
        };
        Ok(value)
    }
}

fn channels(values: &[f64]) -> Result<[u8; 3]> {
    let channel = |name: &'static str, v: f64| -> Result<u8> {
        Ok(check_range(name, v, MAX_CHANNEL)?.round() as u8)
    };
    Ok([
        channel("red", values[0])?,
        channel("green", values[1])?,
        channel("blue", values[2])?,
    ])
}
