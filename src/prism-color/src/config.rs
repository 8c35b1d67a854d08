//! Declarative parser configuration.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::palette::PaletteKind;
use crate::parser::{ColorParser, DEFAULT_PRECISION};

/// Serializable description of a [`ColorParser`].
///
/// ```toml
/// palette = "css"
/// precision = 4
/// background = "#000000"
///
/// [colors]
/// brand = "#336699"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Built-in palette used for name resolution
    #[serde(default)]
    pub palette: PaletteKind,

    /// Decimal places kept when reading numbers
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Background for new `Rgba` values, in any color notation
    #[serde(default = "default_background")]
    pub background: String,

    /// Extra named colors layered over the built-in palette
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_background() -> String {
    "#ffffff".to_string()
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            palette: PaletteKind::default(),
            precision: default_precision(),
            background: default_background(),
            colors: BTreeMap::new(),
        }
    }
}

impl ColorConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the parser this configuration describes.
    ///
    /// The background is parsed with the configured palette, so it may be a
    /// color name. Fails on an invalid extra color or background.
    pub fn build(&self) -> Result<ColorParser> {
        let mut palette = self.palette.palette();
        if !self.colors.is_empty() {
            let extended = self
                .colors
                .iter()
                .try_fold(palette.as_ref().clone(), |palette, (name, hex)| {
                    palette.with_color(name, hex)
                })?;
            palette = Arc::new(extended);
        }

        let parser = ColorParser::new()
            .with_palette(palette)
            .with_precision(self.precision);
        let background = parser.parse_any(&self.background)?.to_rgb();

        debug!(
            palette = parser.palette().name(),
            colors = parser.palette().len(),
            precision = parser.precision(),
            %background,
            "built color parser"
        );
        Ok(parser.with_background(background))
    }
}
