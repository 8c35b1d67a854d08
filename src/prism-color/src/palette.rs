//! Named-color palettes.
//!
//! A [`Palette`] maps lowercase color names to six-digit lowercase hex codes.
//! Parsing consults exactly one palette, the one owned by the
//! [`ColorParser`](crate::ColorParser) in use, before matching any grammar.
//!
//! Two palettes ship with the crate:
//!
//! - [`PaletteKind::Ncs`]: the Natural Color System primaries
//!   (`white`, `black`, `green`, `red`, `yellow`, `blue`). This is the default.
//! - [`PaletteKind::Css`]: the sixteen CSS basic color keywords.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::parse::normalize_hex;

const NCS_COLORS: &[(&str, &str)] = &[
    ("white", "ffffff"),
    ("black", "000000"),
    ("green", "009f6b"),
    ("red", "c40233"),
    ("yellow", "ffd300"),
    ("blue", "0087bd"),
];

const CSS_COLORS: &[(&str, &str)] = &[
    ("black", "000000"),
    ("silver", "c0c0c0"),
    ("gray", "808080"),
    ("white", "ffffff"),
    ("maroon", "800000"),
    ("red", "ff0000"),
    ("purple", "800080"),
    ("fuchsia", "ff00ff"),
    ("green", "008000"),
    ("lime", "00ff00"),
    ("olive", "808000"),
    ("yellow", "ffff00"),
    ("navy", "000080"),
    ("blue", "0000ff"),
    ("teal", "008080"),
    ("aqua", "00ffff"),
];

static NCS_PALETTE: LazyLock<Arc<Palette>> =
    LazyLock::new(|| Arc::new(Palette::from_static("ncs", NCS_COLORS)));

static CSS_PALETTE: LazyLock<Arc<Palette>> =
    LazyLock::new(|| Arc::new(Palette::from_static("css", CSS_COLORS)));

static EMPTY_PALETTE: LazyLock<Arc<Palette>> = LazyLock::new(|| Arc::new(Palette::empty()));

/// Built-in palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Natural Color System primaries.
    #[default]
    Ncs,
    /// CSS basic color keywords.
    Css,
    /// No named colors at all.
    None,
}

impl PaletteKind {
    /// Returns the shared, lazily built palette for this kind.
    pub fn palette(self) -> Arc<Palette> {
        match self {
            Self::Ncs => Arc::clone(&NCS_PALETTE),
            Self::Css => Arc::clone(&CSS_PALETTE),
            Self::None => Arc::clone(&EMPTY_PALETTE),
        }
    }
}

/// A read-only mapping from color names to hex codes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    name: String,
    entries: HashMap<String, String>,
}

impl Palette {
    /// Creates a palette without any names.
    pub fn empty() -> Self {
        Self {
            name: "empty".to_string(),
            entries: HashMap::new(),
        }
    }

    /// The shared Natural Color System palette.
    pub fn ncs() -> Arc<Self> {
        PaletteKind::Ncs.palette()
    }

    /// The shared CSS basic-keyword palette.
    pub fn css() -> Arc<Self> {
        PaletteKind::Css.palette()
    }

    /// Builds a palette from `(name, hex)` pairs.
    ///
    /// Names are stored lowercase. Hex values may carry a leading `#` and may
    /// use three-digit shorthand; anything else is rejected.
    pub fn from_entries<I, K, V>(name: impl Into<String>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut palette = Self {
            name: name.into(),
            entries: HashMap::new(),
        };
        for (color, hex) in entries {
            palette = palette.with_color(color.as_ref(), hex.as_ref())?;
        }
        Ok(palette)
    }

    fn from_static(name: &str, entries: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            entries: entries
                .iter()
                .map(|(color, hex)| ((*color).to_string(), (*hex).to_string()))
                .collect(),
        }
    }

    /// Returns a copy of this palette with one more (or one replaced) entry.
    pub fn with_color(mut self, name: &str, hex: &str) -> Result<Self> {
        let code = normalize_hex(hex).ok_or_else(|| ColorError::InvalidPaletteEntry {
            name: name.to_string(),
            value: hex.to_string(),
        })?;
        self.entries.insert(name.trim().to_lowercase(), code);
        Ok(self)
    }

    /// Palette name, e.g. `"ncs"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a color name, ignoring case and surrounding whitespace.
    ///
    /// Returns the six-digit hex code without `#`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let key = name.trim();
        self.entries
            .get(key)
            .or_else(|| self.entries.get(&key.to_lowercase()))
            .map(String::as_str)
    }

    /// Replaces a color name with its hex code; any other input comes back
    /// unchanged.
    pub fn resolve<'a>(&'a self, input: &'a str) -> &'a str {
        self.lookup(input).unwrap_or(input)
    }

    /// Returns `true` if `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of named colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the palette defines no names.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, hex)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, hex)| (name.as_str(), hex.as_str()))
    }
}
