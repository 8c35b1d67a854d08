//! Error types for color parsing and construction.

use thiserror::Error;

use crate::value::ColorKind;

/// Error type for every fallible color operation.
///
/// Range violations found while parsing text are reported as
/// [`ColorError::InvalidFormat`], the same as grammar mismatches. Typed
/// constructors and setters report [`ColorError::OutOfRange`] instead, since
/// there is no text to point at.
#[derive(Error, Debug)]
pub enum ColorError {
    /// Input does not match the grammar of the requested color kind.
    #[error("invalid color format for {kind}: {input:?}")]
    InvalidFormat {
        /// The kind that rejected the input.
        kind: ColorKind,
        /// The raw input as given by the caller.
        input: String,
    },

    /// No color kind accepts the input.
    #[error("unrecognized color format: {0:?}")]
    Unrecognized(String),

    /// A numeric component is outside its legal range.
    #[error("{component} out of range: {value} (expected 0 to {max})")]
    OutOfRange {
        /// Component name, e.g. `"hue"` or `"alpha"`.
        component: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// Component array has the wrong length for the requested kind.
    #[error("{kind} expects {expected} components, got {actual}")]
    ComponentCount {
        /// The requested kind.
        kind: ColorKind,
        /// Accepted component count.
        expected: usize,
        /// Number of components supplied.
        actual: usize,
    },

    /// A palette entry does not hold a valid hex color.
    #[error("invalid palette entry {name:?}: {value:?} is not a hex color")]
    InvalidPaletteEntry {
        /// The color name.
        name: String,
        /// The offending value.
        value: String,
    },

    /// Color configuration could not be deserialized.
    #[error("invalid color configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl ColorError {
    pub(crate) fn invalid(kind: ColorKind, input: &str) -> Self {
        Self::InvalidFormat {
            kind,
            input: input.to_string(),
        }
    }

    /// Returns `true` for errors caused by malformed or out-of-range input
    /// rather than by configuration.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat { .. }
                | Self::Unrecognized(_)
                | Self::OutOfRange { .. }
                | Self::ComponentCount { .. }
        )
    }
}

/// Result type alias using [`ColorError`].
pub type Result<T> = std::result::Result<T, ColorError>;
