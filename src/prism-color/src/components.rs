//! Typed component storage shared by the color value types.
//!
//! Each value type embeds one of these structs instead of repeating channel
//! fields and range checks. The structs are plain data; validation happens in
//! the checked constructors and the `with_*` setters built on top of them.

use std::fmt;

use crate::error::{ColorError, Result};

/// Upper bound of an RGB channel.
pub const MAX_CHANNEL: f64 = 255.0;

/// Upper bound accepted for a hue. Stored hues are normalized below this.
pub const MAX_HUE: f64 = 360.0;

/// Upper bound of saturation, lightness and value.
pub const MAX_PERCENT: f64 = 100.0;

/// Upper bound of alpha.
pub const MAX_ALPHA: f64 = 1.0;

/// Largest number of decimal places honored by [`fix_precision`].
pub const MAX_PRECISION: u32 = 15;

// ============================================================================
// Range helpers
// ============================================================================

/// Checks that `value` is finite and within `0..=max`.
pub(crate) fn check_range(component: &'static str, value: f64, max: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange {
            component,
            value,
            max,
        })
    }
}

/// Wraps a hue into `[0, 360)`.
pub(crate) fn normalize_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(MAX_HUE);
    // rem_euclid can land on 360.0 for tiny negative inputs; adding 0.0 drops -0.0
    if hue >= MAX_HUE { 0.0 } else { hue + 0.0 }
}

/// Rounds `value` to `precision` decimal places.
///
/// Used on every number read from text before range validation, so that a
/// value such as `1.0000000000000002` passes an alpha bound of `1`.
pub fn fix_precision(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

// ============================================================================
// RGB
// ============================================================================

/// Red, green and blue channels in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbComponents {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl RgbComponents {
    /// Opaque white, the default compositing background.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates channels from `u8` values.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the channels divided by 255.
    #[inline]
    pub fn unit(&self) -> [f64; 3] {
        [
            f64::from(self.red) / MAX_CHANNEL,
            f64::from(self.green) / MAX_CHANNEL,
            f64::from(self.blue) / MAX_CHANNEL,
        ]
    }

    /// Builds channels from unit-interval values, rounding half away from zero.
    pub fn from_unit([r, g, b]: [f64; 3]) -> Self {
        let scale = |x: f64| (x.clamp(0.0, 1.0) * MAX_CHANNEL).round() as u8;
        Self::new(scale(r), scale(g), scale(b))
    }

    /// Returns `[red, green, blue]`.
    #[inline]
    pub fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Lowercase `rrggbb` without a leading `#`.
    pub fn to_hex_string(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// WCAG relative luminance of the sRGB channels.
    pub fn relative_luminance(&self) -> f64 {
        fn linear(c: f64) -> f64 {
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        let [r, g, b] = self.unit();
        0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
    }
}

impl From<[u8; 3]> for RgbComponents {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<(u8, u8, u8)> for RgbComponents {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

// ============================================================================
// HSL
// ============================================================================

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslComponents {
    /// Hue in `[0, 360)`.
    pub hue: f64,
    /// Saturation in `0..=100`.
    pub saturation: f64,
    /// Lightness in `0..=100`.
    pub lightness: f64,
}

impl HslComponents {
    /// Creates checked components. A hue of exactly 360 is accepted and
    /// stored as 0.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self> {
        Ok(Self {
            hue: normalize_hue(check_range("hue", hue, MAX_HUE)?),
            saturation: check_range("saturation", saturation, MAX_PERCENT)?,
            lightness: check_range("lightness", lightness, MAX_PERCENT)?,
        })
    }

    /// Builds components from unit-interval values produced by conversion math.
    pub(crate) fn from_unit([h, s, l]: [f64; 3]) -> Self {
        Self {
            hue: normalize_hue(h * MAX_HUE),
            saturation: (s * MAX_PERCENT).clamp(0.0, MAX_PERCENT),
            lightness: (l * MAX_PERCENT).clamp(0.0, MAX_PERCENT),
        }
    }

    /// Returns `[hue / 360, saturation / 100, lightness / 100]`.
    #[inline]
    pub fn unit(&self) -> [f64; 3] {
        [
            self.hue / MAX_HUE,
            self.saturation / MAX_PERCENT,
            self.lightness / MAX_PERCENT,
        ]
    }

    /// Returns `[hue, saturation, lightness]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.hue, self.saturation, self.lightness]
    }

    pub(crate) fn rounded(&self) -> [i64; 3] {
        round_cylindrical(self.to_array())
    }
}

// ============================================================================
// HSV
// ============================================================================

/// Hue in degrees, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsvComponents {
    /// Hue in `[0, 360)`.
    pub hue: f64,
    /// Saturation in `0..=100`.
    pub saturation: f64,
    /// Value (brightness) in `0..=100`.
    pub value: f64,
}

impl HsvComponents {
    /// Creates checked components. A hue of exactly 360 is stored as 0.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Result<Self> {
        Ok(Self {
            hue: normalize_hue(check_range("hue", hue, MAX_HUE)?),
            saturation: check_range("saturation", saturation, MAX_PERCENT)?,
            value: check_range("value", value, MAX_PERCENT)?,
        })
    }

    pub(crate) fn from_unit([h, s, v]: [f64; 3]) -> Self {
        Self {
            hue: normalize_hue(h * MAX_HUE),
            saturation: (s * MAX_PERCENT).clamp(0.0, MAX_PERCENT),
            value: (v * MAX_PERCENT).clamp(0.0, MAX_PERCENT),
        }
    }

    /// Returns `[hue / 360, saturation / 100, value / 100]`.
    #[inline]
    pub fn unit(&self) -> [f64; 3] {
        [
            self.hue / MAX_HUE,
            self.saturation / MAX_PERCENT,
            self.value / MAX_PERCENT,
        ]
    }

    /// Returns `[hue, saturation, value]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.hue, self.saturation, self.value]
    }

    pub(crate) fn rounded(&self) -> [i64; 3] {
        round_cylindrical(self.to_array())
    }
}

/// Rounds each component; a hue that rounds up to 360 prints as 0.
fn round_cylindrical(values: [f64; 3]) -> [i64; 3] {
    let [hue, a, b] = values.map(|v| v.round() as i64);
    [hue % 360, a, b]
}

// ============================================================================
// Flattened views with alpha
// ============================================================================

/// RGB channels plus alpha, as returned by `values()` on alpha-bearing
/// RGB-family types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaComponents {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha in `0..=1`.
    pub alpha: f64,
}

impl RgbaComponents {
    pub(crate) fn from_parts(rgb: RgbComponents, alpha: Alpha) -> Self {
        Self {
            red: rgb.red,
            green: rgb.green,
            blue: rgb.blue,
            alpha: alpha.value(),
        }
    }

    /// Returns `[red, green, blue, alpha]`.
    pub fn to_array(&self) -> [f64; 4] {
        [
            f64::from(self.red),
            f64::from(self.green),
            f64::from(self.blue),
            self.alpha,
        ]
    }
}

/// HSL components plus alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslaComponents {
    /// Hue in `[0, 360)`.
    pub hue: f64,
    /// Saturation in `0..=100`.
    pub saturation: f64,
    /// Lightness in `0..=100`.
    pub lightness: f64,
    /// Alpha in `0..=1`.
    pub alpha: f64,
}

impl HslaComponents {
    pub(crate) fn from_parts(hsl: HslComponents, alpha: Alpha) -> Self {
        Self {
            hue: hsl.hue,
            saturation: hsl.saturation,
            lightness: hsl.lightness,
            alpha: alpha.value(),
        }
    }

    /// Returns `[hue, saturation, lightness, alpha]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.hue, self.saturation, self.lightness, self.alpha]
    }
}

// ============================================================================
// Alpha
// ============================================================================

/// Opacity in `0..=1`, where 1 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Alpha(f64);

impl Default for Alpha {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl Alpha {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0.0);

    /// Creates a checked alpha value.
    pub fn new(value: f64) -> Result<Self> {
        check_range("alpha", value, MAX_ALPHA).map(Self)
    }

    /// Returns the alpha as a float.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Decodes an alpha byte: `byte / 255`.
    #[inline]
    pub fn from_hex_byte(byte: u8) -> Self {
        Self(f64::from(byte) / MAX_CHANNEL)
    }

    /// Encodes as an alpha byte: `round(alpha * 255)`.
    #[inline]
    pub fn to_hex_byte(self) -> u8 {
        (self.0 * MAX_CHANNEL).round() as u8
    }

    /// Returns `true` when the color is fully opaque.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.0 >= MAX_ALPHA
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats an alpha float as a two-digit lowercase hex byte.
///
/// Values outside `0..=1` are clamped.
pub fn alpha_float_to_hex(alpha: f64) -> String {
    let byte = (alpha.clamp(0.0, MAX_ALPHA) * MAX_CHANNEL).round() as u8;
    format!("{byte:02x}")
}

/// Parses a two-digit hex byte into an alpha float.
pub fn alpha_hex_to_float(hex: &str) -> Option<f64> {
    if hex.len() != 2 {
        return None;
    }
    u8::from_str_radix(hex, 16)
        .ok()
        .map(|byte| Alpha::from_hex_byte(byte).value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    mod range_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_check_range_bounds() {
            assert_eq!(check_range("hue", 0.0, MAX_HUE).unwrap(), 0.0);
            assert_eq!(check_range("hue", 360.0, MAX_HUE).unwrap(), 360.0);
            assert_matches!(
                check_range("hue", 360.5, MAX_HUE),
                Err(ColorError::OutOfRange { component: "hue", .. })
            );
            assert!(check_range("alpha", -0.1, MAX_ALPHA).is_err());
            assert!(check_range("alpha", f64::NAN, MAX_ALPHA).is_err());
        }

        #[test]
        fn test_normalize_hue() {
            assert_eq!(normalize_hue(360.0), 0.0);
            assert_eq!(normalize_hue(370.0), 10.0);
            assert_eq!(normalize_hue(-30.0), 330.0);
            assert!(normalize_hue(-0.0).is_sign_positive());
        }

        #[test]
        fn test_fix_precision() {
            assert_eq!(fix_precision(1.000_000_000_000_000_2, 6), 1.0);
            assert_eq!(fix_precision(0.123_456_789, 3), 0.123);
            assert_eq!(fix_precision(0.5, 0), 1.0);
        }
    }

    mod rgb_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_unit_roundtrip() {
            let rgb = RgbComponents::new(255, 128, 0);
            assert_eq!(RgbComponents::from_unit(rgb.unit()), rgb);
        }

        #[test]
        fn test_to_hex_string() {
            assert_eq!(RgbComponents::new(255, 10, 0).to_hex_string(), "ff0a00");
        }

        #[test]
        fn test_relative_luminance_extremes() {
            assert_eq!(RgbComponents::BLACK.relative_luminance(), 0.0);
            assert!((RgbComponents::WHITE.relative_luminance() - 1.0).abs() < 1e-12);
        }
    }

    mod hsl_hsv_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_hsl_new_normalizes_hue() {
            let hsl = HslComponents::new(360.0, 100.0, 50.0).unwrap();
            assert_eq!(hsl.hue, 0.0);
        }

        #[test]
        fn test_hsl_new_rejects_out_of_range() {
            assert_matches!(
                HslComponents::new(10.0, 101.0, 50.0),
                Err(ColorError::OutOfRange { component: "saturation", .. })
            );
            assert_matches!(
                HsvComponents::new(10.0, 50.0, 100.5),
                Err(ColorError::OutOfRange { component: "value", .. })
            );
        }

        #[test]
        fn test_rounded() {
            let hsl = HslComponents::new(119.6, 49.5, 0.4).unwrap();
            assert_eq!(hsl.rounded(), [120, 50, 0]);
        }

        #[test]
        fn test_rounded_hue_wraps_below_360() {
            let hsl = HslComponents::new(359.76, 100.0, 50.0).unwrap();
            assert_eq!(hsl.rounded(), [0, 100, 50]);
            let hsv = HsvComponents::new(359.5, 10.0, 20.0).unwrap();
            assert_eq!(hsv.rounded(), [0, 10, 20]);
            assert_eq!(HsvComponents::new(359.4, 0.0, 0.0).unwrap().rounded()[0], 359);
        }
    }

    mod alpha_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_alpha_hex_byte() {
            assert_eq!(Alpha::from_hex_byte(255), Alpha::OPAQUE);
            assert_eq!(Alpha::from_hex_byte(128).value(), 128.0 / 255.0);
            assert_eq!(Alpha::new(0.5).unwrap().to_hex_byte(), 128);
        }

        #[test]
        fn test_alpha_strings() {
            assert_eq!(alpha_float_to_hex(1.0), "ff");
            assert_eq!(alpha_float_to_hex(0.0), "00");
            assert_eq!(alpha_float_to_hex(2.0), "ff");
            assert_eq!(alpha_hex_to_float("80"), Some(128.0 / 255.0));
            assert_eq!(alpha_hex_to_float("zz"), None);
            assert_eq!(alpha_hex_to_float("fff"), None);
        }

        #[test]
        fn test_alpha_display() {
            assert_eq!(Alpha::OPAQUE.to_string(), "1");
            assert_eq!(Alpha::new(0.25).unwrap().to_string(), "0.25");
        }
    }
}
