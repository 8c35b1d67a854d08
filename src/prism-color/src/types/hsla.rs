use std::fmt;

use super::{ColorSpace, Hex, Hexa, Hsl, Hsv, Rgb, Rgba};
use crate::components::{Alpha, HslComponents, HslaComponents};
use crate::convert;
use crate::error::Result;
use crate::parse;
use crate::parser::ColorParser;
use crate::value::ColorKind;

/// A translucent HSL color, printed as `hsla(h,s,l,a)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsla {
    hsl: HslComponents,
    alpha: Alpha,
}

impl Hsla {
    /// Creates a checked color.
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Result<Self> {
        Ok(Self::from_parts(
            HslComponents::new(hue, saturation, lightness)?,
            Alpha::new(alpha)?,
        ))
    }

    pub(crate) fn from_parts(hsl: HslComponents, alpha: Alpha) -> Self {
        Self { hsl, alpha }
    }

    /// Hue in `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hsl.hue
    }

    /// Saturation in percent.
    pub fn saturation(&self) -> f64 {
        self.hsl.saturation
    }

    /// Lightness in percent.
    pub fn lightness(&self) -> f64 {
        self.hsl.lightness
    }

    /// Alpha in `0..=1`.
    pub fn alpha(&self) -> f64 {
        self.alpha.value()
    }

    /// Returns a copy with a different hue.
    pub fn with_hue(self, hue: f64) -> Result<Self> {
        Self::new(hue, self.hsl.saturation, self.hsl.lightness, self.alpha())
    }

    /// Returns a copy with a different saturation.
    pub fn with_saturation(self, saturation: f64) -> Result<Self> {
        Self::new(self.hsl.hue, saturation, self.hsl.lightness, self.alpha())
    }

    /// Returns a copy with a different lightness.
    pub fn with_lightness(self, lightness: f64) -> Result<Self> {
        Self::new(self.hsl.hue, self.hsl.saturation, lightness, self.alpha())
    }

    /// Returns a copy with a different alpha.
    pub fn with_alpha(self, alpha: f64) -> Result<Self> {
        Ok(Self::from_parts(self.hsl, Alpha::new(alpha)?))
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, s, l] = self.hsl.rounded();
        write!(f, "hsla({h},{s},{l},{})", self.alpha)
    }
}

impl ColorSpace for Hsla {
    const KIND: ColorKind = ColorKind::Hsla;

    type Components = HslaComponents;

    fn decode(text: &str, parser: &ColorParser) -> Option<Self> {
        parse::hsla(text, parser.text_precision()).map(|(hsl, alpha)| Self::from_parts(hsl, alpha))
    }

    fn from_named(hex: Hex, _parser: &ColorParser) -> Self {
        hex.to_hsla()
    }

    fn values(&self) -> HslaComponents {
        HslaComponents::from_parts(self.hsl, self.alpha)
    }

    fn to_hex(&self) -> Hex {
        Hex::from(convert::hsl_to_rgb(self.hsl))
    }

    fn to_hexa(&self) -> Hexa {
        Hexa::from_parts(convert::hsl_to_rgb(self.hsl), self.alpha)
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(convert::hsl_to_rgb(self.hsl))
    }

    fn to_rgba(&self) -> Rgba {
        Rgba::from_parts(convert::hsl_to_rgb(self.hsl), self.alpha)
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from(self.hsl)
    }

    fn to_hsla(&self) -> Hsla {
        *self
    }

    fn to_hsv(&self) -> Hsv {
        Hsv::from(convert::hsl_to_hsv(self.hsl))
    }

    fn fmt_exact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, s, l] = self.hsl.to_array();
        write!(f, "hsla({h},{s},{l},{})", self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_forms() {
        let hsla: Hsla = "hsla(360,100,100,1.0)".parse().unwrap();
        assert_eq!(hsla.values().to_array(), [0.0, 100.0, 100.0, 1.0]);
        assert_eq!(hsla.to_string(), "hsla(0,100,100,1)");

        let plain: Hsla = "hsl(120,100%,25%)".parse().unwrap();
        assert_eq!(plain.alpha(), 1.0);
        assert_eq!(plain.lightness(), 25.0);
    }

    #[test]
    fn test_rejects_bad_alpha() {
        assert_matches!(
            "hsla(0,0,0,1.5)".parse::<Hsla>(),
            Err(ColorError::InvalidFormat { kind: ColorKind::Hsla, .. })
        );
    }

    #[test]
    fn test_alpha_targets_keep_alpha() {
        let hsla = Hsla::new(240.0, 100.0, 50.0, 0.25).unwrap();
        assert_eq!(hsla.to_rgba().to_string(), "rgba(0,0,255,0.25)");
        assert_eq!(hsla.to_hexa().to_string(), "#0000ff40");
    }

    #[test]
    fn test_other_targets_drop_alpha() {
        let hsla = Hsla::new(240.0, 100.0, 50.0, 0.25).unwrap();
        assert_eq!(hsla.to_hsl().to_string(), "hsl(240,100,50)");
        assert_eq!(hsla.to_rgb().to_string(), "rgb(0,0,255)");
        assert_eq!(hsla.to_hex().to_string(), "#0000ff");
        assert_eq!(hsla.to_hsv().to_string(), "hsv(240,100,100)");
    }

    #[test]
    fn test_serde_keeps_fractions() {
        let hsla = Hsla::new(10.5, 20.25, 30.125, 0.333).unwrap();
        let json = serde_json::to_string(&hsla).unwrap();
        assert_eq!(json, "\"hsla(10.5,20.25,30.125,0.333)\"");
        assert_eq!(serde_json::from_str::<Hsla>(&json).unwrap(), hsla);
        assert_eq!(hsla.to_string(), "hsla(11,20,30,0.333)");
    }

    #[test]
    fn test_setters() {
        let hsla = Hsla::default();
        assert_eq!(hsla.alpha(), 1.0);
        let changed = hsla
            .with_hue(30.0)
            .and_then(|c| c.with_saturation(20.0))
            .and_then(|c| c.with_lightness(40.0))
            .and_then(|c| c.with_alpha(0.5))
            .unwrap();
        assert_eq!(changed.to_string(), "hsla(30,20,40,0.5)");
        assert!(changed.with_alpha(-1.0).is_err());
        assert!(changed.with_hue(361.0).is_err());
    }
}
