//! Behavioral tests for the public color API.
//!
//! Covers conversion round trips, alpha flattening, palette resolution, input
//! rejection and the factory, exercised only through the crate's public
//! surface.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use prism_color::{
    ColorConfig, ColorError, ColorKind, ColorParser, ColorSpace, ColorValue, Hex, Hexa, Hsl,
    Hsla, Hsv, Palette, Rgb, Rgba,
};

fn assert_within(actual: &[f64], expected: &[f64], tolerance: f64, context: &str) {
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a - e).abs() <= tolerance,
            "{context}: expected {expected:?}, got {actual:?}"
        );
    }
}

// ============================================================================
// ROUND TRIPS
// ============================================================================

mod round_trips {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_to_hex_prints_lowercase_code() {
        for code in ["000000", "ffffff", "AbCdEf", "0087bd", "7F7F7F"] {
            let hex: Hex = code.parse().unwrap();
            assert_eq!(hex.to_hex().to_string(), format!("#{}", code.to_lowercase()));
        }
    }

    #[test]
    fn test_rgb_hsl_rgb_within_one() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let rgb = Rgb::new(r, g, b);
                    let back = rgb.to_hsl().to_rgb();
                    for (x, y) in rgb.values().to_array().iter().zip(back.values().to_array()) {
                        assert!(x.abs_diff(y) <= 1, "{rgb} came back as {back}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_hsl_hsv_hsl_within_one() {
        for h in (0..360).step_by(30) {
            for s in (0..=100).step_by(20) {
                for l in (10..=90).step_by(20) {
                    let hsl = Hsl::new(f64::from(h), f64::from(s), f64::from(l)).unwrap();
                    let back = hsl.to_hsv().to_hsl();
                    assert_within(
                        &back.values().to_array(),
                        &hsl.values().to_array(),
                        1.0,
                        &hsl.to_string(),
                    );
                }
            }
        }
    }

    #[test]
    fn test_identity_conversions() {
        let hex = Hex::new(1, 2, 3);
        let hexa = Hexa::new(1, 2, 3, 0.5).unwrap();
        let rgb = Rgb::new(4, 5, 6);
        let rgba = Rgba::new(4, 5, 6, 0.25).unwrap().with_background(Rgb::BLACK);
        let hsl = Hsl::new(10.5, 20.25, 30.125).unwrap();
        let hsla = Hsla::new(10.5, 20.25, 30.125, 0.75).unwrap();
        let hsv = Hsv::new(200.0, 50.0, 75.0).unwrap();

        assert_eq!(hex.to_hex(), hex);
        assert_eq!(hexa.to_hexa(), hexa);
        assert_eq!(rgb.to_rgb(), rgb);
        assert_eq!(rgba.to_rgba(), rgba);
        assert_eq!(hsl.to_hsl(), hsl);
        assert_eq!(hsla.to_hsla(), hsla);
        assert_eq!(hsv.to_hsv(), hsv);
    }
}

// ============================================================================
// ALPHA
// ============================================================================

mod alpha {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_opaque_rgba_flattens_exactly() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (12, 200, 99), (1, 254, 128)] {
            let rgba = Rgba::new(r, g, b, 1.0).unwrap();
            assert_eq!(rgba.to_rgb(), Rgb::new(r, g, b));
        }
    }

    #[test]
    fn test_transparent_rgba_flattens_to_background() {
        let rgba = Rgba::new(10, 20, 30, 0.0).unwrap();
        assert_eq!(rgba.background(), Rgb::new(255, 255, 255));
        assert_eq!(rgba.to_rgb(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_hexa_alpha_byte() {
        let hexa: Hexa = "ff000080".parse().unwrap();
        assert!((hexa.alpha() - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(hexa.to_rgba().to_string(), "rgba(255,0,0,0.5019607843137255)");
    }

    #[test]
    fn test_alpha_defaults_to_one() {
        let rgb = Rgb::new(9, 9, 9);
        assert_eq!(rgb.to_rgba().alpha(), 1.0);
        assert_eq!(rgb.to_hsla().alpha(), 1.0);
        assert_eq!(rgb.to_hexa().alpha(), 1.0);
    }
}

// ============================================================================
// PARSING
// ============================================================================

mod parsing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_example_scenarios() {
        let rgb: Rgb = "255,0,0".parse().unwrap();
        assert_eq!(rgb.to_hex().to_string(), "#ff0000");

        let hsl: Hsl = "0,100,50".parse().unwrap();
        assert_eq!(hsl.to_rgb().values().to_array(), [255, 0, 0]);
    }

    #[test]
    fn test_named_color_matches_palette() {
        let red: Hex = "red".parse().unwrap();
        let code = ColorParser::shared().palette().lookup("red").unwrap();
        assert_eq!(red.code(), code);
    }

    #[test]
    fn test_invalid_input_is_a_format_error() {
        let hex = "zzzzzz".parse::<Hex>().unwrap_err();
        let rgb = "999,0,0".parse::<Rgb>().unwrap_err();
        let hsl = "400,0,0".parse::<Hsl>().unwrap_err();

        assert_matches!(hex, ColorError::InvalidFormat { kind: ColorKind::Hex, .. });
        assert_matches!(rgb, ColorError::InvalidFormat { kind: ColorKind::Rgb, .. });
        assert_matches!(hsl, ColorError::InvalidFormat { kind: ColorKind::Hsl, .. });
        assert!(hex.is_format_error() && rgb.is_format_error() && hsl.is_format_error());
        assert!(rgb.to_string().contains("999,0,0"));
    }

    #[test]
    fn test_whitespace_and_case_are_ignored() {
        let a: Hsla = "  HSLA( 120 , 50% , 25% , 0.5 )".parse().unwrap();
        let b: Hsla = "hsla(120,50,25,0.5)".parse().unwrap();
        assert_eq!(a, b);
    }
}

// ============================================================================
// FACTORY AND CONFIGURATION
// ============================================================================

mod factory {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_any_and_convert() {
        let value = ColorParser::shared().parse_any("hsv(120,100,100)").unwrap();
        assert_eq!(value.kind(), ColorKind::Hsv);
        assert_eq!(value.convert(ColorKind::Hex).to_string(), "#00ff00");
    }

    #[test]
    fn test_injected_palette_isolates_parsers() {
        let brand = Palette::from_entries("brand", [("ink", "#101820")]).unwrap();
        let parser = ColorParser::new().with_palette(brand);
        assert_eq!(parser.parse::<Rgb>("ink").unwrap(), Rgb::new(0x10, 0x18, 0x20));
        assert!("ink".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_config_driven_parser() {
        let parser = ColorConfig::from_toml_str("palette = \"css\"\nbackground = \"black\"")
            .and_then(|config| config.build())
            .unwrap();
        let overlay: Rgba = parser.parse("rgba(255,255,255,0.5)").unwrap();
        assert_eq!(overlay.to_rgb(), Rgb::new(127, 127, 127));
        assert_eq!(parser.parse::<Hex>("lime").unwrap().to_string(), "#00ff00");
    }

    #[test]
    fn test_values_serialize_as_strings() {
        let colors = vec![
            ColorValue::from(Hex::new(255, 0, 0)),
            ColorValue::from(Rgba::new(0, 0, 255, 0.5).unwrap()),
        ];
        let json = serde_json::to_string(&colors).unwrap();
        assert_eq!(json, r##"["#ff0000","rgba(0,0,255,0.5)"]"##);

        let back: Vec<ColorValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, colors);

        let hsl: Hsl = serde_json::from_str("\"hsl(120,100,25)\"").unwrap();
        assert_eq!(hsl.to_rgb(), Rgb::new(0, 128, 0));
    }

    #[test]
    fn test_every_kind_survives_json() {
        let source = Rgba::new(37, 142, 201, 0.37)
            .unwrap()
            .with_background(Rgb::new(20, 20, 20));
        let value = ColorValue::from(source);

        for kind in ColorKind::ALL {
            let converted = value.convert(kind);
            let json = serde_json::to_string(&converted).unwrap();
            let back: ColorValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, converted, "{kind} via {json}");
        }
    }
}
