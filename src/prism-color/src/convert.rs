//! Conversion algorithms between color spaces.
//!
//! Every function here is pure and works on the component structs from
//! [`crate::components`]. The value types call into these and wrap the result;
//! nothing in this module validates input, since components can only be built
//! through checked constructors.

use crate::components::{
    Alpha, HslComponents, HsvComponents, MAX_PERCENT, RgbComponents, fix_precision,
};

/// Decimal places kept before flooring a composited channel.
const COMPOSITE_PRECISION: u32 = 9;

/// Hue in degrees from unit-interval channels, given their max and chroma.
///
/// Chroma must be non-zero.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, chroma: f64) -> f64 {
    let sector = if max == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    sector * 60.0
}

// ============================================================================
// RGB <-> HSL
// ============================================================================

/// RGB to HSL using the min/max chroma method.
pub fn rgb_to_hsl(rgb: RgbComponents) -> HslComponents {
    let [r, g, b] = rgb.unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let lightness = (max + min) / 2.0;

    if chroma == 0.0 {
        return HslComponents::from_unit([0.0, 0.0, lightness]);
    }

    let saturation = chroma / (1.0 - (2.0 * lightness - 1.0).abs());
    let hue = hue_degrees(r, g, b, max, chroma) / 360.0;

    HslComponents::from_unit([hue, saturation, lightness])
}

/// HSL to RGB through chroma, the intermediate `x` and the lightness offset.
pub fn hsl_to_rgb(hsl: HslComponents) -> RgbComponents {
    let [_, s, l] = hsl.unit();
    let sector = hsl.hue / 60.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match sector as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    RgbComponents::from_unit([r + m, g + m, b + m])
}

// ============================================================================
// HSL <-> HSV
// ============================================================================

/// HSL to HSV in closed form, without an RGB pass.
pub fn hsl_to_hsv(hsl: HslComponents) -> HsvComponents {
    let [_, s, l] = hsl.unit();

    let value = l + s * l.min(1.0 - l);
    let saturation = if value == 0.0 {
        0.0
    } else {
        2.0 * (1.0 - l / value)
    };

    HsvComponents {
        hue: hsl.hue,
        saturation: (saturation * MAX_PERCENT).clamp(0.0, MAX_PERCENT),
        value: (value * MAX_PERCENT).clamp(0.0, MAX_PERCENT),
    }
}

/// HSV to HSL in closed form. Saturation collapses to 0 at black and white.
pub fn hsv_to_hsl(hsv: HsvComponents) -> HslComponents {
    let [_, s, v] = hsv.unit();

    let lightness = v * (1.0 - s / 2.0);
    let saturation = if lightness > 0.0 && lightness < 1.0 {
        (v - lightness) / lightness.min(1.0 - lightness)
    } else {
        0.0
    };

    HslComponents {
        hue: hsv.hue,
        saturation: (saturation * MAX_PERCENT).clamp(0.0, MAX_PERCENT),
        lightness: (lightness * MAX_PERCENT).clamp(0.0, MAX_PERCENT),
    }
}

// ============================================================================
// RGB <-> HSV
// ============================================================================

/// HSV to RGB with the sector index `i = floor(h * 6)`.
pub fn hsv_to_rgb(hsv: HsvComponents) -> RgbComponents {
    let [_, s, v] = hsv.unit();

    // from degrees, so 60/120/... land exactly on a sector edge
    let sector = hsv.hue / 60.0;
    let i = sector.floor();
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    RgbComponents::from_unit([r, g, b])
}

/// RGB to HSV using max/min chroma.
pub fn rgb_to_hsv(rgb: RgbComponents) -> HsvComponents {
    let [r, g, b] = rgb.unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let saturation = if max == 0.0 { 0.0 } else { chroma / max };
    let hue = if chroma == 0.0 {
        0.0
    } else {
        hue_degrees(r, g, b, max, chroma) / 360.0
    };

    HsvComponents::from_unit([hue, saturation, max])
}

// ============================================================================
// Alpha compositing
// ============================================================================

/// Flattens a translucent color onto an opaque background.
///
/// Each channel is `floor((1 - alpha) * background + alpha * color)`.
pub fn composite(rgb: RgbComponents, alpha: Alpha, background: RgbComponents) -> RgbComponents {
    if alpha.is_opaque() {
        return rgb;
    }
    let a = alpha.value();
    let blend = |color: u8, back: u8| -> u8 {
        let mixed = (1.0 - a) * f64::from(back) + a * f64::from(color);
        fix_precision(mixed, COMPOSITE_PRECISION)
            .floor()
            .clamp(0.0, 255.0) as u8
    };

    RgbComponents::new(
        blend(rgb.red, background.red),
        blend(rgb.green, background.green),
        blend(rgb.blue, background.blue),
    )
}
