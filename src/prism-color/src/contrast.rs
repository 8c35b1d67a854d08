//! WCAG 2.x luminance and contrast.
//!
//! Colors with alpha are measured after flattening, so an `Rgba` is judged
//! against its own background.

use crate::types::ColorSpace;

/// Minimum ratio for normal-size text at level AA.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Minimum ratio for large text at level AA.
pub const AA_LARGE_TEXT: f64 = 3.0;

/// Minimum ratio for normal-size text at level AAA.
pub const AAA_NORMAL_TEXT: f64 = 7.0;

/// Relative luminance in `0.0..=1.0`.
pub fn relative_luminance<C: ColorSpace>(color: &C) -> f64 {
    color.to_rgb().values().relative_luminance()
}

/// Contrast ratio between two colors, in `1.0..=21.0`. Order does not matter.
pub fn contrast_ratio<A: ColorSpace, B: ColorSpace>(a: &A, b: &B) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Returns `true` if the pair reaches `threshold`, e.g. [`AA_NORMAL_TEXT`].
pub fn meets<A: ColorSpace, B: ColorSpace>(a: &A, b: &B, threshold: f64) -> bool {
    contrast_ratio(a, b) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Hex, Hsl, Rgb, Rgba};

    #[test]
    fn test_black_on_white() {
        let ratio = contrast_ratio(&Rgb::BLACK, &Rgb::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
        assert!(meets(&Rgb::BLACK, &Rgb::WHITE, AAA_NORMAL_TEXT));
    }

    #[test]
    fn test_same_color_is_one() {
        let gray = Hex::new(0x80, 0x80, 0x80);
        assert!((contrast_ratio(&gray, &gray) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_order_independent() {
        let a = Hsl::new(200.0, 60.0, 30.0).unwrap();
        let b = Rgb::new(250, 240, 200);
        assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    #[test]
    fn test_transparent_matches_background() {
        let clear = Rgba::new(0, 0, 0, 0.0).unwrap();
        assert!((relative_luminance(&clear) - 1.0).abs() < 1e-12);
        assert!(!meets(&clear, &Rgb::WHITE, AA_LARGE_TEXT));
    }

    #[test]
    fn test_mid_gray_threshold() {
        // #767676 is the darkest gray that passes AA on white
        let gray = Hex::new(0x76, 0x76, 0x76);
        assert!(meets(&gray, &Rgb::WHITE, AA_NORMAL_TEXT));
        let lighter = Hex::new(0x77, 0x77, 0x77);
        assert!(!meets(&lighter, &Rgb::WHITE, AA_NORMAL_TEXT));
    }
}
