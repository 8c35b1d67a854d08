//! Text grammars for every color kind.
//!
//! Input is normalized by [`prepare`] (trimmed, lowercased, whitespace
//! removed) and then matched against one regex per kind. Functional notation
//! such as `rgb(...)` is unwrapped first; the bare argument list
//! (`255,0,0`) is accepted as well. Numbers are rounded to the caller's
//! precision, or read exactly when no precision is given.
//!
//! The functions here return `None` on any mismatch. Turning that into a
//! [`ColorError`](crate::ColorError) that names the kind is the caller's job.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::components::{
    Alpha, HslComponents, HsvComponents, MAX_CHANNEL, RgbComponents, fix_precision,
};

/// `#rgb` or `#rrggbb`, `#` optional.
static HEX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-f]{3}|[0-9a-f]{6})$").expect("hex regex pattern is valid")
});

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`, `#` optional.
static HEXA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})$")
        .expect("hexa regex pattern is valid")
});

/// Three integer channels with an optional decimal alpha.
/// Groups 1-3: channels, group 4: alpha.
static RGB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3}),(\d{1,3}),(\d{1,3})(?:,(\d*\.?\d+))?$")
        .expect("rgb regex pattern is valid")
});

/// Hue plus two percentages (`%` optional) with an optional decimal alpha.
/// Groups 1-3: components, group 4: alpha.
static CYLINDRICAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d*\.?\d+),(\d*\.?\d+)%?,(\d*\.?\d+)%?(?:,(\d*\.?\d+))?$")
        .expect("hsl regex pattern is valid")
});

/// Trims, lowercases and strips all whitespace.
pub(crate) fn prepare(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Strips a functional wrapper whose name is one of `names`.
///
/// Text without parentheses is returned as is; a wrapper with any other name
/// is rejected.
fn unwrap_function<'a>(text: &'a str, names: &[&str]) -> Option<&'a str> {
    match text.split_once('(') {
        None => (!text.contains(')')).then_some(text),
        Some((name, rest)) if names.contains(&name) => rest.strip_suffix(')'),
        Some(_) => None,
    }
}

/// Doubles each digit of a shorthand hex code (`f0a` -> `ff00aa`).
fn expand_shorthand(digits: &str) -> String {
    digits.chars().flat_map(|c| [c, c]).collect()
}

fn hex_byte(pair: &str) -> Option<u8> {
    u8::from_str_radix(pair, 16).ok()
}

/// Decodes exactly six lowercase-or-uppercase hex digits.
pub(crate) fn decode_hex6(code: &str) -> Option<RgbComponents> {
    if code.len() != 6 || !code.is_ascii() {
        return None;
    }
    Some(RgbComponents::new(
        hex_byte(&code[0..2])?,
        hex_byte(&code[2..4])?,
        hex_byte(&code[4..6])?,
    ))
}

/// Normalizes a hex color to six lowercase digits without `#`.
///
/// Accepts three-digit shorthand. Used for palette entries.
pub(crate) fn normalize_hex(input: &str) -> Option<String> {
    let prepared = prepare(input);
    let digits = HEX_REGEX.captures(&prepared)?.get(1)?.as_str();
    Some(if digits.len() == 3 {
        expand_shorthand(digits)
    } else {
        digits.to_string()
    })
}

/// Reads a decimal, rounded to `precision` places when one is given.
fn number(text: &str, precision: Option<u32>) -> Option<f64> {
    let value = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(match precision {
        Some(places) => fix_precision(value, places),
        None => value,
    })
}

fn channel(text: &str) -> Option<u8> {
    text.parse::<u16>()
        .ok()
        .filter(|v| f64::from(*v) <= MAX_CHANNEL)
        .map(|v| v as u8)
}

fn alpha_group(caps: &Captures<'_>, precision: Option<u32>) -> Option<Alpha> {
    match caps.get(4) {
        None => Some(Alpha::OPAQUE),
        Some(m) => Alpha::new(number(m.as_str(), precision)?).ok(),
    }
}

fn cylindrical_groups(caps: &Captures<'_>, precision: Option<u32>) -> Option<[f64; 3]> {
    Some([
        number(&caps[1], precision)?,
        number(&caps[2], precision)?,
        number(&caps[3], precision)?,
    ])
}

// ============================================================================
// Grammars
// ============================================================================

/// `#abc`, `#aabbcc`, `abc`, `aabbcc`.
pub(crate) fn hex(text: &str) -> Option<RgbComponents> {
    let digits = HEX_REGEX.captures(text)?.get(1)?.as_str();
    if digits.len() == 3 {
        decode_hex6(&expand_shorthand(digits))
    } else {
        decode_hex6(digits)
    }
}

/// Like [`hex`], plus an optional alpha byte (default `ff`).
pub(crate) fn hexa(text: &str) -> Option<(RgbComponents, Alpha)> {
    let digits = HEXA_REGEX.captures(text)?.get(1)?.as_str();
    let digits = if digits.len() <= 4 {
        expand_shorthand(digits)
    } else {
        digits.to_string()
    };

    let rgb = decode_hex6(&digits[..6])?;
    let alpha = match digits.get(6..8) {
        Some(pair) => Alpha::from_hex_byte(hex_byte(pair)?),
        None => Alpha::OPAQUE,
    };
    Some((rgb, alpha))
}

/// `rgb(255,0,0)` or `255,0,0`.
pub(crate) fn rgb(text: &str) -> Option<RgbComponents> {
    let inner = unwrap_function(text, &["rgb"])?;
    let caps = RGB_REGEX.captures(inner)?;
    if caps.get(4).is_some() {
        return None;
    }
    Some(RgbComponents::new(
        channel(&caps[1])?,
        channel(&caps[2])?,
        channel(&caps[3])?,
    ))
}

/// `rgba(255,0,0,0.5)`, `rgb(255,0,0)` or the bare argument list.
pub(crate) fn rgba(text: &str, precision: Option<u32>) -> Option<(RgbComponents, Alpha)> {
    let inner = unwrap_function(text, &["rgba", "rgb"])?;
    let caps = RGB_REGEX.captures(inner)?;
    let rgb = RgbComponents::new(
        channel(&caps[1])?,
        channel(&caps[2])?,
        channel(&caps[3])?,
    );
    Some((rgb, alpha_group(&caps, precision)?))
}

/// `hsl(360,100,100)`, `hsl(120,50%,25%)` or the bare argument list.
pub(crate) fn hsl(text: &str, precision: Option<u32>) -> Option<HslComponents> {
    let inner = unwrap_function(text, &["hsl"])?;
    let caps = CYLINDRICAL_REGEX.captures(inner)?;
    if caps.get(4).is_some() {
        return None;
    }
    let [h, s, l] = cylindrical_groups(&caps, precision)?;
    HslComponents::new(h, s, l).ok()
}

/// `hsla(360,100,100,1.0)`, `hsl(...)` or the bare argument list.
pub(crate) fn hsla(text: &str, precision: Option<u32>) -> Option<(HslComponents, Alpha)> {
    let inner = unwrap_function(text, &["hsla", "hsl"])?;
    let caps = CYLINDRICAL_REGEX.captures(inner)?;
    let [h, s, l] = cylindrical_groups(&caps, precision)?;
    let hsl = HslComponents::new(h, s, l).ok()?;
    Some((hsl, alpha_group(&caps, precision)?))
}

/// `hsv(360,100,100)` or the bare argument list.
pub(crate) fn hsv(text: &str, precision: Option<u32>) -> Option<HsvComponents> {
    let inner = unwrap_function(text, &["hsv"])?;
    let caps = CYLINDRICAL_REGEX.captures(inner)?;
    if caps.get(4).is_some() {
        return None;
    }
    let [h, s, v] = cylindrical_groups(&caps, precision)?;
    HsvComponents::new(h, s, v).ok()
}
