//! Color conversions between hex, RGB, and HSL. HSL round-trips through
//! RGB lose a little precision to rounding; that is accepted, not
//! corrected.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::to_js_value;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees (0-360), saturation/lightness in percent (0-100).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Parses 3- or 6-digit hex, with or without a leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, String> {
    let stripped = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    let expanded: String = if stripped.len() == 3 {
        stripped.chars().flat_map(|c| [c, c]).collect()
    } else {
        stripped.to_string()
    };
    if expanded.len() != 6 {
        return Err(format!("invalid hex color: {hex}"));
    }
    let value =
        u32::from_str_radix(&expanded, 16).map_err(|_| format!("invalid hex color: {hex}"))?;
    Ok(Rgb {
        r: ((value >> 16) & 255) as u8,
        g: ((value >> 8) & 255) as u8,
        b: (value & 255) as u8,
    })
}

/// Inputs outside `[0, 255]` are clamped rather than rejected.
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> String {
    let clamp = |v: i64| v.clamp(0, 255) as u8;
    format!("#{:02x}{:02x}{:02x}", clamp(r), clamp(g), clamp(b))
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if (max - min).abs() < f64::EPSILON {
        return Hsl {
            h: 0,
            s: 0,
            l: (l * 100.0).round() as u8,
        };
    }
    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let sector = if (max - r).abs() < f64::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = sector / 6.0;
    Hsl {
        h: (h * 360.0).round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb { r: v, g: v, b: v };
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb {
        r: (hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        g: (hue_to_rgb(p, q, h) * 255.0).round() as u8,
        b: (hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    }
}

#[wasm_bindgen]
pub fn color_hex_to_rgb(hex: &str) -> Result<JsValue, JsValue> {
    let rgb = hex_to_rgb(hex).map_err(|err| JsValue::from_str(&err))?;
    to_js_value(&rgb)
}

#[wasm_bindgen]
pub fn color_rgb_to_hex(r: i64, g: i64, b: i64) -> String {
    rgb_to_hex(r, g, b)
}

#[wasm_bindgen]
pub fn color_rgb_to_hsl(r: u8, g: u8, b: u8) -> Result<JsValue, JsValue> {
    to_js_value(&rgb_to_hsl(Rgb { r, g, b }))
}

#[wasm_bindgen]
pub fn color_hsl_to_rgb(h: u16, s: u8, l: u8) -> Result<JsValue, JsValue> {
    to_js_value(&hsl_to_rgb(Hsl { h, s, l }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_variants() {
        let white = Rgb { r: 255, g: 255, b: 255 };
        assert_eq!(hex_to_rgb("#ffffff").unwrap(), white);
        assert_eq!(hex_to_rgb("ffffff").unwrap(), white);
        assert_eq!(hex_to_rgb("#fff").unwrap(), white);
        assert_eq!(hex_to_rgb("f00").unwrap(), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert!(hex_to_rgb("#gggggg").is_err());
        assert!(hex_to_rgb("#ffff").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn rgb_to_hex_clamps() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(300, -20, 128), "#ff0080");
    }

    #[test]
    fn known_hsl_values() {
        assert_eq!(rgb_to_hsl(Rgb { r: 255, g: 0, b: 0 }), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(Rgb { r: 0, g: 0, b: 255 }), Hsl { h: 240, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(Rgb { r: 128, g: 128, b: 128 }), Hsl { h: 0, s: 0, l: 50 });
    }

    #[test]
    fn hsl_round_trip_is_close() {
        let original = Rgb { r: 12, g: 200, b: 97 };
        let back = hsl_to_rgb(rgb_to_hsl(original));
        assert!((i32::from(back.r) - i32::from(original.r)).abs() <= 2);
        assert!((i32::from(back.g) - i32::from(original.g)).abs() <= 2);
        assert!((i32::from(back.b) - i32::from(original.b)).abs() <= 2);
    }

    #[test]
    fn achromatic_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(Hsl { h: 0, s: 0, l: 100 }), Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(hsl_to_rgb(Hsl { h: 120, s: 0, l: 0 }), Rgb { r: 0, g: 0, b: 0 });
    }
}
