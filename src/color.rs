//! Color conversions between hex strings, RGBA and HSVA.
//!
//! The wheel only reads and writes hue and saturation; everything else about a
//! color passes through the helpers here untouched. Conventions:
//! - `h` in degrees, `s` and `v` in percent (0-100), `a` in 0-1
//! - RGB channels are integers 0-255
//! - hex output is lowercase

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// A color in hue/saturation/value/alpha form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hsva {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

impl Hsva {
    pub fn new(h: f32, s: f32, v: f32, a: f32) -> Self {
        Self { h, s, v, a }
    }
}

/// Missing fields of a partial color fall back to opaque black.
impl Default for Hsva {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// A color in 8-bit RGB plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A color expressed in every representation consumers ask for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorResult {
    pub hsva: Hsva,
    pub rgba: Rgba,
    /// `#rrggbb`
    pub hex: String,
    /// `#rrggbbaa`
    pub hexa: String,
}

/// Color supplied by the host: a hex string or an HSVA object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Hex(String),
    Hsva(Hsva),
}

impl ColorInput {
    /// Resolve to HSVA. A malformed hex string resolves to the default color.
    pub fn to_hsva(&self) -> Hsva {
        match self {
            ColorInput::Hex(hex) => hex_to_hsva(hex).unwrap_or_else(|err| {
                log::warn!("{}, falling back to default color", err);
                Hsva::default()
            }),
            ColorInput::Hsva(hsva) => *hsva,
        }
    }
}

impl From<Hsva> for ColorInput {
    fn from(hsva: Hsva) -> Self {
        ColorInput::Hsva(hsva)
    }
}

impl From<&str> for ColorInput {
    fn from(hex: &str) -> Self {
        ColorInput::Hex(hex.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(hex: String) -> Self {
        ColorInput::Hex(hex)
    }
}

/// Check for an optional `#` followed by 3, 4, 6 or 8 hex digits.
pub fn valid_hex(hex: &str) -> bool {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a hex color. Shorthand digits are doubled; a fourth or eighth digit
/// pair carries alpha, rounded to two decimals.
pub fn hex_to_rgba(hex: &str) -> Result<Rgba, ColorError> {
    if !valid_hex(hex) {
        return Err(ColorError::invalid_hex(hex));
    }
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let channels: Vec<u8> = if digits.len() <= 4 {
        digits
            .chars()
            .map(|c| c.to_digit(16).map_or(0, |d| (d * 17) as u8))
            .collect()
    } else {
        digits
            .as_bytes()
            .chunks(2)
            .map(|pair| {
                std::str::from_utf8(pair)
                    .ok()
                    .and_then(|s| u8::from_str_radix(s, 16).ok())
                    .unwrap_or(0)
            })
            .collect()
    };

    let alpha = channels
        .get(3)
        .map_or(1.0, |a| (f32::from(*a) / 255.0 * 100.0).round() / 100.0);
    Ok(Rgba::new(channels[0], channels[1], channels[2], alpha))
}

/// Parse a hex color straight to HSVA.
pub fn hex_to_hsva(hex: &str) -> Result<Hsva, ColorError> {
    hex_to_rgba(hex).map(rgba_to_hsva)
}

pub fn rgba_to_hsva(rgba: Rgba) -> Hsva {
    let r = f32::from(rgba.r);
    let g = f32::from(rgba.g);
    let b = f32::from(rgba.b);
    let max = r.max(g).max(b);
    let delta = max - r.min(g).min(b);

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut h = 60.0 * sector;
    if h < 0.0 {
        h += 360.0;
    }

    Hsva {
        h,
        s: if max == 0.0 { 0.0 } else { delta / max * 100.0 },
        v: max / 255.0 * 100.0,
        a: rgba.a,
    }
}

pub fn hsva_to_rgba(hsva: Hsva) -> Rgba {
    let h = hsva.h.rem_euclid(360.0) / 60.0;
    let s = (hsva.s / 100.0).clamp(0.0, 1.0);
    let v = (hsva.v / 100.0).clamp(0.0, 1.0);

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgba::new(to_channel(r), to_channel(g), to_channel(b), hsva.a)
}

fn to_channel(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// `#rrggbb`; alpha is dropped.
pub fn hsva_to_hex(hsva: Hsva) -> String {
    let rgba = hsva_to_rgba(hsva);
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// `#rrggbbaa`
pub fn hsva_to_hexa(hsva: Hsva) -> String {
    let rgba = hsva_to_rgba(hsva);
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        rgba.r,
        rgba.g,
        rgba.b,
        to_channel(rgba.a)
    )
}

/// Build every representation of `hsva`.
pub fn normalize_color(hsva: Hsva) -> ColorResult {
    ColorResult {
        hsva,
        rgba: hsva_to_rgba(hsva),
        hex: hsva_to_hex(hsva),
        hexa: hsva_to_hexa(hsva),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_valid_hex() {
        assert!(valid_hex("#fff"));
        assert!(valid_hex("ffff"));
        assert!(valid_hex("#A1b2C3"));
        assert!(valid_hex("#a1b2c3d4"));
        assert!(!valid_hex("#ff"));
        assert!(!valid_hex("#fffff"));
        assert!(!valid_hex("#ggg"));
        assert!(!valid_hex(""));
    }

    #[test]
    fn test_hex_to_rgba_forms() {
        assert_eq!(hex_to_rgba("#f80").unwrap(), Rgba::new(255, 136, 0, 1.0));
        assert_eq!(hex_to_rgba("0080ff").unwrap(), Rgba::new(0, 128, 255, 1.0));
        assert_eq!(hex_to_rgba("#00000080").unwrap(), Rgba::new(0, 0, 0, 0.5));
        assert_eq!(hex_to_rgba("#0008").unwrap(), Rgba::new(0, 0, 0, 0.53));
    }

    #[test]
    fn test_hex_to_rgba_rejects_garbage() {
        assert_eq!(
            hex_to_rgba("#zzz"),
            Err(ColorError::InvalidHex("#zzz".to_string()))
        );
    }

    #[test]
    fn test_primary_hues() {
        let red = hex_to_hsva("#ff0000").unwrap();
        assert_eq!(red, Hsva::new(0.0, 100.0, 100.0, 1.0));

        let green = hex_to_hsva("#00ff00").unwrap();
        assert!(approx_eq(green.h, 120.0));

        let blue = hex_to_hsva("#0000ff").unwrap();
        assert!(approx_eq(blue.h, 240.0));

        let magenta = hex_to_hsva("#ff00ff").unwrap();
        assert!(approx_eq(magenta.h, 300.0));
    }

    #[test]
    fn test_gray_has_no_saturation() {
        let gray = hex_to_hsva("#808080").unwrap();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!(approx_eq(gray.v, 50.2));
    }

    #[test]
    fn test_hsva_to_hex() {
        assert_eq!(hsva_to_hex(Hsva::new(0.0, 100.0, 100.0, 1.0)), "#ff0000");
        assert_eq!(hsva_to_hex(Hsva::new(120.0, 100.0, 100.0, 1.0)), "#00ff00");
        assert_eq!(hsva_to_hex(Hsva::new(360.0, 100.0, 100.0, 1.0)), "#ff0000");
        assert_eq!(hsva_to_hex(Hsva::new(0.0, 0.0, 100.0, 0.5)), "#ffffff");
        assert_eq!(hsva_to_hexa(Hsva::new(0.0, 0.0, 100.0, 0.5)), "#ffffff80");
    }

    #[test]
    fn test_normalize_color() {
        let result = normalize_color(Hsva::new(240.0, 100.0, 100.0, 1.0));
        assert_eq!(result.hex, "#0000ff");
        assert_eq!(result.hexa, "#0000ffff");
        assert_eq!(result.rgba, Rgba::new(0, 0, 255, 1.0));
    }

    #[test]
    fn test_color_input_resolution() {
        assert_eq!(
            ColorInput::from("#ff0000").to_hsva(),
            Hsva::new(0.0, 100.0, 100.0, 1.0)
        );
        assert_eq!(ColorInput::from("not a color").to_hsva(), Hsva::default());

        let hsva = Hsva::new(10.0, 20.0, 30.0, 0.4);
        assert_eq!(ColorInput::from(hsva).to_hsva(), hsva);
    }

    #[test]
    fn test_color_input_from_json() {
        let hex: ColorInput = serde_json::from_str(r##""#00ff00""##).unwrap();
        assert_eq!(hex, ColorInput::Hex("#00ff00".to_string()));

        let partial: ColorInput = serde_json::from_str(r#"{"h": 200, "s": 100}"#).unwrap();
        assert_eq!(partial, ColorInput::Hsva(Hsva::new(200.0, 100.0, 0.0, 1.0)));
    }
}
