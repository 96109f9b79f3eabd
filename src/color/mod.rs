//! Color values and the notations they are shown in
//!
//! This module provides:
//! - `Color`, a 24-bit RGB value rendered canonically as `#RRGGBB`
//! - `Hsl` and `Cmyk` read-outs derived from a `Color`
//! - Conversions between hex, RGB and HSL (see `convert`)
//! - Validation of external color identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod convert;

pub use convert::{brightness, hex_to_hsl, hex_to_rgb, hsl_to_hex, is_light_color, luminance};

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[allow(dead_code)]
impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value. Bits above the low 24 are ignored.
    pub const fn from_u32(value: u32) -> Self {
        Self::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Clamp each channel into `[0, 255]` and round to the nearest integer.
    ///
    /// Blended or converted channels go through here before they are encoded,
    /// so overflow saturates instead of wrapping.
    pub fn from_channels_clamped(r: f64, g: f64, b: f64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Canonical `#RRGGBB` form (uppercase)
    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode_upper([self.r, self.g, self.b]))
    }

    /// Display form `rgb(r, g, b)`
    pub fn rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        convert::rgb_to_hsl(*self)
    }

    pub fn to_cmyk(&self) -> Cmyk {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            return Cmyk { c: 0, m: 0, y: 0, k: 100 };
        }

        let ink = |v: f64| ((1.0 - v - k) / (1.0 - k) * 100.0).round() as u8;
        Cmyk {
            c: ink(r),
            m: ink(g),
            y: ink(b),
            k: (k * 100.0).round() as u8,
        }
    }

    /// Perceptual luminance on a 0-1 scale
    pub fn luminance(&self) -> f64 {
        luminance(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    pub fn is_light(&self) -> bool {
        is_light_color(*self)
    }

    /// Render in the given notation
    pub fn format(&self, notation: Notation) -> String {
        match notation {
            Notation::Hex => self.to_hex(),
            Notation::Rgb => self.rgb_string(),
            Notation::Hsl => self.to_hsl().to_string(),
        }
    }
}

fn clamp_channel(v: f64) -> u8 {
    // NaN survives clamp() and then casts to 0.
    v.clamp(0.0, 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        hex_to_rgb(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Process-color read-out in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

/// Textual notation a color is shown or copied in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl Notation {
    pub fn next(self) -> Self {
        match self {
            Notation::Hex => Notation::Rgb,
            Notation::Rgb => Notation::Hsl,
            Notation::Hsl => Notation::Hex,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Notation::Hex => "HEX",
            Notation::Rgb => "RGB",
            Notation::Hsl => "HSL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not six hex digits (optionally prefixed with `#`)
    InvalidFormat(String),
    /// An external color identifier was rejected
    NotFound(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidFormat(input) => write!(f, "invalid hex color {input:?}"),
            ColorError::NotFound(id) => {
                write!(f, "color not found: {id:?} (expected 3 or 6 hex digits)")
            }
        }
    }
}

impl std::error::Error for ColorError {}

/// Validate an external color identifier and resolve it to a `Color`.
///
/// Accepts exactly 3 or 6 hex digits. A single leading `#` is tolerated.
/// Three-digit shorthand doubles each digit (`abc` -> `#AABBCC`).
pub fn parse_color_id(id: &str) -> Result<Color, ColorError> {
    let trimmed = id.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let not_found = || ColorError::NotFound(id.to_string());

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(not_found());
    }

    let expanded: String = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return Err(not_found()),
    };

    hex_to_rgb(&expanded).map_err(|_| not_found())
}
