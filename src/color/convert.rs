//! Conversions between hex strings, RGB triples and HSL triples

use super::{Color, ColorError, Hsl};

/// Parse `#RRGGBB` or `RRGGBB` (any case) into a `Color`.
pub fn hex_to_rgb(hex: &str) -> Result<Color, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let mut channels = [0u8; 3];
    hex::decode_to_slice(digits, &mut channels)
        .map_err(|_| ColorError::InvalidFormat(hex.to_string()))?;
    Ok(Color::new(channels[0], channels[1], channels[2]))
}

/// Parse a hex color and convert it to rounded HSL.
#[allow(dead_code)]
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// HSL of a color with every component rounded to an integer.
///
/// Achromatic colors (max == min) report hue and saturation as 0.
pub(crate) fn rgb_to_hsl(color: Color) -> Hsl {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let mut h = 0.0;
    let mut s = 0.0;

    if max != min {
        let d = max - min;
        s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        h = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } * 60.0;
    }

    Hsl {
        // 359.5.. rounds up to 360, which is hue 0
        h: (h.round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Convert HSL to a color. `h` is in degrees (any real value), `s` and `l`
/// are percentages.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> Color {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let v = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        255.0 * v
    };

    Color::from_channels_clamped(channel(0.0), channel(8.0), channel(4.0))
}

/// Perceived brightness on a 0-255 scale
pub fn brightness(color: Color) -> f64 {
    f64::from(brightness_sum(color)) / 1000.0
}

fn brightness_sum(color: Color) -> u32 {
    u32::from(color.r) * 299 + u32::from(color.g) * 587 + u32::from(color.b) * 114
}

/// True when perceived brightness is strictly above 128 (0-255 scale).
pub fn is_light_color(color: Color) -> bool {
    brightness_sum(color) > 128_000
}

/// Perceptual luminance on a 0-1 scale from (possibly unclamped) channels.
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    (0.299 * r + 0.587 * g + 0.114 * b) / 255.0
}
