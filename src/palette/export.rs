//! Text renderings of a shade scale for style sheets and design tokens

use super::shades::ShadeScale;
use anyhow::Context;
use clap::ValueEnum;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `:root { --token-50: #...; }`
    #[default]
    Css,
    /// `colors: { token: { 50: '#...' } }`
    Tailwind,
    /// `{ "token": { "50": "#..." } }`
    Json,
    /// `$token: ( 50: #..., );`
    Scss,
}

impl ExportFormat {
    pub fn next(self) -> Self {
        match self {
            ExportFormat::Css => ExportFormat::Tailwind,
            ExportFormat::Tailwind => ExportFormat::Json,
            ExportFormat::Json => ExportFormat::Scss,
            ExportFormat::Scss => ExportFormat::Css,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS Variables",
            ExportFormat::Tailwind => "Tailwind",
            ExportFormat::Json => "JSON Tokens",
            ExportFormat::Scss => "SCSS Map",
        }
    }
}

/// Render `scale` in `format` under the token name `token` (e.g. `primary`).
/// Levels always appear in ascending order.
pub fn render(scale: &ShadeScale, format: ExportFormat, token: &str) -> anyhow::Result<String> {
    let mut out = String::new();
    match format {
        ExportFormat::Css => {
            out.push_str(":root {\n");
            for s in scale.iter() {
                writeln!(out, "  --{token}-{}: {};", s.level, s.color)?;
            }
            out.push('}');
        }
        ExportFormat::Tailwind => {
            writeln!(out, "colors: {{\n  {token}: {{")?;
            for s in scale.iter() {
                writeln!(out, "    {}: '{}',", s.level, s.color)?;
            }
            out.push_str("  }\n}");
        }
        ExportFormat::Json => {
            out = serde_json::to_string_pretty(&Tokens { token, scale })
                .context("serialize design tokens")?;
        }
        ExportFormat::Scss => {
            writeln!(out, "${token}: (")?;
            for s in scale.iter() {
                writeln!(out, "  {}: {},", s.level, s.color)?;
            }
            out.push_str(");");
        }
    }
    Ok(out)
}

/// `{ token: { level: hex, ... } }` with levels in scale order
struct Tokens<'a> {
    token: &'a str,
    scale: &'a ShadeScale,
}

impl Serialize for Tokens<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.token, &Levels(self.scale))?;
        map.end()
    }
}

struct Levels<'a>(&'a ShadeScale);

impl Serialize for Levels<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for s in self.0.iter() {
            map.serialize_entry(&s.level.to_string(), &s.color)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::palette::shades::shade_scale;

    const BLACK_SHADES: [&str; 11] = [
        "#F2F2F2", "#E6E6E6", "#BFBFBF", "#999999", "#666666", "#000000", "#000000", "#000000",
        "#000000", "#000000", "#000000",
    ];
    const LEVELS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

    #[test]
    fn test_black_scale_values() {
        let scale = shade_scale(Color::BLACK);
        let hex: Vec<String> = scale.iter().map(|s| s.color.to_hex()).collect();
        assert_eq!(hex, BLACK_SHADES);
    }

    #[test]
    fn test_scss() {
        let out = render(&shade_scale(Color::BLACK), ExportFormat::Scss, "primary").unwrap();
        let mut expected = String::from("$primary: (\n");
        for (level, hex) in LEVELS.iter().zip(BLACK_SHADES) {
            expected.push_str(&format!("  {level}: {hex},\n"));
        }
        expected.push_str(");");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_css() {
        let out = render(&shade_scale(Color::BLACK), ExportFormat::Css, "primary").unwrap();
        assert!(out.starts_with(":root {\n  --primary-50: #F2F2F2;\n  --primary-100: #E6E6E6;\n"));
        assert!(out.ends_with("  --primary-950: #000000;\n}"));
        assert_eq!(out.lines().count(), 13);
    }

    #[test]
    fn test_tailwind_custom_token() {
        let out = render(&shade_scale(Color::BLACK), ExportFormat::Tailwind, "brand").unwrap();
        assert!(out.starts_with("colors: {\n  brand: {\n    50: '#F2F2F2',\n"));
        assert!(out.ends_with("    950: '#000000',\n  }\n}"));
        assert_eq!(out.lines().count(), 15);
    }

    #[test]
    fn test_json_keys_in_level_order() {
        let base = Color::new(0xff, 0xa5, 0x00);
        let out = render(&shade_scale(base), ExportFormat::Json, "primary").unwrap();
        assert!(out.starts_with("{\n  \"primary\": {\n    \"50\": \"#"));

        let positions: Vec<usize> = LEVELS
            .iter()
            .map(|l| out.find(&format!("\"{l}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{out}");

        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["primary"]["500"], "#FFA500");
        assert_eq!(v["primary"].as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_format_cycle() {
        let mut f = ExportFormat::Css;
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, ExportFormat::Css);
        assert_eq!(ExportFormat::Json.label(), "JSON Tokens");
    }
}
