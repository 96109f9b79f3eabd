//! Palette generation
//!
//! Every generator draws from a caller-supplied random source so sessions can
//! be reproduced from a seed.

pub mod curated;
pub mod export;
pub mod shades;

use crate::color::{Color, hsl_to_hex};
use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use curated::CURATED_PALETTES;
pub use export::ExportFormat;
pub use shades::{ShadeScale, shade_scale};

/// Number of colors in a generated palette
pub const PALETTE_SIZE: usize = 5;

/// Chance that `generate_palette` picks a curated entry
pub const CURATED_PROBABILITY: f64 = 0.3;

/// (hue offset, saturation range, lightness range) per step, dark to light
const HARMONIOUS_STEPS: [(u16, (f64, f64), (f64, f64)); PALETTE_SIZE] = [
    (0, (60.0, 80.0), (20.0, 40.0)),
    (30, (55.0, 75.0), (30.0, 50.0)),
    (60, (50.0, 75.0), (45.0, 60.0)),
    (90, (50.0, 75.0), (60.0, 80.0)),
    (120, (45.0, 70.0), (70.0, 85.0)),
];

/// Where a palette came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    Random,
    Harmonious { base_hue: u16 },
    Curated { index: usize },
}

impl Origin {
    pub fn label(&self) -> String {
        match self {
            Origin::Random => "random".to_string(),
            Origin::Harmonious { base_hue } => format!("harmonious {base_hue}°"),
            Origin::Curated { index } => format!("curated #{}", index + 1),
        }
    }
}

/// Ordered set of colors, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub colors: Vec<Color>,
    pub origin: Origin,
}

impl Palette {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }
}

/// Which generator a session draws new palettes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorMode {
    /// Mostly harmonious, occasionally curated
    #[default]
    Mixed,
    Harmonious,
    Curated,
    Random,
}

impl GeneratorMode {
    /// Generate one palette. `count` only applies to `Random`.
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R, count: usize) -> Palette {
        match self {
            GeneratorMode::Mixed => generate_palette(rng),
            GeneratorMode::Harmonious => harmonious_palette(rng),
            GeneratorMode::Curated => curated_palette(rng),
            GeneratorMode::Random => random_palette(rng, count),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GeneratorMode::Mixed => "mixed",
            GeneratorMode::Harmonious => "harmonious",
            GeneratorMode::Curated => "curated",
            GeneratorMode::Random => "random",
        }
    }
}

/// Uniform pick over the full 24-bit space
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_u32(rng.random_range(0..=0xFF_FFFF))
}

/// `n` independent random colors. Duplicates are allowed.
pub fn random_palette<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Palette {
    let colors = (0..n).map(|_| random_color(rng)).collect();
    tracing::debug!(n, "generated random palette");
    Palette {
        colors,
        origin: Origin::Random,
    }
}

/// Five colors 30° apart from a random base hue, running dark to light.
pub fn harmonious_palette<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    let base_hue = rng.random_range(0..360);
    harmonious_from_hue(base_hue, rng)
}

/// Harmonious palette around a fixed base hue (degrees, reduced mod 360).
pub fn harmonious_from_hue<R: Rng + ?Sized>(base_hue: u16, rng: &mut R) -> Palette {
    let base_hue = base_hue % 360;
    let colors = HARMONIOUS_STEPS
        .iter()
        .map(|&(offset, (s_lo, s_hi), (l_lo, l_hi))| {
            let hue = (base_hue + offset) % 360;
            let s = rng.random_range(s_lo..s_hi);
            let l = rng.random_range(l_lo..l_hi);
            hsl_to_hex(f64::from(hue), s, l)
        })
        .collect();

    tracing::debug!(base_hue, "generated harmonious palette");
    Palette {
        colors,
        origin: Origin::Harmonious { base_hue },
    }
}

/// Uniform pick from the curated table
pub fn curated_palette<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    let index = rng.random_range(0..CURATED_PALETTES.len());
    tracing::debug!(index, "picked curated palette");
    Palette {
        colors: CURATED_PALETTES[index].to_vec(),
        origin: Origin::Curated { index },
    }
}

/// Curated with probability 0.3, harmonious otherwise
pub fn generate_palette<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    if rng.random_bool(CURATED_PROBABILITY) {
        curated_palette(rng)
    } else {
        harmonious_palette(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hue_distance(a: u16, b: u16) -> u16 {
        let d = a.abs_diff(b) % 360;
        d.min(360 - d)
    }

    #[test]
    fn test_random_palette_len() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_palette(&mut rng, 5).len(), 5);
        assert_eq!(random_palette(&mut rng, 12).len(), 12);
        assert!(random_palette(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(generate_palette(&mut a), generate_palette(&mut b));
        }
        assert_eq!(random_color(&mut a), random_color(&mut b));
    }

    #[test]
    fn test_harmonious_hues_follow_offsets() {
        let mut rng = StdRng::seed_from_u64(9);
        for base in [0u16, 45, 179, 200, 300, 359] {
            for _ in 0..10 {
                let palette = harmonious_from_hue(base, &mut rng);
                assert_eq!(palette.len(), PALETTE_SIZE);
                assert_eq!(palette.origin, Origin::Harmonious { base_hue: base });

                for (color, (offset, sat, light)) in palette.colors.iter().zip(HARMONIOUS_STEPS) {
                    let hsl = color.to_hsl();
                    let expected = (base + offset) % 360;
                    assert!(
                        hue_distance(hsl.h, expected) <= 5,
                        "base {base} offset {offset}: got {hsl} for {color}"
                    );
                    let l = f64::from(hsl.l);
                    assert!(l >= light.0 - 1.0 && l <= light.1 + 1.0, "{hsl} vs {light:?}");
                    let s = f64::from(hsl.s);
                    assert!(s >= sat.0 - 3.0 && s <= sat.1 + 3.0, "{hsl} vs {sat:?}");
                }
            }
        }
    }

    #[test]
    fn test_harmonious_runs_dark_to_light() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let palette = harmonious_palette(&mut rng);
            let first = palette.colors[0].to_hsl().l;
            let last = palette.colors[4].to_hsl().l;
            assert!(first < last, "{first} should be darker than {last}");
        }
    }

    #[test]
    fn test_curated_palette_is_table_member() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let palette = curated_palette(&mut rng);
            let Origin::Curated { index } = palette.origin else {
                panic!("expected curated origin");
            };
            assert_eq!(palette.colors, CURATED_PALETTES[index]);
        }
    }

    #[test]
    fn test_generate_palette_curated_frequency() {
        let mut rng = StdRng::seed_from_u64(2024);
        let runs = 10_000;
        let curated = (0..runs)
            .map(|_| generate_palette(&mut rng))
            .filter(|p| CURATED_PALETTES.iter().any(|c| p.colors == *c))
            .count();
        let freq = curated as f64 / runs as f64;
        assert!((0.27..=0.33).contains(&freq), "curated frequency {freq}");
    }

    #[test]
    fn test_generator_modes() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(GeneratorMode::Random.generate(&mut rng, 3).len(), 3);
        assert_eq!(
            GeneratorMode::Random.generate(&mut rng, 3).origin,
            Origin::Random
        );
        assert!(matches!(
            GeneratorMode::Harmonious.generate(&mut rng, 3).origin,
            Origin::Harmonious { .. }
        ));
        let curated = GeneratorMode::Curated.generate(&mut rng, 3);
        assert_eq!(curated.len(), PALETTE_SIZE);
        assert!(matches!(curated.origin, Origin::Curated { .. }));
        assert_eq!(GeneratorMode::Mixed.generate(&mut rng, 3).len(), PALETTE_SIZE);
    }

    #[test]
    fn test_origin_label() {
        assert_eq!(Origin::Curated { index: 0 }.label(), "curated #1");
        assert_eq!(Origin::Harmonious { base_hue: 30 }.label(), "harmonious 30°");
    }
}
