//! Tonal shade scale (levels 50-950) derived from one base color

use crate::color::{Color, luminance};

/// Levels in ascending order
pub const SHADE_LEVELS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Blend weight per level: positive blends toward white, negative toward black.
/// Level 500 has weight 0 and is the base color itself.
const SHADE_WEIGHTS: [f64; 11] = [0.95, 0.9, 0.75, 0.6, 0.4, 0.0, -0.2, -0.4, -0.6, -0.8, -0.9];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub level: u16,
    pub color: Color,
    /// Luminance below 0.5; overlay text on this shade should be light
    pub is_dark: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeScale {
    base: Color,
    shades: Vec<Shade>,
}

impl ShadeScale {
    pub fn base(&self) -> Color {
        self.base
    }

    pub fn shades(&self) -> &[Shade] {
        &self.shades
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shade> {
        self.shades.iter()
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    #[allow(dead_code)]
    pub fn get(&self, level: u16) -> Option<&Shade> {
        self.shades.iter().find(|s| s.level == level)
    }
}

/// Build the 11-step scale for `base`.
pub fn shade_scale(base: Color) -> ShadeScale {
    let shades = SHADE_LEVELS
        .iter()
        .zip(SHADE_WEIGHTS)
        .map(|(&level, w)| {
            let blend = |c: u8| {
                let c = f64::from(c);
                if w > 0.0 { c + (255.0 - c) * w } else { c + c * w }
            };
            let (r, g, b) = (blend(base.r), blend(base.g), blend(base.b));
            Shade {
                level,
                color: Color::from_channels_clamped(r, g, b),
                is_dark: luminance(r, g, b) < 0.5,
            }
        })
        .collect();

    ShadeScale { base, shades }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::random_color;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_levels_in_order() {
        let scale = shade_scale(Color::new(0x3b, 0x82, 0xf6));
        let levels: Vec<u16> = scale.iter().map(|s| s.level).collect();
        assert_eq!(levels, SHADE_LEVELS);
        assert_eq!(scale.len(), 11);
    }

    #[test]
    fn test_level_500_is_base() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let base = random_color(&mut rng);
            let scale = shade_scale(base);
            assert_eq!(scale.get(500).unwrap().color, base);
            assert_eq!(scale.base(), base);
        }
    }

    #[test]
    fn test_known_extremes() {
        let scale = shade_scale(Color::new(59, 130, 246));
        assert_eq!(scale.get(50).unwrap().color.to_hex(), "#F5F9FF");
        assert_eq!(scale.get(950).unwrap().color.to_hex(), "#060D19");
        assert!(scale.get(950).unwrap().is_dark);
        assert!(!scale.get(50).unwrap().is_dark);
        assert!(scale.get(123).is_none());
    }

    #[test]
    fn test_monotonic_luminance() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut bases = vec![Color::BLACK, Color::WHITE, Color::new(255, 0, 0)];
        bases.extend((0..200).map(|_| random_color(&mut rng)));

        for base in bases {
            let scale = shade_scale(base);
            for pair in scale.shades().windows(2) {
                assert!(
                    pair[0].color.luminance() >= pair[1].color.luminance(),
                    "{base}: level {} ({}) darker than level {} ({})",
                    pair[0].level,
                    pair[0].color,
                    pair[1].level,
                    pair[1].color
                );
            }
        }
    }

    #[test]
    fn test_is_dark_from_black() {
        let scale = shade_scale(Color::BLACK);
        let dark: Vec<bool> = scale.iter().map(|s| s.is_dark).collect();
        assert_eq!(
            dark,
            [false, false, false, false, true, true, true, true, true, true, true]
        );
    }

    #[test]
    fn test_white_stays_white_above_base() {
        let scale = shade_scale(Color::WHITE);
        for shade in scale.iter().take(6) {
            assert_eq!(shade.color, Color::WHITE);
        }
        assert!(scale.get(950).unwrap().is_dark);
    }
}
