//! Hand-picked five-color palettes

use crate::color::Color;

const fn c(value: u32) -> Color {
    Color::from_u32(value)
}

/// Fixed table of curated palettes, in display order
pub const CURATED_PALETTES: [[Color; 5]; 15] = [
    [c(0x173F5F), c(0x20639B), c(0x3CAEA3), c(0xF6D55C), c(0xED553B)],
    [c(0xF9F7F7), c(0xDBE2EF), c(0x3F72AF), c(0x112D4E), c(0xFFA500)],
    [c(0x16213E), c(0x0F3460), c(0x533483), c(0xE94560), c(0xF5F5F5)],
    [c(0x5D8BF4), c(0x2B4865), c(0x256D85), c(0x5E8B7E), c(0xA7D2CB)],
    [c(0xFAF3F0), c(0xD4E2D4), c(0xFFCACC), c(0xDBC4F0), c(0x1D1A39)],
    [c(0x000000), c(0x14213D), c(0xFCA311), c(0xE5E5E5), c(0xFFFFFF)],
    [c(0x383E56), c(0xF69E7B), c(0xEEDAD1), c(0xD4B5B0), c(0x7C7C7C)],
    [c(0x4C3A51), c(0x774360), c(0xB25068), c(0xE7AB79), c(0xFBC687)],
    [c(0x011627), c(0xFDFFFC), c(0x2EC4B6), c(0xE71D36), c(0xFF9F1C)],
    [c(0x00B8A9), c(0xF8F3D4), c(0xF6416C), c(0xFFDE7D), c(0x3EC1D3)],
    [c(0x2D4059), c(0xEA5455), c(0xF07B3F), c(0xFFD460), c(0xFBEAEB)],
    [c(0x2C3333), c(0x2E4F4F), c(0x0E8388), c(0xCBE4DE), c(0xFFA500)],
    [c(0x1A1A2E), c(0x16213E), c(0x0F3460), c(0xE94560), c(0xF5F5F5)],
    [c(0xF4F9F9), c(0xCCF2F4), c(0xA4EBF3), c(0xAAAAAA), c(0x000000)],
    [c(0xFFF8E1), c(0xFFE0B2), c(0xFFB74D), c(0xFF9800), c(0xE65100)],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_verbatim() {
        let hex: Vec<String> = CURATED_PALETTES[0].iter().map(|c| c.to_hex()).collect();
        assert_eq!(hex, ["#173F5F", "#20639B", "#3CAEA3", "#F6D55C", "#ED553B"]);
    }

    #[test]
    fn test_last_entry_verbatim() {
        let hex: Vec<String> = CURATED_PALETTES[14].iter().map(|c| c.to_hex()).collect();
        assert_eq!(hex, ["#FFF8E1", "#FFE0B2", "#FFB74D", "#FF9800", "#E65100"]);
    }

    #[test]
    fn test_entries_are_distinct() {
        for (i, a) in CURATED_PALETTES.iter().enumerate() {
            for b in &CURATED_PALETTES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
