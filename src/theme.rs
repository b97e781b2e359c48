//! Chip colors for rainbow mode
//!
//! A fixed palette of background colors and the luminance rule that picks a
//! legible foreground for each of them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color from RGB values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived luminance in `[0, 1]`
    pub fn luminance(&self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }

    /// Foreground that stays readable on top of this color:
    /// black for light backgrounds, white for dark ones.
    pub fn contrasting_text(&self) -> Color {
        if self.luminance() > 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
}

/// Background palette used for rainbow chips
pub const PALETTE: [Color; 30] = [
    Color::rgb(0xf4, 0x43, 0x36), // red
    Color::rgb(0xe9, 0x1e, 0x63), // pink
    Color::rgb(0x9c, 0x27, 0xb0), // purple
    Color::rgb(0x67, 0x3a, 0xb7), // deep purple
    Color::rgb(0x3f, 0x51, 0xb5), // indigo
    Color::rgb(0x21, 0x96, 0xf3), // blue
    Color::rgb(0x03, 0xa9, 0xf4), // light blue
    Color::rgb(0x00, 0xbc, 0xd4), // cyan
    Color::rgb(0x00, 0x96, 0x88), // teal
    Color::rgb(0x4c, 0xaf, 0x50), // green
    Color::rgb(0x8b, 0xc3, 0x4a), // light green
    Color::rgb(0xcd, 0xdc, 0x39), // lime
    Color::rgb(0xff, 0xeb, 0x3b), // yellow
    Color::rgb(0xff, 0xc1, 0x07), // amber
    Color::rgb(0xff, 0x98, 0x00), // orange
    Color::rgb(0xff, 0x57, 0x22), // deep orange
    Color::rgb(0x79, 0x55, 0x48), // brown
    Color::rgb(0x9e, 0x9e, 0x9e), // gray
    Color::rgb(0x60, 0x7d, 0x8b), // blue gray
    Color::rgb(0x8e, 0x24, 0xaa), // strong purple
    Color::rgb(0xd8, 0x1b, 0x60), // strong pink
    Color::rgb(0x43, 0xa0, 0x47), // dark green
    Color::rgb(0x1e, 0x88, 0xe5), // vivid blue
    Color::rgb(0xf4, 0x51, 0x1e), // strong orange
    Color::rgb(0x6d, 0x4c, 0x41), // dark brown
    Color::rgb(0x39, 0x49, 0xab), // bold indigo
    Color::rgb(0x00, 0x89, 0x7b), // deep teal
    Color::rgb(0xfb, 0xc0, 0x2d), // bold yellow
    Color::rgb(0x5e, 0x35, 0xb1), // dark purple
    Color::rgb(0x00, 0xac, 0xc1), // medium cyan
];

/// Background/foreground pair for one chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipColors {
    pub background: Color,
    pub foreground: Color,
}

impl ChipColors {
    pub fn for_background(background: Color) -> Self {
        Self {
            background,
            foreground: background.contrasting_text(),
        }
    }
}

/// Picks palette entries pseudo-randomly
#[derive(Debug, Clone)]
pub struct ColorPicker {
    rng: StdRng,
}

impl ColorPicker {
    /// Picker seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic picker, used by tests and the demo's `--seed`
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn pick(&mut self) -> Color {
        PALETTE[self.rng.random_range(0..PALETTE.len())]
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrasting_text() {
        // yellow is light, indigo is dark
        assert_eq!(Color::rgb(0xff, 0xeb, 0x3b).contrasting_text(), Color::BLACK);
        assert_eq!(Color::rgb(0x3f, 0x51, 0xb5).contrasting_text(), Color::WHITE);
        assert_eq!(Color::WHITE.contrasting_text(), Color::BLACK);
        assert_eq!(Color::BLACK.contrasting_text(), Color::WHITE);
    }

    #[test]
    fn test_seeded_picker_is_deterministic() {
        let mut a = ColorPicker::seeded(7);
        let mut b = ColorPicker::seeded(7);
        for _ in 0..10 {
            let color = a.pick();
            assert_eq!(color, b.pick());
            assert!(PALETTE.contains(&color));
        }
    }
}
