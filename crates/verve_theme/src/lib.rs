//! Verve theme tokens
//!
//! Color tokens for the presentation layer, including the fixed background
//! gradient every gradient screen shares. Themes are plain data; widgets
//! read tokens, they never mutate them.

use verve_core::{Color, LinearGradient, Point};

/// Light or dark rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// Color tokens for screens
#[derive(Clone, Debug)]
pub struct ScreenColors {
    /// Flat background behind non-gradient screens
    pub background: Color,
    /// Elevated surface (cards, sheets)
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    /// Ordered color sequence for the screen backdrop gradient, top to bottom
    pub bg_gradient: [Color; 3],
}

/// A screen theme: scheme plus its color tokens
#[derive(Clone, Debug)]
pub struct ScreenTheme {
    scheme: ColorScheme,
    colors: ScreenColors,
}

impl ScreenTheme {
    /// The light variant
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            colors: ScreenColors {
                background: Color::from_hex(0xF5F5F7),
                surface: Color::WHITE,
                text_primary: Color::from_hex(0x1D1D1F),
                text_secondary: Color::from_hex(0x6E6E73),
                accent: Color::from_hex(0x5A4FCF),
                // Same gradient in both schemes: the backdrop is part of the
                // brand surface, not a scheme-dependent chrome color.
                bg_gradient: BG_GRADIENT,
            },
        }
    }

    /// The dark variant
    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            colors: ScreenColors {
                background: Color::from_hex(0x121212),
                surface: Color::from_hex(0x1E1E24),
                text_primary: Color::WHITE,
                text_secondary: Color::from_hex(0x98989D),
                accent: Color::from_hex(0x7B6FE0),
                bg_gradient: BG_GRADIENT,
            },
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ScreenColors {
        &self.colors
    }

    /// Build the backdrop gradient as a vertical linear gradient over `height`
    pub fn bg_gradient(&self, height: f32) -> LinearGradient {
        LinearGradient::with_colors(
            Point::ZERO,
            Point::new(0.0, height),
            &self.colors.bg_gradient,
        )
    }
}

impl Default for ScreenTheme {
    fn default() -> Self {
        Self::dark()
    }
}

/// The fixed backdrop gradient: deep indigo through violet into near-black.
const BG_GRADIENT: [Color; 3] = [
    Color::rgb(0x0F as f32 / 255.0, 0x0C as f32 / 255.0, 0x29 as f32 / 255.0),
    Color::rgb(0x30 as f32 / 255.0, 0x2B as f32 / 255.0, 0x63 as f32 / 255.0),
    Color::rgb(0x24 as f32 / 255.0, 0x24 as f32 / 255.0, 0x3E as f32 / 255.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemes() {
        assert_eq!(ScreenTheme::light().scheme(), ColorScheme::Light);
        assert_eq!(ScreenTheme::dark().scheme(), ColorScheme::Dark);
        assert_eq!(ScreenTheme::default().scheme(), ColorScheme::Dark);
    }

    #[test]
    fn test_bg_gradient_shared_across_schemes() {
        let light = ScreenTheme::light();
        let dark = ScreenTheme::dark();
        assert_eq!(light.colors().bg_gradient, dark.colors().bg_gradient);
    }

    #[test]
    fn test_bg_gradient_stops_ordered() {
        let gradient = ScreenTheme::dark().bg_gradient(640.0);
        assert_eq!(gradient.stops.len(), 3);
        assert!((gradient.stops[0].offset - 0.0).abs() < 1e-6);
        assert!((gradient.stops[1].offset - 0.5).abs() < 1e-6);
        assert!((gradient.stops[2].offset - 1.0).abs() < 1e-6);
        assert_eq!(gradient.end.y, 640.0);
    }

    #[test]
    fn test_bg_gradient_hex_tokens() {
        let colors = ScreenTheme::dark().colors().bg_gradient;
        assert_eq!(colors[0], Color::from_hex(0x0F0C29));
        assert_eq!(colors[1], Color::from_hex(0x302B63));
        assert_eq!(colors[2], Color::from_hex(0x24243E));
    }
}
