use swatch_color::Color;

/// Conversion of the canonical [`Color`] into Iced's normalised float color.
pub trait ToIced {
    fn to_iced(self) -> iced::Color;
}

impl ToIced for Color {
    #[inline]
    fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba8(self.r, self.g, self.b, self.a as f32)
    }
}

/// Parse a theme hex string, falling back to `fallback` when it is invalid.
pub fn parse_or(hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or(fallback)
}

/// The four tiles drawn behind the preview swatch so translucency is
/// visible against light, mid and dark grounds.
pub const BACKDROP: [Color; 4] = [
    Color { r: 0xff, g: 0xff, b: 0xff, a: 1.0 },
    Color { r: 0xff, g: 0xff, b: 0xff, a: 0.6 },
    Color { r: 0xff, g: 0xff, b: 0xff, a: 0.2 },
    Color { r: 0x00, g: 0x00, b: 0x00, a: 1.0 },
];

/// Caption colors for text drawn on top of a swatch.
pub const ON_LIGHT: Color = Color { r: 0x17, g: 0x17, b: 0x17, a: 1.0 };
pub const ON_DARK:  Color = Color { r: 0xff, g: 0xff, b: 0xff, a: 1.0 };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_iced_normalises_channels() {
        let c = Color::rgba(255, 0, 51, 0.5).to_iced();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn invalid_theme_hex_uses_fallback() {
        assert_eq!(parse_or("not a color", Color::WHITE), Color::WHITE);
        assert_eq!(parse_or("#000000", Color::WHITE), Color::BLACK);
    }
}
