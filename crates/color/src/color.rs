use crate::error::ParseColorError;
use std::fmt;
use std::str::FromStr;

/// Canonical color: 8-bit sRGB channels plus alpha in `[0.0, 1.0]`.
///
/// Every other representation (hex, HSL, CMYK, brightness tier, …) is a
/// view computed from these four values.  A `Color` is never mutated in
/// place by the app; selecting a new color replaces the whole value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const BLACK: Self = Self { r: 0x00, g: 0x00, b: 0x00, a: 1.0 };
    pub const WHITE: Self = Self { r: 0xff, g: 0xff, b: 0xff, a: 1.0 };
    /// The color the picker opens with when nothing else is configured (`#3498db`).
    pub const INITIAL: Self = Self { r: 0x34, g: 0x98, b: 0xdb, a: 1.0 };

    /// Opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from 8-bit channels and an alpha fraction (clamped to `[0, 1]`).
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: clamp_alpha(a) }
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.a = clamp_alpha(alpha);
        self
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    ///
    /// The leading `#` is optional.  Six digits give an opaque color; with
    /// eight, the last byte is alpha scaled from `0..=255` to `0.0..=1.0`.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let hex = hex.trim().trim_start_matches('#');

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::Digit(hex.to_string()));
        }

        // All bytes are ASCII from here on, so byte slicing is char-safe.
        let byte = |s: &str| -> Result<u8, ParseColorError> {
            u8::from_str_radix(s, 16).map_err(|_| ParseColorError::Digit(s.to_string()))
        };

        match hex.len() {
            6 => Ok(Self::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            8 => Ok(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: f64::from(byte(&hex[6..8])?) / 255.0,
            }),
            n => Err(ParseColorError::Length(n)),
        }
    }

    /// Alpha quantised back to a byte, as stored in 8-digit hex.
    #[inline]
    pub fn alpha_byte(self) -> u8 {
        (self.a * 255.0).round() as u8
    }

    /// `#rrggbb` (alpha dropped).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#rrggbbaa`.
    pub fn to_hex_alpha(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r,
            self.g,
            self.b,
            self.alpha_byte()
        )
    }

    /// `rgb(r, g, b)`.
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, a)` with alpha to two decimal places.
    pub fn to_rgba_string(self) -> String {
        format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
    }

    /// Inline-color utility class, e.g. `bg-[#3498dbff]`.
    ///
    /// `with_alpha` picks the 8-digit token over the 6-digit one; callers must
    /// choose explicitly since the two display variants disagree on it.
    pub fn to_css_utility_class(self, prefix: &str, with_alpha: bool) -> String {
        let hex = if with_alpha {
            self.to_hex_alpha()
        } else {
            self.to_hex()
        };
        format!("{prefix}-[{hex}]")
    }

    /// Channels normalised to `[0, 1]`.
    #[inline]
    pub(crate) fn unit_rgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_alpha())
    }
}

fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() {
        1.0
    } else {
        a.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_eight_digit_hex() {
        let c = Color::from_hex("#3498dbff").unwrap();
        assert_eq!((c.r, c.g, c.b), (52, 148, 219));
        assert_eq!(c.a, 1.0);
        assert_eq!(c.to_rgba_string(), "rgba(52, 148, 219, 1.00)");
    }

    #[test]
    fn six_digit_hex_is_opaque() {
        let six = Color::from_hex("#3498db").unwrap();
        let eight = Color::from_hex("#3498dbff").unwrap();
        assert_eq!(six, eight);
        assert_eq!(six.a, 1.0);
    }

    #[test]
    fn hash_is_optional_and_case_insensitive() {
        assert_eq!(Color::from_hex("3498DB").unwrap(), Color::rgb(52, 148, 219));
        assert_eq!("#FF804080".parse::<Color>().unwrap().alpha_byte(), 0x80);
    }

    #[test]
    fn alpha_byte_scaled_to_fraction() {
        let c = Color::from_hex("#ff804080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(Color::from_hex("#00000000").unwrap().a, 0.0);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(Color::from_hex("#fff"), Err(ParseColorError::Length(3)));
        assert_eq!(Color::from_hex("#ff80408"), Err(ParseColorError::Length(7)));
        assert!(matches!(Color::from_hex("#gg0000"), Err(ParseColorError::Digit(_))));
        assert!(matches!(Color::from_hex("#ééé"), Err(ParseColorError::Digit(_))));
        assert_eq!(Color::from_hex(""), Err(ParseColorError::Length(0)));
    }

    #[test]
    fn hex_output_is_lowercase_and_padded() {
        let c = Color::rgba(1, 2, 171, 0.0);
        assert_eq!(c.to_hex(), "#0102ab");
        assert_eq!(c.to_hex_alpha(), "#0102ab00");
        assert_eq!(c.to_string(), "#0102ab00");
    }

    #[test]
    fn eight_digit_hex_round_trips_every_channel_value() {
        for v in 0..=255u8 {
            let inv = 255 - v;
            let original = Color::rgba(v, inv, v / 2, f64::from(v) / 255.0);
            let parsed = Color::from_hex(&original.to_hex_alpha()).unwrap();
            assert_eq!((parsed.r, parsed.g, parsed.b), (v, inv, v / 2));
            assert!((parsed.a - original.a).abs() <= 1.0 / 255.0);
            assert_eq!(parsed.alpha_byte(), v);
        }
    }

    #[test]
    fn rgba_string_uses_two_decimals() {
        assert_eq!(Color::rgba(10, 20, 30, 0.5).to_rgba_string(), "rgba(10, 20, 30, 0.50)");
        assert_eq!(Color::rgba(10, 20, 30, 0.0).to_rgba_string(), "rgba(10, 20, 30, 0.00)");
        assert_eq!(Color::rgb(10, 20, 30).to_rgb_string(), "rgb(10, 20, 30)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::rgba(0, 0, 0, 1.5).a, 1.0);
        assert_eq!(Color::rgba(0, 0, 0, -0.2).a, 0.0);
        assert_eq!(Color::BLACK.with_alpha(f64::NAN).a, 1.0);
    }

    #[test]
    fn utility_class_tokens() {
        let c = Color::from_hex("#3498dbcc").unwrap();
        assert_eq!(c.to_css_utility_class("bg", true), "bg-[#3498dbcc]");
        assert_eq!(c.to_css_utility_class("bg", false), "bg-[#3498db]");
        assert_eq!(c.to_css_utility_class("text", false), "text-[#3498db]");
    }
}
