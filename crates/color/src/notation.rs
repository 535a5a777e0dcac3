use crate::color::Color;
use serde::{Deserialize, Serialize};

/// One textual serialization of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// `#rrggbb`
    Hex,
    /// `#rrggbbaa`
    HexAlpha,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, a)`
    Hsla,
    /// `cmyk(c%, m%, y%, k%)`
    Cmyk,
    /// `bg-[#rrggbb]`
    UtilityClass,
    /// `bg-[#rrggbbaa]`
    UtilityClassAlpha,
    /// `brightness-*`
    Brightness,
}

impl Notation {
    /// Short label shown next to the value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hex               => "HEX",
            Self::HexAlpha          => "HEXA",
            Self::Rgb               => "RGB",
            Self::Rgba              => "RGBA",
            Self::Hsl               => "HSL",
            Self::Hsla              => "HSLA",
            Self::Cmyk              => "CMYK",
            Self::UtilityClass      => "Tailwind",
            Self::UtilityClassAlpha => "Tailwind-A",
            Self::Brightness        => "Brightness",
        }
    }

    /// Whether this notation carries the alpha channel.
    pub fn uses_alpha(self) -> bool {
        matches!(self, Self::HexAlpha | Self::Rgba | Self::Hsla | Self::UtilityClassAlpha)
    }

    /// Render `color` in this notation.
    pub fn render(self, color: Color, opts: &RenderOptions) -> String {
        match self {
            Self::Hex               => color.to_hex(),
            Self::HexAlpha          => color.to_hex_alpha(),
            Self::Rgb               => color.to_rgb_string(),
            Self::Rgba              => color.to_rgba_string(),
            Self::Hsl               => color.to_hsla().to_hsl_string(),
            Self::Hsla              => color.to_hsla().to_hsla_string(),
            Self::Cmyk              => color.to_cmyk().to_string(),
            Self::UtilityClass      => color.to_css_utility_class(&opts.utility_prefix, false),
            Self::UtilityClassAlpha => color.to_css_utility_class(&opts.utility_prefix, true),
            Self::Brightness        => color.brightness().class_name().to_string(),
        }
    }
}

/// Knobs that affect rendering but are not part of the color itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Utility-class prefix, `bg` by default.
    pub utility_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            utility_prefix: "bg".to_string(),
        }
    }
}

/// An ordered, duplicate-free selection of notations to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Notation>", into = "Vec<Notation>")]
pub struct NotationSet(Vec<Notation>);

impl NotationSet {
    /// Build from any sequence; later duplicates are dropped.
    pub fn new(notations: impl IntoIterator<Item = Notation>) -> Self {
        let mut set = Self(Vec::new());
        for n in notations {
            set.push(n);
        }
        set
    }

    /// The alpha-aware display: both hex forms, RGB(A), HSL(A), both utility classes, CMYK.
    pub fn with_alpha() -> Self {
        Self(vec![
            Notation::Hex,
            Notation::HexAlpha,
            Notation::Rgb,
            Notation::Rgba,
            Notation::Hsl,
            Notation::Hsla,
            Notation::UtilityClass,
            Notation::UtilityClassAlpha,
            Notation::Cmyk,
        ])
    }

    /// The alpha-less display.
    pub fn opaque() -> Self {
        Self(vec![
            Notation::Hex,
            Notation::Rgb,
            Notation::Hsl,
            Notation::UtilityClass,
            Notation::Cmyk,
        ])
    }

    /// Append `notation` unless already present.
    pub fn push(&mut self, notation: Notation) {
        if !self.0.contains(&notation) {
            self.0.push(notation);
        }
    }

    pub fn contains(&self, notation: Notation) -> bool {
        self.0.contains(&notation)
    }

    pub fn iter(&self) -> impl Iterator<Item = Notation> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render every notation in order as `(notation, text)` rows.
    pub fn render(&self, color: Color, opts: &RenderOptions) -> Vec<(Notation, String)> {
        self.iter().map(|n| (n, n.render(color, opts))).collect()
    }
}

impl From<Vec<Notation>> for NotationSet {
    fn from(v: Vec<Notation>) -> Self {
        Self::new(v)
    }
}

impl From<NotationSet> for Vec<Notation> {
    fn from(set: NotationSet) -> Self {
        set.0
    }
}

/// Which of the two display flavours the widget runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Alpha slider, 8-digit hex, all alpha notations.
    #[default]
    Alpha,
    /// No alpha anywhere; colors are forced opaque.
    Opaque,
}

impl Variant {
    pub fn has_alpha(self) -> bool {
        self == Self::Alpha
    }

    /// Notation preset used when the config doesn't list one.
    pub fn default_notations(self) -> NotationSet {
        match self {
            Self::Alpha  => NotationSet::with_alpha(),
            Self::Opaque => NotationSet::opaque(),
        }
    }

    /// Bring a color into this variant's domain.
    pub fn normalize(self, color: Color) -> Color {
        match self {
            Self::Alpha  => color,
            Self::Opaque => color.with_alpha(1.0),
        }
    }

    /// The normalized string a picker in this variant emits for `color`.
    pub fn picker_hex(self, color: Color) -> String {
        match self {
            Self::Alpha  => color.to_hex_alpha(),
            Self::Opaque => color.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_all(hex: &str) -> Vec<(Notation, String)> {
        let color = Color::from_hex(hex).unwrap();
        NotationSet::with_alpha().render(color, &RenderOptions::default())
    }

    #[test]
    fn alpha_variant_rows_for_reference_blue() {
        let rows = render_all("#3498dbff");
        let text: Vec<&str> = rows.iter().map(|(_, s)| s.as_str()).collect();
        assert_eq!(
            text,
            [
                "#3498db",
                "#3498dbff",
                "rgb(52, 148, 219)",
                "rgba(52, 148, 219, 1.00)",
                "hsl(206, 70%, 53%)",
                "hsla(206, 70%, 53%, 1.00)",
                "bg-[#3498db]",
                "bg-[#3498dbff]",
                "cmyk(76%, 32%, 0%, 14%)",
            ]
        );
    }

    #[test]
    fn labels_follow_order() {
        let labels: Vec<&str> = NotationSet::opaque().iter().map(Notation::label).collect();
        assert_eq!(labels, ["HEX", "RGB", "HSL", "Tailwind", "CMYK"]);
    }

    #[test]
    fn opaque_set_has_no_alpha_notation() {
        assert!(NotationSet::opaque().iter().all(|n| !n.uses_alpha()));
        assert!(NotationSet::with_alpha().iter().any(Notation::uses_alpha));
    }

    #[test]
    fn black_renders_full_key_cmyk() {
        let rows = render_all("#000000ff");
        let cmyk = rows.iter().find(|(n, _)| *n == Notation::Cmyk).unwrap();
        assert_eq!(cmyk.1, "cmyk(0%, 0%, 0%, 100%)");
    }

    #[test]
    fn brightness_notation_uses_class_name() {
        let opts = RenderOptions::default();
        assert_eq!(Notation::Brightness.render(Color::WHITE, &opts), "brightness-200");
        assert_eq!(Notation::Brightness.render(Color::BLACK, &opts), "brightness-0");
    }

    #[test]
    fn custom_utility_prefix() {
        let opts = RenderOptions { utility_prefix: "text".into() };
        assert_eq!(Notation::UtilityClass.render(Color::WHITE, &opts), "text-[#ffffff]");
    }

    #[test]
    fn set_drops_duplicates_and_keeps_order() {
        let set = NotationSet::new([Notation::Rgb, Notation::Hex, Notation::Rgb]);
        assert_eq!(set.iter().collect::<Vec<_>>(), [Notation::Rgb, Notation::Hex]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(set.contains(Notation::Hex));
    }

    #[test]
    fn opaque_variant_strips_alpha() {
        let translucent = Color::from_hex("#3498db80").unwrap();
        assert_eq!(Variant::Opaque.normalize(translucent).a, 1.0);
        assert_eq!(Variant::Opaque.picker_hex(translucent), "#3498db");
        assert_eq!(Variant::Alpha.picker_hex(translucent), "#3498db80");
        assert_eq!(Variant::Alpha.normalize(translucent), translucent);
    }

    #[test]
    fn variants_pick_matching_presets() {
        assert_eq!(Variant::Alpha.default_notations(), NotationSet::with_alpha());
        assert_eq!(Variant::Opaque.default_notations(), NotationSet::opaque());
        assert!(Variant::Alpha.has_alpha());
        assert!(!Variant::Opaque.has_alpha());
    }
}
