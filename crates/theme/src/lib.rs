pub mod colors;
pub mod style;

pub use colors::{ToIced, BACKDROP, ON_DARK, ON_LIGHT};
pub use style::BoxStyle;

use swatch_color::Color;
use swatch_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings.  Calling
/// [`Theme::from_config`] is infallible — invalid color strings fall back to
/// the built-in dark palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:    Color,
    pub panel:         Color,
    pub field:         Color,
    pub foreground:    Color,
    pub muted:         Color,
    pub success:       Color,
    pub font_size:     f32,
    pub border_radius: f32,
    pub padding:       u16,
    pub gap:           u16,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let defaults = ThemeConfig::default();
        let color = |value: &str, fallback: &str| {
            colors::parse_or(value, colors::parse_or(fallback, Color::BLACK))
        };

        Self {
            background:    color(&cfg.background, &defaults.background),
            panel:         color(&cfg.panel, &defaults.panel),
            field:         color(&cfg.field, &defaults.field),
            foreground:    color(&cfg.foreground, &defaults.foreground),
            muted:         color(&cfg.muted, &defaults.muted),
            success:       color(&cfg.success, &defaults.success),
            font_size:     cfg.font_size,
            border_radius: cfg.border_radius,
            padding:       cfg.padding,
            gap:           cfg.gap,
        }
    }

    /// Style for the outer card.
    pub fn panel_style(&self) -> BoxStyle {
        BoxStyle { background: self.panel, radius: self.border_radius * 1.5 }
    }

    /// Style for one info item field.
    pub fn field_style(&self) -> BoxStyle {
        BoxStyle { background: self.field, radius: self.border_radius }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
