use crate::{error::Result, feedback::CopyFeedback};
use swatch_color::{Color, Notation, RenderOptions, Variant};

/// Central application state — all widgets read from this snapshot.
///
/// The only long-lived value is the selected [`Color`]; every notation shown
/// on screen is rendered from it on demand.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Currently selected color, already normalized for `variant`.
    pub color: Color,
    /// Which display flavour is active.
    pub variant: Variant,
    /// Transient "Copied!" flags per info item.
    pub copy: CopyFeedback,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Color::INITIAL, Variant::default())
    }
}

impl AppState {
    pub fn new(color: Color, variant: Variant) -> Self {
        Self {
            color: variant.normalize(color),
            variant,
            copy: CopyFeedback::new(),
        }
    }

    /// Replace the selected color with the one encoded in `hex`.
    ///
    /// On error the previous color is kept.
    pub fn select_hex(&mut self, hex: &str) -> Result<()> {
        let color = Color::from_hex(hex)?;
        self.select(color);
        Ok(())
    }

    /// Replace the selected color.
    pub fn select(&mut self, color: Color) {
        self.color = self.variant.normalize(color);
        tracing::debug!("Selected color {}", self.color);
    }

    /// Switch display flavour, re-normalizing the current color.
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
        self.color = variant.normalize(self.color);
    }

    /// The normalized string handed to (and expected back from) the picker.
    pub fn picker_hex(&self) -> String {
        self.variant.picker_hex(self.color)
    }

    /// Render the current color in `notation`.
    pub fn render(&self, notation: Notation, opts: &RenderOptions) -> String {
        notation.render(self.color, opts)
    }
}
