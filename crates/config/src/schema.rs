use serde::{Deserialize, Serialize};
use swatch_color::{Color, NotationSet, RenderOptions, Variant};
use swatch_core::{Result, SwatchError};

/// Root configuration structure parsed from `swatch.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchConfig {
    /// Picker behaviour and starting color.
    pub picker: PickerConfig,
    /// Which notations to list and how to format them.
    pub display: DisplayConfig,
    /// "Copied!" acknowledgment timing.
    pub feedback: FeedbackConfig,
    /// Initial window geometry.
    pub window: WindowConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

impl SwatchConfig {
    /// Check values that serde alone cannot validate.
    pub fn validate(&self) -> Result<()> {
        Color::from_hex(&self.picker.initial).map_err(|e| {
            SwatchError::Config(format!("picker.initial '{}': {e}", self.picker.initial))
        })?;
        Ok(())
    }

    /// Starting color, falling back to the built-in default when invalid.
    pub fn initial_color(&self) -> Color {
        Color::from_hex(&self.picker.initial).unwrap_or(Color::INITIAL)
    }

    /// Notations to display: the explicit list if given, else the variant preset.
    /// The brightness row is appended when enabled.
    pub fn notations(&self) -> NotationSet {
        let mut set = self
            .display
            .notations
            .clone()
            .unwrap_or_else(|| self.picker.variant.default_notations());
        if self.display.brightness {
            set.push(swatch_color::Notation::Brightness);
        }
        set
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            utility_prefix: self.display.utility_prefix.clone(),
        }
    }
}

/// Picker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Color shown on launch (hex, e.g. `"#3498dbff"`).
    pub initial: String,
    /// `alpha` shows the alpha slider and alpha notations; `opaque` hides them.
    pub variant: Variant,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial: "#3498dbff".to_string(),
            variant: Variant::Alpha,
        }
    }
}

/// Notation list settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Explicit notation list; `None` uses the variant's preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notations: Option<NotationSet>,
    /// Utility-class prefix, e.g. `"bg"` → `bg-[#3498db]`.
    pub utility_prefix: String,
    /// Append the `brightness-*` tier as an extra row.
    pub brightness: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            notations: None,
            utility_prefix: "bg".to_string(),
            brightness: false,
        }
    }
}

/// Copy acknowledgment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// How long "Copied!" stays visible, in milliseconds.
    pub copied_ms: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self { copied_ms: 1_000 }
    }
}

/// Window geometry in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width:  f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width:  720.0,
            height: 760.0,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#171717"`).
    pub background: String,
    /// Card / panel background.
    pub panel: String,
    /// Info item field background.
    pub field: String,
    /// Primary text color.
    pub foreground: String,
    /// Labels and idle icons.
    pub muted: String,
    /// "Copied!" acknowledgment text.
    pub success: String,
    /// Font size in points.
    pub font_size: f32,
    /// Corner radius for panels and fields (pixels).
    pub border_radius: f32,
    /// Outer padding (pixels).
    pub padding: u16,
    /// Gap between items (pixels).
    pub gap: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:    "#171717".to_string(), // neutral-900
            panel:         "#262626".to_string(), // neutral-800
            field:         "#404040".to_string(), // neutral-700
            foreground:    "#ffffff".to_string(),
            muted:         "#9ca3af".to_string(), // gray-400
            success:       "#4ade80".to_string(), // green-400
            font_size:     14.0,
            border_radius: 12.0,
            padding:       16,
            gap:           16,
        }
    }
}
