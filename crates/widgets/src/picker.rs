use swatch_color::{Color, Variant};
use swatch_core::{event::PickerInput, state::AppState, Message};
use swatch_theme::{Theme, ToIced};
use iced::{
    widget::{column, container, row, slider, text, text_input, Column},
    Alignment, Element, Length,
};

/// Interactive color picker: H / S / L (and, in the alpha variant, A) sliders
/// plus a hex text field.
///
/// Seeded from a normalized hex string; every user change yields a new
/// normalized hex string via [`PickerWidget::update`].  Slider positions are
/// kept separately from the selected color so hue survives a trip through
/// gray, black or white.
#[derive(Debug, Clone)]
pub struct PickerWidget {
    variant:    Variant,
    hue:        f32, // 0 – 360
    saturation: f32, // 0 – 1
    lightness:  f32, // 0 – 1
    alpha:      f32, // 0 – 1
    /// Buffered text so an invalid hex mid-typing doesn't clobber the color.
    hex_buf:    String,
}

impl PickerWidget {
    /// Create a picker showing `initial` (`#rrggbb` or `#rrggbbaa`).
    /// Falls back to the default color when `initial` doesn't parse.
    pub fn new(initial: &str, variant: Variant) -> Self {
        let mut picker = Self {
            variant,
            hue:        0.0,
            saturation: 0.0,
            lightness:  0.0,
            alpha:      1.0,
            hex_buf:    String::new(),
        };
        let color = Color::from_hex(initial).unwrap_or_else(|e| {
            tracing::warn!("Picker seed '{initial}' rejected ({e}); using default");
            Color::INITIAL
        });
        picker.seed(variant.normalize(color));
        picker
    }

    /// Switch display flavour; the current color is re-normalized.
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
        self.seed(variant.normalize(self.color()));
    }

    /// Color currently under the sliders.
    pub fn color(&self) -> Color {
        let alpha = if self.variant.has_alpha() { f64::from(self.alpha) } else { 1.0 };
        Color::from_hsla(
            f64::from(self.hue),
            f64::from(self.saturation),
            f64::from(self.lightness),
            alpha,
        )
    }

    /// Contents of the hex text field.
    pub fn hex_text(&self) -> &str {
        &self.hex_buf
    }

    /// Apply one gesture.  Returns the new normalized hex string when the
    /// selected color changed.
    pub fn update(&mut self, input: PickerInput) -> Option<String> {
        let before = self.variant.picker_hex(self.color());
        match input {
            PickerInput::Hue(v)        => self.hue        = v.clamp(0.0, 360.0),
            PickerInput::Saturation(v) => self.saturation = v.clamp(0.0, 1.0),
            PickerInput::Lightness(v)  => self.lightness  = v.clamp(0.0, 1.0),
            PickerInput::Alpha(v)      => self.alpha      = v.clamp(0.0, 1.0),
            PickerInput::HexEdited(s) => {
                let parsed = Color::from_hex(&s);
                self.hex_buf = s;
                let color = self.variant.normalize(parsed.ok()?);
                self.seed_sliders(color);
                let hex = self.variant.picker_hex(color);
                return (hex != before).then_some(hex);
            }
        }

        let hex = self.variant.picker_hex(self.color());
        self.hex_buf = hex.clone();
        (hex != before).then_some(hex)
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let size  = theme.font_size - 2.0;
        let muted = theme.muted.to_iced();

        let slider_row = |label: &'static str,
                          control: Element<'a, Message>,
                          value: String| -> Element<'a, Message> {
            row![
                text(label).width(16).size(size).color(muted),
                control,
                text(value).width(48).size(size).color(muted),
            ]
            .spacing(8)
            .align_y(Alignment::Center)
            .into()
        };

        let mut col = Column::new().spacing(6).width(Length::Fill);

        col = col.push(slider_row(
            "H",
            slider(0.0f32..=360.0, self.hue, |v| Message::Picker(PickerInput::Hue(v)))
                .step(1.0f32)
                .width(Length::Fill)
                .into(),
            format!("{:.0}°", self.hue),
        ));
        col = col.push(slider_row(
            "S",
            slider(0.0f32..=1.0, self.saturation, |v| Message::Picker(PickerInput::Saturation(v)))
                .step(0.01f32)
                .width(Length::Fill)
                .into(),
            format!("{:.0}%", self.saturation * 100.0),
        ));
        col = col.push(slider_row(
            "L",
            slider(0.0f32..=1.0, self.lightness, |v| Message::Picker(PickerInput::Lightness(v)))
                .step(0.01f32)
                .width(Length::Fill)
                .into(),
            format!("{:.0}%", self.lightness * 100.0),
        ));
        if self.variant.has_alpha() {
            col = col.push(slider_row(
                "A",
                slider(0.0f32..=1.0, self.alpha, |v| Message::Picker(PickerInput::Alpha(v)))
                    .step(0.01f32)
                    .width(Length::Fill)
                    .into(),
                format!("{:.2}", self.alpha),
            ));
        }

        let current = state.color.to_iced();
        let swatch = container(text(""))
            .width(Length::Fixed(28.0))
            .height(Length::Fixed(28.0))
            .style(move |_: &iced::Theme| iced::widget::container::Style {
                background: Some(iced::Background::Color(current)),
                border: iced::Border { radius: 6.0.into(), ..Default::default() },
                ..Default::default()
            });

        let valid = Color::from_hex(&self.hex_buf).is_ok();
        let placeholder = if self.variant.has_alpha() { "#rrggbbaa" } else { "#rrggbb" };
        let hex_row = row![
            swatch,
            text_input(placeholder, &self.hex_buf)
                .on_input(|s| Message::Picker(PickerInput::HexEdited(s)))
                .size(theme.font_size)
                .width(160),
            text(if valid { "" } else { "invalid" }).size(size).color(muted),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        column![col, hex_row].spacing(12).into()
    }

    /// Load `color` into sliders and text field.
    fn seed(&mut self, color: Color) {
        self.seed_sliders(color);
        self.hex_buf = self.variant.picker_hex(color);
    }

    fn seed_sliders(&mut self, color: Color) {
        let (h, s, l) = color.hsl_components();
        // Achromatic colors carry no hue; keep the slider where it was.
        if s > 0.0 {
            self.hue = h as f32;
        }
        self.saturation = s as f32;
        self.lightness  = l as f32;
        self.alpha      = color.a as f32;
    }
}
