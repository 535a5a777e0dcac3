use crate::colors::ToIced;
use swatch_color::Color;

/// Visual settings for a rounded, filled box (panel or info field).
#[derive(Debug, Clone, Copy)]
pub struct BoxStyle {
    pub background: Color,
    pub radius:     f32,
}

impl BoxStyle {
    /// Iced container style for this box.
    pub fn container(self) -> iced::widget::container::Style {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(self.background.to_iced())),
            border: iced::Border {
                radius: self.radius.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
