use swatch_color::Color;
use swatch_core::{state::AppState, Message};
use swatch_theme::{Theme, ToIced, BACKDROP, ON_DARK, ON_LIGHT};
use iced::{
    widget::{column, container, row, stack, text},
    Element, Length,
};

/// Large swatch of the selected color stacked over a four-tile backdrop
/// (white, white 60 %, white 20 %, black) so translucency is visible.
///
/// The caption is the brightness class, drawn dark on light tiers and light
/// on dark ones.
#[derive(Debug)]
pub struct PreviewWidget {
    size: f32,
}

impl Default for PreviewWidget {
    fn default() -> Self {
        Self::new(144.0)
    }
}

impl PreviewWidget {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let radius = theme.border_radius;
        let inner  = self.size * 0.9;
        let gap    = (self.size * 0.06).round();

        let tile = |c: Color| -> Element<'a, Message> {
            let fill = c.to_iced();
            container(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_: &iced::Theme| iced::widget::container::Style {
                    background: Some(iced::Background::Color(fill)),
                    border: iced::Border { radius: (radius * 0.66).into(), ..Default::default() },
                    ..Default::default()
                })
                .into()
        };

        let grid = column![
            row![tile(BACKDROP[0]), tile(BACKDROP[1])].spacing(gap).height(Length::Fill),
            row![tile(BACKDROP[2]), tile(BACKDROP[3])].spacing(gap).height(Length::Fill),
        ]
        .spacing(gap)
        .width(Length::Fixed(inner))
        .height(Length::Fixed(inner));

        let backdrop = container(grid)
            .center_x(Length::Fixed(self.size))
            .center_y(Length::Fixed(self.size));

        let fill    = state.color.to_iced();
        let caption = caption_color(state.color).to_iced();
        let swatch = container(
            text(state.color.brightness().class_name())
                .size(11.0)
                .color(caption),
        )
        .width(Length::Fixed(self.size))
        .height(Length::Fixed(self.size))
        .center_x(Length::Fixed(self.size))
        .center_y(Length::Fixed(self.size))
        .style(move |_: &iced::Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(fill)),
            border: iced::Border { radius: radius.into(), ..Default::default() },
            ..Default::default()
        });

        stack![backdrop, swatch].into()
    }
}

/// Caption color for text on a swatch of `color`.
///
/// Mostly-transparent swatches show the backdrop through, so they are
/// treated as light.
fn caption_color(color: Color) -> Color {
    if color.a < 0.5 || color.brightness().is_light() {
        ON_LIGHT
    } else {
        ON_DARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_contrasts_with_swatch() {
        assert_eq!(caption_color(Color::WHITE), ON_LIGHT);
        assert_eq!(caption_color(Color::BLACK), ON_DARK);
        assert_eq!(caption_color(Color::rgb(52, 148, 219)), ON_DARK);
        assert_eq!(caption_color(Color::BLACK.with_alpha(0.1)), ON_LIGHT);
    }
}
