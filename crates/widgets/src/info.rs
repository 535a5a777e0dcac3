use swatch_color::{Notation, NotationSet, RenderOptions};
use swatch_core::{state::AppState, Message};
use swatch_theme::{Theme, ToIced};
use iced::{
    widget::{button, container, row, text, Column, Space},
    Alignment, Element, Font, Length,
};

/// Grid of copyable notation rows for the selected color.
///
/// Every value is rendered from `state.color` at view time; the widget keeps
/// only the display settings.
#[derive(Debug, Clone)]
pub struct ColorInfoWidget {
    notations: NotationSet,
    options:   RenderOptions,
    columns:   usize,
}

impl ColorInfoWidget {
    pub fn new(notations: NotationSet, options: RenderOptions) -> Self {
        Self { notations, options, columns: 2 }
    }

    /// Replace the display settings (config reload).
    pub fn configure(&mut self, notations: NotationSet, options: RenderOptions) {
        self.notations = notations;
        self.options   = options;
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// `(notation, text, copied)` for every row, in display order.
    pub fn rows(&self, state: &AppState) -> Vec<(Notation, String, bool)> {
        self.notations
            .render(state.color, &self.options)
            .into_iter()
            .map(|(n, value)| (n, value, state.copy.is_copied(n)))
            .collect()
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let gap = theme.gap as f32;
        let mut grid = Column::new().spacing(gap * 0.75).width(Length::Fill);

        let mut cells = self.rows(state).into_iter().peekable();
        while cells.peek().is_some() {
            let mut line = iced::widget::Row::new().spacing(gap).width(Length::Fill);
            for _ in 0..self.columns {
                line = match cells.next() {
                    Some((notation, value, copied)) => {
                        line.push(info_item(notation, value, copied, theme))
                    }
                    None => line.push(Space::new().width(Length::FillPortion(1))),
                };
            }
            grid = grid.push(line);
        }

        grid.into()
    }
}

/// One notation: value field with a copy button, followed by its label.
fn info_item<'a>(
    notation: Notation,
    value: String,
    copied: bool,
    theme: &'a Theme,
) -> Element<'a, Message> {
    let muted   = theme.muted.to_iced();
    let success = theme.success.to_iced();
    let field   = theme.field_style();

    let copy_btn = button(
        row![
            text(if copied { "Copied!" } else { "" }).size(11.0).color(success),
            text("⧉").size(theme.font_size + 2.0).color(muted),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .on_press(Message::CopyRequested(notation))
    .padding(0)
    .style(button::text);

    let value_box = container(
        row![
            text(value)
                .size(theme.font_size)
                .font(Font::MONOSPACE)
                .color(theme.foreground.to_iced())
                .width(Length::Fill),
            copy_btn,
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([4, 12])
    .width(Length::Fill)
    .style(move |_: &iced::Theme| field.container());

    row![
        value_box,
        text(notation.label()).size(11.0).color(muted).width(72),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .width(Length::FillPortion(1))
    .into()
}
