use iced::{
    Element, Length,
    widget::{Column, column, container, scrollable, text},
};

use crate::messages::Message;
use crate::state::State;
use crate::theme::SlidewayTheme;
use crate::views::carousel;

const PAGE_MAX_WIDTH: f32 = 1200.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let sections = state.sliders.iter().map(|section| {
        column![
            text(&section.title)
                .size(24)
                .color(SlidewayTheme::TEXT_PRIMARY),
            carousel(section),
        ]
        .spacing(16)
        .width(Length::Fill)
        .into()
    });

    let page = Column::with_children(sections)
        .spacing(48)
        .padding(16)
        .max_width(PAGE_MAX_WIDTH)
        .width(Length::Fill);

    scrollable(container(page).center_x(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
