use iced::{
    Alignment, Element, Font, Length, font,
    widget::{Column, Row, Space, Stack, button, container, text, tooltip},
};
use lucide_icons::Icon;
use slideway_core::SliderController;

use crate::messages::{Message, SliderId, SliderMessage};
use crate::state::SliderSection;
use crate::theme;
use crate::widgets::slide_track;

const HORIZONTAL_HEIGHT: f32 = 300.0;
const VERTICAL_HEIGHT: f32 = 400.0;
const CONTROL_INSET: u16 = 16;
const DOT_SIZE: f32 = 12.0;
const DOT_SPACING: f32 = 8.0;

/// Render one slider: the draggable track plus whichever controls its
/// navigation type asks for.
pub fn carousel(section: &SliderSection) -> Element<'_, Message> {
    let id = section.id;
    let controller = &section.controller;
    let config = controller.config();

    let items = section
        .labels
        .iter()
        .map(|label| item_card(label))
        .collect();

    let track = slide_track(items, controller)
        .on_gesture(move |gesture| Message::Slider(id, SliderMessage::Gesture(gesture)));

    let mut layers: Vec<Element<'_, Message>> = vec![track.into()];

    if config.nav_type.shows_arrows() && controller.total_slides() > 0 {
        layers.push(arrows(id, controller));
    }
    if config.nav_type.shows_dots() && controller.total_slides() > 0 {
        layers.push(dots(id, controller));
    }

    let height = if config.vertical {
        VERTICAL_HEIGHT
    } else {
        HORIZONTAL_HEIGHT
    };

    container(
        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .clip(true)
    .style(theme::Container::Track.style())
    .into()
}

fn item_card(label: &str) -> Element<'_, Message> {
    container(
        text(label)
            .size(20)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            })
            .color(theme::SlidewayTheme::TEXT_PRIMARY),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(16)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(theme::Container::Card.style())
    .into()
}

fn arrows(id: SliderId, controller: &SliderController) -> Element<'static, Message> {
    let vertical = controller.config().vertical;
    let (back_icon, forward_icon) = if vertical {
        (Icon::ChevronUp, Icon::ChevronDown)
    } else {
        (Icon::ChevronLeft, Icon::ChevronRight)
    };

    let previous = arrow_button(
        back_icon,
        controller
            .can_go_previous()
            .then_some(Message::Slider(id, SliderMessage::Previous)),
    );
    let next = arrow_button(
        forward_icon,
        controller
            .can_go_next()
            .then_some(Message::Slider(id, SliderMessage::Next)),
    );

    if vertical {
        container(
            Column::new()
                .push(previous)
                .push(Space::new().height(Length::Fill))
                .push(next)
                .align_x(Alignment::Center)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .padding(CONTROL_INSET)
        .into()
    } else {
        container(
            Row::new()
                .push(previous)
                .push(Space::new().width(Length::Fill))
                .push(next)
                .align_y(Alignment::Center)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Alignment::Center)
        .padding(CONTROL_INSET)
        .into()
    }
}

fn arrow_button(icon: Icon, on_press: Option<Message>) -> Element<'static, Message> {
    let color = if on_press.is_some() {
        theme::SlidewayTheme::TEXT_ON_CONTROL
    } else {
        theme::SlidewayTheme::TEXT_DIMMED
    };

    button(
        text(icon_char(icon))
            .font(lucide_font())
            .size(16)
            .color(color),
    )
    .on_press_maybe(on_press)
    .padding(8)
    .style(theme::Button::Arrow.style())
    .into()
}

fn dots(id: SliderId, controller: &SliderController) -> Element<'static, Message> {
    let current = controller.current_index();
    let dots = (0..controller.total_slides()).map(|index| {
        let style = if index == current {
            theme::Button::DotActive
        } else {
            theme::Button::Dot
        };
        let dot = button(
            Space::new()
                .width(Length::Fixed(DOT_SIZE))
                .height(Length::Fixed(DOT_SIZE)),
        )
        .padding(0)
        .on_press(Message::Slider(id, SliderMessage::GoTo(index)))
        .style(style.style());

        tooltip(
            dot,
            text(format!("Go to slide {}", index + 1)).size(12),
            tooltip::Position::Top,
        )
        .into()
    });

    if controller.config().vertical {
        container(
            Column::with_children(dots)
                .spacing(DOT_SPACING)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::Center)
        .padding(CONTROL_INSET)
        .into()
    } else {
        container(
            Row::with_children(dots)
                .spacing(DOT_SPACING)
                .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::End)
        .padding(CONTROL_INSET)
        .into()
    }
}

// Helper to get lucide font
fn lucide_font() -> iced::Font {
    iced::Font::with_name("lucide")
}

// Helper to get icon character
fn icon_char(icon: Icon) -> String {
    icon.unicode().to_string()
}
