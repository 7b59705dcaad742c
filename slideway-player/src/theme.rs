use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container},
};

/// Light page with neutral grey cards, after the classic carousel demo look
#[derive(Debug, Clone, Copy)]
pub struct SlidewayTheme;

impl SlidewayTheme {
    pub const PAGE_BG: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const TRACK_BG: Color = Color::from_rgb(0.96, 0.96, 0.96); // #F5F5F5
    pub const CARD_BG: Color = Color::from_rgb(0.82, 0.84, 0.86); // gray-300
    pub const CARD_SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.15);

    pub const CONTROL_BG: Color = Color::from_rgb(0.12, 0.16, 0.22); // gray-800
    pub const CONTROL_HOVER: Color = Color::from_rgb(0.22, 0.25, 0.32); // gray-700
    pub const DOT: Color = Color::from_rgb(0.61, 0.64, 0.69); // gray-400
    pub const DOT_HOVER: Color = Color::from_rgb(0.29, 0.33, 0.39); // gray-600

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const TEXT_ON_CONTROL: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::PAGE_BG;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::CONTROL_BG;

        Theme::custom("Slideway Light", palette)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Container {
    Track,
    Card,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Track => |_| container::Style {
                text_color: Some(SlidewayTheme::TEXT_PRIMARY),
                background: Some(Background::Color(SlidewayTheme::TRACK_BG)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::Card => |_| container::Style {
                text_color: Some(SlidewayTheme::TEXT_PRIMARY),
                background: Some(Background::Color(SlidewayTheme::CARD_BG)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow {
                    color: SlidewayTheme::CARD_SHADOW,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 6.0,
                },
                snap: false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Button {
    Arrow,
    Dot,
    DotActive,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Arrow => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        SlidewayTheme::CONTROL_HOVER
                    }
                    _ => SlidewayTheme::CONTROL_BG,
                };

                button::Style {
                    text_color: SlidewayTheme::TEXT_ON_CONTROL,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 0.0,
                        radius: 999.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::Dot => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        SlidewayTheme::DOT_HOVER
                    }
                    _ => SlidewayTheme::DOT,
                };
                dot_style(background)
            },
            Button::DotActive => |_, _| dot_style(SlidewayTheme::CONTROL_BG),
        }
    }
}

fn dot_style(background: Color) -> button::Style {
    button::Style {
        text_color: SlidewayTheme::TEXT_ON_CONTROL,
        background: Some(Background::Color(background)),
        border: Border {
            color: background,
            width: 0.0,
            radius: 999.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}
