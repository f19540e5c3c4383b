// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with a collapsible menu.
//!
//! The bar shows the brand title and a hamburger toggle; the dropdown lists
//! the navigation links. Activating any link switches the screen and closes
//! the menu. The only state is the open/closed flag owned by the app.

use crate::app::Screen;
use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the menu.
pub struct ViewContext {
    pub menu_open: bool,
    pub current_screen: Screen,
}

/// Messages emitted by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Processes a menu message and returns the corresponding event.
///
/// Navigation always closes the menu.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(screen) => {
            *menu_open = false;
            Event::Navigate(screen)
        }
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let mut content = Column::new().width(Length::Fill);

    let brand = Text::new("Vitrine").size(typography::SUBTITLE);
    let toggle_button = button(Text::new("☰").size(typography::BODY))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS);

    let top_bar = Container::new(
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(Container::new(brand).width(Length::Fill))
            .push(toggle_button),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .style(bar_style);
    content = content.push(top_bar);

    if ctx.menu_open {
        content = content.push(build_dropdown(ctx.current_screen));
    }

    content.into()
}

/// Build the dropdown of navigation links.
fn build_dropdown(current_screen: Screen) -> Element<'static, Message> {
    let mut links = Column::new().spacing(spacing::XXS).padding(spacing::XS);

    for screen in Screen::ALL {
        let selected = screen == current_screen;
        let link = button(Text::new(screen.label()).size(typography::BODY))
            .on_press(Message::Navigate(screen))
            .padding([spacing::XXS, spacing::MD])
            .style(move |theme, status| link_style(theme, status, selected));
        links = links.push(link);
    }

    Container::new(links)
        .width(Length::Fill)
        .style(bar_style)
        .into()
}

/// Style function for the bar and dropdown background.
fn bar_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        border: iced::Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        text_color: Some(base.text),
        ..Default::default()
    }
}

/// Style function for a navigation link; the current screen is highlighted.
fn link_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = if selected || matches!(status, button::Status::Hovered) {
        Some(iced::Background::Color(palette::PRIMARY_700))
    } else {
        None
    };

    button::Style {
        background,
        text_color: if selected {
            iced::Color::WHITE
        } else {
            base.text
        },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}
