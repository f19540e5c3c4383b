// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the navigation bar, the current screen, and the two overlays:
//! the lightbox (while open) and the toast stack (while notifications are
//! active). Overlays are layered above the base content with a `Stack`.

use super::{Message, Screen};
use crate::ui::contact_form;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::lightbox;
use crate::ui::menu::{self, ViewContext as MenuViewContext};
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub menu_open: bool,
    pub contact_form: &'a contact_form::State,
    pub lightbox: &'a lightbox::State,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(),
        Screen::Gallery => lightbox::view_gallery(ctx.lightbox).map(Message::Lightbox),
        Screen::Contact => contact_form::view(ctx.contact_form).map(Message::ContactForm),
    };

    let menu_view = menu::view(MenuViewContext {
        menu_open: ctx.menu_open,
        current_screen: ctx.screen,
    })
    .map(Message::Menu);

    let base = Column::new()
        .push(menu_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(base);

    if ctx.lightbox.is_open() {
        layers = layers.push(lightbox::view_overlay(ctx.lightbox).map(Message::Lightbox));
    }

    layers = layers.push(Toast::view_overlay(ctx.notifications));

    layers.width(Length::Fill).height(Length::Fill).into()
}

/// Renders the landing screen.
fn view_home() -> Element<'static, Message> {
    let title = Text::new("Vitrine").size(typography::TITLE);
    let tagline = Text::new("A small showcase of work we are proud of.").size(typography::SUBTITLE);
    let blurb = Text::new(
        "Browse the gallery for a look at recent projects, \
         or send us a message through the contact page.",
    )
    .size(typography::BODY);

    let gallery_button = button(Text::new("Browse the gallery").size(typography::BODY))
        .on_press(Message::Menu(menu::Message::Navigate(Screen::Gallery)))
        .padding([spacing::XS, spacing::LG]);
    let contact_button = button(Text::new("Contact us").size(typography::BODY))
        .on_press(Message::Menu(menu::Message::Navigate(Screen::Contact)))
        .padding([spacing::XS, spacing::LG])
        .style(button::secondary);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(tagline)
        .push(blurb)
        .push(
            iced::widget::Row::new()
                .spacing(spacing::SM)
                .push(gallery_button)
                .push(contact_button),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}
