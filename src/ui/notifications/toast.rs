// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, small cards with a
//! kind-colored accent stacked in the bottom-right corner. A toast whose
//! notification is in the `Removing` phase renders faded until eviction.
//! Toasts emit no messages: their lifecycle is entirely timer-driven.

use super::manager::Manager;
use super::notification::{Notification, Phase};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a, M: 'a>(notification: &'a Notification) -> Element<'a, M> {
        let accent_color = notification.kind().color();
        let removing = notification.phase() == Phase::Removing;

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, removing)),
            });

        Container::new(message_widget)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, removing))
            .into()
    }

    /// Renders the toast overlay with all active notifications.
    ///
    /// Notifications stack in insertion order, oldest at the top, in the
    /// bottom-right corner.
    pub fn view_overlay<'a, M: 'a>(manager: &'a Manager) -> Element<'a, M> {
        let toasts: Vec<Element<'a, M>> = manager.active().map(Self::view).collect();

        if toasts.is_empty() {
            // Empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Applies the removal-animation fade to a color.
fn fade(color: Color, removing: bool) -> Color {
    if removing {
        Color {
            a: color.a * opacity::TOAST_REMOVING,
            ..color
        }
    } else {
        color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, removing: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, removing))),
        border: iced::Border {
            color: fade(accent_color, removing),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if removing { shadow::NONE } else { shadow::MD },
        text_color: Some(fade(theme.palette().text, removing)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = Kind::Success.color();
        let style = toast_container_style(&theme, accent, false);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn removing_style_fades_accent() {
        let theme = Theme::Dark;
        let accent = Kind::Error.color();
        let style = toast_container_style(&theme, accent, true);

        assert!(style.border.color.a < accent.a);
    }

    #[test]
    fn fade_is_identity_when_not_removing() {
        let color = Color::from_rgb(0.5, 0.5, 0.5);
        assert_eq!(fade(color, false), color);
        assert!(fade(color, true).a < color.a);
    }
}
