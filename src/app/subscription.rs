// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are routed to the lightbox only while its overlay is
//! open; the periodic tick driving the notification state machine is only
//! installed while notifications are active, so an idle app schedules no
//! timers.

use super::Message;
use crate::ui::lightbox;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// How often the notification state machine is advanced.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the keyboard subscription for the lightbox overlay.
///
/// Escape closes, ArrowLeft/ArrowRight navigate with wraparound. While the
/// overlay is closed no keyboard events are routed to the lightbox.
pub fn create_keyboard_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }

            let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
                return None;
            };

            match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::Lightbox(lightbox::Message::Close))
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    Some(Message::Lightbox(lightbox::Message::Previous))
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    Some(Message::Lightbox(lightbox::Message::Next))
                }
                _ => None,
            }
        })
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-removal.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
