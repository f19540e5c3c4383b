// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact_form;
use crate::ui::lightbox;
use crate::ui::menu;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Menu(menu::Message),
    ContactForm(contact_form::Message),
    Lightbox(lightbox::Message),
    /// Periodic tick driving the notification state machine.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional gallery directory to scan on startup, overriding the config.
    pub gallery_dir: Option<String>,
    /// Optional theme override (`light` / `dark` / `system`).
    pub theme: Option<String>,
    /// Optional config file path override (for settings.toml).
    pub config_path: Option<String>,
}
