// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the navigation menu, the contact form,
//! the gallery lightbox, and the toast notification manager, and translates
//! messages into side effects like the simulated form submission. The
//! manager is an explicitly owned field, not a process-wide singleton, so
//! every notification site is auditable from this update loop.

mod message;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::gallery_scanner::ImageList;
use crate::ui::contact_form;
use crate::ui::lightbox;
use crate::ui::menu;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    screen: Screen,
    menu_open: bool,
    contact_form: contact_form::State,
    lightbox: lightbox::State,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and CLI flags.
    ///
    /// Config or gallery problems degrade to defaults and surface as error
    /// toasts; startup itself never fails.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();

        let config = match flags.config_path.as_deref() {
            Some(path) => config::load_from_path(std::path::Path::new(path)),
            None => config::load(),
        };
        let config = match config {
            Ok(config) => config,
            Err(_) => {
                app.notifications
                    .error("Could not load settings, using defaults.");
                config::Config::default()
            }
        };

        app.theme_mode = flags
            .theme
            .as_deref()
            .and_then(ThemeMode::from_cli)
            .unwrap_or(config.general.theme_mode);

        app.notifications
            .set_visible_duration(Duration::from_millis(config.visible_duration_ms()));

        let gallery_dir = flags
            .gallery_dir
            .map(PathBuf::from)
            .or(config.gallery.directory);
        if let Some(dir) = gallery_dir {
            match ImageList::scan_directory(&dir) {
                Ok(list) => {
                    app.lightbox = lightbox::State::from_image_list(&list);
                }
                Err(_) => {
                    app.notifications
                        .error("Could not read the gallery directory.");
                }
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Home => "Vitrine".to_string(),
            screen => format!("{} - Vitrine", screen.label()),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = subscription::create_keyboard_subscription(self.lightbox.is_open());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([keyboard_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(menu_message) => {
                match menu::update(menu_message, &mut self.menu_open) {
                    menu::Event::None => {}
                    menu::Event::Navigate(target) => {
                        self.screen = target;
                        self.lightbox.close();
                    }
                }
                Task::none()
            }
            Message::ContactForm(form_message) => {
                match contact_form::update(&mut self.contact_form, form_message) {
                    contact_form::Event::None => Task::none(),
                    contact_form::Event::BeginSubmit => Task::perform(
                        async {
                            // Simulated submission; there is no backend.
                            tokio::time::sleep(contact_form::SUBMIT_DELAY).await;
                            Ok::<(), String>(())
                        },
                        |result| Message::ContactForm(contact_form::Message::SubmitFinished(result)),
                    ),
                    contact_form::Event::ShowSuccess(text) => {
                        self.notifications.success(text);
                        Task::none()
                    }
                    contact_form::Event::ShowError(text) => {
                        self.notifications.error(text);
                        Task::none()
                    }
                }
            }
            Message::Lightbox(lightbox_message) => {
                lightbox::update(&mut self.lightbox, lightbox_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick_at(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            menu_open: self.menu_open,
            contact_form: &self.contact_form,
            lightbox: &self.lightbox,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Kind, Notification, Phase, REMOVAL_ANIMATION};
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::time::Instant;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) {
        let mut file = fs::File::create(dir.join(name)).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
    }

    fn app_with_gallery(count: usize) -> (tempfile::TempDir, App) {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for i in 0..count {
            create_test_image(temp_dir.path(), &format!("{i}.png"));
        }
        let (app, _task) = App::new(Flags {
            gallery_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        });
        (temp_dir, app)
    }

    fn fill_form(app: &mut App, name: &str, email: &str, message: &str) {
        let _ = app.update(Message::ContactForm(contact_form::Message::NameChanged(
            name.into(),
        )));
        let _ = app.update(Message::ContactForm(contact_form::Message::EmailChanged(
            email.into(),
        )));
        let _ = app.update(Message::ContactForm(contact_form::Message::MessageChanged(
            message.into(),
        )));
    }

    #[test]
    fn new_starts_on_home_with_closed_menu_and_no_toasts() {
        let (app, _task) = App::new(Flags::default());
        assert_eq!(app.screen, Screen::Home);
        assert!(!app.menu_open);
        assert!(!app.notifications.has_notifications());
        assert_eq!(app.title(), "Vitrine");
    }

    #[test]
    fn menu_navigation_switches_screen_and_closes_menu() {
        let mut app = App::default();
        let _ = app.update(Message::Menu(menu::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Menu(menu::Message::Navigate(Screen::Contact)));

        assert_eq!(app.screen, Screen::Contact);
        assert!(!app.menu_open);
        assert_eq!(app.title(), "Contact - Vitrine");
    }

    #[test]
    fn submitting_with_missing_name_shows_single_error_mentioning_name() {
        let mut app = App::default();
        fill_form(&mut app, "", "a@b.com", "hi");

        let _ = app.update(Message::ContactForm(contact_form::Message::Submit));

        assert_eq!(app.notifications.active_count(), 1);
        let toast = app.notifications.active().next().unwrap();
        assert_eq!(toast.kind(), Kind::Error);
        assert!(toast.message().contains("name"));
        // Form is not reset and the submit affordance stays enabled.
        assert_eq!(app.contact_form.email, "a@b.com");
        assert_eq!(app.contact_form.message, "hi");
        assert!(!app.contact_form.is_submitting());
    }

    #[test]
    fn submitting_with_invalid_email_shows_email_error() {
        let mut app = App::default();
        fill_form(&mut app, "Al", "not-an-email", "hi");

        let _ = app.update(Message::ContactForm(contact_form::Message::Submit));

        assert_eq!(app.notifications.active_count(), 1);
        let toast = app.notifications.active().next().unwrap();
        assert_eq!(toast.kind(), Kind::Error);
        assert!(toast.message().contains("email"));
    }

    #[test]
    fn valid_submission_disables_submit_then_shows_single_success_and_clears_fields() {
        let mut app = App::default();
        fill_form(&mut app, "Al", "a@b.com", "hi");

        let _ = app.update(Message::ContactForm(contact_form::Message::Submit));
        assert!(app.contact_form.is_submitting());
        assert_eq!(app.notifications.active_count(), 0);

        let _ = app.update(Message::ContactForm(contact_form::Message::SubmitFinished(
            Ok(()),
        )));

        assert_eq!(app.notifications.active_count(), 1);
        let toast = app.notifications.active().next().unwrap();
        assert_eq!(toast.kind(), Kind::Success);
        assert!(!app.contact_form.is_submitting());
        assert!(app.contact_form.name.is_empty());
        assert!(app.contact_form.email.is_empty());
        assert!(app.contact_form.message.is_empty());
    }

    #[test]
    fn failed_submission_shows_single_error_and_preserves_fields() {
        let mut app = App::default();
        fill_form(&mut app, "Al", "a@b.com", "hi");

        let _ = app.update(Message::ContactForm(contact_form::Message::Submit));
        let _ = app.update(Message::ContactForm(contact_form::Message::SubmitFinished(
            Err("simulated outage".into()),
        )));

        assert_eq!(app.notifications.active_count(), 1);
        assert_eq!(app.notifications.active().next().unwrap().kind(), Kind::Error);
        assert!(!app.contact_form.is_submitting());
        assert_eq!(app.contact_form.name, "Al");
    }

    #[test]
    fn repeated_failed_submissions_stack_toasts_in_call_order() {
        let mut app = App::default();

        for _ in 0..3 {
            let _ = app.update(Message::ContactForm(contact_form::Message::Submit));
        }

        assert_eq!(app.notifications.active_count(), 3);
        assert!(app
            .notifications
            .active()
            .all(|n| n.phase() == Phase::Visible));
    }

    #[test]
    fn tick_messages_drive_the_toast_lifecycle() {
        let mut app = App::default();
        let now = Instant::now();
        let visible = Duration::from_millis(100);
        let id = app
            .notifications
            .push(Notification::new(Kind::Success, "done", visible, now));

        let _ = app.update(Message::Tick(now + visible));
        assert_eq!(app.notifications.get(id).unwrap().phase(), Phase::Removing);

        let _ = app.update(Message::Tick(now + visible + REMOVAL_ANIMATION));
        assert!(app.notifications.get(id).is_none());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn gallery_open_and_wraparound_through_the_update_loop() {
        let (_temp_dir, mut app) = app_with_gallery(3);

        let _ = app.update(Message::Lightbox(lightbox::Message::Open(0)));
        assert!(app.lightbox.is_open());

        for _ in 0..3 {
            let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        }
        assert_eq!(app.lightbox.current_index(), 0);

        let _ = app.update(Message::Lightbox(lightbox::Message::Previous));
        assert_eq!(app.lightbox.current_index(), 2);

        let _ = app.update(Message::Lightbox(lightbox::Message::Close));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn navigating_away_closes_the_lightbox() {
        let (_temp_dir, mut app) = app_with_gallery(2);
        let _ = app.update(Message::Lightbox(lightbox::Message::Open(1)));
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::Menu(menu::Message::Navigate(Screen::Home)));

        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn new_with_missing_gallery_directory_degrades_with_error_toast() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope");

        let (app, _task) = App::new(Flags {
            gallery_dir: Some(missing.to_string_lossy().into_owned()),
            ..Flags::default()
        });

        assert!(app.lightbox.is_empty());
        assert_eq!(app.notifications.active_count(), 1);
        assert_eq!(app.notifications.active().next().unwrap().kind(), Kind::Error);
    }

    #[test]
    fn new_with_unreadable_config_falls_back_to_defaults_with_error_toast() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("settings.toml");

        let (app, _task) = App::new(Flags {
            config_path: Some(missing.to_string_lossy().into_owned()),
            ..Flags::default()
        });

        assert_eq!(app.theme_mode, ThemeMode::System);
        assert_eq!(app.notifications.active_count(), 1);
    }

    #[test]
    fn new_applies_config_file_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\ntheme_mode = \"dark\"\n\n[notifications]\nvisible_duration_ms = 10\n",
        )
        .expect("failed to write config");

        let (mut app, _task) = App::new(Flags {
            config_path: Some(config_path.to_string_lossy().into_owned()),
            ..Flags::default()
        });
        assert_eq!(app.theme_mode, ThemeMode::Dark);

        // The configured 10ms visible duration applies to new toasts.
        let before = Instant::now();
        let id = app.notifications.success("quick");
        let _ = app.update(Message::Tick(before + Duration::from_millis(100)));
        assert_eq!(app.notifications.get(id).unwrap().phase(), Phase::Removing);
    }

    #[test]
    fn cli_theme_flag_overrides_config() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"dark\"\n")
            .expect("failed to write config");

        let (app, _task) = App::new(Flags {
            theme: Some("light".into()),
            config_path: Some(config_path.to_string_lossy().into_owned()),
            ..Flags::default()
        });

        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.theme(), Theme::Light);
    }
}
