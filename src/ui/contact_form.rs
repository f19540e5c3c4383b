// SPDX-License-Identifier: MPL-2.0
//! Contact form with validation and simulated submission.
//!
//! The form validates required fields and email shape, then hands a single
//! notification request per submission to the parent. Submission itself is
//! simulated with a fixed delay; the submit button is disabled while the
//! simulated request is in flight and re-enabled on every completion path.

use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{alignment, Element, Length};
use std::time::Duration;

/// Fixed delay of the simulated submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(500);

/// Confirmation text shown after a successful submission.
pub const THANK_YOU_MESSAGE: &str =
    "Thanks, we received your message and will get back to you shortly.";

/// Error text shown when the email shape check fails.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Error text shown when the simulated submission reports a failure.
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong, please try again.";

/// Contact form field values and submission state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
}

impl State {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the simulated submission is in flight (submit disabled).
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

/// Messages emitted by the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
    /// The simulated submission finished. The error carries display text.
    SubmitFinished(Result<(), String>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Validation passed; the parent should run the simulated submission.
    BeginSubmit,
    /// Exactly one success notification for this submission.
    ShowSuccess(String),
    /// Exactly one error notification for this submission.
    ShowError(String),
}

/// Processes a form message and returns the event for the parent.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::MessageChanged(value) => {
            state.message = value;
            Event::None
        }
        Message::Submit => {
            if state.submitting {
                // Submit affordance is disabled; ignore stray submits.
                return Event::None;
            }
            match validate(state) {
                Some(error) => Event::ShowError(error),
                None => {
                    state.submitting = true;
                    Event::BeginSubmit
                }
            }
        }
        Message::SubmitFinished(result) => {
            // Re-enable the submit affordance on every completion path.
            state.submitting = false;
            match result {
                Ok(()) => {
                    state.name.clear();
                    state.email.clear();
                    state.message.clear();
                    Event::ShowSuccess(THANK_YOU_MESSAGE.to_string())
                }
                Err(_) => Event::ShowError(SUBMIT_FAILED_MESSAGE.to_string()),
            }
        }
    }
}

/// Returns the validation error for the current field values, if any.
///
/// Missing required fields are reported before email shape, matching the
/// field order of the form.
fn validate(state: &State) -> Option<String> {
    let mut missing = Vec::new();
    if state.name.trim().is_empty() {
        missing.push("name");
    }
    if state.email.trim().is_empty() {
        missing.push("email");
    }
    if state.message.trim().is_empty() {
        missing.push("message");
    }

    if !missing.is_empty() {
        return Some(format!("Please complete: {}.", missing.join(", ")));
    }

    if !is_valid_email(state.email.trim()) {
        return Some(INVALID_EMAIL_MESSAGE.to_string());
    }

    None
}

/// Checks the `local@domain.tld` shape: exactly one `@`, non-empty local
/// part, a dot inside the domain with a non-empty tld, and no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Renders the contact form screen.
pub fn view(state: &State) -> Element<'_, Message> {
    let title = Text::new("Get in touch").size(typography::TITLE);
    let subtitle =
        Text::new("Questions about the showcase? Drop us a line.").size(typography::BODY);

    let name_input = text_input("Your name", &state.name)
        .on_input(Message::NameChanged)
        .padding(spacing::SM)
        .size(typography::BODY);
    let email_input = text_input("you@example.com", &state.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::SM)
        .size(typography::BODY);
    let message_input = text_input("Your message", &state.message)
        .on_input(Message::MessageChanged)
        .padding(spacing::SM)
        .size(typography::BODY);

    let submit_label = if state.is_submitting() {
        "Sending..."
    } else {
        "Send message"
    };
    let submit_button = button(Text::new(submit_label).size(typography::BODY))
        .on_press_maybe((!state.is_submitting()).then_some(Message::Submit))
        .padding([spacing::XS, spacing::LG]);

    let form = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(title)
        .push(subtitle)
        .push(name_input)
        .push(email_input)
        .push(message_input)
        .push(submit_button);

    Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}
