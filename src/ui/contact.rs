// SPDX-License-Identifier: MPL-2.0
//! Contact form with client-side validation.
//!
//! Submission is always intercepted: validation clears previous error
//! annotations, re-checks every field, and only a fully valid form resets
//! the inputs and raises the confirmation event. Nothing is transmitted
//! anywhere.
//!
//! Rules: name at least 2 trimmed characters, email in the coarse
//! `local@domain.dot` shape, message at least 10 trimmed characters.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{Element, Length};
use std::collections::BTreeMap;

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// The three validated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    fn error_key(self) -> &'static str {
        match self {
            Field::Name => "contact-error-name",
            Field::Email => "contact-error-email",
            Field::Message => "contact-error-message",
        }
    }
}

/// Form state: field drafts plus the error annotations from the last
/// validation run.
#[derive(Debug, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub message: String,
    errors: BTreeMap<Field, &'static str>,
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
}

/// Events propagated to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Validation passed; the fields have been cleared.
    Submitted,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a form message. Editing a field leaves existing error
    /// annotations in place until the next submission re-validates.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::MessageChanged(value) => {
                self.message = value;
                Event::None
            }
            Message::Submit => {
                if self.validate() {
                    self.reset();
                    Event::Submitted
                } else {
                    Event::None
                }
            }
        }
    }

    /// Clears previous annotations, re-checks every field, and records an
    /// error key per failing field. Returns whether the whole form passed.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if !name_is_valid(&self.name) {
            self.errors.insert(Field::Name, Field::Name.error_key());
        }
        if !email_is_valid(&self.email) {
            self.errors.insert(Field::Email, Field::Email.error_key());
        }
        if !message_is_valid(&self.message) {
            self.errors
                .insert(Field::Message, Field::Message.error_key());
        }

        self.errors.is_empty()
    }

    /// Error annotation for a field, if the last validation flagged it.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.errors.clear();
    }
}

/// At least `NAME_MIN_CHARS` characters after trimming.
#[must_use]
pub fn name_is_valid(name: &str) -> bool {
    name.trim().chars().count() >= NAME_MIN_CHARS
}

/// Coarse syntactic check: non-empty local part, a single `@`, and a domain
/// containing a dot with non-empty segments. No whitespace anywhere. This is
/// deliberately not an RFC-grade validator.
#[must_use]
pub fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// At least `MESSAGE_MIN_CHARS` characters after trimming.
#[must_use]
pub fn message_is_valid(message: &str) -> bool {
    message.trim().chars().count() >= MESSAGE_MIN_CHARS
}

/// Renders the contact form with inline error annotations under the
/// offending fields.
pub fn view(state: &State, i18n: &I18n, scheme: &ColorScheme) -> Element<'static, Message> {
    let mut form = Column::new().spacing(spacing::SM).width(Length::Fill);

    form = form.push(field(
        i18n,
        scheme,
        "contact-name-placeholder",
        &state.name,
        state.error(Field::Name),
        Message::NameChanged,
    ));
    form = form.push(field(
        i18n,
        scheme,
        "contact-email-placeholder",
        &state.email,
        state.error(Field::Email),
        Message::EmailChanged,
    ));
    form = form.push(field(
        i18n,
        scheme,
        "contact-message-placeholder",
        &state.message,
        state.error(Field::Message),
        Message::MessageChanged,
    ));

    let submit = button(Text::new(i18n.tr("contact-submit")).size(typography::BODY_LG))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary(scheme));

    form = form.push(submit);

    Container::new(form)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CONTACT_FORM_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::card(scheme))
        .into()
}

fn field(
    i18n: &I18n,
    scheme: &ColorScheme,
    placeholder_key: &str,
    value: &str,
    error: Option<&'static str>,
    on_input: impl Fn(String) -> Message + 'static,
) -> Element<'static, Message> {
    let placeholder = i18n.tr(placeholder_key);
    let mut input = text_input(&placeholder, value)
        .on_input(on_input)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    input = match error {
        Some(_) => input.style(styles::text_input::error(scheme)),
        None => input.style(styles::text_input::normal(scheme)),
    };

    let mut block = Column::new().spacing(spacing::XXS).push(input);
    if let Some(error_key) = error {
        block = block.push(error_annotation(i18n, scheme, error_key));
    }

    block.into()
}

fn error_annotation(
    i18n: &I18n,
    scheme: &ColorScheme,
    error_key: &str,
) -> Element<'static, Message> {
    Text::new(i18n.tr(error_key))
        .size(typography::CAPTION)
        .color(scheme.error)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(email_is_valid("a@b.co"));
        assert!(!email_is_valid("a@b"));
        assert!(!email_is_valid("ab"));
        assert!(!email_is_valid("a@.co"));
        assert!(!email_is_valid("a@b."));
        assert!(!email_is_valid("a b@c.de"));
        assert!(!email_is_valid("a@b@c.de"));
        assert!(!email_is_valid("@b.co"));
    }

    #[test]
    fn name_needs_two_trimmed_characters() {
        assert!(name_is_valid("Al"));
        assert!(!name_is_valid("A"));
        assert!(!name_is_valid("  A  "));
        assert!(name_is_valid("  Al "));
    }

    #[test]
    fn message_needs_ten_trimmed_characters() {
        assert!(message_is_valid("abcdefghij"));
        assert!(!message_is_valid("abcdefghi"));
        assert!(!message_is_valid("  abcdefghi   "));
    }

    #[test]
    fn failing_fields_are_annotated() {
        let mut state = State::new();
        state.name = "A".to_string();
        state.email = "a@b.co".to_string();
        state.message = "long enough message".to_string();

        assert!(!state.validate());
        assert_eq!(state.error(Field::Name), Some("contact-error-name"));
        assert_eq!(state.error(Field::Email), None);
        assert_eq!(state.error(Field::Message), None);
    }

    #[test]
    fn revalidation_clears_stale_annotations() {
        let mut state = State::new();
        state.name = "A".to_string();
        state.email = "bad".to_string();
        state.message = "short".to_string();
        assert!(!state.validate());

        state.name = "Ada".to_string();
        state.email = "ada@lovelace.dev".to_string();
        state.message = "a perfectly long message".to_string();
        assert!(state.validate());
        assert_eq!(state.error(Field::Name), None);
    }

    #[test]
    fn successful_submission_clears_the_form() {
        let mut state = State::new();
        state.update(Message::NameChanged("Ada".into()));
        state.update(Message::EmailChanged("ada@lovelace.dev".into()));
        state.update(Message::MessageChanged("hello from the test".into()));

        let event = state.update(Message::Submit);
        assert_eq!(event, Event::Submitted);
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.message.is_empty());
    }

    #[test]
    fn failed_submission_keeps_the_drafts() {
        let mut state = State::new();
        state.update(Message::NameChanged("Ada".into()));
        state.update(Message::EmailChanged("not-an-email".into()));
        state.update(Message::MessageChanged("hello from the test".into()));

        let event = state.update(Message::Submit);
        assert_eq!(event, Event::None);
        assert_eq!(state.email, "not-an-email");
        assert!(state.error(Field::Email).is_some());
    }
}
