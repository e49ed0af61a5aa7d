// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Non-blocking messages shown in the bottom-right corner: the contact-form
//! confirmation and warnings about unreadable configuration. Success and
//! info toasts auto-dismiss; warnings stay a little longer.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of toasts visible at once; the rest wait in a queue.
const MAX_VISIBLE: usize = 3;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity determines accent color and display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Warning,
}

impl Severity {
    fn auto_dismiss_after(self) -> Duration {
        match self {
            Severity::Success => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
        }
    }
}

/// A queued or visible notification.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            shown_at: None,
        }
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }
}

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Manages the queue and the visible toasts.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a notification, displaying it immediately when space allows.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            let mut notification = notification;
            notification.shown_at = Some(Instant::now());
            self.visible.push_back(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
        }
    }

    fn dismiss(&mut self, id: NotificationId) {
        self.visible.retain(|n| n.id != id);
        self.promote_queued();
    }

    /// Expires visible toasts whose display duration has passed. Called from
    /// the application's tick handler.
    pub fn tick(&mut self, now: Instant) {
        self.visible.retain(|n| match n.shown_at {
            Some(shown_at) => now.saturating_duration_since(shown_at) < n.severity.auto_dismiss_after(),
            None => true,
        });
        self.promote_queued();
    }

    fn promote_queued(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut next) = self.queue.pop_front() else {
                break;
            };
            next.shown_at = Some(Instant::now());
            self.visible.push_back(next);
        }
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Renders the toast stack for the bottom-right corner.
    pub fn view(&self, i18n: &I18n, scheme: &ColorScheme) -> Element<'static, Message> {
        let mut stack = Column::new().spacing(spacing::XS);

        for notification in self.visible() {
            stack = stack.push(toast(notification, i18n, scheme));
        }

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast(
    notification: &Notification,
    i18n: &I18n,
    scheme: &ColorScheme,
) -> Element<'static, Message> {
    let accent = match notification.severity {
        Severity::Success => scheme.success,
        Severity::Warning => scheme.error,
    };

    let message = Text::new(i18n.tr(notification.message_key()))
        .size(typography::BODY)
        .color(scheme.text_primary);

    let dismiss = button(Text::new("\u{00D7}").size(typography::BODY))
        .on_press(Message::Dismiss(notification.id))
        .padding(spacing::XXS)
        .style(styles::button::dismiss(scheme));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss);

    let surface = scheme.surface_secondary;
    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_auto_dismiss_after_their_duration() {
        let mut manager = Manager::new();
        manager.push(Notification::success("contact-success"));
        assert!(manager.has_notifications());

        let later = Instant::now() + Duration::from_secs(4);
        manager.tick(later);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_notifications_wait_in_the_queue() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::success("contact-success"));
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);

        // Dismissing one promotes a queued toast.
        let first = manager.visible().next().unwrap().id;
        manager.update(Message::Dismiss(first));
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
    }
}
