// SPDX-License-Identifier: MPL-2.0
//! Modal dialog management.
//!
//! The manager keeps the ordered set of open dialogs. The page scroll lock
//! is derived from that set rather than kept as a separate boolean, so
//! closing one of two open dialogs keeps the page locked until the last one
//! goes away.
//!
//! Dismissal paths: a press on the dialog backdrop (only when the press
//! lands on the backdrop itself), the close control inside the dialog, and
//! Escape, which closes every open dialog at once.

use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Text};
use iced::{Element, Length};

/// Identifies a modal dialog; dialogs are keyed by the project card that
/// opened them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalId(pub usize);

/// Messages emitted by dialog chrome.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Open(ModalId),
    /// Close control inside the dialog.
    Close(ModalId),
    /// Press landed on the backdrop around the dialog.
    Backdrop(ModalId),
    /// Escape: dismiss everything currently open.
    CloseAll,
}

/// Ordered set of open dialogs.
#[derive(Debug, Default)]
pub struct Manager {
    open: Vec<ModalId>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a dialog. Opening an already-open dialog is a no-op.
    pub fn open(&mut self, id: ModalId) {
        if !self.open.contains(&id) {
            self.open.push(id);
        }
    }

    /// Closes a dialog. Unknown ids are ignored.
    pub fn close(&mut self, id: ModalId) {
        self.open.retain(|open_id| *open_id != id);
    }

    /// Closes every open dialog.
    pub fn close_all(&mut self) {
        self.open.clear();
    }

    /// Processes a dialog message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Open(id) => self.open(id),
            Message::Close(id) | Message::Backdrop(id) => self.close(id),
            Message::CloseAll => self.close_all(),
        }
    }

    #[must_use]
    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.contains(&id)
    }

    /// Open dialogs in opening order.
    #[must_use]
    pub fn open_modals(&self) -> &[ModalId] {
        &self.open
    }

    /// Whether the page behind the dialogs should refuse to scroll. Held as
    /// long as at least one dialog is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        !self.open.is_empty()
    }
}

/// Renders one open dialog as a backdrop plus centered dialog surface.
/// A press on the backdrop (and only the backdrop — the dialog surface is
/// opaque to events) emits [`Message::Backdrop`].
pub fn view_layer(i18n: &I18n, scheme: &ColorScheme, id: ModalId) -> Element<'static, Message> {
    let dialog = dialog_surface(i18n, scheme, id);

    let layer = mouse_area(
        Container::new(center(opaque(dialog)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(scheme)),
    )
    .on_press(Message::Backdrop(id));

    opaque(layer)
}

fn dialog_surface(i18n: &I18n, scheme: &ColorScheme, id: ModalId) -> Element<'static, Message> {
    let project = content::PROJECTS.get(id.0);

    let title_key = project.map_or("modal-missing-title", |p| p.title_key);
    let detail_key = project.map_or("modal-missing-body", |p| p.detail_key);

    let title = Text::new(i18n.tr(title_key))
        .size(typography::TITLE_SM)
        .color(scheme.text_primary);

    let close = button(Text::new("\u{00D7}").size(typography::BODY_LG))
        .on_press(Message::Close(id))
        .padding(spacing::XXS)
        .style(styles::button::dismiss(scheme));

    let header = Row::new()
        .push(Container::new(title).width(Length::Fill))
        .push(close);

    let body = Text::new(i18n.tr(detail_key))
        .size(typography::BODY)
        .color(scheme.text_secondary);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(body);

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .align_x(Horizontal::Left)
        .style(styles::container::dialog(scheme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_are_idempotent() {
        let mut manager = Manager::new();
        manager.open(ModalId(0));
        manager.open(ModalId(0));
        assert_eq!(manager.open_modals().len(), 1);

        manager.close(ModalId(0));
        manager.close(ModalId(0));
        assert!(manager.open_modals().is_empty());
    }

    #[test]
    fn closing_unknown_id_is_a_no_op() {
        let mut manager = Manager::new();
        manager.close(ModalId(9));
        assert!(!manager.scroll_locked());
    }

    #[test]
    fn escape_closes_every_open_dialog() {
        let mut manager = Manager::new();
        manager.open(ModalId(0));
        manager.open(ModalId(1));
        assert!(manager.scroll_locked());

        manager.update(Message::CloseAll);
        assert!(!manager.is_open(ModalId(0)));
        assert!(!manager.is_open(ModalId(1)));
        assert!(!manager.scroll_locked());
    }

    #[test]
    fn lock_is_held_until_the_last_dialog_closes() {
        let mut manager = Manager::new();
        manager.open(ModalId(0));
        manager.open(ModalId(1));

        manager.close(ModalId(0));
        assert!(manager.scroll_locked());

        manager.close(ModalId(1));
        assert!(!manager.scroll_locked());
    }

    #[test]
    fn backdrop_press_closes_only_that_dialog() {
        let mut manager = Manager::new();
        manager.open(ModalId(0));
        manager.open(ModalId(1));

        manager.update(Message::Backdrop(ModalId(1)));
        assert!(manager.is_open(ModalId(0)));
        assert!(!manager.is_open(ModalId(1)));
    }
}
