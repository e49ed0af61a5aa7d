// SPDX-License-Identifier: MPL-2.0
//! Experience timeline with one-shot reveal per entry.
//!
//! Entries that have not fired their visibility trigger yet occupy their
//! final height as empty space, so revealing them never shifts the layout
//! the page map was built from.

use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Renders the timeline section body; `revealed[i]` reports whether entry
/// `i` has settled into its visible state.
pub fn view<Message: 'static>(
    i18n: &I18n,
    scheme: &ColorScheme,
    revealed: &[bool],
) -> Element<'static, Message> {
    let mut column = Column::new().spacing(spacing::LG).width(Length::Fill);

    for (index, entry) in content::TIMELINE.iter().enumerate() {
        let shown = revealed.get(index).copied().unwrap_or(false);
        if shown {
            column = column.push(entry_card(i18n, scheme, entry));
        } else {
            column = column.push(
                Space::new()
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::TIMELINE_ENTRY_HEIGHT)),
            );
        }
    }

    column.into()
}

fn entry_card<Message: 'static>(
    i18n: &I18n,
    scheme: &ColorScheme,
    entry: &content::TimelineEntry,
) -> Element<'static, Message> {
    let period = Text::new(entry.period)
        .size(typography::CAPTION)
        .color(scheme.brand_primary);

    let title = Text::new(i18n.tr(entry.title_key))
        .size(typography::TITLE_SM)
        .color(scheme.text_primary);

    let body = Text::new(i18n.tr(entry.body_key))
        .size(typography::BODY)
        .color(scheme.text_secondary);

    let header = Row::new()
        .spacing(spacing::SM)
        .push(period)
        .push(title);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TIMELINE_ENTRY_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::card(scheme))
        .into()
}
