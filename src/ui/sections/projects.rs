// SPDX-License-Identifier: MPL-2.0
//! Project cards with detail dialogs.

use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Space, Text};
use iced::{Element, Length};

/// Messages emitted by the projects section.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Open the detail dialog for a project card.
    Open(usize),
}

/// Renders the projects section body; `revealed[i]` reports whether card `i`
/// has faded in.
pub fn view(i18n: &I18n, scheme: &ColorScheme, revealed: &[bool]) -> Element<'static, Message> {
    let mut column = Column::new().spacing(spacing::LG).width(Length::Fill);

    for (index, project) in content::PROJECTS.iter().enumerate() {
        let shown = revealed.get(index).copied().unwrap_or(false);
        if shown {
            column = column.push(card(i18n, scheme, index, project));
        } else {
            column = column.push(
                Space::new()
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::PROJECT_CARD_HEIGHT)),
            );
        }
    }

    column.into()
}

fn card(
    i18n: &I18n,
    scheme: &ColorScheme,
    index: usize,
    project: &content::Project,
) -> Element<'static, Message> {
    let title = Text::new(i18n.tr(project.title_key))
        .size(typography::TITLE_SM)
        .color(scheme.text_primary);

    let summary = Text::new(i18n.tr(project.summary_key))
        .size(typography::BODY)
        .color(scheme.text_secondary);

    let open = button(Text::new(i18n.tr("project-open")).size(typography::BODY))
        .on_press(Message::Open(index))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary(scheme));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(summary)
        .push(open);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROJECT_CARD_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::card(scheme))
        .into()
}
