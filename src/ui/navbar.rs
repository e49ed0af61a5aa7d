// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with collapsible menu and theme toggle.
//!
//! The hamburger button toggles the dropdown menu; activating any link
//! inside the dropdown closes it again before the navigation event
//! propagates to the application.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::Section;
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleMenu,
    NavigateTo(Section),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    NavigateTo(Section),
    ToggleTheme,
}

/// Processes a navbar message against the menu state and returns the event
/// for the application to act on.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::NavigateTo(section) => {
            // Links always collapse the menu.
            *menu_open = false;
            Event::NavigateTo(section)
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Renders the navigation bar: top bar plus the dropdown when open.
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(dropdown(&ctx));
    }

    content.into()
}

fn top_bar(ctx: &ViewContext<'_>) -> Element<'static, Message> {
    let brand = Text::new(ctx.i18n.tr("navbar-brand"))
        .size(typography::TITLE_SM)
        .color(ctx.scheme.brand_primary);

    let theme_label = match ctx.theme_mode {
        ThemeMode::Light => "\u{263E}", // moon: switch to dark
        ThemeMode::Dark => "\u{2600}",  // sun: switch to light
    };
    let theme_toggle = button(Text::new(theme_label).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XXS)
        .style(styles::button::ghost(ctx.scheme));

    let menu_button = button(Text::new("\u{2630}").size(typography::BODY_LG))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XXS)
        .style(styles::button::ghost(ctx.scheme));

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(theme_toggle)
        .push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::toolbar(ctx.scheme))
        .into()
}

fn dropdown(ctx: &ViewContext<'_>) -> Element<'static, Message> {
    let mut links = Column::new().spacing(spacing::XXS).padding(spacing::XS);

    for section in Section::ALL {
        let label = Text::new(ctx.i18n.tr(section.nav_key())).size(typography::BODY);
        links = links.push(
            button(label)
                .on_press(Message::NavigateTo(section))
                .padding([spacing::XXS, spacing::SM])
                .width(Length::Fill)
                .style(styles::button::ghost(ctx.scheme)),
        );
    }

    Container::new(links)
        .width(Length::Fill)
        .style(styles::container::toolbar(ctx.scheme))
        .into()
}
