// SPDX-License-Identifier: MPL-2.0
//! Page composition: scrollable content, dialog layers, and the toast stack.

use super::{App, Message};
use crate::content;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::{projects, skills, timeline, BlockId, Section};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{contact, modal, navbar};
use iced::alignment::Horizontal;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, Column, Container, Id, Scrollable, Space, Stack, Text};
use iced::{Element, Length};

/// Id of the page scrollable, shared with the smooth-scroll task.
pub fn page_scroll_id() -> Id {
    Id::new("page-scroll")
}

/// Builds the whole window: navbar on top of the scrolling page, with open
/// dialogs and toasts stacked above it.
pub fn view(app: &App) -> Element<'_, Message> {
    let scheme = ColorScheme::for_mode(app.theme_mode);

    let navbar = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        scheme: &scheme,
        menu_open: app.menu_open,
        theme_mode: app.theme_mode,
    })
    .map(Message::Navbar);

    let page = Scrollable::new(page_content(app, &scheme))
        .id(page_scroll_id())
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        });

    let base = Container::new(Column::new().push(navbar).push(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(&scheme));

    let mut layers = Stack::new().push(base);

    for id in app.modals.open_modals() {
        layers = layers.push(modal::view_layer(&app.i18n, &scheme, *id).map(Message::Modal));
    }

    if app.notifications.has_notifications() {
        layers = layers.push(
            app.notifications
                .view(&app.i18n, &scheme)
                .map(Message::Notification),
        );
    }

    layers.into()
}

/// The vertical page body. Heights and gaps here come from the same sizing
/// constants the page map is built from.
fn page_content(app: &App, scheme: &ColorScheme) -> Element<'static, Message> {
    let mut page = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_WIDTH)
        .padding([0.0, spacing::LG]);

    page = page.push(hero(app, scheme));
    page = page.push(section_gap());

    page = page.push(section_header(app, scheme, Section::About));
    page = page.push(about_block(app, scheme));
    page = page.push(section_gap());

    page = page.push(section_header(app, scheme, Section::Skills));
    page = page.push(skills::view(&app.i18n, scheme, &app.gauges));
    page = page.push(section_gap());

    page = page.push(section_header(app, scheme, Section::Timeline));
    let timeline_revealed: Vec<bool> = (0..content::TIMELINE.len())
        .map(|index| app.timeline_watch.is_triggered(index))
        .collect();
    page = page.push(timeline::view(&app.i18n, scheme, &timeline_revealed));
    page = page.push(section_gap());

    page = page.push(section_header(app, scheme, Section::Projects));
    let projects_revealed: Vec<bool> = (0..content::PROJECTS.len())
        .map(|index| app.reveals.is_triggered(BlockId::Project(index)))
        .collect();
    page = page.push(projects::view(&app.i18n, scheme, &projects_revealed).map(Message::Projects));
    page = page.push(section_gap());

    page = page.push(section_header(app, scheme, Section::Contact));
    page = page.push(contact_block(app, scheme));

    Container::new(page)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn section_gap() -> Space {
    Space::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_GAP))
}

fn hero(app: &App, scheme: &ColorScheme) -> Element<'static, Message> {
    let headline = Text::new(app.i18n.tr("hero-headline"))
        .size(typography::TITLE_XL)
        .color(scheme.text_primary);

    let tagline = Text::new(app.i18n.tr("hero-tagline"))
        .size(typography::BODY_LG)
        .color(scheme.text_secondary);

    let cta = button(Text::new(app.i18n.tr("hero-cta")).size(typography::BODY_LG))
        .on_press(Message::Navbar(navbar::Message::NavigateTo(
            Section::Contact,
        )))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary(scheme));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(headline)
        .push(tagline)
        .push(cta);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

fn section_header(app: &App, scheme: &ColorScheme, section: Section) -> Element<'static, Message> {
    let title = Text::new(app.i18n.tr(section.title_key()))
        .size(typography::TITLE_LG)
        .color(scheme.text_primary);

    Container::new(title)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_HEADER_HEIGHT))
        .align_y(iced::alignment::Vertical::Bottom)
        .into()
}

/// The about paragraph fades in on first approach; until then its slot is
/// held open by empty space so the layout model stays accurate.
fn about_block(app: &App, scheme: &ColorScheme) -> Element<'static, Message> {
    if !app.reveals.is_triggered(BlockId::About) {
        return Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::ABOUT_BLOCK_HEIGHT))
            .into();
    }

    let body = Text::new(app.i18n.tr("about-body"))
        .size(typography::BODY_LG)
        .color(scheme.text_secondary);

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ABOUT_BLOCK_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::card(scheme))
        .into()
}

fn contact_block(app: &App, scheme: &ColorScheme) -> Element<'static, Message> {
    if !app.reveals.is_triggered(BlockId::Contact) {
        return Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CONTACT_FORM_HEIGHT))
            .into();
    }

    contact::view(&app.contact, &app.i18n, scheme).map(Message::Contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::ModalId;

    // Smoke-test that the widget tree builds in both placeholder and
    // revealed states, with and without overlay layers.
    #[test]
    fn page_builds_with_placeholder_blocks() {
        let app = App::default();
        let _ = view(&app);
    }

    #[test]
    fn page_builds_with_revealed_blocks_and_overlays() {
        let mut app = App::default();
        // Walk the page so every block fires its visibility trigger.
        let tops: Vec<f32> = app.page.blocks().iter().map(|(_, b)| b.top).collect();
        for top in tops {
            let _ = app.update(Message::PageScrolled {
                offset_y: (top - 100.0).max(0.0),
                viewport_height: app.viewport.height,
            });
        }
        assert!(app.reveals.is_triggered(BlockId::Contact));
        app.modals.open(ModalId(0));
        app.notifications
            .push(crate::ui::notifications::Notification::success(
                "contact-success",
            ));

        let _ = view(&app);
    }
}
