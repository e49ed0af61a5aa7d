// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::content;
use crate::interaction::gauge::GaugeAnimation;
use crate::interaction::scroll::ScrollAnimation;
use crate::interaction::visibility::Viewport;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::Notification;
use crate::ui::sections::{projects, BlockId, Section};
use crate::ui::{contact, navbar};
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Task;
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => match navbar::update(msg, &mut self.menu_open) {
                navbar::Event::None => Task::none(),
                navbar::Event::NavigateTo(section) => self.start_scroll_to(section),
                navbar::Event::ToggleTheme => {
                    self.set_theme(self.theme_mode.toggled());
                    Task::none()
                }
            },
            Message::Projects(projects::Message::Open(index)) => {
                self.modals.open(crate::ui::modal::ModalId(index));
                Task::none()
            }
            Message::Modal(msg) => {
                self.modals.update(msg);
                Task::none()
            }
            Message::Contact(msg) => match self.contact.update(msg) {
                contact::Event::Submitted => {
                    self.notifications
                        .push(Notification::success("contact-success"));
                    Task::none()
                }
                contact::Event::None => Task::none(),
            },
            Message::Notification(msg) => {
                self.notifications.update(msg);
                Task::none()
            }
            Message::PageScrolled {
                offset_y,
                viewport_height,
            } => {
                self.viewport = Viewport {
                    top: offset_y,
                    height: viewport_height,
                };
                self.run_visibility_pass();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.viewport.height = (size.height - sizing::NAVBAR_HEIGHT).max(0.0);
                self.run_visibility_pass();
                Task::none()
            }
            Message::EscapePressed => {
                // Escape dismisses every open dialog, not just the topmost.
                self.modals.close_all();
                Task::none()
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Starts an animated scroll that aligns the section top with the
    /// viewport top. Unresolvable targets are ignored.
    fn start_scroll_to(&mut self, section: Section) -> Task<Message> {
        let Some(target) = self.page.section_top(section) else {
            return Task::none();
        };

        let max_top = (self.page.total_height() - self.viewport.height).max(0.0);
        let target = target.min(max_top);

        self.scroll_animation = Some(ScrollAnimation::new(
            self.viewport.top,
            target,
            Instant::now(),
        ));

        // The first frame is driven by the tick subscription that the new
        // animation just switched on.
        Task::none()
    }

    /// One animation frame: advance the smooth scroll, step every running
    /// gauge, and expire stale toasts.
    pub(super) fn tick(&mut self, now: Instant) -> Task<Message> {
        let mut task = Task::none();

        if let Some(animation) = self.scroll_animation {
            let offset = animation.offset_at(now);
            task = operation::scroll_to(
                super::view::page_scroll_id(),
                AbsoluteOffset { x: 0.0, y: offset },
            );
            if animation.is_finished(now) {
                self.scroll_animation = None;
            }
        }

        for gauge in self.gauges.iter_mut().flatten() {
            if !gauge.is_finished() {
                gauge.step();
            }
        }

        self.notifications.tick(now);

        task
    }

    /// Feeds the current viewport to every watcher and starts gauge
    /// animations for skill cards whose trigger just fired.
    pub(super) fn run_visibility_pass(&mut self) {
        let view = self.viewport;
        let blocks: Vec<_> = self.page.blocks().to_vec();

        for (id, block) in blocks {
            match id {
                BlockId::About | BlockId::Project(_) | BlockId::Contact => {
                    self.reveals.observe(id, block, view);
                }
                BlockId::Skill(index) => {
                    if self.skill_watch.observe(index, block, view) {
                        let percent = content::SKILLS.get(index).map_or(0, |skill| skill.percent);
                        if let Some(slot) = self.gauges.get_mut(index) {
                            *slot = Some(GaugeAnimation::new(percent));
                        }
                    }
                }
                BlockId::TimelineEntry(index) => {
                    self.timeline_watch.observe(index, block, view);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::{self, ModalId};
    use crate::ui::theming::ThemeMode;

    fn app() -> App {
        App::default()
    }

    fn scroll_to(app: &mut App, offset_y: f32) {
        let _ = app.update(Message::PageScrolled {
            offset_y,
            viewport_height: app.viewport.height,
        });
    }

    #[test]
    fn escape_closes_all_open_dialogs() {
        let mut app = app();
        let _ = app.update(Message::Projects(projects::Message::Open(0)));
        let _ = app.update(Message::Projects(projects::Message::Open(1)));
        assert!(app.modals.scroll_locked());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.modals.is_open(ModalId(0)));
        assert!(!app.modals.is_open(ModalId(1)));
        assert!(!app.modals.scroll_locked());
    }

    #[test]
    fn closing_one_of_two_dialogs_keeps_the_scroll_lock() {
        let mut app = app();
        let _ = app.update(Message::Projects(projects::Message::Open(0)));
        let _ = app.update(Message::Projects(projects::Message::Open(1)));

        let _ = app.update(Message::Modal(modal::Message::Close(ModalId(0))));
        assert!(app.modals.scroll_locked());
    }

    #[test]
    fn scrolling_to_a_skill_card_starts_its_gauge() {
        let mut app = app();
        let card = app.page.block(BlockId::Skill(0)).expect("skill block");

        assert!(app.gauges[0].is_none());
        scroll_to(&mut app, card.top - 100.0);

        let gauge = app.gauges[0].as_ref().expect("gauge should have started");
        assert_eq!(gauge.target(), content::SKILLS[0].percent);
        assert_eq!(gauge.displayed(), 0);
    }

    #[test]
    fn gauge_trigger_fires_only_once() {
        let mut app = app();
        let card = app.page.block(BlockId::Skill(0)).expect("skill block");

        scroll_to(&mut app, card.top - 100.0);
        // Run the gauge a few frames, then scroll away and back.
        let now = Instant::now();
        let _ = app.update(Message::Tick(now));
        let _ = app.update(Message::Tick(now));
        let shown = app.gauges[0].as_ref().unwrap().displayed();
        assert!(shown > 0);

        scroll_to(&mut app, 0.0);
        scroll_to(&mut app, card.top - 100.0);
        // Re-entry does not restart the animation.
        assert!(app.gauges[0].as_ref().unwrap().displayed() >= shown);
    }

    #[test]
    fn timeline_entry_reveals_once_and_stays_revealed() {
        let mut app = app();
        let entry = app.page.block(BlockId::TimelineEntry(0)).expect("entry");

        assert!(!app.timeline_watch.is_triggered(0));
        scroll_to(&mut app, entry.top - 100.0);
        assert!(app.timeline_watch.is_triggered(0));

        scroll_to(&mut app, 0.0);
        assert!(app.timeline_watch.is_triggered(0));
    }

    #[test]
    fn fade_blocks_stay_revealed_after_scrolling_away() {
        let mut app = app();
        let block = app.page.block(BlockId::About).expect("about block");

        scroll_to(&mut app, block.top - 100.0);
        assert!(app.reveals.is_triggered(BlockId::About));

        scroll_to(&mut app, 0.0);
        assert!(app.reveals.is_triggered(BlockId::About));
    }

    #[test]
    fn navigation_starts_a_scroll_animation_and_closes_the_menu() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::NavigateTo(
            Section::Contact,
        )));
        assert!(!app.menu_open);
        let animation = app.scroll_animation.expect("scroll animation");
        let max_top = app.page.total_height() - app.viewport.height;
        assert!(animation.target() <= max_top);
        assert!(app.is_animating());
    }

    #[test]
    fn scroll_animation_finishes_and_stops_ticking() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::NavigateTo(
            Section::About,
        )));

        let later = Instant::now() + std::time::Duration::from_secs(2);
        let _ = app.update(Message::Tick(later));
        assert!(app.scroll_animation.is_none());
    }

    #[test]
    fn submitted_contact_form_raises_a_confirmation_toast() {
        let mut app = app();
        let _ = app.update(Message::Contact(contact::Message::NameChanged("Ada".into())));
        let _ = app.update(Message::Contact(contact::Message::EmailChanged(
            "ada@lovelace.dev".into(),
        )));
        let _ = app.update(Message::Contact(contact::Message::MessageChanged(
            "hello from the test suite".into(),
        )));
        let _ = app.update(Message::Contact(contact::Message::Submit));

        assert!(app.notifications.has_notifications());
        let key = app
            .notifications
            .visible()
            .next()
            .map(|n| n.message_key().to_string());
        assert_eq!(key.as_deref(), Some("contact-success"));
    }

    #[test]
    fn invalid_contact_form_raises_no_toast() {
        let mut app = app();
        let _ = app.update(Message::Contact(contact::Message::Submit));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn theme_toggle_flips_and_records_the_mode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app();
        app.config_dir = Some(dir.path().to_path_buf());

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Dark);

        // Re-initializing from the same directory applies the stored mode.
        let (reloaded, _) = App::new(crate::app::Flags {
            lang: None,
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        });
        assert_eq!(reloaded.theme_mode, ThemeMode::Dark);
    }
}
