// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the independent page behaviors (theme,
//! navigation, reveal animations, skill gauges, dialogs, contact form) and
//! translates their events into side effects like config persistence and
//! animated scrolling. Each behavior degrades to a no-op when its content
//! table is empty; none of them depends on another.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content;
use crate::i18n::fluent::I18n;
use crate::interaction::gauge::GaugeAnimation;
use crate::interaction::scroll::ScrollAnimation;
use crate::interaction::visibility::{Viewport, Watcher};
use crate::ui::contact;
use crate::ui::design_tokens::sizing;
use crate::ui::modal;
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::{BlockId, PageMap};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

// Visibility trigger tuning, one pair per behavior.
const REVEAL_THRESHOLD: f32 = 0.1;
const REVEAL_BOTTOM_MARGIN: f32 = 50.0;
const SKILL_THRESHOLD: f32 = 0.4;
const SKILL_BOTTOM_MARGIN: f32 = 0.0;
const TIMELINE_THRESHOLD: f32 = 0.25;
const TIMELINE_BOTTOM_MARGIN: f32 = 40.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    /// Whether the navigation dropdown is open.
    menu_open: bool,
    /// Vertical layout model of the page.
    page: PageMap,
    /// Currently visible slice of the page.
    viewport: Viewport,
    /// Fade-in blocks: persistent observation, idempotent reveal.
    reveals: Watcher<BlockId>,
    /// Skill cards: one-shot trigger per card.
    skill_watch: Watcher<usize>,
    /// Gauge animation per skill card, `None` until its trigger fires.
    gauges: Vec<Option<GaugeAnimation>>,
    /// Timeline entries: one-shot trigger per entry.
    timeline_watch: Watcher<usize>,
    /// In-flight smooth scroll, if any.
    scroll_animation: Option<ScrollAnimation>,
    /// Open project dialogs and the derived scroll lock.
    modals: modal::Manager,
    /// Contact form drafts and validation annotations.
    contact: contact::State,
    /// Toast notifications for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("menu_open", &self.menu_open)
            .field("open_modals", &self.modals.open_modals().len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let mut reveals = Watcher::persistent(REVEAL_THRESHOLD, REVEAL_BOTTOM_MARGIN);
        let mut skill_watch = Watcher::one_shot(SKILL_THRESHOLD, SKILL_BOTTOM_MARGIN);
        let mut timeline_watch = Watcher::one_shot(TIMELINE_THRESHOLD, TIMELINE_BOTTOM_MARGIN);

        let page = PageMap::build();
        for (id, _) in page.blocks() {
            match *id {
                BlockId::About | BlockId::Project(_) | BlockId::Contact => reveals.track(*id),
                BlockId::Skill(index) => skill_watch.track(index),
                BlockId::TimelineEntry(index) => timeline_watch.track(index),
            }
        }

        Self {
            i18n: I18n::default(),
            config: Config::default(),
            config_dir: None,
            theme_mode: ThemeMode::default(),
            menu_open: false,
            page,
            viewport: Viewport {
                top: 0.0,
                height: WINDOW_DEFAULT_HEIGHT as f32 - sizing::NAVBAR_HEIGHT,
            },
            reveals,
            skill_watch,
            gauges: vec![None; content::SKILLS.len()],
            timeline_watch,
            scroll_animation: None,
            modals: modal::Manager::new(),
            contact: contact::State::new(),
            notifications: notifications::Manager::new(),
        }
    }
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
    // while only consuming flags once.
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
    /// Initializes application state from persisted preferences and runs the
    /// initial visibility pass so blocks already on screen reveal at once.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load(config_dir.as_deref());
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.config = config;
        app.config_dir = config_dir;

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        app.run_visibility_pass();

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.is_animating());

        Subscription::batch([event_sub, tick_sub])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Whether any frame-driven animation needs ticks right now.
    fn is_animating(&self) -> bool {
        self.scroll_animation.is_some()
            || self
                .gauges
                .iter()
                .flatten()
                .any(|gauge| !gauge.is_finished())
            || self.notifications.has_notifications()
    }

    /// Applies and persists a theme change.
    fn set_theme(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.config.general.theme_mode = mode;
        if config::save(&self.config, self.config_dir.as_deref()).is_err() {
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::sections::Section;

    #[test]
    fn default_app_starts_in_light_mode_with_nothing_open() {
        let app = App::default();
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert!(!app.menu_open);
        assert!(!app.modals.scroll_locked());
        assert!(app.gauges.iter().all(Option::is_none));
    }

    #[test]
    fn initial_visibility_pass_reveals_blocks_in_the_first_viewport() {
        let (app, _task) = App::new(Flags::default());
        // The hero fills the first screenful, so nothing below it should
        // have triggered yet at the default window size.
        assert!(app.timeline_watch.is_pending(0));
        // But the watchers are all populated.
        assert!(!app.reveals.is_empty());
    }

    #[test]
    fn navigating_to_every_section_resolves_a_target() {
        let app = App::default();
        for section in Section::ALL {
            assert!(app.page.section_top(section).is_some());
        }
    }
}
