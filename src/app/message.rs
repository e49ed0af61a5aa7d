// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::sections::projects;
use crate::ui::{contact, modal, navbar, notifications};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Projects(projects::Message),
    Modal(modal::Message),
    Contact(contact::Message),
    Notification(notifications::Message),
    /// The page scrollable moved; carries the new offset and visible height.
    PageScrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    /// The window was resized, changing the visible height.
    WindowResized(iced::Size),
    /// Escape was pressed anywhere: dismiss all open dialogs.
    EscapePressed,
    /// Animation frame for smooth scrolling, gauges, and toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_FOLIO_CONFIG_DIR` environment
    /// variable.
    pub config_dir: Option<String>,
}
