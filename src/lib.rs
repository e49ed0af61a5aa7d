// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a one-page personal portfolio built with the Iced GUI
//! framework.
//!
//! It renders hero, skills, timeline, project, and contact sections inside a
//! single scrollable page and demonstrates persisted theme preferences,
//! visibility-triggered reveal animations, animated skill gauges, modal
//! dialogs, and client-side contact-form validation, with
//! internationalization provided by Fluent.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod interaction;
pub mod ui;
