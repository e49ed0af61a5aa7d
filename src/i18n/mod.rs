// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Localization is provided by the Fluent system. Translation resources are
//! embedded in the binary and the active locale is resolved from the CLI,
//! the config file, or the OS locale, in that order.

pub mod fluent;
