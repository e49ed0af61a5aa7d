// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::ui::theming::ThemeMode;

/// Theme applied when no preference has been stored yet, or when the stored
/// value is not recognized.
pub fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}
