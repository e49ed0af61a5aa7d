// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Page background surface.
pub fn page(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        ..container::Style::default()
    }
}

/// Raised card surface (skill cards, timeline entries, project cards).
pub fn card(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface_secondary;
    let text = scheme.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// Dimmed backdrop behind open dialogs.
pub fn backdrop(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let dim = scheme.backdrop;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(dim)),
        ..container::Style::default()
    }
}

/// Dialog surface floating above the backdrop.
pub fn dialog(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface_primary;
    let text = scheme.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Top navigation bar surface.
pub fn toolbar(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface_secondary;
    let text = scheme.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        ..container::Style::default()
    }
}
