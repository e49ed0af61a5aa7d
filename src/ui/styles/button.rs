// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (hero call-to-action, form submit).
pub fn primary(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = scheme.brand_primary;
    let emphasis = scheme.brand_secondary;
    move |_theme: &Theme, status: button::Status| match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: palette::WHITE,
            border: Border {
                color: emphasis,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            ..button::Style::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(emphasis)),
            text_color: palette::WHITE,
            border: Border {
                color: emphasis,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            ..button::Style::default()
        },
        _ => button::Style::default(),
    }
}

/// Borderless button used for navigation links and the theme toggle.
pub fn ghost(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text = scheme.text_primary;
    let hover = scheme.brand_primary;
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => text,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..button::Style::default()
        }
    }
}

/// Small dismiss button inside dialogs and toasts.
pub fn dismiss(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text = scheme.text_secondary;
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => 0.15,
            button::Status::Pressed => 0.25,
            _ => 0.0,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..text })),
            text_color: text,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}
