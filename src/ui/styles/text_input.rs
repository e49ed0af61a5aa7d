// SPDX-License-Identifier: MPL-2.0
//! Text input styles, including the error outline used by form validation.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Theme};

fn base(scheme: &ColorScheme, outline: iced::Color) -> text_input::Style {
    text_input::Style {
        background: Background::Color(scheme.surface_secondary),
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        icon: scheme.text_secondary,
        placeholder: scheme.text_secondary,
        value: scheme.text_primary,
        selection: scheme.brand_primary,
    }
}

/// Default field chrome, highlighting the brand color while focused.
pub fn normal(scheme: &ColorScheme) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let scheme = scheme.clone();
    move |_theme: &Theme, status: text_input::Status| {
        let outline = match status {
            text_input::Status::Focused { .. } => scheme.brand_primary,
            _ => scheme.text_secondary,
        };
        base(&scheme, outline)
    }
}

/// Error chrome applied to fields that failed validation.
pub fn error(scheme: &ColorScheme) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let scheme = scheme.clone();
    move |_theme: &Theme, _status: text_input::Status| {
        let mut style = base(&scheme, scheme.error);
        style.border.width = border::WIDTH_MD;
        style
    }
}
