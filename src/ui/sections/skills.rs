// SPDX-License-Identifier: MPL-2.0
//! Skill cards with animated circular gauges.
//!
//! A card's label is rendered from the start; the gauge arc and the
//! percentage readout only begin moving once the card's visibility trigger
//! has fired and handed the app a running [`GaugeAnimation`].

use crate::content;
use crate::i18n::fluent::I18n;
use crate::interaction::gauge::GaugeAnimation;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::skill_gauge::SkillGauge;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Renders the skills section body: one card per entry in the content table.
pub fn view<Message: 'static>(
    i18n: &I18n,
    scheme: &ColorScheme,
    gauges: &[Option<GaugeAnimation>],
) -> Element<'static, Message> {
    let mut column = Column::new().spacing(spacing::LG).width(Length::Fill);

    for (index, skill) in content::SKILLS.iter().enumerate() {
        let gauge = gauges.get(index).and_then(|slot| slot.as_ref());
        column = column.push(card(i18n, scheme, skill, gauge));
    }

    column.into()
}

fn card<Message: 'static>(
    i18n: &I18n,
    scheme: &ColorScheme,
    skill: &content::Skill,
    gauge: Option<&GaugeAnimation>,
) -> Element<'static, Message> {
    let label = Text::new(i18n.tr(skill.label_key))
        .size(typography::TITLE_SM)
        .color(scheme.text_primary);

    let (sweep, displayed) = match gauge {
        Some(animation) => (animation.sweep(), animation.displayed()),
        None => (0.0, 0),
    };

    let readout = Text::new(format!("{displayed}%"))
        .size(typography::BODY_LG)
        .color(scheme.brand_primary);

    let drawing = SkillGauge::new(sweep, scheme.brand_primary).into_element();

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(label)
        .push(drawing)
        .push(readout);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SKILL_CARD_HEIGHT))
        .padding(spacing::SM)
        .align_x(Horizontal::Center)
        .style(styles::container::card(scheme))
        .into()
}
