// SPDX-License-Identifier: MPL-2.0
//! Landing view shown before the first search.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length, Theme};

/// Renders the centered empty state. Emits no messages of its own, so the
/// element is generic over the caller's message type.
pub fn view<'a, M: 'a>(i18n: &'a I18n) -> Element<'a, M> {
    let title = text(i18n.tr("empty-state-title")).size(typography::TITLE_LG);

    let subtitle = text(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY_LG)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::GRAY_400),
        });

    let hint = text(i18n.tr("empty-state-hint"))
        .size(typography::BODY)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::GRAY_400),
        });

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(subtitle)
            .push(hint),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
