// SPDX-License-Identifier: MPL-2.0
//! Full-size image overlay shown above the gallery.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::image::Handle;
use iced::widget::{center, mouse_area, opaque, text, Column, Container, Image};
use iced::{alignment, Element, Length, Theme};

/// Messages emitted by the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// The backdrop was clicked.
    CloseRequested,
}

/// Renders the overlay for the selected image.
///
/// While the full-size download is still running, `handle` is `None` and a
/// spinner with a loading caption is shown instead.
pub fn view<'a>(
    handle: Option<&'a Handle>,
    spinner_rotation: f32,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match handle {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into(),
        None => Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(AnimatedSpinner::new(palette::PRIMARY_400, spinner_rotation).into_element())
            .push(text(i18n.tr("overlay-loading")).size(typography::BODY))
            .into(),
    };

    let hint = text(i18n.tr("overlay-close-hint"))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::GRAY_200),
        });

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(body)
            .push(hint),
    )
    .padding(spacing::MD)
    .style(styles::container::overlay_card);

    // The card is not opaque on purpose: the close hint promises that a
    // click anywhere dismisses the overlay, image included.
    let backdrop = Container::new(center(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::overlay_backdrop);

    opaque(mouse_area(backdrop).on_press(Message::CloseRequested)).into()
}
