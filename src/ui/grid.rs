// SPDX-License-Identifier: MPL-2.0
//! Paginated thumbnail grid with the load-more control.

use crate::api::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, scrollable, text, Column, Container, Image, Row};
use iced::{alignment, Element, Length, Theme};
use std::collections::HashMap;

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was clicked; carries the full-size URL to open.
    ImageSelected(String),
    /// The load-more button was pressed.
    LoadMorePressed,
}

/// Renders the scrollable thumbnail grid.
///
/// `thumbnails` maps record ids to decoded handles; records whose download
/// has not finished yet get a placeholder cell.
pub fn view<'a>(
    items: &'a [ImageRecord],
    thumbnails: &'a HashMap<u64, Handle>,
    total_hits: u64,
    can_load_more: bool,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let count = items.len().to_string();
    let total = total_hits.to_string();
    let caption = text(i18n.tr_with_args(
        "results-count",
        &[("count", count.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION)
    .style(|_theme: &Theme| text::Style {
        color: Some(palette::GRAY_400),
    });

    let mut rows = Column::new().spacing(spacing::MD);
    for chunk in items.chunks(sizing::GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for record in chunk {
            row = row.push(cell(record, thumbnails.get(&record.id)));
        }
        rows = rows.push(row);
    }

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(caption)
        .push(rows);

    if can_load_more {
        let load_more = button(text(i18n.tr("load-more-button")).size(typography::BODY_LG))
            .on_press(Message::LoadMorePressed)
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::primary);
        content = content.push(load_more);
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn cell<'a>(record: &'a ImageRecord, handle: Option<&'a Handle>) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match handle {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into(),
        None => Container::new(text(""))
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .style(styles::container::thumbnail_placeholder)
            .into(),
    };

    button(inner)
        .on_press(Message::ImageSelected(record.full_url.clone()))
        .padding(0.0)
        .style(styles::button::thumbnail)
        .into()
}
