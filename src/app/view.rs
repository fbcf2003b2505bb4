// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the search bar, the phase-dependent body, the modal overlay, and
//! the toast layer as a stack.

use super::{App, Message};
use crate::gallery::{GalleryError, Phase};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{empty_state, error_banner, grid, overlay, search_bar};
use iced::widget::{text, Column, Container, Stack};
use iced::{alignment, Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let search = search_bar::view(&self.search_input, &self.i18n).map(Message::SearchBar);

        let mut column = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(search);

        if let Some(message) = self.localized_error() {
            column = column.push(error_banner::view::<Message>(message));
        }

        column = column.push(self.body());

        let base = Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut stack = Stack::new().push(base);

        if let Some(url) = self.gallery.selected_full_url() {
            let handle = self.full_images.get(url);
            stack = stack.push(
                overlay::view(handle, self.spinner_rotation, &self.i18n).map(Message::Overlay),
            );
        }

        stack = stack.push(Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification));

        stack.into()
    }

    fn body(&self) -> Element<'_, Message> {
        match self.gallery.phase() {
            Phase::Idle => empty_state::view(&self.i18n),
            Phase::Loading if self.gallery.items().is_empty() => self.loading_view(),
            Phase::Empty | Phase::Failed if self.gallery.items().is_empty() => {
                // The banner above already shows the message.
                Container::new(text(""))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            }
            _ => grid::view(
                self.gallery.items(),
                &self.thumbnails,
                self.gallery.total_hits(),
                self.gallery.can_load_more(),
                &self.i18n,
            )
            .map(Message::Grid),
        }
    }

    fn loading_view(&self) -> Element<'_, Message> {
        Container::new(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(
                    AnimatedSpinner::new(palette::PRIMARY_400, self.spinner_rotation)
                        .into_element(),
                )
                .push(text(self.i18n.tr("gallery-loading")).size(typography::BODY_LG)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
    }

    /// Error text for the inline banner, localized where the error is
    /// structured and verbatim where only a message string survived.
    fn localized_error(&self) -> Option<String> {
        match self.gallery.error()? {
            GalleryError::NoResults { keyword } => Some(
                self.i18n
                    .tr_with_args("error-no-results", &[("keyword", keyword.as_str())]),
            ),
            GalleryError::Fetch(message) => Some(message.clone()),
        }
    }
}
