// SPDX-License-Identifier: MPL-2.0
//! Inline error banner rendered between the search bar and the gallery.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Container};
use iced::{Element, Length};

/// Renders the banner with an already localized error message.
pub fn view<'a, M: 'a>(message: String) -> Element<'a, M> {
    Container::new(text(message).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::error_banner)
        .into()
}
