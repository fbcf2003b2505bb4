// SPDX-License-Identifier: MPL-2.0
//! Keyword input and submit button at the top of the window.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Row};
use iced::{alignment, Element, Length};

/// Messages emitted by the search bar.
#[derive(Debug, Clone)]
pub enum Message {
    /// The keyword input changed.
    InputChanged(String),
    /// The user pressed Enter or clicked the search button.
    Submitted,
}

/// Renders the search bar with the current input value.
///
/// Submission is always allowed; the state machine decides whether the
/// keyword is usable and answers with a notice when it is not.
pub fn view<'a>(input: &str, i18n: &'a I18n) -> Element<'a, Message> {
    let field = text_input(&i18n.tr("search-placeholder"), input)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submitted)
        .size(typography::BODY_LG)
        .padding(spacing::SM)
        .width(Length::Fill);

    let submit = button(text(i18n.tr("search-button")).size(typography::BODY_LG))
        .on_press(Message::Submitted)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(field)
        .push(submit)
        .into()
}
