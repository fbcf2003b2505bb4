// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{App, Message};
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{event, time, Subscription};
use std::time::Duration;

impl App {
    pub(super) fn subscription(&self) -> Subscription<Message> {
        let ticking = self.gallery.is_loading()
            || self.overlay_waiting()
            || self.notifications.has_notifications();

        Subscription::batch([tick_subscription(ticking), escape_subscription()])
    }
}

/// Periodic tick for spinner rotation and notification auto-dismiss. Only
/// active while something on screen needs it.
fn tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Global Escape handling so the overlay closes regardless of focus. Events
/// already captured by a widget are left alone.
fn escape_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }

        match event {
            event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        }
    })
}
