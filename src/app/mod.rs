// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search bar, the
//! thumbnail grid, and the overlay.
//!
//! The `App` struct owns the headless gallery state machine and translates
//! its effects into Iced tasks (HTTP fetches, toast notifications). Image
//! bytes are cached per URL here so reopening an overlay or re-rendering the
//! grid never refetches.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::SearchClient;
use crate::config::{self, defaults};
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Spinner advance per tick, in radians.
const SPINNER_STEP: f32 = 0.25;

/// Root Iced application state bridging the gallery state machine, the HTTP
/// client, localization, and notifications.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Shared HTTP client; `None` only when the TLS backend failed to
    /// initialize at startup.
    client: Option<Arc<SearchClient>>,
    gallery: gallery::State,
    /// Current content of the search input, distinct from the submitted
    /// keyword held by the gallery.
    search_input: String,
    /// Decoded thumbnail handles by record id.
    thumbnails: HashMap<u64, Handle>,
    /// Decoded full-size handles by URL.
    full_images: HashMap<String, Handle>,
    spinner_rotation: f32,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("keyword", &self.gallery.keyword())
            .field("phase", &self.gallery.phase())
            .field("items", &self.gallery.items().len())
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off the first
    /// search based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        // CLI flag wins over the environment, which wins over the file.
        let api_key = flags
            .api_key
            .or_else(|| std::env::var(defaults::API_KEY_ENV_VAR).ok())
            .or_else(|| config.api_key.clone());

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        let client = match SearchClient::new(api_key, config.endpoint().to_owned(), config.per_page())
        {
            Ok(client) => Some(Arc::new(client)),
            Err(err) => {
                tracing::error!(%err, "failed to build HTTP client");
                notifications.push(notifications::Notification::error(err.i18n_key()));
                None
            }
        };

        let mut app = App {
            i18n,
            theme_mode: config.theme_mode,
            client,
            gallery: gallery::State::new(),
            search_input: String::new(),
            thumbnails: HashMap::new(),
            full_images: HashMap::new(),
            spinner_rotation: 0.0,
            notifications,
        };

        let task = match flags.query {
            Some(query) => {
                app.search_input = query.clone();
                let effect = app.gallery.submit(&query);
                app.run_effect(effect)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let base = self.i18n.tr("window-title");
        if self.gallery.keyword().is_empty() {
            base
        } else {
            format!("{} - {}", base, self.gallery.keyword())
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Whether the overlay is open but its full-size image has not arrived.
    fn overlay_waiting(&self) -> bool {
        self.gallery
            .selected_full_url()
            .is_some_and(|url| !self.full_images.contains_key(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ImageRecord, SearchPage};
    use crate::error::Error;
    use crate::gallery::Phase;
    use crate::ui::{grid, overlay, search_bar};

    fn test_app() -> App {
        App::new(Flags::default()).0
    }

    fn record(id: u64) -> ImageRecord {
        ImageRecord {
            id,
            thumbnail_url: format!("https://cdn.example/thumb-{id}.jpg"),
            full_url: format!("https://cdn.example/full-{id}.jpg"),
            tags: String::new(),
        }
    }

    fn page(ids: &[u64], total_hits: u64) -> SearchPage {
        SearchPage {
            hits: ids.iter().copied().map(record).collect(),
            total_hits,
        }
    }

    #[test]
    fn submitting_a_keyword_starts_loading() {
        let mut app = test_app();
        let _ = app.update(Message::SearchBar(search_bar::Message::InputChanged(
            "Cats ".to_owned(),
        )));
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));

        assert_eq!(app.gallery.phase(), Phase::Loading);
        assert_eq!(app.gallery.keyword(), "cats");
        assert!(app.gallery.in_flight_seq().is_some());
    }

    #[test]
    fn matching_response_populates_the_grid() {
        let mut app = test_app();
        let _ = app.update(Message::SearchBar(search_bar::Message::InputChanged(
            "cats".to_owned(),
        )));
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let seq = app.gallery.in_flight_seq().expect("request in flight");

        let _ = app.update(Message::SearchCompleted {
            seq,
            result: Ok(page(&[1, 2, 3], 42)),
        });

        assert_eq!(app.gallery.phase(), Phase::Loaded);
        assert_eq!(app.gallery.items().len(), 3);
        assert_eq!(app.gallery.total_hits(), 42);
    }

    #[test]
    fn response_for_a_superseded_search_is_discarded() {
        let mut app = test_app();
        let _ = app.update(Message::SearchBar(search_bar::Message::InputChanged(
            "cats".to_owned(),
        )));
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let old_seq = app.gallery.in_flight_seq().expect("request in flight");

        // A second submit supersedes the first request.
        let _ = app.update(Message::SearchBar(search_bar::Message::InputChanged(
            "dogs".to_owned(),
        )));
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));

        let _ = app.update(Message::SearchCompleted {
            seq: old_seq,
            result: Ok(page(&[7], 1)),
        });

        assert_eq!(app.gallery.phase(), Phase::Loading);
        assert!(app.gallery.items().is_empty());
        assert_eq!(app.gallery.keyword(), "dogs");
    }

    #[test]
    fn failed_search_keeps_the_error_for_display() {
        let mut app = test_app();
        let _ = app.update(Message::SearchBar(search_bar::Message::InputChanged(
            "cats".to_owned(),
        )));
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let seq = app.gallery.in_flight_seq().expect("request in flight");

        let _ = app.update(Message::SearchCompleted {
            seq,
            result: Err(Error::Network("connection refused".to_owned())),
        });

        assert_eq!(app.gallery.phase(), Phase::Failed);
        assert!(app
            .gallery
            .error_message()
            .is_some_and(|m| m.contains("connection refused")));
    }

    #[test]
    fn selecting_an_image_opens_the_overlay_and_escape_closes_it() {
        let mut app = test_app();
        let _ = app.update(Message::SearchBar(search_bar::Message::InputChanged(
            "cats".to_owned(),
        )));
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let seq = app.gallery.in_flight_seq().expect("request in flight");
        let _ = app.update(Message::SearchCompleted {
            seq,
            result: Ok(page(&[1], 1)),
        });

        let _ = app.update(Message::Grid(grid::Message::ImageSelected(
            "https://cdn.example/full-1.jpg".to_owned(),
        )));
        assert!(app.gallery.selected_full_url().is_some());
        assert!(app.overlay_waiting());

        let _ = app.update(Message::EscapePressed);
        assert!(app.gallery.selected_full_url().is_none());
    }

    #[test]
    fn backdrop_click_closes_the_overlay() {
        let mut app = test_app();
        app.gallery.select("https://cdn.example/full.jpg".to_owned());

        let _ = app.update(Message::Overlay(overlay::Message::CloseRequested));
        assert!(app.gallery.selected_full_url().is_none());
    }

    #[test]
    fn empty_submit_raises_a_notification_and_changes_nothing() {
        let mut app = test_app();
        let before = app.notifications.visible_count();

        let _ = app.update(Message::SearchBar(search_bar::Message::InputChanged(
            "   ".to_owned(),
        )));
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));

        assert_eq!(app.gallery.phase(), Phase::Idle);
        assert_eq!(app.notifications.visible_count(), before + 1);
    }

    #[test]
    fn new_search_drops_cached_images() {
        let mut app = test_app();
        app.thumbnails.insert(9, Handle::from_bytes(vec![0u8; 4]));
        app.full_images
            .insert("https://cdn.example/old.jpg".to_owned(), Handle::from_bytes(vec![0u8; 4]));

        let _ = app.update(Message::SearchBar(search_bar::Message::InputChanged(
            "cats".to_owned(),
        )));
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));

        assert!(app.thumbnails.is_empty());
        assert!(app.full_images.is_empty());
    }
}
