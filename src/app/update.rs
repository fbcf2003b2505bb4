// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Transitions are delegated to the gallery state machine; this module only
//! executes the effects it returns and maintains the image caches.

use super::{App, Message, SPINNER_STEP};
use crate::error::Error;
use crate::gallery::{Applied, Effect, Notice, SearchQuery};
use crate::ui::notifications::Notification;
use crate::ui::{grid, overlay, search_bar};
use iced::Task;
use std::f32::consts::TAU;
use std::sync::Arc;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchBar(search_bar::Message::InputChanged(value)) => {
                self.search_input = value;
                Task::none()
            }
            Message::SearchBar(search_bar::Message::Submitted) => {
                let query = self.search_input.clone();
                let effect = self.gallery.submit(&query);
                self.run_effect(effect)
            }
            Message::Grid(grid::Message::LoadMorePressed) => {
                let effect = self.gallery.load_more();
                self.run_effect(effect)
            }
            Message::Grid(grid::Message::ImageSelected(url)) => {
                self.gallery.select(url.clone());
                if self.full_images.contains_key(&url) {
                    Task::none()
                } else {
                    self.fetch_full_image(url)
                }
            }
            Message::Overlay(overlay::Message::CloseRequested) | Message::EscapePressed => {
                self.gallery.close_overlay();
                Task::none()
            }
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::SearchCompleted { seq, result } => {
                match self.gallery.apply_fetch(seq, result) {
                    Applied::Stale => {
                        tracing::debug!(%seq, "discarding superseded search response");
                        Task::none()
                    }
                    Applied::Applied => self.fetch_missing_thumbnails(),
                }
            }
            Message::ThumbnailFetched { id, result } => {
                match result {
                    Ok(fetched) => {
                        // The grid may have been replaced by a newer search
                        // while this download ran.
                        if self.gallery.items().iter().any(|record| record.id == id) {
                            self.thumbnails.insert(id, fetched.handle);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(id, %err, "thumbnail download failed");
                    }
                }
                Task::none()
            }
            Message::FullImageFetched { url, result } => {
                match result {
                    Ok(fetched) => {
                        tracing::debug!(%url, fetched.width, fetched.height, "full image ready");
                        self.full_images.insert(url, fetched.handle);
                    }
                    Err(err) => {
                        tracing::warn!(%url, %err, "full image download failed");
                        if self.gallery.selected_full_url() == Some(url.as_str()) {
                            self.gallery.close_overlay();
                        }
                        self.notifications
                            .push(Notification::error("notification-full-image-error"));
                    }
                }
                Task::none()
            }
            Message::Tick(_now) => {
                self.notifications.tick();
                if self.gallery.is_loading() || self.overlay_waiting() {
                    self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % TAU;
                }
                Task::none()
            }
        }
    }

    /// Executes an effect requested by the gallery state machine.
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Notify(Notice::EmptyKeyword) => {
                self.notifications
                    .push(Notification::info("notification-empty-keyword"));
                Task::none()
            }
            Effect::Fetch(query) => self.run_fetch(query),
        }
    }

    fn run_fetch(&mut self, query: SearchQuery) -> Task<Message> {
        // Page 1 means a fresh search; cached images belong to the old one.
        if query.page == 1 {
            self.thumbnails.clear();
            self.full_images.clear();
        }

        let Some(client) = self.client.clone() else {
            let seq = query.seq;
            let _ = self.gallery.apply_fetch(
                seq,
                Err(Error::Config("HTTP client unavailable".to_owned())),
            );
            return Task::none();
        };

        let seq = query.seq;
        Task::perform(
            async move { client.search(&query).await },
            move |result| Message::SearchCompleted { seq, result },
        )
    }

    /// Spawns one download task per grid record whose thumbnail is not cached.
    fn fetch_missing_thumbnails(&mut self) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            return Task::none();
        };

        let tasks: Vec<Task<Message>> = self
            .gallery
            .items()
            .iter()
            .filter(|record| !self.thumbnails.contains_key(&record.id))
            .map(|record| {
                let client = Arc::clone(&client);
                let id = record.id;
                let url = record.thumbnail_url.clone();
                Task::perform(
                    async move { client.fetch_image(&url).await },
                    move |result| Message::ThumbnailFetched { id, result },
                )
            })
            .collect();

        Task::batch(tasks)
    }

    fn fetch_full_image(&mut self, url: String) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            return Task::none();
        };

        let fetch_url = url.clone();
        Task::perform(
            async move { client.fetch_image(&fetch_url).await },
            move |result| Message::FullImageFetched {
                url: url.clone(),
                result,
            },
        )
    }
}
