// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{FetchedImage, SearchPage};
use crate::error::Error;
use crate::gallery::RequestSeq;
use crate::ui::notifications;
use crate::ui::{grid, overlay, search_bar};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    Grid(grid::Message),
    Overlay(overlay::Message),
    Notification(notifications::NotificationMessage),
    /// Result of a search request, tagged with the seq of the request that
    /// produced it so superseded responses can be discarded.
    SearchCompleted {
        seq: RequestSeq,
        result: Result<SearchPage, Error>,
    },
    /// Result of downloading the thumbnail for one record.
    ThumbnailFetched {
        id: u64,
        result: Result<FetchedImage, Error>,
    },
    /// Result of downloading the full-size image for the overlay.
    FullImageFetched {
        url: String,
        result: Result<FetchedImage, Error>,
    },
    /// Periodic tick for notification auto-dismiss and spinner rotation.
    Tick(Instant),
    /// Escape was pressed anywhere in the window.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional API key override; takes precedence over the environment
    /// variable and `settings.toml`.
    pub api_key: Option<String>,
    /// Optional keyword to search for immediately on startup.
    pub query: Option<String>,
}
