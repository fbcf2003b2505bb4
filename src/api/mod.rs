// SPDX-License-Identifier: MPL-2.0
//! Image Fetch Client: one HTTP GET per `(keyword, page)` against a
//! Pixabay-style search endpoint, plus raw image downloads for display.

mod client;
mod types;

pub use client::{FetchedImage, SearchClient};
pub use types::{ImageRecord, SearchPage, SearchResponse};
