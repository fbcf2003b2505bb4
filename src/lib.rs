// SPDX-License-Identifier: MPL-2.0
//! `pixgrid` is a keyword image-search gallery built with the Iced GUI framework.
//!
//! A search term is sent to a Pixabay-style HTTP API, results are rendered as a
//! paginated thumbnail grid, and a click opens the full-size image in a modal
//! overlay. The search/pagination logic lives in [`gallery`] as a headless
//! state machine so it can be exercised without a rendering environment.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
