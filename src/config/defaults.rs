// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

/// Default search endpoint. Pixabay-compatible: expects `key`, `q`, `page`
/// and `per_page` query parameters and answers with a `hits` array.
pub const DEFAULT_ENDPOINT: &str = "https://pixabay.com/api/";

/// Default number of results requested per page.
pub const DEFAULT_PER_PAGE: u8 = 12;

/// Minimum page size the API accepts.
pub const MIN_PER_PAGE: u8 = 3;

/// Maximum page size the API accepts.
pub const MAX_PER_PAGE: u8 = 200;

/// Environment variable consulted for the API key when neither the CLI flag
/// nor the config file provides one.
pub const API_KEY_ENV_VAR: &str = "PIXGRID_API_KEY";
