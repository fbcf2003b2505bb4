// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the search endpoint and image downloads.

use super::types::{SearchPage, SearchResponse};
use crate::error::{Error, Result};
use crate::gallery::SearchQuery;
use iced::widget::image::Handle;

/// A downloaded and decoded image, ready for the renderer.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Client for a Pixabay-style image search API.
///
/// Holds one `reqwest::Client` so connections are pooled across searches and
/// thumbnail downloads. Cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    per_page: u8,
}

impl SearchClient {
    pub fn new(api_key: Option<String>, endpoint: String, per_page: u8) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("PixGrid/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            api_key,
            per_page,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Performs one search request for `(keyword, page)`.
    ///
    /// The caller (the gallery state machine) does not distinguish the error
    /// variants; they only differ in message text and log classification.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "no API key configured (--api-key, {}, or settings.toml)",
                crate::config::defaults::API_KEY_ENV_VAR
            ))
        })?;

        let params: Vec<(&str, String)> = vec![
            ("key", key.to_owned()),
            ("q", query.keyword.clone()),
            ("page", query.page.to_string()),
            ("per_page", self.per_page.to_string()),
            ("image_type", "photo".to_owned()),
            ("safesearch", "true".to_owned()),
        ];

        tracing::debug!(keyword = %query.keyword, page = query.page, "search request");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Api(format!("HTTP status: {}", response.status())));
        }

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::Api(e.to_string()))?;

        Ok(SearchPage::from(payload))
    }

    /// Downloads the bytes behind a record URL and decodes them into a
    /// renderer handle plus pixel dimensions.
    pub async fn fetch_image(&self, url: &str) -> Result<FetchedImage> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Api(format!("HTTP status: {}", response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        // Decode up front so a broken payload surfaces as an error here
        // instead of a blank widget at render time.
        let decoded =
            image_rs::load_from_memory(&bytes).map_err(|e| Error::Decode(e.to_string()))?;

        Ok(FetchedImage {
            width: decoded.width(),
            height: decoded.height(),
            handle: Handle::from_bytes(bytes.to_vec()),
        })
    }
}
