// SPDX-License-Identifier: MPL-2.0
//! Wire payload for the search endpoint and its in-app projection.

use serde::Deserialize;

/// Raw JSON payload of the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "totalHits", default)]
    pub total_hits: u64,
    pub hits: Vec<Hit>,
}

/// One result object as the API sends it. `webformatURL` is the mid-size
/// rendition used for the grid; `largeImageURL` feeds the overlay.
#[derive(Debug, Clone, Deserialize)]
pub struct Hit {
    pub id: u64,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    #[serde(default)]
    pub tags: String,
}

/// A single gallery entry. Immutable once fetched; owned by the gallery state
/// for the lifetime of the current search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: u64,
    pub thumbnail_url: String,
    pub full_url: String,
    pub tags: String,
}

/// One decoded page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub hits: Vec<ImageRecord>,
    pub total_hits: u64,
}

impl From<SearchResponse> for SearchPage {
    fn from(response: SearchResponse) -> Self {
        let hits = response
            .hits
            .into_iter()
            .map(|hit| ImageRecord {
                id: hit.id,
                thumbnail_url: hit.webformat_url,
                full_url: hit.large_image_url,
                tags: hit.tags,
            })
            .collect();
        Self {
            hits,
            total_hits: response.total_hits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total": 4692,
        "totalHits": 500,
        "hits": [
            {
                "id": 195893,
                "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                "type": "photo",
                "tags": "blossom, bloom, flower",
                "previewURL": "https://cdn.pixabay.com/photo/preview.jpg",
                "webformatURL": "https://pixabay.com/get/webformat.jpg",
                "largeImageURL": "https://pixabay.com/get/large.jpg",
                "views": 7671,
                "downloads": 6439,
                "likes": 5,
                "user": "Josch13"
            }
        ]
    }"#;

    #[test]
    fn payload_decodes_and_projects_to_records() {
        let response: SearchResponse =
            serde_json::from_str(SAMPLE).expect("sample payload should decode");
        let page = SearchPage::from(response);

        assert_eq!(page.total_hits, 500);
        assert_eq!(page.hits.len(), 1);
        let record = &page.hits[0];
        assert_eq!(record.id, 195_893);
        assert_eq!(record.thumbnail_url, "https://pixabay.com/get/webformat.jpg");
        assert_eq!(record.full_url, "https://pixabay.com/get/large.jpg");
        assert_eq!(record.tags, "blossom, bloom, flower");
    }

    #[test]
    fn empty_hits_array_decodes() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total":0,"totalHits":0,"hits":[]}"#).expect("decode");
        let page = SearchPage::from(response);
        assert!(page.hits.is_empty());
        assert_eq!(page.total_hits, 0);
    }

    #[test]
    fn missing_counts_default_to_zero() {
        let response: SearchResponse = serde_json::from_str(r#"{"hits":[]}"#).expect("decode");
        assert_eq!(response.total, 0);
        assert_eq!(response.total_hits, 0);
    }
}
