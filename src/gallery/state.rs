// SPDX-License-Identifier: MPL-2.0
use super::query::{RequestSeq, SearchQuery};
use crate::api::{ImageRecord, SearchPage};
use crate::error::Error;
use std::fmt;

/// Lifecycle of the current search. The overlay selection is orthogonal and
/// tracked separately in [`State::selected_full_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No search submitted yet.
    #[default]
    Idle,
    /// A fetch is in flight (first page or load-more alike).
    Loading,
    /// At least one result is on screen.
    Loaded,
    /// The search completed with zero hits.
    Empty,
    /// The last fetch failed; the message is in [`State::error_message`].
    Failed,
}

/// User-facing error recorded by the state machine.
///
/// Kept as structured data so the display text can be produced both here (for
/// headless use) and by the localization layer (for the UI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    NoResults { keyword: String },
    Fetch(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::NoResults { keyword } => {
                write!(f, "No images found for {}", keyword)
            }
            GalleryError::Fetch(message) => write!(f, "{}", message),
        }
    }
}

/// Informational notice a transition wants surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Submit was called with an empty or whitespace-only keyword.
    EmptyKeyword,
}

/// Side effect requested by a transition. The shell executes these; the state
/// machine itself never touches the network or any global UI mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(SearchQuery),
    Notify(Notice),
}

/// Outcome of [`State::apply_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response matched the in-flight request and was applied.
    Applied,
    /// The response belonged to a superseded request and was discarded.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchMode {
    /// First page of a new keyword: results replace the list.
    Reset,
    /// Load-more: results are appended, never replacing accumulated pages.
    Append,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    seq: RequestSeq,
    page: u32,
    mode: FetchMode,
}

/// The gallery controller state. All mutation goes through the transition
/// methods; views only get read access.
#[derive(Debug, Default)]
pub struct State {
    keyword: String,
    items: Vec<ImageRecord>,
    /// Last successfully loaded page (1-indexed). Only advanced on success,
    /// so a failed load-more retries the same page.
    page: u32,
    total_hits: u64,
    phase: Phase,
    selected_full_url: Option<String>,
    error: Option<GalleryError>,
    next_seq: u64,
    in_flight: Option<InFlight>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits a keyword. Whitespace-only input produces a notice and changes
    /// nothing. A valid keyword clears the accumulated results immediately,
    /// enters `Loading`, and requests page 1; any fetch already in flight is
    /// superseded and its eventual response will be discarded as stale.
    pub fn submit(&mut self, raw: &str) -> Effect {
        let keyword = raw.trim().to_lowercase();
        if keyword.is_empty() {
            return Effect::Notify(Notice::EmptyKeyword);
        }

        self.keyword = keyword.clone();
        self.items = Vec::new();
        self.page = 1;
        self.total_hits = 0;
        self.error = None;
        self.phase = Phase::Loading;

        let seq = self.issue_seq();
        self.in_flight = Some(InFlight {
            seq,
            page: 1,
            mode: FetchMode::Reset,
        });

        Effect::Fetch(SearchQuery {
            keyword,
            page: 1,
            seq,
        })
    }

    /// Requests the next page of the current keyword. Only acts when results
    /// are on screen and no fetch is in flight; the successful response is
    /// appended to `items`, never replacing them.
    pub fn load_more(&mut self) -> Effect {
        if self.items.is_empty() || self.in_flight.is_some() {
            return Effect::None;
        }

        let page = self.page + 1;
        self.phase = Phase::Loading;

        let seq = self.issue_seq();
        self.in_flight = Some(InFlight {
            seq,
            page,
            mode: FetchMode::Append,
        });

        Effect::Fetch(SearchQuery {
            keyword: self.keyword.clone(),
            page,
            seq,
        })
    }

    /// Applies a fetch response. Responses whose seq does not match the
    /// in-flight request are discarded. The in-flight marker is cleared on
    /// every applied path, success and failure alike, before the result is
    /// examined.
    pub fn apply_fetch(&mut self, seq: RequestSeq, result: Result<SearchPage, Error>) -> Applied {
        let pending = match self.in_flight {
            Some(pending) if pending.seq == seq => pending,
            _ => return Applied::Stale,
        };
        self.in_flight = None;

        match result {
            Ok(page_data) => {
                self.total_hits = page_data.total_hits;
                match pending.mode {
                    FetchMode::Reset => {
                        if page_data.hits.is_empty() {
                            self.items = Vec::new();
                            self.phase = Phase::Empty;
                            self.error = Some(GalleryError::NoResults {
                                keyword: self.keyword.clone(),
                            });
                        } else {
                            self.items = page_data.hits;
                            self.page = pending.page;
                            self.phase = Phase::Loaded;
                            self.error = None;
                        }
                    }
                    FetchMode::Append => {
                        self.items.extend(page_data.hits);
                        self.page = pending.page;
                        self.phase = Phase::Loaded;
                        self.error = None;
                    }
                }
            }
            Err(err) => {
                self.phase = Phase::Failed;
                self.error = Some(GalleryError::Fetch(err.to_string()));
            }
        }

        Applied::Applied
    }

    /// Opens the overlay on the given full-resolution URL.
    pub fn select(&mut self, full_url: String) {
        self.selected_full_url = Some(full_url);
    }

    /// Closes the overlay.
    pub fn close_overlay(&mut self) {
        self.selected_full_url = None;
    }

    fn issue_seq(&mut self) -> RequestSeq {
        self.next_seq += 1;
        RequestSeq(self.next_seq)
    }

    // Read-only projections for the views.

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn items(&self) -> &[ImageRecord] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Seq of the in-flight request, if any.
    pub fn in_flight_seq(&self) -> Option<RequestSeq> {
        self.in_flight.map(|pending| pending.seq)
    }

    /// `Some` iff the overlay is visible.
    pub fn selected_full_url(&self) -> Option<&str> {
        self.selected_full_url.as_deref()
    }

    pub fn error(&self) -> Option<&GalleryError> {
        self.error.as_ref()
    }

    /// Rendered error text, e.g. `No images found for cats`.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Load-more is offered whenever results are on screen and no fetch is
    /// running.
    pub fn can_load_more(&self) -> bool {
        !self.items.is_empty() && self.in_flight.is_none()
    }
}
