// SPDX-License-Identifier: MPL-2.0
//! Headless search/pagination/overlay state machine.
//!
//! This module is the behavioral core of the application: it owns the keyword,
//! the accumulated result list, the page counter, and the overlay selection,
//! and exposes explicit transition functions. Transitions never perform I/O;
//! they return an [`Effect`] describing what the shell should do (start a
//! fetch, show a notice), which keeps the whole machine testable without a
//! rendering environment or a network.

mod query;
mod state;

pub use query::{RequestSeq, SearchQuery};
pub use state::{Applied, Effect, GalleryError, Notice, Phase, State};
