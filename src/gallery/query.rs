// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Monotonically increasing tag for fetch requests.
///
/// Every fetch effect carries a fresh seq; a response is only applied when its
/// seq matches the request currently in flight. A search that supersedes an
/// unfinished one therefore can never have its state clobbered by the late
/// response of the superseded request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RequestSeq(pub(crate) u64);

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One fetch request: keyword, 1-indexed page, and its request tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub page: u32,
    pub seq: RequestSeq,
}
