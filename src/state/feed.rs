//! Incremental loading for infinite-scroll feeds.
//!
//! A sentinel row at the end of the feed reports visibility changes. A
//! rising edge (hidden → visible) issues a load request, but only when no
//! other request is in flight. Each request carries a [`LoadToken`];
//! completions with a token that no longer matches (the feed was reset or
//! torn down in between) are discarded instead of mutating state.
//!
//! An applied completion re-arms the sentinel: if it is still visible after
//! the new items were appended, the next visibility report counts as a
//! rising edge again.

use tracing::{debug, trace, warn};

/// Identifies one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken {
    generation: u64,
    sequence: u64,
}

/// A request for the next batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    /// Token to hand back on completion.
    pub token: LoadToken,
    /// Number of items already loaded.
    pub offset: usize,
    /// Batch size.
    pub limit: usize,
}

/// What happened to a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Applied; `added` items appended.
    Applied {
        /// Items appended.
        added: usize,
    },
    /// Token belonged to an earlier generation or sequence.
    Stale,
    /// Feed was torn down.
    TornDown,
}

/// Loader state for one mounted feed.
///
/// # Invariants
/// - At most one request in flight.
/// - After [`FeedLoader::teardown`], no completion is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLoader {
    batch_size: usize,
    loaded: usize,
    has_more: bool,
    in_flight: Option<LoadToken>,
    mounted: bool,
    generation: u64,
    sequence: u64,
    sentinel_visible: bool,
}

impl FeedLoader {
    /// Mounted loader with nothing loaded yet. A zero batch size is
    /// treated as 1.
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            loaded: 0,
            has_more: true,
            in_flight: None,
            mounted: true,
            generation: 0,
            sequence: 0,
            sentinel_visible: false,
        }
    }

    /// Items loaded so far.
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// Whether more items may exist.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the feed is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the end of the list was reached (render the end message).
    pub fn is_exhausted(&self) -> bool {
        !self.has_more && self.in_flight.is_none()
    }

    /// Batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Report sentinel visibility. Issues a request on a rising edge.
    pub fn on_sentinel(&mut self, visible: bool) -> Option<LoadRequest> {
        let rising = visible && !self.sentinel_visible;
        self.sentinel_visible = visible;
        if rising {
            self.request_more()
        } else {
            None
        }
    }

    /// Issue a request if mounted, more items may exist, and nothing is in
    /// flight.
    pub fn request_more(&mut self) -> Option<LoadRequest> {
        if !self.mounted || !self.has_more {
            return None;
        }
        if self.in_flight.is_some() {
            trace!("Load already in flight, not issuing another");
            return None;
        }
        self.sequence += 1;
        let token = LoadToken {
            generation: self.generation,
            sequence: self.sequence,
        };
        self.in_flight = Some(token);
        debug!(
            offset = self.loaded,
            limit = self.batch_size,
            "Requesting more items"
        );
        Some(LoadRequest {
            token,
            offset: self.loaded,
            limit: self.batch_size,
        })
    }

    /// Apply a completion.
    pub fn complete(
        &mut self,
        token: LoadToken,
        added: usize,
        has_more: bool,
    ) -> CompletionOutcome {
        if !self.mounted {
            warn!("Discarding completion after teardown");
            return CompletionOutcome::TornDown;
        }
        if self.in_flight != Some(token) {
            warn!("Discarding stale completion");
            return CompletionOutcome::Stale;
        }
        self.in_flight = None;
        self.sentinel_visible = false;
        self.loaded += added;
        self.has_more = has_more && added > 0;
        debug!(
            added,
            loaded = self.loaded,
            has_more = self.has_more,
            "Load completed"
        );
        CompletionOutcome::Applied { added }
    }

    /// A request failed; allow a retry on the next trigger.
    pub fn fail(&mut self, token: LoadToken) -> CompletionOutcome {
        if !self.mounted {
            return CompletionOutcome::TornDown;
        }
        if self.in_flight != Some(token) {
            return CompletionOutcome::Stale;
        }
        self.in_flight = None;
        self.sentinel_visible = false;
        CompletionOutcome::Applied { added: 0 }
    }

    /// Start over (the feed's query changed). Outstanding requests become
    /// stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.loaded = 0;
        self.has_more = self.mounted;
        self.in_flight = None;
        self.sentinel_visible = false;
    }

    /// Mount again with nothing loaded. Tokens issued before the previous
    /// teardown stay stale.
    pub fn remount(&mut self) {
        self.mounted = true;
        self.reset();
    }

    /// Unmount. Nothing issued before this call may mutate state.
    pub fn teardown(&mut self) {
        self.mounted = false;
        self.in_flight = None;
        self.generation += 1;
        debug!(loaded = self.loaded, "Feed torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rising_edge_issues_request() {
        let mut feed = FeedLoader::new(6);
        let req = feed.on_sentinel(true).expect("rising edge should request");
        assert_eq!(req.offset, 0);
        assert_eq!(req.limit, 6);
        assert!(feed.is_loading());
    }

    #[test]
    fn staying_visible_does_not_retrigger() {
        let mut feed = FeedLoader::new(6);
        feed.on_sentinel(true);
        assert_eq!(feed.on_sentinel(true), None);
    }

    #[test]
    fn no_second_request_while_in_flight() {
        let mut feed = FeedLoader::new(6);
        let _first = feed.on_sentinel(true).expect("first request");
        feed.on_sentinel(false);
        assert_eq!(feed.on_sentinel(true), None, "re-entrancy guard");
        assert_eq!(feed.request_more(), None);
    }

    #[test]
    fn completion_advances_offset() {
        let mut feed = FeedLoader::new(6);
        let req = feed.request_more().expect("request");
        assert_eq!(
            feed.complete(req.token, 6, true),
            CompletionOutcome::Applied { added: 6 }
        );
        assert_eq!(feed.loaded(), 6);
        let next = feed.request_more().expect("second request");
        assert_eq!(next.offset, 6);
    }

    #[test]
    fn completion_rearms_sentinel() {
        let mut feed = FeedLoader::new(6);
        let req = feed.on_sentinel(true).expect("request");
        feed.complete(req.token, 6, true);
        assert!(
            feed.on_sentinel(true).is_some(),
            "still visible after append"
        );
    }

    #[test]
    fn last_batch_marks_exhausted() {
        let mut feed = FeedLoader::new(6);
        let req = feed.request_more().expect("request");
        feed.complete(req.token, 2, false);
        assert!(feed.is_exhausted());
        assert_eq!(feed.request_more(), None);
    }

    #[test]
    fn empty_batch_marks_exhausted_even_if_server_says_more() {
        let mut feed = FeedLoader::new(6);
        let req = feed.request_more().expect("request");
        feed.complete(req.token, 0, true);
        assert!(!feed.has_more());
    }

    #[test]
    fn completion_after_teardown_is_discarded() {
        let mut feed = FeedLoader::new(6);
        let req = feed.request_more().expect("request");
        feed.teardown();
        assert_eq!(
            feed.complete(req.token, 6, true),
            CompletionOutcome::TornDown
        );
        assert_eq!(feed.loaded(), 0);
        assert_eq!(feed.request_more(), None, "torn-down feed never requests");
    }

    #[test]
    fn remount_rejects_tokens_from_previous_mount() {
        let mut feed = FeedLoader::new(6);
        let old = feed.request_more().expect("request");
        feed.teardown();
        feed.remount();
        let fresh = feed.request_more().expect("remounted feed requests again");
        assert_ne!(old.token, fresh.token);
        assert_eq!(feed.complete(old.token, 6, true), CompletionOutcome::Stale);
        assert_eq!(
            feed.complete(fresh.token, 6, true),
            CompletionOutcome::Applied { added: 6 }
        );
    }

    #[test]
    fn completion_after_reset_is_stale() {
        let mut feed = FeedLoader::new(6);
        let req = feed.request_more().expect("request");
        feed.reset();
        assert_eq!(feed.complete(req.token, 6, true), CompletionOutcome::Stale);
        assert_eq!(feed.loaded(), 0);
        assert!(!feed.is_loading());
    }

    #[test]
    fn duplicate_completion_is_stale() {
        let mut feed = FeedLoader::new(6);
        let req = feed.request_more().expect("request");
        feed.complete(req.token, 6, true);
        assert_eq!(feed.complete(req.token, 6, true), CompletionOutcome::Stale);
        assert_eq!(feed.loaded(), 6);
    }

    #[test]
    fn failure_allows_retry() {
        let mut feed = FeedLoader::new(6);
        let req = feed.on_sentinel(true).expect("request");
        feed.fail(req.token);
        assert!(!feed.is_loading());
        assert!(
            feed.on_sentinel(true).is_some(),
            "retry on next rising edge"
        );
    }

    #[test]
    fn zero_batch_size_is_treated_as_one() {
        assert_eq!(FeedLoader::new(0).batch_size(), 1);
    }
}
