// src/domain/synchronizer.rs

use crate::api::{ApiError, Page, PageRequest};
use crate::domain::query_state::{reduce, FilterEvent, QueryState};
use crate::domain::ratings::{RatingBook, RatingFailurePolicy, RatingType, Transition};
use crate::domain::sequencer::{RequestId, RequestSequencer};
use tracing::debug;

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Nothing fetched yet.
    Loading,
    Ready(Page),
    /// The last fetch failed; the list is hidden.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// A fetch the caller has to run against the backend and hand back
/// through [`Synchronizer::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub id: RequestId,
    pub request: PageRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer fetch was issued meanwhile; the response was dropped.
    Stale,
}

/// Per-visitor filter state, current page and ratings.
///
/// Every method is a quick, in-memory step. Network calls happen between
/// a `PendingFetch` being issued and `complete` being called, so the
/// caller never has to hold the session lock across I/O.
#[derive(Debug)]
pub struct Synchronizer {
    query: QueryState,
    view: ResultView,
    ratings: RatingBook,
    sequencer: RequestSequencer,
    /// Filtered fetch still in flight. The current page's cursors belong
    /// to the previous query until it lands.
    filtered_pending: Option<RequestId>,
    districts: Vec<String>,
    rating_policy: RatingFailurePolicy,
}

impl Synchronizer {
    pub fn new(rating_policy: RatingFailurePolicy) -> Self {
        Self {
            query: QueryState::defaults(),
            view: ResultView::Loading,
            ratings: RatingBook::default(),
            sequencer: RequestSequencer::default(),
            filtered_pending: None,
            districts: Vec::new(),
            rating_policy,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    pub fn ratings(&self) -> &RatingBook {
        &self.ratings
    }

    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    pub fn set_districts(&mut self, districts: Vec<String>) {
        self.districts = districts;
    }

    /// Back to a fresh page load: default filters, nothing fetched. Request
    /// ids keep counting, so answers to fetches issued before the restart
    /// are still recognised as stale.
    pub fn restart(&mut self) {
        self.query = QueryState::defaults();
        self.view = ResultView::Loading;
        self.ratings = RatingBook::default();
        self.filtered_pending = None;
        self.districts.clear();
    }

    /// Apply a filter event and ask for page one of the new result set.
    pub fn apply(&mut self, event: FilterEvent) -> PendingFetch {
        self.query = reduce(&self.query, event);
        self.refresh()
    }

    /// Page one of the list with the current filters.
    pub fn refresh(&mut self) -> PendingFetch {
        let request = PageRequest::Filtered(self.query.to_params());
        let pending = self.begin(request);
        self.filtered_pending = Some(pending.id);
        pending
    }

    /// Follow the backend's cursor. `None` when the current page has no
    /// cursor in that direction, or while a filtered fetch is in flight.
    pub fn navigate(&mut self, direction: Direction) -> Option<PendingFetch> {
        let cursor = self.cursor(direction)?.to_string();
        Some(self.begin(PageRequest::Cursor(cursor)))
    }

    pub fn cursor(&self, direction: Direction) -> Option<&str> {
        if self.filtered_pending.is_some() {
            return None;
        }
        let ResultView::Ready(page) = &self.view else {
            return None;
        };
        match direction {
            Direction::Previous => page.previous.as_deref(),
            Direction::Next => page.next.as_deref(),
        }
    }

    fn begin(&mut self, request: PageRequest) -> PendingFetch {
        let id = self.sequencer.issue();
        debug!(%id, ?request, "issuing list fetch");
        PendingFetch { id, request }
    }

    /// Hand back the backend's answer to a fetch.
    pub fn complete(&mut self, id: RequestId, result: Result<Page, ApiError>) -> FetchOutcome {
        if !self.sequencer.is_latest(id) {
            debug!(%id, "discarding stale list response");
            return FetchOutcome::Stale;
        }
        self.filtered_pending = None;

        match result {
            Ok(page) => {
                self.ratings = RatingBook::from_page(&page);
                self.view = ResultView::Ready(page);
                FetchOutcome::Applied
            }
            Err(_) => {
                self.ratings = RatingBook::default();
                self.view = ResultView::Failed;
                FetchOutcome::Failed
            }
        }
    }

    /// Optimistically apply a rating click. `None` when the listing is not
    /// on the current page.
    pub fn toggle_rating(&mut self, flat_id: &str, rating: RatingType) -> Option<Transition> {
        self.ratings.toggle(flat_id, rating)
    }

    /// The backend did not accept `transition`; apply the failure policy
    /// and return it so the caller knows whether to re-fetch.
    pub fn rating_failed(&mut self, flat_id: &str, transition: &Transition) -> RatingFailurePolicy {
        if self.rating_policy == RatingFailurePolicy::Revert {
            self.ratings.revert(flat_id, transition);
        }
        self.rating_policy
    }
}
