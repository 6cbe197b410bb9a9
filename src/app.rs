// app.rs
use crate::api::{ListingsApi, RatingUpdate};
use crate::domain::{
    Direction, FetchOutcome, FilterEvent, PendingFetch, RatingFailurePolicy, RatingType,
};
use crate::errors::ServerError;
use crate::session::{lock_session, SessionStore, SharedSession};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything a request handler needs: the backend and the sessions.
///
/// Handlers lock a session only for in-memory steps; every backend call
/// runs with the lock released, and list responses go back through the
/// session's sequencer so a slow answer cannot overwrite a newer one.
pub struct App {
    api: Arc<dyn ListingsApi>,
    sessions: SessionStore,
}

impl App {
    pub fn new(api: Arc<dyn ListingsApi>, rating_policy: RatingFailurePolicy) -> Self {
        Self {
            api,
            sessions: SessionStore::new(rating_policy),
        }
    }

    /// Page load. A visitor who already has a session gets it back reset
    /// to defaults; anyone else gets a new one.
    pub fn open_page(&self, token: Option<&str>) -> Result<(String, SharedSession), ServerError> {
        if let Some(token) = token {
            if let Some(session) = self.sessions.restart(token)? {
                debug!("session restarted");
                self.load_first_page(&session)?;
                return Ok((token.to_string(), session));
            }
        }
        self.start_session()
    }

    /// New session with default filters, district options and the first page.
    pub fn start_session(&self) -> Result<(String, SharedSession), ServerError> {
        let (token, session) = self.sessions.start()?;
        info!(sessions = self.session_count(), "session started");

        self.load_first_page(&session)?;
        Ok((token, session))
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn load_first_page(&self, session: &SharedSession) -> Result<(), ServerError> {
        let districts = self.load_districts();
        let pending = {
            let mut sync = lock_session(session)?;
            sync.set_districts(districts);
            sync.refresh()
        };
        self.run_fetch(session, pending)?;
        Ok(())
    }

    /// The caller's session, or a fresh one when the cookie is missing or
    /// unknown. The token is returned only for fresh sessions, so the
    /// caller knows to set the cookie.
    pub fn session_for(
        &self,
        token: Option<&str>,
    ) -> Result<(SharedSession, Option<String>), ServerError> {
        if let Some(token) = token {
            if let Some(session) = self.sessions.find(token)? {
                return Ok((session, None));
            }
        }
        let (token, session) = self.start_session()?;
        Ok((session, Some(token)))
    }

    /// Districts for the selector. Failure leaves only "All Districts".
    pub fn load_districts(&self) -> Vec<String> {
        match self.api.fetch_districts() {
            Ok(districts) => districts,
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "could not load districts");
                Vec::new()
            }
        }
    }

    pub fn apply_filter(
        &self,
        session: &SharedSession,
        event: FilterEvent,
    ) -> Result<FetchOutcome, ServerError> {
        let pending = lock_session(session)?.apply(event);
        self.run_fetch(session, pending)
    }

    /// Follow a cursor. Without one there is nothing to fetch and the
    /// current page stays.
    pub fn navigate(
        &self,
        session: &SharedSession,
        direction: Direction,
    ) -> Result<Option<FetchOutcome>, ServerError> {
        let Some(pending) = lock_session(session)?.navigate(direction) else {
            debug!(?direction, "no cursor, navigation ignored");
            return Ok(None);
        };
        self.run_fetch(session, pending).map(Some)
    }

    /// Click on a rating button: optimistic local change, one update call,
    /// then a re-fetch of the filtered list to pick up the backend's view.
    pub fn toggle_rating(
        &self,
        session: &SharedSession,
        flat_id: &str,
        rating: RatingType,
    ) -> Result<(), ServerError> {
        let transition = lock_session(session)?
            .toggle_rating(flat_id, rating)
            .ok_or_else(|| {
                ServerError::BadRequest(format!("flat {flat_id} is not on the current page"))
            })?;

        let update = RatingUpdate {
            flat_id: flat_id.to_string(),
            rating_type: transition.rating,
            is_ticked: transition.is_ticked,
        };

        if let Err(e) = self.api.update_rating(&update) {
            let policy = lock_session(session)?.rating_failed(flat_id, &transition);
            warn!(
                flat_id,
                rating = %update.rating_type,
                is_ticked = update.is_ticked,
                ?policy,
                error = %e,
                "rating update failed"
            );
            if policy == RatingFailurePolicy::Revert {
                return Ok(());
            }
        }

        let pending = lock_session(session)?.refresh();
        self.run_fetch(session, pending)?;
        Ok(())
    }

    fn run_fetch(
        &self,
        session: &SharedSession,
        pending: PendingFetch,
    ) -> Result<FetchOutcome, ServerError> {
        let result = self.api.fetch_page(&pending.request);
        if let Err(e) = &result {
            warn!(id = %pending.id, kind = e.kind(), error = %e, "list fetch failed");
        }

        let outcome = lock_session(session)?.complete(pending.id, result);
        Ok(outcome)
    }
}
