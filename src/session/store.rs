// src/session/store.rs
use crate::domain::{RatingFailurePolicy, Synchronizer};
use crate::errors::ServerError;
use crate::session::token::generate_session_token;
use astra::Request;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;

pub const SESSION_COOKIE: &str = "flatview_session";

/// Sessions idle for longer than this are dropped when new ones start.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Upper bound on live sessions; the least recently seen one goes first.
pub const MAX_SESSIONS: usize = 10_000;

pub type SharedSession = Arc<Mutex<Synchronizer>>;

struct Entry {
    session: SharedSession,
    last_seen: Instant,
}

/// In-memory visitor sessions, keyed by cookie token. Nothing is
/// persisted: a restart or a page load starts from default filters.
pub struct SessionStore {
    entries: Mutex<HashMap<String, Entry>>,
    rating_policy: RatingFailurePolicy,
}

impl SessionStore {
    pub fn new(rating_policy: RatingFailurePolicy) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            rating_policy,
        }
    }

    /// Create a fresh session with default filters.
    pub fn start(&self) -> Result<(String, SharedSession), ServerError> {
        let now = Instant::now();
        let token = generate_session_token();
        let session = Arc::new(Mutex::new(Synchronizer::new(self.rating_policy)));

        let mut entries = self.entries.lock().map_err(|_| ServerError::InternalError)?;

        let before = entries.len();
        entries.retain(|_, e| now.duration_since(e.last_seen) < SESSION_IDLE_TTL);
        if entries.len() < before {
            debug!(dropped = before - entries.len(), "pruned idle sessions");
        }
        while entries.len() >= MAX_SESSIONS {
            let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, e)| e.last_seen)
                .map(|(token, _)| token.clone())
            else {
                break;
            };
            entries.remove(&oldest);
            debug!("session store full, dropped least recently seen session");
        }

        entries.insert(
            token.clone(),
            Entry {
                session: Arc::clone(&session),
                last_seen: now,
            },
        );

        Ok((token, session))
    }

    pub fn find(&self, token: &str) -> Result<Option<SharedSession>, ServerError> {
        let mut entries = self.entries.lock().map_err(|_| ServerError::InternalError)?;

        Ok(entries.get_mut(token).map(|e| {
            e.last_seen = Instant::now();
            Arc::clone(&e.session)
        }))
    }

    /// Reuse the visitor's session for a page load: the same entry is reset
    /// to default filters instead of a new one piling up next to it.
    pub fn restart(&self, token: &str) -> Result<Option<SharedSession>, ServerError> {
        let Some(session) = self.find(token)? else {
            return Ok(None);
        };
        lock_session(&session)?.restart();
        Ok(Some(session))
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

pub fn lock_session(session: &SharedSession) -> Result<MutexGuard<'_, Synchronizer>, ServerError> {
    session.lock().map_err(|_| ServerError::InternalError)
}

/// Read our session token out of the `Cookie` header(s).
pub fn session_token_from(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

pub fn cookie_header(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}
