mod store;
mod token;

pub use store::{cookie_header, lock_session, session_token_from, SessionStore, SharedSession};

#[cfg(test)]
pub use store::SESSION_COOKIE;
