// src/session/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

pub const SESSION_TOKEN_BYTES: usize = 24;

/// Session token from the OS RNG. This is what the web app should call.
pub fn generate_session_token() -> String {
    generate_token(&mut OsRng, SESSION_TOKEN_BYTES)
}

/// URL-safe base64 (no padding) of `nbytes` random bytes, so the token
/// can sit in a cookie without quoting.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}
