use thiserror::Error;

/// Failures talking to the listing backend. The kinds are only used for
/// logging; every list failure is shown to the visitor the same way.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode(_) => "decode",
            ApiError::InvalidUrl { .. } => "invalid_url",
        }
    }
}
