// config.rs
use crate::domain::RatingFailurePolicy;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_WORKERS: usize = 8;

const LIST_PATH: &str = "/api/flats/";
const RATE_PATH: &str = "/api/rate/";
const DISTRICTS_PATH: &str = "/api/districts/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    BadAddr { var: &'static str, value: String },

    #[error("{var} is not a valid URL: {value} ({source})")]
    BadUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} must be a positive integer, got {value}")]
    BadNumber { var: &'static str, value: String },

    #[error("FLATVIEW_RATING_FAILURE: {0}")]
    BadPolicy(#[from] crate::domain::ratings::UnknownPolicy),
}

/// Backend endpoints the synchronizer talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub list: String,
    pub rate: String,
    pub districts: String,
}

impl Endpoints {
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            list: format!("{base}{LIST_PATH}"),
            rate: format!("{base}{RATE_PATH}"),
            districts: format!("{base}{DISTRICTS_PATH}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub endpoints: Endpoints,
    pub http_timeout: Duration,
    pub rating_failure: RatingFailurePolicy,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            endpoints: Endpoints::from_base(DEFAULT_API_BASE),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            rating_failure: RatingFailurePolicy::default(),
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from any variable source; unset variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        let bind = lookup("FLATVIEW_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        cfg.bind_addr = bind.parse().map_err(|_| ConfigError::BadAddr {
            var: "FLATVIEW_BIND_ADDR",
            value: bind.clone(),
        })?;

        let base = lookup("FLATVIEW_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        check_url("FLATVIEW_API_BASE", &base)?;
        cfg.endpoints = Endpoints::from_base(&base);

        if let Some(list) = lookup("FLATVIEW_LIST_URL") {
            check_url("FLATVIEW_LIST_URL", &list)?;
            cfg.endpoints.list = list;
        }
        if let Some(rate) = lookup("FLATVIEW_RATE_URL") {
            check_url("FLATVIEW_RATE_URL", &rate)?;
            cfg.endpoints.rate = rate;
        }
        if let Some(districts) = lookup("FLATVIEW_DISTRICTS_URL") {
            check_url("FLATVIEW_DISTRICTS_URL", &districts)?;
            cfg.endpoints.districts = districts;
        }

        if let Some(secs) = lookup("FLATVIEW_HTTP_TIMEOUT_SECS") {
            cfg.http_timeout = Duration::from_secs(positive("FLATVIEW_HTTP_TIMEOUT_SECS", &secs)?);
        }
        if let Some(workers) = lookup("FLATVIEW_MAX_WORKERS") {
            cfg.max_workers = positive("FLATVIEW_MAX_WORKERS", &workers)? as usize;
        }
        if let Some(policy) = lookup("FLATVIEW_RATING_FAILURE") {
            cfg.rating_failure = policy.parse()?;
        }

        Ok(cfg)
    }
}

fn check_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| ConfigError::BadUrl {
            var,
            value: value.to_string(),
            source,
        })
}

fn positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::BadNumber {
            var,
            value: value.to_string(),
        }),
    }
}
