// client.rs
use crate::api::{ApiError, DistrictsResponse, Page, RatingUpdate};
use crate::config::Endpoints;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("flatview/", env!("CARGO_PKG_VERSION"));

pub type QueryParams = Vec<(String, String)>;

/// What a list fetch asks the backend for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// First page of the list endpoint, filtered by the full query state.
    Filtered(QueryParams),
    /// A cursor URL handed out by the backend, fetched verbatim.
    Cursor(String),
}

pub trait ListingsApi: Send + Sync {
    fn fetch_page(&self, request: &PageRequest) -> Result<Page, ApiError>;

    fn update_rating(&self, update: &RatingUpdate) -> Result<(), ApiError>;

    fn fetch_districts(&self) -> Result<Vec<String>, ApiError>;
}

pub struct HttpListingsApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpListingsApi {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, endpoints })
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "backend GET");

        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        decode(&resp.text()?)
    }
}

impl ListingsApi for HttpListingsApi {
    fn fetch_page(&self, request: &PageRequest) -> Result<Page, ApiError> {
        let url = page_url(&self.endpoints.list, request)?;
        self.get_json(url)
    }

    fn update_rating(&self, update: &RatingUpdate) -> Result<(), ApiError> {
        let mut url = parse_url(&self.endpoints.rate)?;
        url.query_pairs_mut().extend_pairs(update.query_pairs());

        debug!(%url, "backend rating GET");

        // Body is ignored, only the status matters.
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(())
    }

    fn fetch_districts(&self) -> Result<Vec<String>, ApiError> {
        let url = parse_url(&self.endpoints.districts)?;
        let resp: DistrictsResponse = self.get_json(url)?;
        Ok(resp.districts)
    }
}

/// Resolve the URL a page request hits. Cursor URLs are used as-is; the
/// query state is only ever attached to the base list endpoint.
pub fn page_url(list_endpoint: &str, request: &PageRequest) -> Result<Url, ApiError> {
    match request {
        PageRequest::Filtered(params) => {
            let mut url = parse_url(list_endpoint)?;
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            Ok(url)
        }
        PageRequest::Cursor(cursor) => parse_url(cursor),
    }
}

/// Bodies are read as text and decoded here, so a malformed body is a
/// `Decode` error rather than a transport one.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

fn parse_url(raw: &str) -> Result<Url, ApiError> {
    Url::parse(raw).map_err(|source| ApiError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}
