mod api_error;
mod client;
mod models;

pub use api_error::ApiError;
pub use client::{HttpListingsApi, ListingsApi, PageRequest, QueryParams};
pub use models::{DistrictsResponse, Listing, Page, RatingUpdate};
