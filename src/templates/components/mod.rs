use url::form_urlencoded;

pub mod error;
pub mod filter_panel;
pub mod listing_card;
pub mod pagination;
pub mod rating_buttons;
pub mod results;

pub use error::error_page;
pub use filter_panel::filter_panel;
pub use listing_card::listing_card;
pub use pagination::pagination;
pub use rating_buttons::rating_buttons;
pub use results::results_panel;

/// Every control swaps the whole result area.
pub(crate) const RESULTS_TARGET: &str = "#results";
pub(crate) const LOADING_INDICATOR: &str = "#loading";

/// Local route with an encoded query string, for `hx-get`.
pub(crate) fn route_url(path: &str, pairs: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
