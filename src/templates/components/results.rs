use crate::domain::ratings::RatingBook;
use crate::domain::ResultView;
use crate::templates::components::{listing_card, pagination};

/// While the result area shows the loading placeholder it polls this
/// route until a page (or a failure) is there to show.
pub const CURRENT_RESULTS_ROUTE: &str = "/listings/current";
const LOADING_POLL: &str = "load delay:500ms";
use maud::{html, Markup};

pub const LOADING: &str = "Loading data...";
pub const NO_RESULTS: &str = "No results found";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";

/// The swappable result area: count, placeholder, list and navigation.
/// Exactly one of the placeholder and the list is visible.
pub fn results_panel(view: &ResultView, ratings: &RatingBook) -> Markup {
    let (message, page) = match view {
        ResultView::Loading => (Some(LOADING), None),
        ResultView::Failed => (Some(SOMETHING_WENT_WRONG), None),
        ResultView::Ready(page) if page.is_empty() => (Some(NO_RESULTS), Some(page)),
        ResultView::Ready(page) => (None, Some(page)),
    };
    let list_hidden = message.is_some();
    let loading = matches!(view, ResultView::Loading);

    html! {
        div
            id="results"
            hx-get=[loading.then_some(CURRENT_RESULTS_ROUTE)]
            hx-trigger=[loading.then_some(LOADING_POLL)]
            hx-swap=[loading.then_some("outerHTML")]
        {
            @if let Some(page) = page {
                div id="result-count" { "Found " span { (page.count) } " flats" }
            }
            div id="no_results" hidden[!list_hidden] {
                h5 { (message.unwrap_or_default()) }
            }
            div id="list_data" hidden[list_hidden] {
                div id="flatlist" {
                    @if let Some(page) = page {
                        @for listing in &page.results {
                            (listing_card(listing, ratings.get(&listing.id)))
                        }
                    }
                }
            }
            (pagination(
                page.and_then(|p| p.previous.as_deref()),
                page.and_then(|p| p.next.as_deref()),
            ))
        }
    }
}
