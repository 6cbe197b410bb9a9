use crate::domain::{RatingState, RatingType};
use crate::templates::components::{route_url, RESULTS_TARGET};
use maud::{html, Markup};

/// Heart / star / reject cluster for one listing. `data-ticked` mirrors
/// the typed rating state; nothing reads it back.
pub fn rating_buttons(flat_id: &str, state: RatingState) -> Markup {
    html! {
        div class="rating" {
            @for rating in RatingType::ALL {
                @let ticked = state.is_ticked(rating);
                button
                    type="button"
                    class=(format!("rate-btn rate-{rating}"))
                    data-rating=(rating.as_str())
                    data-ticked=(if ticked { "true" } else { "false" })
                    aria-pressed=(if ticked { "true" } else { "false" })
                    title=(title(rating))
                    hx-get=(route_url(
                        "/ratings/toggle",
                        &[("flat_id", flat_id), ("rating_type", rating.as_str())],
                    ))
                    hx-target=(RESULTS_TARGET)
                    hx-swap="outerHTML"
                {
                    (icon(rating, ticked))
                }
            }
        }
    }
}

fn title(rating: RatingType) -> &'static str {
    match rating {
        RatingType::Heart => "Favourite",
        RatingType::Star => "Shortlist",
        RatingType::Reject => "Reject",
    }
}

fn icon(rating: RatingType, ticked: bool) -> &'static str {
    match (rating, ticked) {
        (RatingType::Heart, true) => "♥",
        (RatingType::Heart, false) => "♡",
        (RatingType::Star, true) => "★",
        (RatingType::Star, false) => "☆",
        (RatingType::Reject, _) => "✕",
    }
}
