use crate::api::Listing;
use crate::domain::RatingState;
use crate::templates::components::rating_buttons;
use crate::templates::text::{split_at_chars, truncate_chars, DESCRIPTION_CHARS, HEADING_CHARS};
use maud::{html, Markup};

/// One flat. Images arrive base64 encoded from the backend.
pub fn listing_card(listing: &Listing, rating: RatingState) -> Markup {
    let heading = listing.heading.as_deref().unwrap_or_default();
    let description = listing.description.as_deref().unwrap_or_default();
    let (visible, rest) = split_at_chars(description, DESCRIPTION_CHARS);
    let badge_style = listing
        .location_color
        .as_ref()
        .map(|c| format!("background-color: {c}"));

    html! {
        div class="flat-post" id=(format!("flat-{}", listing.id)) {
            div class="thumbnail" {
                @if let Some(thumb) = &listing.thumbnail_image {
                    img src=(png_data_uri(thumb)) alt=(heading);
                } @else {
                    div class="thumbnail-missing" {}
                }
            }
            div class="text" {
                div class="title" {
                    a class="post-link" href=(listing.url.as_deref().unwrap_or("#")) {
                        (truncate_chars(heading, HEADING_CHARS))
                    }
                }
                div class="description" {
                    span class="description-visible" { (visible) }
                    @if let Some(rest) = rest {
                        details class="description-more" {
                            summary { "more" }
                            span class="description-rest" { (rest) }
                        }
                    }
                }
                @if !listing.location_names.is_empty() {
                    div class="locations" {
                        @for name in &listing.location_names {
                            span class="location-badge" style=[badge_style.as_deref()] { (name) }
                        }
                    }
                }
                @if !listing.keywords.is_empty() {
                    ul class="keywords" {
                        @for keyword in &listing.keywords {
                            li class="keyword" { (keyword) }
                        }
                    }
                }
            }
            div class="info" {
                @if let Some(thousands) = listing.price_thousands() {
                    span class="price-text" { (thousands) " tys. zł" }
                }
                @if let Some(size) = listing.size_m2 {
                    div class="size" { (size) " m2" }
                }
                @if let Some(district) = &listing.district {
                    div class="district" { (district) }
                }
                @if let Some(date) = listing.date_added_display() {
                    div class="date-added" { (date) }
                }
                (rating_buttons(&listing.id, rating))
            }
            @if !listing.photos.is_empty() {
                div class="photo-strip" {
                    @for photo in &listing.photos {
                        img src=(png_data_uri(photo)) loading="lazy" alt="";
                    }
                }
            }
        }
    }
}

fn png_data_uri(base64_png: &str) -> String {
    format!("data:image/png;base64,{base64_png}")
}
