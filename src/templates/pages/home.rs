// templates/pages/home.rs

use crate::domain::Synchronizer;
use crate::templates::components::results::LOADING;
use crate::templates::{desktop_layout, filter_panel, results_panel};
use maud::{html, Markup};

pub fn home_page(sync: &Synchronizer) -> Markup {
    desktop_layout(
        "Flats",
        html! {
            main class="container" {
                h1 { "Flats" }

                (filter_panel(sync.query(), sync.districts(), false))

                div id="loading" class="htmx-indicator" { (LOADING) }

                (results_panel(sync.view(), sync.ratings()))
            }
        },
    )
}
