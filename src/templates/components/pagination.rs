use crate::templates::components::{LOADING_INDICATOR, RESULTS_TARGET};
use maud::{html, Markup};

/// Previous/next controls. A control is enabled exactly when the last
/// page carried a cursor in its direction.
pub fn pagination(previous: Option<&str>, next: Option<&str>) -> Markup {
    html! {
        div class="pagination" {
            (nav_button("previous", "/listings/previous", "« Previous", previous.is_some()))
            (nav_button("next", "/listings/next", "Next »", next.is_some()))
        }
    }
}

fn nav_button(id: &str, route: &str, label: &str, enabled: bool) -> Markup {
    html! {
        button
            type="button"
            id=(id)
            class=(if enabled { "page-btn" } else { "page-btn disabled" })
            disabled[!enabled]
            hx-get=(route)
            hx-target=(RESULTS_TARGET)
            hx-swap="outerHTML"
            hx-indicator=(LOADING_INDICATOR)
        {
            (label)
        }
    }
}
