use crate::domain::query_state::{ALL_DISTRICTS, SORT_OPTIONS};
use crate::domain::{FilterKey, QueryState};
use crate::templates::components::{route_url, LOADING_INDICATOR, RESULTS_TARGET};
use maud::{html, Markup};

struct Range {
    key: FilterKey,
    label: &'static str,
    min: u32,
    max: u32,
    step: u32,
}

const RANGES: [Range; 4] = [
    Range { key: FilterKey::MinSize, label: "Min size (m2)", min: 20, max: 150, step: 1 },
    Range { key: FilterKey::MaxSize, label: "Max size (m2)", min: 20, max: 150, step: 1 },
    Range { key: FilterKey::MinPrice, label: "Min price (zł)", min: 200_000, max: 2_000_000, step: 10_000 },
    Range { key: FilterKey::MaxPrice, label: "Max price (zł)", min: 200_000, max: 2_000_000, step: 10_000 },
];

/// Toggles shown as buttons; the first three are the ones reset turns on.
const TOGGLES: [(FilterKey, &str); 4] = [
    (FilterKey::ShowHearted, "♥ Hearted"),
    (FilterKey::ShowStarred, "★ Starred"),
    (FilterKey::ShowUnseen, "New"),
    (FilterKey::ShowRejected, "✕ Rejected"),
];

/// Filter controls, drawn from the query state. Rendered out-of-band
/// (`oob`) next to every result swap so the controls never drift from
/// the state the server holds.
pub fn filter_panel(query: &QueryState, districts: &[String], oob: bool) -> Markup {
    let district = query.get(FilterKey::District);
    let sort_by = query.get(FilterKey::SortBy);

    html! {
        div id="filters" class="filters" hx-swap-oob=[oob.then_some("true")] {
            label for="districts" { "District" }
            select
                id="districts"
                name="value"
                hx-get="/filters/district"
                hx-trigger="change"
                hx-target=(RESULTS_TARGET)
                hx-swap="outerHTML"
                hx-indicator=(LOADING_INDICATOR)
            {
                option value=(ALL_DISTRICTS) selected[district.is_empty()] { "All Districts" }
                @for name in districts {
                    option value=(name) selected[district == name.as_str()] { (name) }
                }
            }

            label for="sort_by" { "Sort by" }
            select
                id="sort_by"
                name="value"
                hx-get=(route_url("/filters/set", &[("key", FilterKey::SortBy.as_str())]))
                hx-trigger="change"
                hx-target=(RESULTS_TARGET)
                hx-swap="outerHTML"
                hx-indicator=(LOADING_INDICATOR)
            {
                @for (value, label) in SORT_OPTIONS {
                    option value=(value) selected[sort_by == *value] { (label) }
                }
            }

            @for range in &RANGES {
                (range_input(range, query.get(range.key)))
            }

            div class="toggles" {
                @for (key, label) in TOGGLES {
                    (toggle_button(key, label, query.is_on(key)))
                }
            }

            button
                type="button"
                id="display_all"
                hx-get="/filters/reset"
                hx-target=(RESULTS_TARGET)
                hx-swap="outerHTML"
                hx-indicator=(LOADING_INDICATOR)
            {
                "Reset filters"
            }
        }
    }
}

fn range_input(range: &Range, current: &str) -> Markup {
    let id = range.key.as_str();
    html! {
        div class="range" {
            label for=(id) { (range.label) ": " output { (current) } }
            input
                type="range"
                id=(id)
                name="value"
                min=(range.min)
                max=(range.max)
                step=(range.step)
                value=(current)
                hx-get=(route_url("/filters/set", &[("key", id)]))
                hx-trigger="change"
                hx-target=(RESULTS_TARGET)
                hx-swap="outerHTML"
                hx-indicator=(LOADING_INDICATOR);
        }
    }
}

fn toggle_button(key: FilterKey, label: &str, on: bool) -> Markup {
    let flipped = if on { "false" } else { "true" };
    html! {
        button
            type="button"
            id=(key.as_str())
            class=(if on { "toggle on" } else { "toggle" })
            aria-pressed=(if on { "true" } else { "false" })
            hx-get=(route_url("/filters/set", &[("key", key.as_str()), ("value", flipped)]))
            hx-target=(RESULTS_TARGET)
            hx-swap="outerHTML"
            hx-indicator=(LOADING_INDICATOR)
        {
            (label)
        }
    }
}
