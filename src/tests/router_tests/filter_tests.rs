use crate::domain::{FilterKey, QueryState, RatingFailurePolicy};
use crate::tests::utils::{
    attr, exists, filtered_params, get, listing, open_page, select_all, test_app, FakeBackend,
};

fn flats() -> Vec<crate::api::Listing> {
    vec![
        listing("m1", "mokotow", 700_000),
        listing("w1", "wola", 520_000),
        listing("w2", "wola", 610_000),
    ]
}

#[test]
fn filter_change_sends_the_full_snapshot() {
    let backend = FakeBackend::new(flats());
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    get(&app, "/filters/set?key=min_size&value=60", Some(&session));
    let resp = get(&app, "/filters/set?key=sort_by&value=price", Some(&session));
    assert_eq!(resp.status, 200);

    let expected = QueryState::defaults()
        .with(FilterKey::MinSize, "60")
        .with(FilterKey::SortBy, "price")
        .to_params();
    assert_eq!(filtered_params(&backend.last_page_request()), &expected);

    // Page load + one request per change, no debouncing.
    assert_eq!(backend.page_requests().len(), 3);
}

#[test]
fn values_are_passed_through_verbatim() {
    let backend = FakeBackend::new(flats());
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    get(&app, "/filters/set?key=sort_by&value=Data%20dodania", Some(&session));
    get(&app, "/filters/set?key=max_price&value=abc", Some(&session));

    let params = filtered_params(&backend.last_page_request()).clone();
    assert!(params.contains(&("sort_by".to_string(), "Data dodania".to_string())));
    assert!(params.contains(&("max_price".to_string(), "abc".to_string())));
}

#[test]
fn district_selection_filters_and_all_clears() {
    let backend = FakeBackend::new(flats());
    backend.set_page_size(10);
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    let html = get(&app, "/filters/district?value=wola", Some(&session)).html();
    assert_eq!(
        select_all(&html, "#flatlist .district"),
        vec!["wola", "wola"]
    );
    assert!(filtered_params(&backend.last_page_request())
        .contains(&("district".to_string(), "wola".to_string())));
    assert!(exists(&html, "#districts option[value=\"wola\"][selected]"));

    let html = get(&app, "/filters/district?value=all", Some(&session)).html();
    assert_eq!(select_all(&html, "#flatlist .flat-post").len(), 3);
    assert!(filtered_params(&backend.last_page_request())
        .contains(&("district".to_string(), String::new())));
}

#[test]
fn fragment_carries_out_of_band_filter_panel() {
    let backend = FakeBackend::new(flats());
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    let resp = get(
        &app,
        "/filters/set?key=show_hearted&value=false",
        Some(&session),
    );
    assert!(!resp.body.contains("<!DOCTYPE html>"));

    let html = resp.html();
    assert!(exists(&html, "#results"));
    assert_eq!(attr(&html, "#filters", "hx-swap-oob").as_deref(), Some("true"));
    assert_eq!(
        attr(&html, "#show_hearted", "aria-pressed").as_deref(),
        Some("false")
    );
}

#[test]
fn reset_issues_default_params_exactly_once() {
    let backend = FakeBackend::new(flats());
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    get(&app, "/filters/set?key=show_starred&value=false", Some(&session));
    get(&app, "/filters/district?value=wola", Some(&session));
    let before = backend.page_requests().len();

    let html = get(&app, "/filters/reset", Some(&session)).html();

    let requests = backend.page_requests();
    assert_eq!(requests.len(), before + 1);
    assert_eq!(
        filtered_params(&requests[before]),
        &QueryState::defaults().to_params()
    );

    for id in ["#show_hearted", "#show_starred", "#show_unseen"] {
        assert_eq!(attr(&html, id, "aria-pressed").as_deref(), Some("true"), "{id}");
    }
    assert!(exists(&html, "#districts option[value=\"all\"][selected]"));
}

#[test]
fn unknown_filter_key_is_rejected_without_a_fetch() {
    let backend = FakeBackend::new(flats());
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    let resp = get(&app, "/filters/set?key=page&value=3", Some(&session));
    assert_eq!(resp.status, 400);
    assert!(resp.body.contains("unknown filter key"));
    assert_eq!(backend.page_requests().len(), 1);
}

#[test]
fn missing_district_value_is_a_bad_request() {
    let backend = FakeBackend::new(flats());
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    assert_eq!(get(&app, "/filters/district", Some(&session)).status, 400);
}

#[test]
fn filter_without_a_session_starts_one() {
    let backend = FakeBackend::new(flats());
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let resp = get(&app, "/filters/set?key=min_price&value=600000", Some("stale-token"));
    assert_eq!(resp.status, 200);
    assert!(resp.session_cookie.is_some());

    let expected = QueryState::defaults()
        .with(FilterKey::MinPrice, "600000")
        .to_params();
    assert_eq!(filtered_params(&backend.last_page_request()), &expected);
}

#[test]
fn sessions_do_not_share_filters() {
    let backend = FakeBackend::new(flats());
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let alice = open_page(&app);
    let bob = open_page(&app);

    get(&app, "/filters/district?value=wola", Some(&alice));
    get(&app, "/filters/set?key=max_size&value=70", Some(&bob));

    let params = filtered_params(&backend.last_page_request()).clone();
    assert!(params.contains(&("district".to_string(), String::new())));
    assert!(params.contains(&("max_size".to_string(), "70".to_string())));
}
