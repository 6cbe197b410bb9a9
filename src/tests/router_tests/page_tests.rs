use crate::domain::{FilterKey, QueryState, RatingFailurePolicy};
use crate::tests::utils::{
    attr, exists, filtered_params, get, listing, open_page, select_all, test_app, FakeBackend,
};

#[test]
fn home_page_loads_first_page_with_default_filters() {
    let backend = FakeBackend::new(vec![listing("a", "mokotow", 500_000)]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let resp = get(&app, "/", None);
    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("<!DOCTYPE html>"));
    assert!(resp.session_cookie.is_some());

    let requests = backend.page_requests();
    assert_eq!(requests.len(), 1, "exactly one list fetch on page load");
    assert_eq!(filtered_params(&requests[0]), &QueryState::defaults().to_params());

    let html = resp.html();
    assert_eq!(select_all(&html, "#flatlist .flat-post .title"), vec!["Mieszkanie a"]);
    assert_eq!(select_all(&html, "#result-count span"), vec!["1"]);
}

#[test]
fn district_selector_starts_with_all_districts() {
    let backend = FakeBackend::new(vec![]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let html = get(&app, "/", None).html();

    assert_eq!(
        select_all(&html, "#districts option"),
        vec!["All Districts", "mokotow", "wola", "zoliborz"]
    );
    assert_eq!(attr(&html, "#districts option", "value").as_deref(), Some("all"));
    assert!(exists(&html, "#districts option[value=\"all\"][selected]"));
    assert_eq!(backend.district_calls(), 1);
}

#[test]
fn failed_district_load_leaves_only_all_districts() {
    let backend = FakeBackend::new(vec![listing("a", "wola", 500_000)]);
    backend.fail_districts(true);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let resp = get(&app, "/", None);
    assert_eq!(resp.status, 200);

    let html = resp.html();
    assert_eq!(select_all(&html, "#districts option"), vec!["All Districts"]);
    // The list itself is unaffected.
    assert_eq!(select_all(&html, "#flatlist .flat-post").len(), 1);
}

#[test]
fn default_toggles_render_on() {
    let backend = FakeBackend::new(vec![]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let html = get(&app, "/", None).html();

    for key in [FilterKey::ShowHearted, FilterKey::ShowStarred, FilterKey::ShowUnseen] {
        let css = format!("#{}", key.as_str());
        assert_eq!(attr(&html, &css, "aria-pressed").as_deref(), Some("true"), "{key}");
    }
    assert_eq!(
        attr(&html, "#show_rejected", "aria-pressed").as_deref(),
        Some("false")
    );
}

#[test]
fn empty_result_shows_placeholder_and_hides_list() {
    let backend = FakeBackend::new(vec![]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let html = get(&app, "/", None).html();

    assert_eq!(select_all(&html, "#no_results h5"), vec!["No results found"]);
    assert!(exists(&html, "#list_data[hidden]"));
    assert!(!exists(&html, "#no_results[hidden]"));
}

#[test]
fn non_empty_result_shows_list_and_hides_placeholder() {
    let backend = FakeBackend::new(vec![listing("a", "wola", 500_000)]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let html = get(&app, "/", None).html();

    assert!(exists(&html, "#no_results[hidden]"));
    assert!(!exists(&html, "#list_data[hidden]"));
}

#[test]
fn backend_failure_shows_generic_message() {
    let backend = FakeBackend::new(vec![listing("a", "wola", 500_000)]);
    backend.fail_pages(true);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let resp = get(&app, "/", None);
    assert_eq!(resp.status, 200);

    let html = resp.html();
    assert_eq!(select_all(&html, "#no_results h5"), vec!["Something went wrong"]);
    assert!(exists(&html, "#list_data[hidden]"));
    assert!(exists(&html, "#next[disabled]"));
    assert!(exists(&html, "#previous[disabled]"));
    // No retry.
    assert_eq!(backend.page_requests().len(), 1);
}

#[test]
fn every_page_load_starts_over_with_defaults() {
    let backend = FakeBackend::new(vec![]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let first = open_page(&app);
    get(&app, "/filters/set?key=min_size&value=60", Some(&first));

    let second = open_page(&app);
    assert_ne!(first, second);

    let last = backend.last_page_request();
    assert_eq!(filtered_params(&last), &QueryState::defaults().to_params());
}

#[test]
fn health_and_stylesheet_are_served() {
    let backend = FakeBackend::new(vec![]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let health = get(&app, "/health", None);
    assert_eq!((health.status, health.body.as_str()), (200, "ok"));

    let css = get(&app, "/static/main.css", None);
    assert_eq!(css.status, 200);
    assert!(css.body.contains(".flat-post"));

    assert!(backend.page_requests().is_empty());
}

#[test]
fn unknown_route_is_not_found() {
    let backend = FakeBackend::new(vec![]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    assert_eq!(get(&app, "/admin", None).status, 404);
}

#[test]
fn reloading_with_a_cookie_reuses_the_session() {
    let backend = FakeBackend::new(vec![listing("a", "wola", 500_000)]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let token = open_page(&app);

    for _ in 0..5 {
        get(&app, "/filters/district?value=wola", Some(&token));
        let resp = get(&app, "/", Some(&token));
        assert_eq!(resp.status, 200);
        assert_eq!(resp.session_cookie.as_deref(), Some(token.as_str()));
        assert!(exists(
            &resp.html(),
            "#districts option[value=\"all\"][selected]"
        ));
    }

    assert_eq!(app.session_count(), 1);
    assert_eq!(
        filtered_params(&backend.last_page_request()),
        &QueryState::defaults().to_params()
    );
}

#[test]
fn reload_with_an_unknown_cookie_starts_a_new_session() {
    let backend = FakeBackend::new(vec![]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let resp = get(&app, "/", Some("expired-token"));

    let token = resp.session_cookie.expect("a new session cookie");
    assert_ne!(token, "expired-token");
    assert_eq!(app.session_count(), 1);
}

#[test]
fn current_results_render_without_a_fetch() {
    let backend = FakeBackend::new(vec![listing("a", "wola", 500_000)]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    let html = get(&app, "/listings/current", Some(&session)).html();

    assert_eq!(select_all(&html, "#flatlist .title"), vec!["Mieszkanie a"]);
    assert!(attr(&html, "#results", "hx-get").is_none());
    assert_eq!(backend.page_requests().len(), 1);
}
