use crate::api::{Listing, RatingUpdate};
use crate::domain::{RatingFailurePolicy, RatingType};
use crate::tests::utils::{attr, exists, get, listing, open_page, select_all, test_app, FakeBackend};

fn hearted(id: &str) -> Listing {
    let mut flat = listing(id, "wola", 500_000);
    flat.hearted = true;
    flat
}

fn pressed(html: &scraper::Html, flat_id: &str, rating: RatingType) -> Option<String> {
    attr(
        html,
        &format!("#flat-{flat_id} .rate-{rating}"),
        "aria-pressed",
    )
}

#[test]
fn star_over_heart_sends_one_update() {
    let backend = FakeBackend::new(vec![hearted("a")]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);
    let before = backend.page_requests().len();

    let html = get(
        &app,
        "/ratings/toggle?flat_id=a&rating_type=star",
        Some(&session),
    )
    .html();

    assert_eq!(
        backend.rating_updates(),
        vec![RatingUpdate {
            flat_id: "a".into(),
            rating_type: RatingType::Star,
            is_ticked: true,
        }]
    );
    // One re-fetch of the filtered list.
    assert_eq!(backend.page_requests().len(), before + 1);
    assert_eq!(pressed(&html, "a", RatingType::Star).as_deref(), Some("true"));
    assert_eq!(pressed(&html, "a", RatingType::Heart).as_deref(), Some("false"));
}

#[test]
fn clicking_a_ticked_rating_unticks_it() {
    let backend = FakeBackend::new(vec![hearted("a")]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    let html = get(
        &app,
        "/ratings/toggle?flat_id=a&rating_type=heart",
        Some(&session),
    )
    .html();

    let updates = backend.rating_updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].rating_type, RatingType::Heart);
    assert!(!updates[0].is_ticked);
    for rating in RatingType::ALL {
        assert_eq!(pressed(&html, "a", rating).as_deref(), Some("false"), "{rating}");
    }
}

#[test]
fn rejected_flat_drops_out_of_the_refetched_list() {
    let backend = FakeBackend::new(vec![
        listing("a", "wola", 500_000),
        listing("b", "wola", 510_000),
    ]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    let html = get(
        &app,
        "/ratings/toggle?flat_id=a&rating_type=reject",
        Some(&session),
    )
    .html();

    assert!(!exists(&html, "#flat-a"));
    assert_eq!(select_all(&html, "#flatlist .title"), vec!["Mieszkanie b"]);
}

#[test]
fn revert_policy_restores_state_and_skips_refetch() {
    let backend = FakeBackend::new(vec![hearted("a")]);
    backend.fail_ratings(true);
    let app = test_app(&backend, RatingFailurePolicy::Revert);
    let session = open_page(&app);
    let before = backend.page_requests().len();

    let resp = get(
        &app,
        "/ratings/toggle?flat_id=a&rating_type=star",
        Some(&session),
    );

    assert_eq!(resp.status, 200);
    assert_eq!(backend.rating_updates().len(), 1);
    assert_eq!(backend.page_requests().len(), before);
    let html = resp.html();
    assert_eq!(pressed(&html, "a", RatingType::Heart).as_deref(), Some("true"));
    assert_eq!(pressed(&html, "a", RatingType::Star).as_deref(), Some("false"));
}

#[test]
fn keep_policy_refetches_after_a_failed_update() {
    let backend = FakeBackend::new(vec![hearted("a")]);
    backend.fail_ratings(true);
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);
    let before = backend.page_requests().len();

    let html = get(
        &app,
        "/ratings/toggle?flat_id=a&rating_type=star",
        Some(&session),
    )
    .html();

    assert_eq!(backend.page_requests().len(), before + 1);
    // The backend never took the star, so the refreshed page still shows the heart.
    assert_eq!(pressed(&html, "a", RatingType::Heart).as_deref(), Some("true"));
}

#[test]
fn unknown_flat_is_a_bad_request() {
    let backend = FakeBackend::new(vec![listing("a", "wola", 500_000)]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    let resp = get(
        &app,
        "/ratings/toggle?flat_id=zzz&rating_type=heart",
        Some(&session),
    );

    assert_eq!(resp.status, 400);
    assert!(backend.rating_updates().is_empty());
}

#[test]
fn unknown_rating_type_is_a_bad_request() {
    let backend = FakeBackend::new(vec![listing("a", "wola", 500_000)]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);
    let session = open_page(&app);

    let resp = get(
        &app,
        "/ratings/toggle?flat_id=a&rating_type=love",
        Some(&session),
    );

    assert_eq!(resp.status, 400);
    assert!(backend.rating_updates().is_empty());
}

#[test]
fn rating_buttons_point_at_the_toggle_route() {
    let backend = FakeBackend::new(vec![listing("a", "wola", 500_000)]);
    let app = test_app(&backend, RatingFailurePolicy::Keep);

    let html = get(&app, "/", None).html();

    assert_eq!(
        attr(&html, "#flat-a .rate-star", "hx-get").as_deref(),
        Some("/ratings/toggle?flat_id=a&rating_type=star")
    );
    assert_eq!(
        attr(&html, "#flat-a .rate-star", "hx-target").as_deref(),
        Some("#results")
    );
}
