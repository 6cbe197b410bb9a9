use crate::app::App;
use crate::domain::{Direction, FilterEvent, FilterKey, RatingType};
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, plain_response, with_cookie, ResultResp};
use crate::session::{cookie_header, lock_session, session_token_from, SharedSession};
use crate::templates;
use astra::Request;
use maud::html;
use std::collections::HashMap;
use tracing::debug;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);
    let token = session_token_from(&req);

    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => home(app, token.as_deref()),
        ("GET", "/health") => plain_response("ok"),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        ("GET", "/filters/set") => {
            let key: FilterKey = required(&params, "key")?
                .parse()
                .map_err(|e: crate::domain::query_state::UnknownFilterKey| {
                    ServerError::BadRequest(e.to_string())
                })?;
            // A missing value is an empty value, exactly what the control sent.
            let value = params.get("value").cloned().unwrap_or_default();
            with_session(app, token.as_deref(), |session| {
                app.apply_filter(session, FilterEvent::Set(key, value))?;
                results_with_filters(session)
            })
        }
        ("GET", "/filters/district") => {
            let selection = required(&params, "value")?.to_string();
            with_session(app, token.as_deref(), |session| {
                app.apply_filter(session, FilterEvent::SelectDistrict(selection))?;
                results_with_filters(session)
            })
        }
        ("GET", "/filters/reset") => with_session(app, token.as_deref(), |session| {
            app.apply_filter(session, FilterEvent::Reset)?;
            results_with_filters(session)
        }),

        ("GET", "/listings/next") => with_session(app, token.as_deref(), |session| {
            app.navigate(session, Direction::Next)?;
            results(session)
        }),
        ("GET", "/listings/previous") => with_session(app, token.as_deref(), |session| {
            app.navigate(session, Direction::Previous)?;
            results(session)
        }),
        ("GET", "/listings/current") => with_session(app, token.as_deref(), results),

        ("GET", "/ratings/toggle") => {
            let flat_id = required(&params, "flat_id")?.to_string();
            let rating: RatingType = required(&params, "rating_type")?
                .parse()
                .map_err(|e: crate::domain::ratings::UnknownRatingType| {
                    ServerError::BadRequest(e.to_string())
                })?;
            with_session(app, token.as_deref(), |session| {
                app.toggle_rating(session, &flat_id, rating)?;
                results(session)
            })
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Full page. Every load starts over from default filters, reusing the
/// visitor's session when the cookie names a live one.
fn home(app: &App, token: Option<&str>) -> ResultResp {
    let (token, session) = app.open_page(token)?;
    let page = {
        let sync = lock_session(&session)?;
        templates::pages::home_page(&sync)
    };
    with_cookie(html_response(page)?, &cookie_header(&token))
}

/// Run `f` against the caller's session, setting the cookie when the
/// session had to be created.
fn with_session<F>(app: &App, token: Option<&str>, f: F) -> ResultResp
where
    F: FnOnce(&SharedSession) -> ResultResp,
{
    let (session, fresh_token) = app.session_for(token)?;
    let resp = f(&session)?;
    match fresh_token {
        Some(token) => with_cookie(resp, &cookie_header(&token)),
        None => Ok(resp),
    }
}

fn results(session: &SharedSession) -> ResultResp {
    let sync = lock_session(session)?;
    html_response(templates::results_panel(sync.view(), sync.ratings()))
}

/// Result area plus the filter controls, swapped out-of-band.
fn results_with_filters(session: &SharedSession) -> ResultResp {
    let sync = lock_session(session)?;
    html_response(html! {
        (templates::results_panel(sync.view(), sync.ratings()))
        (templates::filter_panel(sync.query(), sync.districts(), true))
    })
}

fn required<'a>(params: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ServerError> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| ServerError::BadRequest(format!("missing parameter: {name}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
