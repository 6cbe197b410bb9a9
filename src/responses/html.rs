use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    body_response(mime::TEXT_HTML_UTF_8.as_ref(), markup.into_string())
}

pub fn css_response(css: &'static str) -> ResultResp {
    body_response(mime::TEXT_CSS_UTF_8.as_ref(), css.to_string())
}

pub fn plain_response(text: &str) -> ResultResp {
    body_response(mime::TEXT_PLAIN_UTF_8.as_ref(), text.to_string())
}

/// Attach a `Set-Cookie` header to an already built response.
pub fn with_cookie(mut resp: Response, cookie: &str) -> ResultResp {
    let value = cookie.parse().map_err(|_| ServerError::InternalError)?;
    resp.headers_mut().insert("Set-Cookie", value);
    Ok(resp)
}

fn body_response(content_type: &str, body: String) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
