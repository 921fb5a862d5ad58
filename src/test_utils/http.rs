use axum::{http::StatusCode, response::Response};

#[track_caller]
fn header<'a>(response: &'a Response, name: &str) -> &'a str {
    response
        .headers()
        .get(name)
        .unwrap_or_else(|| panic!("response has no {name} header"))
        .to_str()
        .unwrap_or_else(|error| panic!("{name} header is not ASCII: {error}"))
}

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response, content_type: &str) {
    assert_eq!(header(response, "content-type"), content_type);
}

/// Check that htmx will send the browser to `location`.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response, location: &str) {
    assert_eq!(header(response, "hx-redirect"), location);
}
