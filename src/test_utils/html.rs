use axum::{body::to_bytes, response::Response};
use scraper::Html;

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("could not read the response body");

    String::from_utf8(bytes.to_vec()).expect("response body is not UTF-8")
}

/// Parse a full page, e.g. one rendered with [crate::html::base].
pub(crate) async fn parse_html_document(response: Response) -> Html {
    Html::parse_document(&body_text(response).await)
}

/// Parse a partial page, such as a re-rendered form or an alert.
pub(crate) async fn parse_html_fragment(response: Response) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    if let Some(error) = html.errors.first() {
        panic!(
            "HTML has {} parse error(s), the first is {error:?}",
            html.errors.len()
        );
    }
}
