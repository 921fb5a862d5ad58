use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|error| panic!("invalid selector {css:?}: {error}"))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Find the input named `name` and check it has type `type_` and is required.
#[track_caller]
fn must_get_required_input<'a>(form: &ElementRef<'a>, name: &str, type_: &str) -> ElementRef<'a> {
    let input = form
        .select(&selector(&format!("input[name=\"{name}\"]")))
        .next()
        .unwrap_or_else(|| panic!("form has no input named {name:?}"));

    let got_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(got_type, type_, "input {name:?} has the wrong type");
    assert!(
        input.value().attr("required").is_some(),
        "input {name:?} should be required"
    );

    input
}

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&selector("form"))
        .next()
        .expect("page has no form")
}

/// Check that `form` sends its request to `endpoint` with the htmx verb `attribute`.
#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    assert_eq!(
        form.value().attr(attribute),
        Some(endpoint),
        "form should have {attribute}=\"{endpoint}\""
    );
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    must_get_required_input(form, name, type_);
}

/// Like [assert_form_input], and also check that the input was filled in with `value`.
#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let input = must_get_required_input(form, name, type_);

    assert_eq!(
        input.value().attr("value").unwrap_or_default(),
        value,
        "input {name:?} has the wrong value"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let button = form
        .select(&selector("button[type=submit]"))
        .next()
        .expect("form has no submit button");

    assert_eq!(text_of(button), text);
}

/// Check the validation message shown inside `form`.
#[track_caller]
pub(crate) fn assert_form_error_message(form: &ElementRef<'_>, message: &str) {
    let messages = form.select(&selector("p")).map(text_of).collect::<Vec<_>>();

    assert_eq!(messages, [message], "form shows the wrong validation message");
}
