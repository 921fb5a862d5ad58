//! Add expense page and endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that treats missing fields as their
// defaults instead of rejecting the request like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    Error,
    alert::Alert,
    endpoints,
    expense::{ExpenseStore, expenses_page::Notice, form::ExpenseForm},
    html::{
        BUTTON_PRIMARY_STYLE, DOLLAR_INPUT_STYLE, FORM_CONTAINER_STYLE, FORM_ERROR_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
    },
    navigation::NavBar,
};

/// Render the page with the form for adding an expense.
pub async fn get_new_expense_page() -> Response {
    new_expense_view().into_response()
}

/// Handle the add expense form submission.
///
/// Invalid input re-renders the form with an error message and nothing is
/// stored. Redirects to the expenses page, with a success notice, once the
/// expense has been stored.
pub async fn create_expense_endpoint(
    State(store): State<ExpenseStore>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let expense = match form.validate() {
        Ok(expense) => expense,
        Err(error) => {
            tracing::debug!("Rejected new expense: {error}");
            return new_expense_form_view(&form, validation_message(&error)).into_response();
        }
    };

    if !store.add(
        expense.amount,
        &expense.description,
        OffsetDateTime::now_utc(),
    ) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Alert::Error {
                message: "Failed to add expense.".to_owned(),
                details: "Try again later or check the logs on the server.".to_owned(),
            }
            .into_html(),
        )
            .into_response();
    }

    (HxRedirect(Notice::Added.redirect_url()), StatusCode::SEE_OTHER).into_response()
}

fn validation_message(error: &Error) -> &'static str {
    match error {
        Error::EmptyDescription => "Please enter a description.",
        _ => "Please enter a valid amount.",
    }
}

fn new_expense_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_EXPENSE_VIEW).into_html();
    let form = new_expense_form_view(&ExpenseForm::default(), "");

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE) { (form) }
    };

    base("Add Expense", &[DOLLAR_INPUT_STYLE], &content)
}

fn new_expense_form_view(values: &ExpenseForm, error_message: &str) -> Markup {
    html! {
        form
            hx-post=(endpoints::EXPENSES_API)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { "Add Expense" }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                div class="dollar-input"
                {
                    input
                        name="amount"
                        id="amount"
                        type="text"
                        inputmode="decimal"
                        placeholder="0.00"
                        value=(values.amount)
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    value=(values.description)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if !error_message.is_empty() {
                p class=(FORM_ERROR_STYLE) { (error_message) }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
        }
    }
}
