//! Delete expense page and endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    alert::Alert,
    endpoints,
    expense::{ExpenseStore, expenses_page::Notice, form::DeleteExpenseForm},
    html::{
        BUTTON_DELETE_STYLE, FORM_CONTAINER_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, base,
    },
    navigation::NavBar,
};

/// Render the page with the form for deleting an expense by its ID.
pub async fn get_delete_expense_page() -> Response {
    delete_expense_view().into_response()
}

/// Handle the delete expense form submission.
///
/// An ID that is not an integer re-renders the form with an error message.
/// Redirects to the expenses page, with a success notice, once the expense
/// has been deleted.
pub async fn delete_expense_endpoint(
    State(store): State<ExpenseStore>,
    Form(form): Form<DeleteExpenseForm>,
) -> Response {
    let expense_id = match form.validate() {
        Ok(expense_id) => expense_id,
        Err(error) => {
            tracing::debug!("Rejected expense deletion: {error}");
            return delete_expense_form_view(&form, "Please enter a valid Expense ID.")
                .into_response();
        }
    };

    if !store.delete(expense_id) {
        // The store does not say why the delete failed, a missing ID is the
        // most likely cause.
        return (
            StatusCode::NOT_FOUND,
            Alert::Error {
                message: "Failed to delete expense.".to_owned(),
                details: format!(
                    "Check that an expense with the ID {expense_id} exists. \
                    Try refreshing the page to see if it has already been deleted."
                ),
            }
            .into_html(),
        )
            .into_response();
    }

    (HxRedirect(Notice::Deleted.redirect_url()), StatusCode::SEE_OTHER).into_response()
}

fn delete_expense_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::DELETE_EXPENSE_VIEW).into_html();
    let form = delete_expense_form_view(&DeleteExpenseForm::default(), "");

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE) { (form) }
    };

    base("Delete Expense", &[], &content)
}

fn delete_expense_form_view(values: &DeleteExpenseForm, error_message: &str) -> Markup {
    html! {
        form
            hx-post=(endpoints::DELETE_EXPENSE_API)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { "Delete Expense" }

            div
            {
                label
                    for="expense_id"
                    class=(FORM_LABEL_STYLE)
                {
                    "Expense ID"
                }

                input
                    name="expense_id"
                    id="expense_id"
                    type="text"
                    inputmode="numeric"
                    placeholder="Expense ID"
                    value=(values.expense_id)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if !error_message.is_empty() {
                p class=(FORM_ERROR_STYLE) { (error_message) }
            }

            button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
        }
    }
}
