//! Full-page responses for missing pages and server errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{LINK_STYLE, base},
};

/// A page explaining why a request could not be served.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPage<'a> {
    status: StatusCode,
    description: &'a str,
    fix: &'a str,
}

impl<'a> ErrorPage<'a> {
    /// The 404 page for paths that do not match any route.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "There is no page here.",
            fix: "Check the address, or go back to your expenses.",
        }
    }

    /// A 500 page with a `description` of what went wrong and a `fix` for the user to try.
    pub fn internal_server_error(description: &'a str, fix: &'a str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description,
            fix,
        }
    }

    fn into_html(self) -> Markup {
        let code = self.status.as_str();
        let title = self.status.canonical_reason().unwrap_or("Error");

        let content = html! {
            main class="mx-auto mt-16 max-w-lg px-6 text-center text-slate-900 dark:text-slate-100"
            {
                p class="text-7xl font-extrabold text-sky-600 dark:text-sky-400" { (code) }
                h1 class="mt-4 text-2xl font-bold" { (self.description) }
                p class="mt-2 text-slate-600 dark:text-slate-300" { (self.fix) }
                a href=(endpoints::EXPENSES_VIEW) class=(LINK_STYLE)
                {
                    "Back to expenses"
                }
            }
        };

        base(title, &[], &content)
    }
}

impl Default for ErrorPage<'_> {
    fn default() -> Self {
        Self::internal_server_error(
            "Something went wrong while handling your expenses.",
            "Try again later, or check the server logs.",
        )
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        (self.status, self.into_html()).into_response()
    }
}

/// The fallback route handler for paths that do not match any route.
pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

/// Render the generic internal server error page.
pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::default().into_response()
}
