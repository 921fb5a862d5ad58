//! Alerts for telling the user how an action went.
//!
//! Error alerts are HTML fragments that HTMX swaps into the `#alert-container`
//! element of the base page via `hx-target-error`. Success alerts are shown at
//! the top of the page a successful action redirects to.

use maud::{Markup, html};

/// An alert message to show the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An action succeeded.
    Success { message: String },
    /// An action failed, with details on what the user can do about it.
    Error { message: String, details: String },
}

const SUCCESS_STYLE: &str = "p-4 mb-4 text-sm rounded-md border \
    text-emerald-800 bg-emerald-50 border-emerald-300 \
    dark:text-emerald-300 dark:bg-slate-800 dark:border-emerald-800";

const ERROR_STYLE: &str = "p-4 mb-4 text-sm rounded-md border \
    text-rose-800 bg-rose-50 border-rose-300 \
    dark:text-rose-300 dark:bg-slate-800 dark:border-rose-800";

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (style, role, message, details) = match self {
            Alert::Success { message } => (SUCCESS_STYLE, "status", message, None),
            Alert::Error { message, details } => (ERROR_STYLE, "alert", message, Some(details)),
        };

        html! {
            div role=(role) class=(style)
            {
                div class="flex items-start justify-between gap-4"
                {
                    div
                    {
                        p class="font-medium" { (message) }

                        @if let Some(details) = details {
                            span class="block mt-1" { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Close"
                        class="font-bold"
                        onclick="this.parentElement.parentElement.remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }
}
