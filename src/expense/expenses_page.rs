//! Defines the route handler for the page that displays expenses as a table.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::{UtcOffset, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    AppState, Error,
    alert::Alert,
    database_id::ExpenseId,
    endpoints,
    expense::{Expense, ExpenseStore},
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency,
    },
    navigation::NavBar,
    timezone::get_local_offset,
};

const DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesViewState {
    /// The store to read expenses from.
    store: ExpenseStore,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    local_timezone: String,
}

impl FromRef<AppState> for ExpensesViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: ExpenseStore::from_ref(state),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The action that just redirected the user to the expenses page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notice {
    /// An expense was added.
    Added,
    /// An expense was deleted.
    Deleted,
}

impl Notice {
    fn as_str(self) -> &'static str {
        match self {
            Notice::Added => "added",
            Notice::Deleted => "deleted",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        [Notice::Added, Notice::Deleted]
            .into_iter()
            .find(|notice| notice.as_str() == text)
    }

    /// The expenses page URL that shows this notice.
    pub fn redirect_url(self) -> String {
        format!("{}?notice={}", endpoints::EXPENSES_VIEW, self.as_str())
    }

    fn into_alert(self) -> Alert {
        let message = match self {
            Notice::Added => "Expense added successfully.",
            Notice::Deleted => "Expense deleted successfully.",
        };

        Alert::Success {
            message: message.to_owned(),
        }
    }
}

/// The query string of the expenses page.
#[derive(Debug, Default, Deserialize)]
pub struct ExpensesPageQuery {
    /// Set after a successful add or delete, e.g. "added". Unknown values are ignored.
    notice: Option<String>,
}

/// A row in the expenses table, ready for display.
#[derive(Debug, PartialEq)]
struct ExpenseTableRow {
    id: ExpenseId,
    amount: String,
    description: String,
    date: String,
}

impl ExpenseTableRow {
    fn new(expense: Expense, local_offset: UtcOffset) -> Self {
        let local_date = expense.date.to_offset(local_offset);
        let date = local_date
            .format(DATE_TIME_FORMAT)
            .unwrap_or_else(|_| local_date.to_string());

        Self {
            id: expense.id,
            amount: format_currency(expense.amount),
            description: expense.description,
            date,
        }
    }
}

/// Render every expense and the total amount spent.
///
/// A known `notice` in the query string shows a success alert above the table.
pub async fn get_expenses_page(
    State(state): State<ExpensesViewState>,
    Query(query): Query<ExpensesPageQuery>,
) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let rows = state
        .store
        .list_all()
        .into_iter()
        .map(|expense| ExpenseTableRow::new(expense, local_offset))
        .collect::<Vec<_>>();
    let total = state.store.total_amount();
    let notice = query.notice.as_deref().and_then(Notice::parse);

    Ok(expenses_view(&rows, total, notice).into_response())
}

fn expenses_view(rows: &[ExpenseTableRow], total: f64, notice: Option<Notice>) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                @if let Some(notice) = notice {
                    (notice.into_alert().into_html())
                }

                header class="flex justify-between flex-wrap items-end gap-4"
                {
                    h1 class="text-xl font-bold" { "Expenses" }

                    a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE) { "Add Expense" }

                    a href=(endpoints::DELETE_EXPENSE_VIEW) class=(LINK_STYLE) { "Delete Expense" }
                }

                div class="relative overflow-x-auto rounded"
                {
                    table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Expense ID" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date and Time" }
                            }
                        }

                        tbody
                        {
                            @for row in rows {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td class=(TABLE_CELL_STYLE) { (row.id) }
                                    td class=(TABLE_CELL_STYLE) { (row.amount) }
                                    td class=(TABLE_CELL_STYLE) { (row.description) }
                                    td class=(TABLE_CELL_STYLE) { (row.date) }
                                }
                            }

                            @if rows.is_empty() {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td colspan="4" class="px-6 py-4 text-center"
                                    {
                                        "No expenses yet. "
                                        a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE)
                                        {
                                            "Add your first expense"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                p id="total-expenses" class="text-lg font-semibold"
                {
                    "Total Expenses: " (format_currency(total))
                }
            }
        }
    };

    base("Expenses", &[], &content)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use rusqlite::Connection;
    use scraper::{Html, Selector};
    use time::macros::{datetime, offset};

    use crate::{
        Error,
        db::initialize,
        expense::{Expense, ExpenseStore},
        test_utils::{assert_content_type, assert_status_ok, assert_valid_html, parse_html_document},
    };

    use super::{ExpenseTableRow, ExpensesPageQuery, ExpensesViewState, Notice, get_expenses_page};

    fn get_test_state() -> ExpensesViewState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        ExpensesViewState {
            store: ExpenseStore::new(Arc::new(Mutex::new(connection))),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn shows_expenses_and_total() {
        let state = get_test_state();
        let date = datetime!(2025-10-05 12:30:00 UTC);
        state.store.add(10.5, "lunch", date);
        state.store.add(5.0, "coffee", date);

        let response = get_expenses_page(State(state), Query(ExpensesPageQuery::default()))
            .await
            .unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let mut rows = table_rows(&html);
        rows.sort();
        assert_eq!(
            rows,
            [
                vec!["1", "$10.50", "lunch", "2025-10-05 12:30:00"],
                vec!["2", "$5.00", "coffee", "2025-10-05 12:30:00"],
            ]
        );
        assert_eq!(total_text(&html), "Total Expenses: $15.50");
    }

    #[tokio::test]
    async fn shows_zero_total_for_no_expenses() {
        let state = get_test_state();

        let response = get_expenses_page(State(state), Query(ExpensesPageQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(total_text(&html), "Total Expenses: $0.00");
    }

    #[tokio::test]
    async fn has_headers_for_each_column() {
        let state = get_test_state();

        let response = get_expenses_page(State(state), Query(ExpensesPageQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let th = Selector::parse("thead th").unwrap();
        let headers = html
            .select(&th)
            .map(|header| header.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(
            headers,
            ["Expense ID", "Amount", "Description", "Date and Time"]
        );
    }

    #[tokio::test]
    async fn invalid_timezone_renders_error_page() {
        let mut state = get_test_state();
        state.local_timezone = "Middle/Earth".to_owned();

        let result = get_expenses_page(State(state), Query(ExpensesPageQuery::default())).await;

        let error = result.expect_err("want an error for an invalid timezone");
        assert_eq!(error, Error::InvalidTimezoneError("Middle/Earth".to_owned()));
        let response = axum::response::IntoResponse::into_response(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn shows_success_alert_for_notice() {
        for (notice, want) in [
            ("added", "Expense added successfully."),
            ("deleted", "Expense deleted successfully."),
        ] {
            let state = get_test_state();
            let query = ExpensesPageQuery {
                notice: Some(notice.to_owned()),
            };

            let response = get_expenses_page(State(state), Query(query)).await.unwrap();

            let html = parse_html_document(response).await;
            assert_valid_html(&html);
            assert_eq!(status_text(&html), Some(want.to_owned()));
        }
    }

    #[tokio::test]
    async fn ignores_unknown_notice() {
        let state = get_test_state();
        let query = ExpensesPageQuery {
            notice: Some("exploded".to_owned()),
        };

        let response = get_expenses_page(State(state), Query(query)).await.unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(status_text(&html), None);
    }

    #[tokio::test]
    async fn no_alert_without_notice() {
        let state = get_test_state();

        let response = get_expenses_page(State(state), Query(ExpensesPageQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(status_text(&html), None);
    }

    #[test]
    fn notice_redirect_urls_point_at_expenses_page() {
        assert_eq!(Notice::Added.redirect_url(), "/expenses?notice=added");
        assert_eq!(Notice::Deleted.redirect_url(), "/expenses?notice=deleted");
    }

    #[test]
    fn table_row_shows_date_in_local_time() {
        let expense = Expense {
            id: 3,
            amount: 3.25,
            description: "snack".to_owned(),
            date: datetime!(2025-10-05 23:15:00 UTC),
        };

        let row = ExpenseTableRow::new(expense, offset!(+13));

        assert_eq!(row.date, "2025-10-06 12:15:00");
        assert_eq!(row.amount, "$3.25");
    }

    fn table_rows(html: &Html) -> Vec<Vec<String>> {
        let tr = Selector::parse("tbody tr").unwrap();
        let td = Selector::parse("td").unwrap();

        html.select(&tr)
            .map(|row| {
                row.select(&td)
                    .map(|cell| cell.text().collect::<String>().trim().to_owned())
                    .collect()
            })
            .collect()
    }

    fn status_text(html: &Html) -> Option<String> {
        let status = Selector::parse("[role=status] p").unwrap();

        html.select(&status)
            .next()
            .map(|p| p.text().collect::<String>().trim().to_owned())
    }

    fn total_text(html: &Html) -> String {
        let total = Selector::parse("#total-expenses").unwrap();

        html.select(&total)
            .next()
            .expect("No total found")
            .text()
            .collect::<String>()
            .trim()
            .to_owned()
    }
}
