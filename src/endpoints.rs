//! The API endpoints URIs.

/// The root route which redirects to the expenses page.
pub const ROOT: &str = "/";
/// The page for displaying all expenses and their total.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The page with the form for adding a new expense.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The page with the form for deleting an expense by its ID.
pub const DELETE_EXPENSE_VIEW: &str = "/expenses/delete";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to add an expense.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to delete an expense.
pub const DELETE_EXPENSE_API: &str = "/api/expenses/delete";
