//! Expenses: storage, the store used by the pages, and the pages for listing,
//! adding and deleting expenses.

mod core;
mod create;
mod delete;
mod expenses_page;
pub(crate) mod form;
mod store;

#[cfg(test)]
pub(crate) use core::count_expenses;
pub use core::{
    Expense, NewExpense, RowsAffected, create_expense, create_expense_table, delete_expense,
    first_unused_id, get_all_expenses, get_total_amount, map_expense_row,
    next_expense_id,
};
pub use create::{create_expense_endpoint, get_new_expense_page};
pub use delete::{delete_expense_endpoint, get_delete_expense_page};
pub use expenses_page::get_expenses_page;
pub use store::ExpenseStore;
