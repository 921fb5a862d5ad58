//! Defines the core data model and database queries for expenses.

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{Error, database_id::ExpenseId};

// ============================================================================
// MODELS
// ============================================================================

/// A single recorded monetary outlay.
///
/// Expenses are immutable once stored. To create a new `Expense`, use
/// [Expense::build] and pass the result to [create_expense].
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense, the smallest positive integer that was free
    /// when the expense was created.
    pub id: ExpenseId,
    /// The amount of money spent.
    pub amount: f64,
    /// A text description of what the money was spent on.
    pub description: String,
    /// When the expense was recorded.
    pub date: OffsetDateTime,
}

impl Expense {
    /// Create a new expense that has not been assigned an ID yet.
    ///
    /// Shortcut for [NewExpense] for discoverability.
    pub fn build(amount: f64, description: &str, date: OffsetDateTime) -> NewExpense {
        NewExpense {
            amount,
            description: description.to_owned(),
            date,
        }
    }
}

/// The data for an expense that has not yet been stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// The amount of money spent.
    pub amount: f64,
    /// A text description of what the money was spent on.
    pub description: String,
    /// When the expense was recorded.
    pub date: OffsetDateTime,
}

// ============================================================================
// ID ALLOCATION
// ============================================================================

/// Find the smallest positive integer that does not appear in `sorted_ids`.
///
/// `sorted_ids` must be sorted in ascending order. Values below 1 are ignored.
///
/// IDs freed by deleting an expense are handed out again, so an ID does not
/// uniquely identify an expense over the lifetime of the database, only among
/// the expenses that currently exist.
pub fn first_unused_id(sorted_ids: &[ExpenseId]) -> ExpenseId {
    let mut candidate = 1;

    for &id in sorted_ids {
        if id > candidate {
            break;
        }

        if id == candidate {
            candidate += 1;
        }
    }

    candidate
}

/// Get the ID that the next expense will be stored under.
///
/// Reads every ID in the table, so this is O(n) in the number of expenses.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn next_expense_id(connection: &Connection) -> Result<ExpenseId, Error> {
    let used_ids = connection
        .prepare("SELECT expenseId FROM expenses ORDER BY expenseId ASC")?
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<ExpenseId>, rusqlite::Error>>()?;

    Ok(first_unused_id(&used_ids))
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Store a new expense under the smallest unused ID.
///
/// The ID lookup and the insert happen in the same SQLite transaction.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error,
/// including when the description is empty.
pub fn create_expense(new_expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    let transaction = connection.unchecked_transaction()?;

    let id = next_expense_id(&transaction)?;

    let expense = transaction
        .prepare(
            "INSERT INTO expenses (expenseId, amount, description, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING expenseId, amount, description, date",
        )?
        .query_row(
            (
                id,
                new_expense.amount,
                new_expense.description,
                new_expense.date,
            ),
            map_expense_row,
        )?;

    transaction.commit()?;

    Ok(expense)
}

/// Retrieve every expense in the order SQLite returns them.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare("SELECT expenseId, amount, description, date FROM expenses")?
        .query_map([], map_expense_row)?
        .collect::<Result<Vec<Expense>, rusqlite::Error>>()
        .map_err(|error| error.into())
}

/// The number of rows removed by a delete query.
pub type RowsAffected = usize;

/// Delete the expense with the given `id`.
///
/// Returns the number of deleted rows, which is zero if no expense had the ID.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM expenses WHERE expenseId = :id",
            &[(":id", &id)],
        )
        .map_err(|error| error.into())
}

/// Get the sum of the amounts of all expenses, or zero if there are none.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_total_amount(connection: &Connection) -> Result<f64, Error> {
    connection
        .query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM expenses",
            [],
            |row| row.get(0),
        )
        .map_err(|error| error.into())
}

/// Get the total number of expenses in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
#[cfg(test)]
pub fn count_expenses(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(expenseId) FROM expenses", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the expenses table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
                expenseId INTEGER PRIMARY KEY CHECK (expenseId > 0),
                amount REAL NOT NULL,
                description TEXT NOT NULL CHECK (length(trim(description)) > 0),
                date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Expense.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let description = row.get(2)?;
    let date = row.get(3)?;

    Ok(Expense {
        id,
        amount,
        description,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
