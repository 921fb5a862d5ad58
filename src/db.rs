//! Sets up the application's SQLite database.

use rusqlite::Connection;

use crate::{Error, expense::create_expense_table};

/// Create the tables for the domain models if they do not already exist.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an [Error::SqlError] if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = connection.unchecked_transaction()?;

    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
